//! Collision interrupt: контакт с препятствием прерывает Charge
//!
//! Rapier CollisionEvent → категория через CollisionTag другого коллайдера →
//! ObstacleContacts (набор текущих касаний). Minion в Charge, который касается
//! препятствия с `obstacle_category`: velocity в ноль, is_sending = false,
//! старт ReturnDelay.

use bevy::prelude::*;
use bevy_rapier3d::prelude::CollisionEvent;

use crate::animation::{AnimatorParameters, SPEED_PARAM};
use crate::config::MinionConfig;
use crate::minion::components::{MinionAgent, MinionMode, MinionState, ObstacleContacts};
use crate::minion::events::ChargeInterrupted;
use crate::physics::{CollisionTag, PhysicsBody};

/// Система: применяет obstacle контакты к minion (до `minion_tick`)
pub fn minion_collision_interrupts(
    mut collisions: EventReader<CollisionEvent>,
    tags: Query<&CollisionTag>,
    mut minions: Query<
        (
            Entity,
            &MinionConfig,
            &mut ObstacleContacts,
            &mut MinionState,
            &mut PhysicsBody,
            &mut AnimatorParameters,
        ),
        With<MinionAgent>,
    >,
    mut interrupts: EventWriter<ChargeInterrupted>,
) {
    for event in collisions.read() {
        let (first, second, started) = match *event {
            CollisionEvent::Started(first, second, _) => (first, second, true),
            CollisionEvent::Stopped(first, second, _) => (first, second, false),
        };

        // Пара неупорядочена: minion может быть любой стороной
        for (minion, other) in [(first, second), (second, first)] {
            let Ok((_, config, mut contacts, ..)) = minions.get_mut(minion) else {
                continue;
            };

            // Stopped без проверки tag: коллайдер мог уже исчезнуть
            if !started {
                contacts.end(other);
                continue;
            }

            match tags.get(other) {
                Ok(tag) if tag.is(&config.obstacle_category) => contacts.begin(other),
                _ => {}
            }
        }
    }

    for (minion, config, contacts, mut state, mut body, mut animator) in &mut minions {
        // mode ещё прошлого tick: Contacts идёт до Minion
        if state.mode != MinionMode::Charge {
            continue;
        }
        let Some(obstacle) = contacts.first() else {
            continue;
        };

        state.interrupt_charge(config.return_delay);
        body.stop();
        animator.set_float(SPEED_PARAM, 0.0);

        crate::log_info(&format!(
            "Minion {:?}: Charge interrupted by {:?} ({}) → ReturnDelay",
            minion, obstacle, config.obstacle_category
        ));
        interrupts.write(ChargeInterrupted { minion, obstacle });
    }
}
