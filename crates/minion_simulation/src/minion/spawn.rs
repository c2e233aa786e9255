//! Spawn helper для minion

use bevy::prelude::*;

use super::components::{MinionAgent, MinionLinks, MinionState, ObstacleContacts};
use crate::animation::AnimatorParameters;
use crate::config::MinionConfig;
use crate::error::SimulationError;
use crate::input::{InputActionMap, MinionBindings};
use crate::physics::{kinematic_agent_physics, PhysicsBody};

/// Радиус коллайдера minion (m)
pub const MINION_RADIUS: f32 = 0.3;

/// Создаёт entity minion
///
/// Config валидируется и Sweep/Send/Recall резолвятся здесь (fail fast до старта loop).
pub fn spawn_minion(
    commands: &mut Commands,
    actions: &InputActionMap,
    config: MinionConfig,
    transform: Transform,
    home_point: Vec3,
    links: MinionLinks,
) -> Result<Entity, SimulationError> {
    config.validate()?;
    let bindings = MinionBindings::resolve(actions)?;

    let id = commands
        .spawn((
            transform,
            MinionAgent { home_point },
            links,
            config,
            bindings,
            MinionState::default(),
            ObstacleContacts::default(),
            AnimatorParameters::default(),
            PhysicsBody::default(),
            kinematic_agent_physics(MINION_RADIUS),
        ))
        .id();

    if links.camera.is_none() {
        crate::log_warning(&format!("Minion {:?}: no camera linked, PointerSweep will hold velocity", id));
    }
    crate::log_info(&format!(
        "Minion spawned: {:?} at {:?} (home {:?}, player {:?})",
        id, transform.translation, home_point, links.player
    ));
    Ok(id)
}
