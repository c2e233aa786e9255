//! Kinematic body (velocity + position writes)
//!
//! Архитектура:
//! - Агенты пишут PhysicsBody (velocity и/или kinematic target) раз в tick
//! - integrate_velocity_to_transform применяет к Transform (headless режим)
//! - sync_velocity_to_rapier зеркалит velocity в Rapier `Velocity`

use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;

/// Физическое тело агента
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PhysicsBody {
    /// Линейная скорость (m/s), держится между tick пока её не перезапишут
    pub velocity: Vec3,
    /// "Move position": если задан, тело ставится ровно сюда вместо интеграции velocity
    pub kinematic_target: Option<Vec3>,
}

impl PhysicsBody {
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
        self.kinematic_target = None;
    }

    /// Kinematic перемещение к position за один tick (velocity = фактический шаг / dt)
    pub fn move_position(&mut self, from: Vec3, to: Vec3, delta: f32) {
        self.velocity = if delta > 0.0 { (to - from) / delta } else { Vec3::ZERO };
        self.kinematic_target = Some(to);
    }

    pub fn stop(&mut self) {
        self.set_velocity(Vec3::ZERO);
    }

    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

/// Система интеграции velocity → Transform (headless режим)
///
/// kinematic_target имеет приоритет и потребляется (one-shot).
pub fn integrate_velocity_to_transform(
    mut query: Query<(&mut PhysicsBody, &mut Transform)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut body, mut transform) in query.iter_mut() {
        match body.kinematic_target.take() {
            Some(target) => transform.translation = target,
            None => transform.translation += body.velocity * delta,
        }
    }
}

/// Система: PhysicsBody.velocity → Rapier Velocity
pub fn sync_velocity_to_rapier(mut query: Query<(&PhysicsBody, &mut Velocity)>) {
    for (body, mut rapier_velocity) in query.iter_mut() {
        rapier_velocity.linvel = body.velocity;
    }
}
