//! Player movement system
//!
//! Move input → velocity (World или CameraRelative оси) → PhysicsBody.
//! Поворот к heading: экспоненциальный slerp на fixed timestep.

use bevy::prelude::*;

use super::components::{Player, PlayerAgent, PlayerCamera};
use crate::config::{MovementFrame, PlayerConfig};
use crate::input::{InputActionMap, PlayerBindings};
use crate::physics::PhysicsBody;
use crate::shared::{input_to_world, turn_towards, CameraRig};

/// Оси мира для MovementFrame::World (forward, right)
pub const WORLD_AXES: (Vec3, Vec3) = (Vec3::NEG_Z, Vec3::X);

/// Velocity игрока из 2D input
///
/// - input clamp до длины 1 (analog stick сохраняет частичную скорость)
/// - CameraRelative без камеры → оси мира
pub fn resolve_player_velocity(
    input: Vec2,
    config: &PlayerConfig,
    camera_axes: Option<(Vec3, Vec3)>,
) -> Vec3 {
    let (forward, right) = match config.movement_frame {
        MovementFrame::World => WORLD_AXES,
        MovementFrame::CameraRelative => camera_axes.unwrap_or(WORLD_AXES),
    };

    input_to_world(input.clamp_length_max(1.0), forward, right) * config.move_speed
}

/// Система: player movement (FixedUpdate, первая в цепочке)
///
/// # Пишет
/// - PhysicsBody.velocity
/// - Transform.rotation (только при ненулевом направлении)
/// - PlayerAgent.speed (единственный writer)
pub fn player_movement(
    actions: Res<InputActionMap>,
    mut players: Query<
        (
            &PlayerConfig,
            &PlayerBindings,
            &mut PlayerAgent,
            &mut PhysicsBody,
            &mut Transform,
            Option<&PlayerCamera>,
        ),
        With<Player>,
    >,
    cameras: Query<&Transform, (With<CameraRig>, Without<Player>)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (config, bindings, mut agent, mut body, mut transform, camera) in players.iter_mut() {
        let camera_axes = camera
            .and_then(|link| cameras.get(link.0).ok())
            .map(CameraRig::planar_axes);

        let input = actions.read_vec2(bindings.movement);
        let velocity = resolve_player_velocity(input, config, camera_axes);

        body.set_velocity(velocity);
        agent.record_speed(body.speed());

        transform.rotation = turn_towards(transform.rotation, velocity, config.turn_rate, delta);
    }
}
