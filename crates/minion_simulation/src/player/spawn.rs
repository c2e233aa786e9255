//! Spawn helper для игрока

use bevy::prelude::*;

use super::components::{Player, PlayerAgent, PlayerCamera};
use crate::config::PlayerConfig;
use crate::error::SimulationError;
use crate::input::{InputActionMap, PlayerBindings};
use crate::physics::{kinematic_agent_physics, PhysicsBody};

/// Радиус коллайдера игрока (m)
pub const PLAYER_RADIUS: f32 = 0.4;

/// Создаёт entity игрока
///
/// Bindings резолвятся здесь: отсутствующий "Move" → ошибка до старта loop.
pub fn spawn_player(
    commands: &mut Commands,
    actions: &InputActionMap,
    config: PlayerConfig,
    transform: Transform,
    camera: Option<Entity>,
) -> Result<Entity, SimulationError> {
    config.validate()?;
    let bindings = PlayerBindings::resolve(actions)?;

    let mut entity = commands.spawn((
        transform,
        Player,
        PlayerAgent::default(),
        config,
        bindings,
        PhysicsBody::default(),
        kinematic_agent_physics(PLAYER_RADIUS),
    ));
    if let Some(camera) = camera {
        entity.insert(PlayerCamera(camera));
    }

    let id = entity.id();
    crate::log_info(&format!("Player spawned: {:?} at {:?}", id, transform.translation));
    Ok(id)
}
