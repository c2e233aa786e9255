//! Minion Simulation Core
//!
//! ECS-симуляция на Bevy 0.16: игрок + minion-компаньон.
//!
//! Один fixed tick (FixedUpdate, 50Hz по умолчанию):
//! 1. PlayerAgent: Move input → velocity, публикует speed
//! 2. Contacts: obstacle контакты прошлого physics step прерывают Charge
//! 3. MinionAgent: арбитраж режима, исполнение ровно одного режима
//! 4. Cooldown: return-delay countdown
//! 5. Physics: интеграция velocity, sync в Rapier, contact probe
//!
//! Рендер, device polling, камера-риг и анимация это внешние collaborators,
//! здесь только их boundary (InputActionMap, PhysicsBody, AnimatorParameters, CameraRig).

use bevy::app::{FixedMain, PluginsState};
use bevy::ecs::event::event_update_system;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

// Публичные модули
pub mod animation;
pub mod config;
pub mod error;
pub mod input;
pub mod logger;
pub mod minion;
pub mod physics;
pub mod player;
pub mod shared;

// Re-export базовых типов для удобства
pub use animation::{AnimatorParameters, SPEED_PARAM};
pub use config::{
    ChargeLatch, MinionConfig, MovementFrame, PlayerConfig, SimulationSettings, SweepAnimationPolicy,
};
pub use error::SimulationError;
pub use input::{ActionState, InputActionMap, PointerState};
pub use logger::{log, log_error, log_info, log_warning, init_logger, set_log_level, set_logger, LogLevel, LogPrinter};
pub use minion::{
    spawn_minion, ChargeInterrupted, MinionAgent, MinionLinks, MinionMode, MinionModeChanged, MinionPlugin,
    MinionState,
};
pub use physics::{spawn_obstacle, CollisionTag, KinematicBodyPlugin, PhysicsBackend, PhysicsBody};
pub use player::{spawn_player, Player, PlayerAgent, PlayerPlugin};
pub use shared::{spawn_camera, CameraRig};

/// Фазы fixed tick (строго последовательно)
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Player,
    Contacts,
    Minion,
    Cooldown,
    Physics,
}

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin {
    /// Частота FixedUpdate (Hz)
    pub fixed_hz: f64,
    pub backend: PhysicsBackend,
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self {
            fixed_hz: 50.0, // 0.02s шаг
            backend: PhysicsBackend::Headless,
        }
    }
}

impl SimulationPlugin {
    pub fn from_settings(settings: &SimulationSettings) -> Self {
        Self {
            fixed_hz: settings.fixed_hz,
            ..default()
        }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Внешний input layer может вставить свою map до plugin
        if !app.world().contains_resource::<InputActionMap>() {
            app.insert_resource(InputActionMap::with_default_bindings());
        }

        app.insert_resource(Time::<Fixed>::from_hz(self.fixed_hz))
            .init_resource::<PointerState>()
            .register_type::<PointerState>()
            .configure_sets(
                FixedUpdate,
                (
                    SimulationSet::Player,
                    SimulationSet::Contacts,
                    SimulationSet::Minion,
                    SimulationSet::Cooldown,
                    SimulationSet::Physics,
                )
                    .chain(), // Последовательное выполнение для детерминизма
            )
            .add_plugins((
                PlayerPlugin,
                MinionPlugin,
                KinematicBodyPlugin {
                    backend: self.backend,
                    fixed_hz: self.fixed_hz,
                },
            ))
            .add_systems(
                FixedUpdate,
                input::clear_input_edges.in_set(SimulationSet::Physics),
            );
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins);
    app
}

/// Прогоняет ровно `ticks` fixed шагов (детерминированно, без wall-clock)
///
/// Первый вызов доводит plugins до Cleaned и прогоняет Startup через `app.update()`
/// (на первом update delta = 0, fixed шагов не будет).
///
/// Каждый tick начинается с event update (как First в main loop): события
/// живут два tick, потом отбрасываются.
pub fn advance_fixed_ticks(app: &mut App, ticks: u32) {
    if app.plugins_state() == PluginsState::Ready {
        app.finish();
        app.cleanup();
        app.update();
    }

    for _ in 0..ticks {
        if let Err(err) = app.world_mut().run_system_once(event_update_system) {
            log_warning(&format!("event update failed: {}", err));
        }

        let world = app.world_mut();
        let timestep = world.resource::<Time<Fixed>>().timestep();
        world.resource_mut::<Time<Fixed>>().advance_by(timestep);

        // Generic Time в fixed контексте, как делает FixedMain в main loop
        let fixed = world.resource::<Time<Fixed>>().as_generic();
        *world.resource_mut::<Time>() = fixed;

        world.run_schedule(FixedMain);
    }
}

/// Spawn через Commands с текущей InputActionMap (flush сразу)
pub fn spawn_with_actions<R>(
    app: &mut App,
    spawn: impl FnOnce(&mut Commands, &InputActionMap) -> R,
) -> R {
    let actions = app
        .world()
        .get_resource::<InputActionMap>()
        .cloned()
        .unwrap_or_else(InputActionMap::with_default_bindings);

    let world = app.world_mut();
    let result = {
        let mut commands = world.commands();
        spawn(&mut commands, &actions)
    };
    world.flush();
    result
}

/// Snapshot поз и FSM состояния (для сравнения детерминизма)
pub fn minion_snapshot(world: &mut World) -> Vec<u8> {
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &Transform, Option<&MinionState>)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _, _)| entity.index());

    for (entity, transform, state) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        for value in transform.translation.to_array() {
            snapshot.extend_from_slice(&value.to_bits().to_le_bytes());
        }
        for value in transform.rotation.to_array() {
            snapshot.extend_from_slice(&value.to_bits().to_le_bytes());
        }
        if let Some(state) = state {
            snapshot.extend_from_slice(format!("{:?}", state).as_bytes());
        }
    }

    snapshot
}
