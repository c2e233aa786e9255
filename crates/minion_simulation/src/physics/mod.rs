//! Physics body boundary
//!
//! Kinematic тела: velocity интегрируем сами (headless), Rapier только для коллизий.
//! Contact события Rapier → CollisionTag категория → minion interrupt.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::SimulationSet;

pub mod body;
pub mod collision;
pub mod probe;

// Re-export основных типов
pub use body::*;
pub use collision::*;
pub use probe::*;

/// Откуда берутся contact события
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhysicsBackend {
    /// Без Rapier pipeline: headless probe генерирует CollisionEvent сам
    #[default]
    Headless,
    /// RapierPhysicsPlugin в FixedUpdate, строго после SimulationSet::Physics
    Rapier,
}

/// Plugin для kinematic тел
///
/// Интеграция velocity → Transform всегда наша (rapier только для collisions).
pub struct KinematicBodyPlugin {
    pub backend: PhysicsBackend,
    /// Частота fixed шага (Rapier dt = 1 / fixed_hz)
    pub fixed_hz: f64,
}

impl Plugin for KinematicBodyPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<PhysicsBody>()
            .register_type::<CollisionTag>()
            .add_event::<CollisionEvent>()
            .add_systems(
                FixedUpdate,
                (integrate_velocity_to_transform, sync_velocity_to_rapier)
                    .chain()
                    .in_set(SimulationSet::Physics),
            );

        match self.backend {
            PhysicsBackend::Headless => {
                app.add_systems(
                    FixedUpdate,
                    headless_contact_probe
                        .after(integrate_velocity_to_transform)
                        .in_set(SimulationSet::Physics),
                );
            }
            PhysicsBackend::Rapier => {
                // Один Rapier step на fixed tick, dt совпадает с Time<Fixed>
                app.insert_resource(TimestepMode::Fixed {
                    dt: (1.0 / self.fixed_hz) as f32,
                    substeps: 1,
                })
                .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
                // Интегрированный Transform должен попасть в SyncBackend этого же tick,
                // иначе Writeback затирает его позой прошлого step
                .configure_sets(
                    FixedUpdate,
                    SimulationSet::Physics.before(PhysicsSet::SyncBackend),
                );
            }
        }
    }
}
