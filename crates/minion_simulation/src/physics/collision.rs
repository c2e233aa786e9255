//! Collision категории и helpers для Rapier коллайдеров
//!
//! Rapier CollisionEvent несёт только пару entity. Категория ("Wall", ...)
//! хранится в CollisionTag на entity коллайдера.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

/// Стандартная категория препятствий
pub const WALL_CATEGORY: &str = "Wall";

/// Категория коллайдера (string tag)
#[derive(Component, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct CollisionTag(pub String);

impl CollisionTag {
    pub fn new(category: impl Into<String>) -> Self {
        Self(category.into())
    }

    pub fn is(&self, category: &str) -> bool {
        self.0 == category
    }
}

/// Rapier компоненты для kinematic агента (capsule-less ball, contact события включены)
///
/// KINEMATIC_STATIC нужен: по умолчанию kinematic ↔ fixed пары не генерируют события.
pub fn kinematic_agent_physics(radius: f32) -> impl Bundle {
    (
        RigidBody::KinematicPositionBased,
        Collider::ball(radius),
        Velocity::default(),
        ActiveEvents::COLLISION_EVENTS,
        ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_STATIC,
    )
}

/// Spawn helper для статического препятствия с категорией
pub fn spawn_obstacle(
    commands: &mut Commands,
    position: Vec3,
    half_extents: Vec3,
    category: &str,
) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            RigidBody::Fixed,
            Collider::cuboid(half_extents.x, half_extents.y, half_extents.z),
            CollisionTag::new(category),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_tag_match() {
        let tag = CollisionTag::new(WALL_CATEGORY);
        assert!(tag.is("Wall"));
        assert!(!tag.is("Floor"));
    }

    #[test]
    fn test_kinematic_agent_reports_static_contacts() {
        let mut world = World::new();
        let agent = world.spawn(kinematic_agent_physics(0.3)).id();

        let types = *world.get::<ActiveCollisionTypes>(agent).unwrap();
        assert!(types.contains(ActiveCollisionTypes::KINEMATIC_STATIC));
        assert!(types.contains(ActiveCollisionTypes::default()));
        assert_eq!(world.get::<RigidBody>(agent), Some(&RigidBody::KinematicPositionBased));
    }
}
