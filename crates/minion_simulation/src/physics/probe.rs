//! Headless contact probe (без Rapier pipeline)
//!
//! Когда RapierPhysicsPlugin не подключён, CollisionEvent никто не генерирует.
//! Probe проверяет ball агентов против cuboid препятствий с CollisionTag
//! и шлёт те же CollisionEvent::Started / Stopped, что и Rapier.
//!
//! Ограничение: препятствия считаются axis-aligned (rotation игнорируется).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use bevy_rapier3d::rapier::geometry::CollisionEventFlags;
use std::collections::HashSet;

use super::body::PhysicsBody;
use super::collision::CollisionTag;

/// Пересекается ли шар с AABB
pub fn ball_overlaps_box(center: Vec3, radius: f32, box_center: Vec3, half_extents: Vec3) -> bool {
    let closest = center.clamp(box_center - half_extents, box_center + half_extents);
    closest.distance_squared(center) <= radius * radius
}

/// Система: probe контактов (после интеграции, генерирует события к следующему tick)
pub fn headless_contact_probe(
    agents: Query<(Entity, &Transform, &Collider), With<PhysicsBody>>,
    obstacles: Query<(Entity, &Transform, &Collider), (With<CollisionTag>, Without<PhysicsBody>)>,
    mut touching: Local<HashSet<(Entity, Entity)>>,
    mut collisions: EventWriter<CollisionEvent>,
) {
    let mut current = HashSet::new();

    for (agent, agent_transform, agent_collider) in agents.iter() {
        let Some(ball) = agent_collider.as_ball() else {
            continue;
        };
        let radius = ball.radius();

        for (obstacle, obstacle_transform, obstacle_collider) in obstacles.iter() {
            let Some(cuboid) = obstacle_collider.as_cuboid() else {
                continue;
            };
            if ball_overlaps_box(
                agent_transform.translation,
                radius,
                obstacle_transform.translation,
                cuboid.half_extents(),
            ) {
                current.insert((agent, obstacle));
            }
        }
    }

    // Только края: enter → Started, exit → Stopped
    for &(agent, obstacle) in current.difference(&touching) {
        collisions.write(CollisionEvent::Started(agent, obstacle, CollisionEventFlags::empty()));
    }
    for &(agent, obstacle) in touching.difference(&current) {
        collisions.write(CollisionEvent::Stopped(agent, obstacle, CollisionEventFlags::empty()));
    }

    *touching = current;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_box_overlap() {
        let half = Vec3::new(5.0, 1.0, 0.5);
        let wall = Vec3::new(0.0, 0.0, -10.0);

        assert!(!ball_overlaps_box(Vec3::ZERO, 0.3, wall, half));
        assert!(ball_overlaps_box(Vec3::new(0.0, 0.0, -9.3), 0.3, wall, half));
        assert!(ball_overlaps_box(Vec3::new(2.0, 0.0, -10.0), 0.3, wall, half));
        assert!(!ball_overlaps_box(Vec3::new(6.0, 0.0, -10.0), 0.3, wall, half));
    }
}
