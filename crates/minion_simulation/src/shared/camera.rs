//! Camera reference: оси для camera-relative движения и screen → world лучи
//!
//! Рендер камеры живёт снаружи; здесь только геометрия перспективной проекции.

use bevy::math::{primitives::InfinitePlane3d, Dir3, Ray3d};
use bevy::prelude::*;

use super::steering::{flatten, planar_direction};

/// Перспективная камера (Transform на том же entity)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CameraRig {
    /// Вертикальный FOV (радианы)
    pub fov_y: f32,
    /// Размер viewport (пиксели)
    pub viewport_size: Vec2,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            fov_y: std::f32::consts::FRAC_PI_4, // 45°
            viewport_size: Vec2::new(1280.0, 720.0),
        }
    }
}

impl CameraRig {
    /// Flattened (forward, right) оси камеры на плоскости XZ
    ///
    /// Камера строго сверху: forward вырождается, берём screen-up.
    pub fn planar_axes(transform: &Transform) -> (Vec3, Vec3) {
        let look = *transform.forward();
        let forward = if flatten(look).length() < 1e-3 {
            planar_direction(*transform.up())
        } else {
            planar_direction(look)
        };
        (forward, planar_direction(*transform.right()))
    }

    /// Луч из камеры через точку viewport (None для вырожденного viewport)
    pub fn viewport_to_ray(&self, transform: &Transform, screen_position: Vec2) -> Option<Ray3d> {
        let size = self.viewport_size;
        if size.x <= 0.0 || size.y <= 0.0 {
            return None;
        }

        // Viewport: y вниз → NDC: y вверх
        let ndc = Vec2::new(
            screen_position.x / size.x * 2.0 - 1.0,
            1.0 - screen_position.y / size.y * 2.0,
        );
        let half_height = (self.fov_y * 0.5).tan();
        let aspect = size.x / size.y;
        let local = Vec3::new(ndc.x * half_height * aspect, ndc.y * half_height, -1.0);

        let direction = Dir3::new(transform.rotation * local).ok()?;
        Some(Ray3d {
            origin: transform.translation,
            direction,
        })
    }
}

/// Spawn helper для камеры
pub fn spawn_camera(commands: &mut Commands, rig: CameraRig, transform: Transform) -> Entity {
    commands.spawn((transform, rig)).id()
}

/// Пересечение луча с ground plane (y = 0)
pub fn ground_point(ray: Ray3d) -> Option<Vec3> {
    ray.intersect_plane(Vec3::ZERO, InfinitePlane3d { normal: Dir3::Y })
        .map(|distance| ray.get_point(distance))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_down_camera() -> Transform {
        Transform::from_xyz(0.0, 10.0, 0.0).looking_at(Vec3::ZERO, Vec3::NEG_Z)
    }

    #[test]
    fn test_viewport_center_hits_below_camera() {
        let rig = CameraRig::default();
        let ray = rig
            .viewport_to_ray(&top_down_camera(), rig.viewport_size * 0.5)
            .unwrap();
        let hit = ground_point(ray).unwrap();
        assert!(hit.distance(Vec3::ZERO) < 1e-3, "hit = {:?}", hit);
    }

    #[test]
    fn test_right_edge_hits_positive_x() {
        let rig = CameraRig::default();
        let screen = Vec2::new(rig.viewport_size.x, rig.viewport_size.y * 0.5);
        let ray = rig.viewport_to_ray(&top_down_camera(), screen).unwrap();
        let hit = ground_point(ray).unwrap();
        assert!(hit.x > 1.0, "hit = {:?}", hit);
        assert!(hit.y.abs() < 1e-3);
    }

    #[test]
    fn test_sky_ray_misses_ground() {
        let rig = CameraRig::default();
        let looking_up = Transform::from_xyz(0.0, 2.0, 0.0).looking_at(Vec3::new(0.0, 10.0, -1.0), Vec3::Y);
        let ray = rig.viewport_to_ray(&looking_up, rig.viewport_size * 0.5).unwrap();
        assert!(ground_point(ray).is_none());
    }

    #[test]
    fn test_degenerate_viewport() {
        let rig = CameraRig {
            viewport_size: Vec2::ZERO,
            ..default()
        };
        assert!(rig.viewport_to_ray(&top_down_camera(), Vec2::ZERO).is_none());
    }

    #[test]
    fn test_planar_axes_drop_pitch() {
        let camera = Transform::from_xyz(0.0, 10.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y);
        let (forward, right) = CameraRig::planar_axes(&camera);
        assert!(forward.distance(Vec3::NEG_Z) < 1e-5, "forward = {:?}", forward);
        assert!(right.distance(Vec3::X) < 1e-5, "right = {:?}", right);
    }

    #[test]
    fn test_planar_axes_top_down_uses_screen_up() {
        let (forward, right) = CameraRig::planar_axes(&top_down_camera());
        assert!(forward.distance(Vec3::NEG_Z) < 1e-5, "forward = {:?}", forward);
        assert!(right.distance(Vec3::X) < 1e-5, "right = {:?}", right);
    }
}
