//! Steering math: общая для player и minion
//!
//! Конвенция осей (Bevy): forward = -Z, right = +X, up = +Y.
//! Все направления движения горизонтальные (XZ plane).

use bevy::prelude::*;

/// Проекция на горизонтальную плоскость (y = 0)
pub fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z)
}

/// Горизонтальное направление (normalized, ZERO для вырожденного вектора)
pub fn planar_direction(v: Vec3) -> Vec3 {
    flatten(v).normalize_or_zero()
}

/// 2D input → world вектор в базисе (forward, right)
///
/// input.x → right, input.y → forward. Длина не нормализуется (analog сохраняется).
pub fn input_to_world(input: Vec2, forward: Vec3, right: Vec3) -> Vec3 {
    right * input.x + forward * input.y
}

/// Ориентация "смотреть вдоль direction" (None для нулевого направления)
pub fn look_rotation(direction: Vec3) -> Option<Quat> {
    let direction = Dir3::new(direction).ok()?;
    Some(Transform::IDENTITY.looking_to(direction, Dir3::Y).rotation)
}

/// Экспоненциальный поворот к direction
///
/// slerp(current, target, dt * turn_rate): factor от fixed timestep, не от framerate.
/// Нулевое направление не трогает ориентацию (без jitter).
pub fn turn_towards(current: Quat, direction: Vec3, turn_rate: f32, dt: f32) -> Quat {
    match look_rotation(direction) {
        Some(target) => current.slerp(target, (dt * turn_rate).clamp(0.0, 1.0)),
        None => current,
    }
}

/// Шаг к target не длиннее max_delta (никогда не перелетает)
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let offset = target - current;
    let distance = offset.length();
    if distance <= max_delta || distance <= f32::EPSILON {
        target
    } else {
        current + offset / distance * max_delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 0.02;

    #[test]
    fn test_move_towards_never_overshoots() {
        let next = move_towards(Vec3::new(-10.0, 0.0, 0.0), Vec3::new(-5.0, 0.0, 0.0), 0.1);
        assert!((next.x - -9.9).abs() < 1e-5, "x = {}", next.x);

        let snapped = move_towards(Vec3::new(-5.05, 0.0, 0.0), Vec3::new(-5.0, 0.0, 0.0), 0.1);
        assert_eq!(snapped, Vec3::new(-5.0, 0.0, 0.0));
    }

    #[test]
    fn test_look_rotation_faces_direction() {
        let rotation = look_rotation(Vec3::X).unwrap();
        let forward = rotation * Vec3::NEG_Z;
        assert!(forward.distance(Vec3::X) < 1e-5, "forward = {:?}", forward);
        assert!(look_rotation(Vec3::ZERO).is_none());
    }

    #[test]
    fn test_turn_towards_is_partial_per_tick() {
        let target = look_rotation(Vec3::X).unwrap();
        let turned = turn_towards(Quat::IDENTITY, Vec3::X, 10.0, DT);

        // factor 0.2: повернулись, но не до конца
        assert!(turned.angle_between(Quat::IDENTITY) > 0.01);
        assert!(turned.angle_between(target) > 0.01);
    }

    #[test]
    fn test_turn_towards_zero_direction_keeps_rotation() {
        let current = Quat::from_rotation_y(0.7);
        assert_eq!(turn_towards(current, Vec3::ZERO, 10.0, DT), current);
    }

    #[test]
    fn test_input_to_world_axes() {
        let world = input_to_world(Vec2::new(1.0, 1.0), Vec3::NEG_Z, Vec3::X);
        assert_eq!(world, Vec3::new(1.0, 0.0, -1.0));
    }
}
