//! Поведение каждого режима (чистые функции)
//!
//! Каждая функция возвращает `ModeOutput`: запись в physics body, новую
//! ориентацию и значение "Speed" для animator. Применяет их `minion_tick`.

use bevy::prelude::*;

use crate::config::{MinionConfig, SweepAnimationPolicy};
use crate::shared::{move_towards, planar_direction, turn_towards};

/// Запись в physics body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyWrite {
    /// Новая velocity
    Velocity(Vec3),
    /// Kinematic перемещение в точку (Follow / Return)
    MovePosition(Vec3),
    /// Velocity остаётся с прошлого tick
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeOutput {
    pub body: BodyWrite,
    pub rotation: Quat,
    /// None: параметр в этом tick не пишется
    pub anim_speed: Option<f32>,
}

/// Поза minion и шаг времени
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinionPose {
    pub position: Vec3,
    pub rotation: Quat,
    pub delta: f32,
}

impl MinionPose {
    pub fn from_transform(transform: &Transform, delta: f32) -> Self {
        Self {
            position: transform.translation,
            rotation: transform.rotation,
            delta,
        }
    }

    fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    fn turn(&self, direction: Vec3, config: &MinionConfig) -> Quat {
        turn_towards(self.rotation, direction, config.turn_rate, self.delta)
    }
}

/// DirectionalSweep: Sweep vector → горизонтальная velocity
///
/// Input (x, y) → мир (x, 0, -y), нормализуется до move_speed.
pub fn directional_sweep(input: Vec2, pose: &MinionPose, config: &MinionConfig) -> ModeOutput {
    let direction = planar_direction(Vec3::new(input.x, 0.0, -input.y));
    let velocity = direction * config.move_speed;

    let anim_speed = match config.sweep_animation {
        SweepAnimationPolicy::Constant => config.moving_anim_speed,
        SweepAnimationPolicy::Magnitude => velocity.length(),
    };

    ModeOutput {
        body: BodyWrite::Velocity(velocity),
        rotation: pose.turn(direction, config),
        anim_speed: Some(anim_speed),
    }
}

/// PointerSweep: движение к точке курсора на земле
///
/// Промах луча (None) = no-op: velocity и ориентация не трогаются.
pub fn pointer_sweep(ground_hit: Option<Vec3>, pose: &MinionPose, config: &MinionConfig) -> ModeOutput {
    let Some(hit) = ground_hit else {
        return ModeOutput {
            body: BodyWrite::Hold,
            rotation: pose.rotation,
            anim_speed: None,
        };
    };

    let direction = planar_direction(hit - pose.position);
    let velocity = direction * config.move_speed;

    ModeOutput {
        body: BodyWrite::Velocity(velocity),
        rotation: pose.turn(direction, config),
        anim_speed: Some(velocity.length()),
    }
}

/// Charge: вперёд вдоль локальной forward оси (без pitch)
pub fn charge(pose: &MinionPose, config: &MinionConfig) -> ModeOutput {
    let direction = planar_direction(pose.forward());

    ModeOutput {
        body: BodyWrite::Velocity(direction * config.move_speed),
        rotation: pose.turn(direction, config),
        anim_speed: Some(config.moving_anim_speed),
    }
}

/// Точка в follow_range позади игрока
pub fn follow_point(player_position: Vec3, player_rotation: Quat, follow_range: f32) -> Vec3 {
    player_position - player_rotation * Vec3::NEG_Z * follow_range
}

/// Follow: шаг к точке позади игрока (не длиннее move_speed * dt)
pub fn follow_player(
    player_position: Vec3,
    player_rotation: Quat,
    pose: &MinionPose,
    config: &MinionConfig,
) -> ModeOutput {
    let target = follow_point(player_position, player_rotation, config.follow_range);
    let next = move_towards(pose.position, target, config.move_speed * pose.delta);

    ModeOutput {
        body: BodyWrite::MovePosition(next),
        rotation: pose.turn(planar_direction(target - pose.position), config),
        anim_speed: Some(config.moving_anim_speed),
    }
}

/// Return: шаг к home point; на месте (< arrive_threshold) "Speed" = 0
pub fn return_home(home_point: Vec3, pose: &MinionPose, config: &MinionConfig) -> ModeOutput {
    let next = move_towards(pose.position, home_point, config.move_speed * pose.delta);
    let arrived = next.distance(home_point) < config.arrive_threshold;

    ModeOutput {
        body: BodyWrite::MovePosition(next),
        rotation: pose.turn(planar_direction(home_point - pose.position), config),
        anim_speed: Some(if arrived { 0.0 } else { config.moving_anim_speed }),
    }
}

/// ReturnDelay: стоим, velocity и "Speed" в ноль
pub fn hold_still(pose: &MinionPose) -> ModeOutput {
    ModeOutput {
        body: BodyWrite::Velocity(Vec3::ZERO),
        rotation: pose.rotation,
        anim_speed: Some(0.0),
    }
}
