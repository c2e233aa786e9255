//! Follow / return home / player movement сценарии

mod common;

use bevy::prelude::*;
use common::*;
use minion_simulation::*;

#[test]
fn test_player_speed_tracks_analog_input() {
    let mut scene = build_scene(MinionConfig::default(), Transform::from_xyz(-10.0, 0.0, 0.0), Vec3::ZERO);
    scene.set_action("Move", axis(0.6, 0.0));

    scene.tick(1);

    assert!((scene.player_speed() - 3.0).abs() < 1e-4, "speed = {}", scene.player_speed());
    let player_velocity = scene.app.world().get::<PhysicsBody>(scene.player).unwrap().velocity;
    assert!(approx_eq(player_velocity, Vec3::new(3.0, 0.0, 0.0)));
    assert!(approx_eq(scene.player_position(), Vec3::new(0.06, 0.0, 0.0)));

    scene.release_all();
    scene.tick(1);
    assert_eq!(scene.player_speed(), 0.0);
}

#[test]
fn test_minion_follows_behind_moving_player() {
    let mut scene = build_scene(MinionConfig::default(), Transform::from_xyz(-10.0, 0.0, 0.0), Vec3::ZERO);
    scene.set_action("Move", axis(0.6, 0.0));

    scene.tick(1);
    assert_eq!(scene.mode(), MinionMode::Follow);
    assert!(approx_eq(scene.position(), Vec3::new(-9.9, 0.0, 0.0)), "position = {:?}", scene.position());
    assert_eq!(scene.anim_speed(), 1.0);

    // Шаг minion ограничен move_speed * dt, точка позади игрока не перелетается
    for _ in 0..200 {
        let player_before = scene.player_position();
        let minion_before = scene.position();
        scene.tick(1);

        let step = scene.position().distance(minion_before);
        assert!(step <= 5.0 * DT + 1e-4, "step = {}", step);
        assert!(
            scene.position().x <= player_before.x - 5.0 + 1e-4,
            "minion {:?} overshot player {:?}",
            scene.position(),
            player_before
        );
    }

    // Догнал: держит дистанцию follow_range
    let gap = scene.player_position().x - scene.position().x;
    assert!((gap - 5.0).abs() < 0.1, "gap = {}", gap);
}

#[test]
fn test_idle_player_sends_minion_home() {
    let home = Vec3::new(2.0, 0.0, 2.0);
    let mut scene = build_scene(MinionConfig::default(), Transform::from_xyz(2.0, 0.0, -3.0), home);

    scene.tick(1);
    assert_eq!(scene.mode(), MinionMode::Follow);
    assert!(approx_eq(scene.position(), Vec3::new(2.0, 0.0, -2.9)));
    assert_eq!(scene.anim_speed(), 1.0);

    scene.tick(60);
    assert!(approx_eq(scene.position(), home), "position = {:?}", scene.position());
    assert_eq!(scene.anim_speed(), 0.0);
}

#[test]
fn test_minion_at_home_stays_put() {
    let home = Vec3::new(0.0, 0.0, 5.0);
    let mut scene = build_scene(MinionConfig::default(), Transform::from_translation(home), home);
    let rotation = Quat::IDENTITY;

    for _ in 0..50 {
        scene.tick(1);
        assert_eq!(scene.position(), home);
        assert_eq!(scene.mode(), MinionMode::Follow);
        assert_eq!(scene.anim_speed(), 0.0);
    }
    let minion_rotation = scene.app.world().get::<Transform>(scene.minion).unwrap().rotation;
    assert_eq!(minion_rotation, rotation);
}

#[test]
fn test_player_turns_towards_heading() {
    let mut scene = build_scene(MinionConfig::default(), Transform::from_xyz(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 5.0));
    let facing = scene.player_rotation() * Vec3::NEG_Z;
    assert!(approx_eq(facing, Vec3::X));

    // Вперёд (-Z): поворот постепенный, не мгновенный
    scene.set_action("Move", axis(0.0, 1.0));
    scene.tick(1);
    let after_one = scene.player_rotation() * Vec3::NEG_Z;
    assert!(after_one.distance(Vec3::NEG_Z) > 0.1, "turned instantly: {:?}", after_one);

    scene.tick(100);
    let settled = scene.player_rotation() * Vec3::NEG_Z;
    assert!(settled.distance(Vec3::NEG_Z) < 1e-3, "facing = {:?}", settled);

    // Input отпущен: ориентация сохраняется
    scene.release_all();
    scene.tick(10);
    assert_eq!(scene.player_rotation() * Vec3::NEG_Z, settled);
}

#[test]
fn test_camera_relative_player_movement() {
    let player_config = PlayerConfig {
        movement_frame: MovementFrame::CameraRelative,
        ..default()
    };
    let mut scene = build_scene_with(
        player_config,
        MinionConfig::default(),
        Transform::from_xyz(0.0, 0.0, 5.0),
        Vec3::new(0.0, 0.0, 5.0),
        true,
    );

    // Камера сбоку (+X), смотрит на origin: forward экрана = -X в мире
    *scene.app.world_mut().get_mut::<Transform>(scene.camera).unwrap() =
        Transform::from_xyz(10.0, 12.0, 0.0).looking_at(Vec3::ZERO, Vec3::Y);

    scene.set_action("Move", axis(0.0, 1.0));
    scene.tick(1);

    let velocity = scene.app.world().get::<PhysicsBody>(scene.player).unwrap().velocity;
    assert!(approx_eq(velocity, Vec3::new(-5.0, 0.0, 0.0)), "velocity = {:?}", velocity);
}

#[test]
fn test_world_frame_ignores_camera() {
    let mut scene = build_scene(MinionConfig::default(), Transform::from_xyz(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, 5.0));
    *scene.app.world_mut().get_mut::<Transform>(scene.camera).unwrap() =
        Transform::from_xyz(10.0, 12.0, 0.0).looking_at(Vec3::ZERO, Vec3::Y);

    scene.set_action("Move", axis(0.0, 1.0));
    scene.tick(1);

    let velocity = scene.app.world().get::<PhysicsBody>(scene.player).unwrap().velocity;
    assert!(approx_eq(velocity, Vec3::new(0.0, 0.0, -5.0)), "velocity = {:?}", velocity);
}
