//! Общие helpers для integration тестов: сцена игрок + minion + камера.

#![allow(dead_code)]

use bevy::prelude::*;
use minion_simulation::*;

/// Шаг 50Hz
pub const DT: f32 = 0.02;

pub struct Scene {
    pub app: App,
    pub player: Entity,
    pub minion: Entity,
    pub camera: Entity,
}

/// Игрок в origin смотрит вдоль +X; камера сверху над origin
pub fn build_scene(config: MinionConfig, minion_start: Transform, home_point: Vec3) -> Scene {
    build_scene_with(PlayerConfig::default(), config, minion_start, home_point, true)
}

/// Та же сцена, контакты от выбранного backend (Rapier pipeline или headless)
pub fn build_scene_on(backend: PhysicsBackend, config: MinionConfig, minion_start: Transform, home_point: Vec3) -> Scene {
    assemble_scene(backend, PlayerConfig::default(), config, minion_start, home_point, true)
}

pub fn build_scene_with(
    player_config: PlayerConfig,
    config: MinionConfig,
    minion_start: Transform,
    home_point: Vec3,
    link_camera: bool,
) -> Scene {
    assemble_scene(
        PhysicsBackend::Headless,
        player_config,
        config,
        minion_start,
        home_point,
        link_camera,
    )
}

fn assemble_scene(
    backend: PhysicsBackend,
    player_config: PlayerConfig,
    config: MinionConfig,
    minion_start: Transform,
    home_point: Vec3,
    link_camera: bool,
) -> Scene {
    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin {
        backend,
        ..default()
    });

    let (player, minion, camera) = spawn_with_actions(&mut app, |commands, actions| {
        let camera = spawn_camera(
            commands,
            CameraRig::default(),
            Transform::from_xyz(0.0, 20.0, 0.0).looking_at(Vec3::ZERO, Vec3::NEG_Z),
        );
        let player = spawn_player(
            commands,
            actions,
            player_config,
            Transform::IDENTITY.looking_to(Vec3::X, Vec3::Y),
            Some(camera),
        )
        .unwrap();
        let minion = spawn_minion(
            commands,
            actions,
            config,
            minion_start,
            home_point,
            MinionLinks {
                player,
                camera: link_camera.then_some(camera),
            },
        )
        .unwrap();
        (player, minion, camera)
    });

    Scene {
        app,
        player,
        minion,
        camera,
    }
}

impl Scene {
    pub fn tick(&mut self, ticks: u32) {
        advance_fixed_ticks(&mut self.app, ticks);
    }

    pub fn set_action(&mut self, name: &str, state: ActionState) {
        let known = self
            .app
            .world_mut()
            .resource_mut::<InputActionMap>()
            .set_state_by_name(name, state);
        assert!(known, "binding {} not registered", name);
    }

    pub fn release_all(&mut self) {
        self.app.world_mut().resource_mut::<InputActionMap>().release_all();
    }

    pub fn set_pointer(&mut self, screen_position: Vec2) {
        self.app.world_mut().resource_mut::<PointerState>().screen_position = screen_position;
    }

    pub fn state(&self) -> MinionState {
        *self.app.world().get::<MinionState>(self.minion).unwrap()
    }

    pub fn mode(&self) -> MinionMode {
        self.state().mode
    }

    pub fn velocity(&self) -> Vec3 {
        self.app.world().get::<PhysicsBody>(self.minion).unwrap().velocity
    }

    pub fn position(&self) -> Vec3 {
        self.app.world().get::<Transform>(self.minion).unwrap().translation
    }

    pub fn player_position(&self) -> Vec3 {
        self.app.world().get::<Transform>(self.player).unwrap().translation
    }

    pub fn player_rotation(&self) -> Quat {
        self.app.world().get::<Transform>(self.player).unwrap().rotation
    }

    pub fn player_speed(&self) -> f32 {
        self.app.world().get::<PlayerAgent>(self.player).unwrap().speed()
    }

    pub fn anim_speed(&self) -> f32 {
        self.app.world().get::<AnimatorParameters>(self.minion).unwrap().speed()
    }

    /// Забирает накопленные события
    pub fn drain_events<E: Event>(&mut self) -> Vec<E> {
        self.app.world_mut().resource_mut::<Events<E>>().drain().collect()
    }
}

pub fn axis(x: f32, y: f32) -> ActionState {
    ActionState::axis(Vec2::new(x, y))
}

pub fn held() -> ActionState {
    ActionState::held()
}

pub fn approx_eq(a: Vec3, b: Vec3) -> bool {
    a.distance(b) < 1e-4
}
