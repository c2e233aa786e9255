//! Headless симуляция minion
//!
//! Прогоняет scripted timeline input: follow → sweep → cooldown → charge в стену.
//! Usage: minion_simulation [--rapier] [settings.json]

use bevy::prelude::*;
use minion_simulation::*;

/// Фаза scripted timeline
struct Phase {
    name: &'static str,
    ticks: u32,
    actions: &'static [(&'static str, ActionState)],
}

const SWEEP_FORWARD: ActionState = ActionState {
    active: true,
    pressed: false,
    just_triggered: false,
    value: Vec2::new(0.0, 1.0),
};

const MOVE_RIGHT: ActionState = ActionState {
    active: true,
    pressed: false,
    just_triggered: false,
    value: Vec2::new(0.6, 0.0),
};

const SEND_HELD: ActionState = ActionState {
    active: true,
    pressed: true,
    just_triggered: false,
    value: Vec2::ZERO,
};

const TIMELINE: &[Phase] = &[
    Phase { name: "player walks, minion follows", ticks: 100, actions: &[("Move", MOVE_RIGHT)] },
    Phase { name: "player idle, minion returns home", ticks: 150, actions: &[] },
    Phase { name: "directional sweep", ticks: 50, actions: &[("Sweep", SWEEP_FORWARD)] },
    Phase { name: "sweep released (cooldown)", ticks: 40, actions: &[] },
    Phase { name: "send tap (charge)", ticks: 2, actions: &[("Send", SEND_HELD)] },
    Phase { name: "latched charge until wall", ticks: 200, actions: &[] },
];

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let backend = if args.iter().any(|arg| arg == "--rapier") {
        PhysicsBackend::Rapier
    } else {
        PhysicsBackend::Headless
    };

    let settings = match args.iter().find(|arg| !arg.starts_with("--")) {
        Some(path) => match SimulationSettings::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                init_logger();
                log_error(&format!("Settings {}: {}", path, err));
                std::process::exit(1);
            }
        },
        None => SimulationSettings::default(),
    };

    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin {
        backend,
        ..SimulationPlugin::from_settings(&settings)
    });

    let spawned = spawn_with_actions(&mut app, |commands, actions| {
        let camera = spawn_camera(
            commands,
            CameraRig::default(),
            Transform::from_xyz(0.0, 12.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
        );
        let player = spawn_player(
            commands,
            actions,
            settings.player,
            Transform::default(),
            Some(camera),
        )?;
        let minion = spawn_minion(
            commands,
            actions,
            settings.minion.clone(),
            Transform::from_translation(settings.home_point()),
            settings.home_point(),
            MinionLinks {
                player,
                camera: Some(camera),
            },
        )?;
        spawn_obstacle(
            commands,
            Vec3::new(0.0, 0.0, -12.0),
            Vec3::new(20.0, 2.0, 0.5),
            physics::WALL_CATEGORY,
        );
        Ok::<_, SimulationError>(minion)
    });

    let minion = match spawned {
        Ok(minion) => minion,
        Err(err) => {
            log_error(&format!("Startup failed: {}", err));
            std::process::exit(1);
        }
    };

    log_info(&format!(
        "Starting minion headless simulation ({} Hz, {:?} contacts)",
        settings.fixed_hz, backend
    ));

    for phase in TIMELINE {
        {
            let mut actions = app.world_mut().resource_mut::<InputActionMap>();
            actions.release_all();
            for (name, state) in phase.actions {
                actions.set_state_by_name(name, *state);
            }
        }

        advance_fixed_ticks(&mut app, phase.ticks);

        let world = app.world();
        if let (Some(transform), Some(state)) = (
            world.get::<Transform>(minion),
            world.get::<MinionState>(minion),
        ) {
            log_info(&format!(
                "{:<36} → mode {:?}, minion at {:.2?}, cooldown {:.2}s",
                phase.name,
                state.mode,
                transform.translation,
                state.return_delay.remaining()
            ));
        }
    }

    log_info("Simulation complete!");
}
