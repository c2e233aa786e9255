//! Minion tick: арбитраж режима + исполнение ровно одного режима

use bevy::prelude::*;

use crate::animation::{AnimatorParameters, SPEED_PARAM};
use crate::config::MinionConfig;
use crate::input::{InputActionMap, MinionBindings, PointerState};
use crate::minion::arbitration::{release_send_block, select_mode, ModeInputs};
use crate::minion::behaviours::{self, BodyWrite, MinionPose, ModeOutput};
use crate::minion::components::{MinionAgent, MinionLinks, MinionMode, MinionState};
use crate::minion::events::MinionModeChanged;
use crate::physics::PhysicsBody;
use crate::player::{Player, PlayerAgent};
use crate::shared::{ground_point, CameraRig};

/// Система: minion FSM tick (FixedUpdate, после player_movement)
///
/// Порядок:
/// 1. Снимок bindings → select_mode (приоритет Sweep > PointerSweep > Charge > default)
/// 2. Исполнение режима → ModeOutput
/// 3. Запись в PhysicsBody / Transform.rotation / AnimatorParameters
/// 4. MinionModeChanged при смене режима
pub fn minion_tick(
    actions: Res<InputActionMap>,
    pointer: Res<PointerState>,
    time: Res<Time<Fixed>>,
    mut minions: Query<
        (
            Entity,
            &MinionAgent,
            &MinionConfig,
            &MinionBindings,
            &MinionLinks,
            &mut MinionState,
            &mut PhysicsBody,
            &mut Transform,
            &mut AnimatorParameters,
        ),
        Without<Player>,
    >,
    players: Query<(&PlayerAgent, &Transform), With<Player>>,
    cameras: Query<(&CameraRig, &Transform), (Without<MinionAgent>, Without<Player>)>,
    mut mode_events: EventWriter<MinionModeChanged>,
) {
    let delta = time.delta_secs();

    for (entity, agent, config, bindings, links, mut state, mut body, mut transform, mut animator) in
        minions.iter_mut()
    {
        let inputs = ModeInputs::read(&actions, bindings);
        release_send_block(&inputs, &mut state);

        let pose = MinionPose::from_transform(&transform, delta);
        let mut mode = select_mode(&inputs, &state, config.charge_latch);

        let output = match mode {
            MinionMode::DirectionalSweep => {
                behaviours::directional_sweep(actions.read_vec2(bindings.sweep), &pose, config)
            }
            MinionMode::PointerSweep => {
                let hit = links
                    .camera
                    .and_then(|camera| cameras.get(camera).ok())
                    .and_then(|(rig, camera_transform)| {
                        rig.viewport_to_ray(camera_transform, pointer.screen_position)
                    })
                    .and_then(ground_point);

                behaviours::pointer_sweep(hit, &pose, config)
            }
            MinionMode::Charge => {
                state.mark_sending();
                behaviours::charge(&pose, config)
            }
            MinionMode::Follow | MinionMode::ReturnDelay => {
                mode = state.enter_default_branch(config.return_delay);
                if mode == MinionMode::ReturnDelay {
                    behaviours::hold_still(&pose)
                } else {
                    follow_or_return(agent, links, &players, &pose, config)
                }
            }
        };

        // Sweep без движения (луч мимо земли) cooldown не взводит
        if mode.is_sweep() && output.body != BodyWrite::Hold {
            state.mark_sweeping();
        }

        apply_output(&output, &mut body, &mut transform, &mut animator, pose.position, delta);

        if state.mode != mode {
            crate::log(&format!("Minion {:?}: {:?} → {:?}", entity, state.mode, mode));
            mode_events.write(MinionModeChanged {
                minion: entity,
                from: state.mode,
                to: mode,
            });
            state.mode = mode;
        }
    }
}

/// Follow если игрок двигается, иначе возврат к home point
///
/// Потерянная ссылка на игрока трактуется как "игрок стоит".
fn follow_or_return(
    agent: &MinionAgent,
    links: &MinionLinks,
    players: &Query<(&PlayerAgent, &Transform), With<Player>>,
    pose: &MinionPose,
    config: &MinionConfig,
) -> ModeOutput {
    match players.get(links.player) {
        Ok((player, player_transform)) if player.is_moving() => behaviours::follow_player(
            player_transform.translation,
            player_transform.rotation,
            pose,
            config,
        ),
        _ => behaviours::return_home(agent.home_point, pose, config),
    }
}

fn apply_output(
    output: &ModeOutput,
    body: &mut PhysicsBody,
    transform: &mut Transform,
    animator: &mut AnimatorParameters,
    position: Vec3,
    delta: f32,
) {
    match output.body {
        BodyWrite::Velocity(velocity) => body.set_velocity(velocity),
        BodyWrite::MovePosition(target) => body.move_position(position, target, delta),
        BodyWrite::Hold => {}
    }

    transform.rotation = output.rotation;

    if let Some(speed) = output.anim_speed {
        animator.set_float(SPEED_PARAM, speed);
    }
}
