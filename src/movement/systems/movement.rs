//! Movement domain: systems that drive the locomotion state machine.

use avian2d::prelude::*;
use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::systems::AvianOracle;
use crate::movement::{
    JumpEvent, LandEvent, LocomotionEvent, LocomotionState, LocomotionTuning, MovementInput,
    Player, Tick, TickOutcome, VelocityCommand, WallHitEvent,
};

fn apply_velocity(command: &VelocityCommand, velocity: &mut LinearVelocity) {
    if let Some(x) = command.horizontal {
        velocity.x = x;
    }
    if let Some(y) = command.vertical {
        velocity.y = y;
    }
}

fn emit_feedback(
    entity: Entity,
    outcome: &TickOutcome,
    jump_events: &mut MessageWriter<JumpEvent>,
    land_events: &mut MessageWriter<LandEvent>,
    wall_hit_events: &mut MessageWriter<WallHitEvent>,
) {
    for event in &outcome.events {
        match *event {
            LocomotionEvent::Jump(kind) => {
                jump_events.write(JumpEvent { entity, kind });
            }
            LocomotionEvent::Land => {
                land_events.write(LandEvent { entity });
            }
            LocomotionEvent::WallHit(direction) => {
                wall_hit_events.write(WallHitEvent { entity, direction });
            }
        }
    }
}

/// Cooldowns and the wall-jump deadline are compared across both schedules, so
/// `now` always comes from the virtual clock.
pub(crate) fn locomotion_tick(clock: &Time<Virtual>, dt: f32) -> Tick {
    Tick::new(dt, clock.elapsed_secs())
}

/// Ground sampling and jump dispatch, once per rendered frame.
pub(crate) fn run_frame_tick(
    clock: Res<Time<Virtual>>,
    input: Res<MovementInput>,
    tuning: Res<LocomotionTuning>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut LocomotionState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut jump_events: MessageWriter<JumpEvent>,
    mut land_events: MessageWriter<LandEvent>,
    mut wall_hit_events: MessageWriter<WallHitEvent>,
) {
    let tick = locomotion_tick(&clock, clock.delta_secs());

    for (entity, transform, mut state, mut velocity) in &mut query {
        let oracle = AvianOracle::new(&spatial_query, transform.translation.truncate());
        let outcome = state.tick_frame(&tuning, tick, &oracle, input.jump_just_pressed);

        apply_velocity(&outcome.velocity, &mut velocity);
        emit_feedback(
            entity,
            &outcome,
            &mut jump_events,
            &mut land_events,
            &mut wall_hit_events,
        );
    }
}

/// Horizontal velocity and wall-jump window, once per fixed physics step.
pub(crate) fn run_physics_tick(
    time: Res<Time>,
    clock: Res<Time<Virtual>>,
    tuning: Res<LocomotionTuning>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut LocomotionState,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut jump_events: MessageWriter<JumpEvent>,
    mut land_events: MessageWriter<LandEvent>,
    mut wall_hit_events: MessageWriter<WallHitEvent>,
) {
    let tick = locomotion_tick(&clock, time.delta_secs());

    for (entity, transform, mut state, mut velocity) in &mut query {
        let oracle = AvianOracle::new(&spatial_query, transform.translation.truncate());
        let outcome = state.tick_physics(&tuning, tick, &oracle);

        apply_velocity(&outcome.velocity, &mut velocity);
        emit_feedback(
            entity,
            &outcome,
            &mut jump_events,
            &mut land_events,
            &mut wall_hit_events,
        );
    }
}

/// A player without a body cannot be driven; treat it as fatal.
pub(crate) fn validate_player_setup(
    players: Query<
        (
            Entity,
            Has<RigidBody>,
            Has<Collider>,
            Has<LinearVelocity>,
            Has<LocomotionState>,
        ),
        With<Player>,
    >,
    mut exit: MessageWriter<AppExit>,
) {
    for (entity, has_body, has_collider, has_velocity, has_state) in &players {
        let missing: Vec<&str> = [
            (has_body, "RigidBody"),
            (has_collider, "Collider"),
            (has_velocity, "LinearVelocity"),
            (has_state, "LocomotionState"),
        ]
        .into_iter()
        .filter_map(|(present, name)| (!present).then_some(name))
        .collect();

        if missing.is_empty() {
            info!("Player {:?} locomotion ready", entity);
        } else {
            error!(
                "Player {:?} cannot move, missing: {}",
                entity,
                missing.join(", ")
            );
            exit.write(AppExit::error());
        }
    }
}
