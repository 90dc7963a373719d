//! Movement domain: player bootstrap from the loaded tuning.

use avian2d::prelude::*;
use bevy::app::AppExit;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::{GameLayer, LocomotionState, LocomotionTuning, Player};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Spawn the player once tuning is in place. Tuning that cannot produce a
/// locomotion state is a configuration error and ends the app.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    existing_player: Query<Entity, With<Player>>,
    mut exit: MessageWriter<AppExit>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let state = match LocomotionState::new(&tuning) {
        Ok(state) => state,
        Err(e) => {
            error!("Cannot spawn player: {}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    info!(
        "Spawning player: base_speed={}, jump_force={}, coyote={}s, wall_window={}s",
        tuning.base_move_speed, tuning.jump_force, tuning.coyote_time, tuning.wall_jump_window
    );

    commands.spawn((
        Player,
        state,
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(-300.0, -150.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Sensor],
            ),
        ),
    ));
}
