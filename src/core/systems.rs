//! Core domain: camera systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{CameraRig, CameraShake};
use crate::movement::{Player, WallHitEvent};

const FOLLOW_RATE: f32 = 6.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((Camera2d, CameraRig::default()));
}

pub(crate) fn trigger_camera_shake(
    mut wall_hit_events: MessageReader<WallHitEvent>,
    mut shake: ResMut<CameraShake>,
) {
    for event in wall_hit_events.read() {
        shake.trigger(event.direction.sign());
    }
}

pub(crate) fn follow_player(
    time: Res<Time>,
    mut shake: ResMut<CameraShake>,
    player_query: Query<&Transform, (With<Player>, Without<CameraRig>)>,
    mut camera_query: Query<(&mut Transform, &mut CameraRig)>,
) {
    let dt = time.delta_secs();
    let Some(player) = player_query.iter().next() else {
        return;
    };

    let target = player.translation.truncate();
    let blend = 1.0 - (-FOLLOW_RATE * dt).exp();
    let offset = shake.tick(dt);

    for (mut transform, mut rig) in &mut camera_query {
        rig.focus = rig.focus.lerp(target, blend);
        transform.translation.x = rig.focus.x + offset.x;
        transform.translation.y = rig.focus.y + offset.y;
    }
}
