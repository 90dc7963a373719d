//! Modifiers domain: speed booster pads.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{GameLayer, LocomotionState, LocomotionTuning, Player};

#[derive(Component, Debug, Clone)]
pub struct SpeedBooster {
    /// Added to the player's current speed on entry.
    pub amount: f32,
}

impl Default for SpeedBooster {
    fn default() -> Self {
        Self { amount: 140.0 }
    }
}

pub fn spawn_speed_booster(commands: &mut Commands, position: Vec2) {
    let size = Vec2::new(60.0, 30.0);
    commands.spawn((
        SpeedBooster::default(),
        Sprite {
            color: Color::srgb(0.3, 0.7, 0.95),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        Collider::rectangle(size.x, size.y),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));
}

pub(crate) fn apply_speed_boosters(
    tuning: Res<LocomotionTuning>,
    mut collision_events: MessageReader<CollisionStart>,
    booster_query: Query<&SpeedBooster>,
    mut player_query: Query<&mut LocomotionState, With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (booster_entity, player_entity) in pairs {
            let Ok(booster) = booster_query.get(booster_entity) else {
                continue;
            };
            let Ok(mut state) = player_query.get_mut(player_entity) else {
                continue;
            };

            state.apply_speed_boost(&tuning, booster.amount);
            info!(
                "Speed boost +{}: move_speed now {}",
                booster.amount,
                state.move_speed()
            );
        }
    }
}
