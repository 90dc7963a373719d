//! Modifiers domain: reusable jump orbs.

use std::f32::consts::PI;

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::{GameLayer, JumpEvent, JumpKind, LocomotionState, Player};

const ORB_RADIUS: f32 = 12.0;
const ORB_TRIGGER_RADIUS: f32 = 36.0;
const ORB_PUNCH_STRENGTH: f32 = 0.2;
const ORB_ANIM_DURATION: f32 = 0.3;

/// Trigger zone granting a one-shot vertical impulse while the player is inside.
#[derive(Component, Debug, Clone)]
pub struct OrbZone {
    pub jump_force: f32,
}

impl Default for OrbZone {
    fn default() -> Self {
        Self { jump_force: 800.0 }
    }
}

/// Scale bump played on an orb after it launches the player.
#[derive(Component, Debug, Clone)]
pub struct OrbPunch {
    pub elapsed: f32,
    pub duration: f32,
}

impl OrbPunch {
    pub fn new(duration: f32) -> Self {
        Self {
            elapsed: 0.0,
            duration,
        }
    }

    /// Scale factor at the current point of the animation; 1.0 once finished.
    pub fn scale(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        1.0 + ORB_PUNCH_STRENGTH * (t * PI).sin() * (1.0 - t)
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

pub fn spawn_orb(commands: &mut Commands, position: Vec2) {
    commands.spawn((
        OrbZone::default(),
        Sprite {
            color: Color::srgb(0.95, 0.75, 0.2),
            custom_size: Some(Vec2::splat(ORB_RADIUS * 2.0)),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        Collider::circle(ORB_TRIGGER_RADIUS),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));
}

fn orb_pair(a: Entity, b: Entity, orbs: &Query<(), With<OrbZone>>) -> Option<(Entity, Entity)> {
    if orbs.contains(a) {
        Some((a, b))
    } else if orbs.contains(b) {
        Some((b, a))
    } else {
        None
    }
}

/// Keeps each player's current orb in sync with sensor enter/exit.
pub(crate) fn track_orb_zones(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    orb_query: Query<(), With<OrbZone>>,
    mut player_query: Query<&mut LocomotionState, With<Player>>,
) {
    for event in collision_start_events.read() {
        let Some((orb, player)) = orb_pair(event.collider1, event.collider2, &orb_query) else {
            continue;
        };
        if let Ok(mut state) = player_query.get_mut(player) {
            state.enter_orb_zone(orb);
            debug!("Player entered orb zone {:?}", orb);
        }
    }

    for event in collision_end_events.read() {
        let Some((orb, player)) = orb_pair(event.collider1, event.collider2, &orb_query) else {
            continue;
        };
        if let Ok(mut state) = player_query.get_mut(player) {
            state.exit_orb_zone(orb);
            debug!("Player left orb zone {:?}", orb);
        }
    }
}

/// Orb jumps are resolved here: the orb owns its impulse.
pub(crate) fn activate_orbs(
    mut commands: Commands,
    mut jump_events: MessageReader<JumpEvent>,
    orb_query: Query<&OrbZone>,
    mut velocity_query: Query<&mut LinearVelocity, With<Player>>,
) {
    for event in jump_events.read() {
        let JumpKind::Orb(orb) = event.kind else {
            continue;
        };

        let Ok(zone) = orb_query.get(orb) else {
            warn!("Orb {:?} no longer exists, jump dropped", orb);
            continue;
        };

        if let Ok(mut velocity) = velocity_query.get_mut(event.entity) {
            velocity.y = zone.jump_force;
        }

        commands.entity(orb).insert(OrbPunch::new(ORB_ANIM_DURATION));
    }
}

pub(crate) fn animate_orb_punch(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut OrbPunch, &mut Transform)>,
) {
    for (entity, mut punch, mut transform) in &mut query {
        punch.elapsed += time.delta_secs();
        transform.scale = Vec3::splat(punch.scale());

        if punch.finished() {
            transform.scale = Vec3::ONE;
            commands.entity(entity).remove::<OrbPunch>();
        }
    }
}
