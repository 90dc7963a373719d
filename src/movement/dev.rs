//! Movement domain: test room and debug-only probe visualisation.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::modifiers::{spawn_orb, spawn_speed_booster};
use crate::movement::{GameLayer, Ground, Wall};

#[cfg(feature = "dev-tools")]
use bevy::math::Isometry2d;

#[cfg(feature = "dev-tools")]
use crate::movement::{LocomotionState, LocomotionTuning, Player};

fn spawn_block(commands: &mut Commands, size: Vec2, position: Vec2, color: Color, wall: bool) {
    let mut block = commands.spawn((
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(position.x, position.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        Friction::new(0.0),
    ));

    if wall {
        block.insert((
            Wall,
            CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]),
        ));
    } else {
        block.insert((
            Ground,
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        ));
    }
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Ground
    spawn_block(
        &mut commands,
        Vec2::new(800.0, 40.0),
        Vec2::new(0.0, -200.0),
        ground_color,
        false,
    );

    // Outer walls
    for x in [-420.0, 420.0] {
        spawn_block(
            &mut commands,
            Vec2::new(40.0, 500.0),
            Vec2::new(x, 50.0),
            wall_color,
            true,
        );
    }

    // Platforms
    spawn_block(
        &mut commands,
        Vec2::new(150.0, 20.0),
        Vec2::new(-250.0, -50.0),
        platform_color,
        false,
    );
    spawn_block(
        &mut commands,
        Vec2::new(150.0, 20.0),
        Vec2::new(250.0, 50.0),
        platform_color,
        false,
    );

    // Pillar for wall jumping practice
    spawn_block(
        &mut commands,
        Vec2::new(30.0, 200.0),
        Vec2::new(-100.0, -80.0),
        wall_color,
        true,
    );

    spawn_orb(&mut commands, Vec2::new(0.0, 40.0));
    spawn_speed_booster(&mut commands, Vec2::new(150.0, -165.0));
}

#[cfg(feature = "dev-tools")]
pub(crate) fn draw_probe_gizmos(
    mut gizmos: Gizmos,
    tuning: Res<LocomotionTuning>,
    query: Query<(&Transform, &LocomotionState), With<Player>>,
) {
    let active = Color::srgb(0.2, 0.9, 0.3);
    let idle = Color::srgb(0.6, 0.6, 0.6);
    let window = Color::srgb(0.95, 0.8, 0.2);

    for (transform, state) in &query {
        let origin = transform.translation.truncate();

        let ground = &tuning.ground_probe;
        gizmos.rect_2d(
            Isometry2d::from_translation(origin + ground.offset),
            ground.size(),
            if state.is_grounded() { active } else { idle },
        );

        let wall = state.wall_probe();
        let wall_color = if state.can_wall_jump() {
            window
        } else if state.is_touching_wall() {
            active
        } else {
            idle
        };
        gizmos.rect_2d(
            Isometry2d::from_translation(origin + wall.offset),
            wall.size(),
            wall_color,
        );
    }
}
