//! Movement domain: avian2d-backed physics queries and grounded wall bumps.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    CastHit, GameLayer, LocomotionEvent, LocomotionState, LocomotionTuning, PhysicsOracle,
    Player, ProbeRegion, Wall, WallHitEvent,
};

/// Answers locomotion queries around a single character.
pub(crate) struct AvianOracle<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    origin: Vec2,
}

impl<'a, 'w, 's> AvianOracle<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>, origin: Vec2) -> Self {
        Self {
            spatial_query,
            origin,
        }
    }
}

impl PhysicsOracle for AvianOracle<'_, '_, '_> {
    fn overlaps(&self, region: &ProbeRegion, layer: GameLayer) -> bool {
        let size = region.size();
        let shape = Collider::rectangle(size.x, size.y);
        let filter = SpatialQueryFilter::from_mask(layer);

        !self
            .spatial_query
            .shape_intersections(&shape, self.origin + region.offset, 0.0, &filter)
            .is_empty()
    }

    fn cast(
        &self,
        origin: Vec2,
        size: Vec2,
        direction: Dir2,
        distance: f32,
        layer: GameLayer,
    ) -> Option<CastHit> {
        let shape = Collider::rectangle(size.x, size.y);
        let filter = SpatialQueryFilter::from_mask(layer);
        let config = ShapeCastConfig::from_max_distance(distance);

        self.spatial_query
            .cast_shape(
                &shape,
                self.origin + origin,
                0.0,
                direction,
                &config,
                &filter,
            )
            .map(|hit| CastHit {
                distance: hit.distance,
                normal: hit.normal1,
            })
    }
}

/// Ground-level wall contact is a discrete bump, so it is driven by collision
/// starts rather than the continuous wall probe.
pub(crate) fn handle_wall_bumps(
    clock: Res<Time<Virtual>>,
    tuning: Res<LocomotionTuning>,
    spatial_query: SpatialQuery,
    mut collision_events: MessageReader<CollisionStart>,
    wall_query: Query<(), With<Wall>>,
    mut player_query: Query<(&Transform, &mut LocomotionState), With<Player>>,
    mut wall_hit_events: MessageWriter<WallHitEvent>,
) {
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);
    let reach = tuning.wall_probe.offset.x.abs()
        + tuning.wall_probe.half_extents.x
        + tuning.wall_cast_distance;

    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, wall_entity) in pairs {
            if !wall_query.contains(wall_entity) {
                continue;
            }

            let Ok((transform, mut state)) = player_query.get_mut(player_entity) else {
                continue;
            };

            // Read the contact normal off the wall itself, ahead first, then behind.
            let origin = transform.translation.truncate();
            let facing = state.facing();
            let normal = [facing, facing.flipped()].into_iter().find_map(|side| {
                spatial_query
                    .cast_ray(origin, side.as_dir(), reach, true, &wall_filter)
                    .filter(|hit| hit.entity == wall_entity)
                    .map(|hit| hit.normal)
            });

            let Some(normal) = normal else {
                continue;
            };

            let outcome = state.on_wall_contact(&tuning, clock.elapsed_secs(), normal);
            for feedback in &outcome.events {
                if let LocomotionEvent::WallHit(direction) = feedback {
                    wall_hit_events.write(WallHitEvent {
                        entity: player_entity,
                        direction: *direction,
                    });
                }
            }
        }
    }
}
