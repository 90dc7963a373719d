//! Movement domain: locomotion plugin wiring and public exports.

mod bootstrap;
mod components;
mod dev;
mod events;
mod locomotion;
mod resources;
mod systems;


pub use components::{Facing, GameLayer, Ground, Player, ProbeRegion, Wall};
pub use events::{JumpEvent, LandEvent, WallHitEvent};
pub use locomotion::{
    CastHit, JumpKind, LocomotionEvent, LocomotionState, PhysicsOracle, Tick, TickOutcome,
    VelocityCommand, WallJumpWindow,
};
pub use resources::{GroundedReversal, LocomotionTuning, MovementInput, TuningError};

use bevy::prelude::*;

use crate::content::ContentSet;
use crate::movement::bootstrap::spawn_player;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    handle_wall_bumps, read_input, run_frame_tick, run_physics_tick, validate_player_setup,
};

/// Ordering for systems that react to locomotion feedback in `Update`.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocomotionSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<MovementInput>()
            .add_message::<JumpEvent>()
            .add_message::<LandEvent>()
            .add_message::<WallHitEvent>()
            .add_systems(
                Startup,
                (spawn_test_room, spawn_player).chain().after(ContentSet),
            )
            .add_systems(PostStartup, validate_player_setup)
            .add_systems(
                Update,
                (read_input, run_frame_tick, handle_wall_bumps)
                    .chain()
                    .in_set(LocomotionSet),
            )
            .add_systems(FixedUpdate, run_physics_tick);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, dev::draw_probe_gizmos.after(LocomotionSet));
    }
}
