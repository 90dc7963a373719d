//! Core domain: camera and feedback wiring shared by the other domains.

mod resources;
mod systems;


pub use resources::{CameraRig, CameraShake};

use bevy::prelude::*;

use crate::core::systems::{follow_player, setup_camera, trigger_camera_shake};
use crate::movement::LocomotionSet;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraShake>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (trigger_camera_shake, follow_player)
                    .chain()
                    .after(LocomotionSet),
            );
    }
}
