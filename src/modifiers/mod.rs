//! Modifiers domain: trigger zones that feed the locomotion state machine.

mod orb;
mod speed_booster;


pub use orb::{OrbPunch, OrbZone, spawn_orb};
pub use speed_booster::{SpeedBooster, spawn_speed_booster};

use bevy::prelude::*;

use crate::modifiers::orb::{activate_orbs, animate_orb_punch, track_orb_zones};
use crate::modifiers::speed_booster::apply_speed_boosters;
use crate::movement::LocomotionSet;

pub struct ModifiersPlugin;

impl Plugin for ModifiersPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                (track_orb_zones, apply_speed_boosters).before(LocomotionSet),
                (activate_orbs, animate_orb_punch).chain().after(LocomotionSet),
            ),
        );
    }
}
