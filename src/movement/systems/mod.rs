//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{AvianOracle, handle_wall_bumps};
pub(crate) use input::read_input;
pub(crate) use movement::{locomotion_tick, run_frame_tick, run_physics_tick, validate_player_setup};
