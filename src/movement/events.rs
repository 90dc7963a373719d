//! Movement domain: feedback events for animation, audio, and camera.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::{Facing, JumpKind};

#[derive(Debug)]
pub struct JumpEvent {
    pub entity: Entity,
    pub kind: JumpKind,
}

impl Message for JumpEvent {}

#[derive(Debug)]
pub struct LandEvent {
    pub entity: Entity,
}

impl Message for LandEvent {}

/// Emitted on every direction reversal, with the new direction of travel.
#[derive(Debug)]
pub struct WallHitEvent {
    pub entity: Entity,
    pub direction: Facing,
}

impl Message for WallHitEvent {}
