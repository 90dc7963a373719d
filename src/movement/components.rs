//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Sensors (orbs, boosters) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Horizontal travel direction. Movement is autonomous, so this is also the
/// direction the character is running in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Always +1.0 or -1.0.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    pub fn as_dir(self) -> Dir2 {
        match self {
            Facing::Left => Dir2::NEG_X,
            Facing::Right => Dir2::X,
        }
    }
}

/// Axis-aligned box relative to the character's origin, used for overlap probes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeRegion {
    pub offset: Vec2,
    pub half_extents: Vec2,
}

impl ProbeRegion {
    pub fn new(offset: Vec2, half_extents: Vec2) -> Self {
        Self {
            offset,
            half_extents,
        }
    }

    pub fn size(&self) -> Vec2 {
        self.half_extents * 2.0
    }

    /// Same region placed on the `facing` side of the character.
    pub fn facing(self, facing: Facing) -> Self {
        Self {
            offset: Vec2::new(self.offset.x.abs() * facing.sign(), self.offset.y),
            ..self
        }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
