//! Content domain: RON-facing definitions for locomotion tuning.

use bevy::prelude::*;
use serde::Deserialize;

use crate::movement::{GroundedReversal, LocomotionTuning, ProbeRegion};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ProbeDef {
    pub offset: (f32, f32),
    pub half_extents: (f32, f32),
}

impl From<ProbeRegion> for ProbeDef {
    fn from(region: ProbeRegion) -> Self {
        Self {
            offset: (region.offset.x, region.offset.y),
            half_extents: (region.half_extents.x, region.half_extents.y),
        }
    }
}

impl From<ProbeDef> for ProbeRegion {
    fn from(def: ProbeDef) -> Self {
        ProbeRegion::new(
            Vec2::new(def.offset.0, def.offset.1),
            Vec2::new(def.half_extents.0, def.half_extents.1),
        )
    }
}

/// Mirrors `LocomotionTuning`; fields left out of the file keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocomotionDef {
    pub base_move_speed: f32,
    pub max_move_speed: f32,
    pub speed_return_rate: f32,
    pub jump_force: f32,
    pub wall_jump_force: (f32, f32),
    pub coyote_time: f32,
    pub wall_jump_window: f32,
    pub wall_hit_cooldown: f32,
    pub bump_normal_threshold: f32,
    pub grounded_reversal: GroundedReversal,
    pub ground_probe: ProbeDef,
    pub wall_probe: ProbeDef,
    pub wall_cast_distance: f32,
}

impl Default for LocomotionDef {
    fn default() -> Self {
        let tuning = LocomotionTuning::default();
        Self {
            base_move_speed: tuning.base_move_speed,
            max_move_speed: tuning.max_move_speed,
            speed_return_rate: tuning.speed_return_rate,
            jump_force: tuning.jump_force,
            wall_jump_force: (tuning.wall_jump_force.x, tuning.wall_jump_force.y),
            coyote_time: tuning.coyote_time,
            wall_jump_window: tuning.wall_jump_window,
            wall_hit_cooldown: tuning.wall_hit_cooldown,
            bump_normal_threshold: tuning.bump_normal_threshold,
            grounded_reversal: tuning.grounded_reversal,
            ground_probe: tuning.ground_probe.into(),
            wall_probe: tuning.wall_probe.into(),
            wall_cast_distance: tuning.wall_cast_distance,
        }
    }
}

impl From<LocomotionDef> for LocomotionTuning {
    fn from(def: LocomotionDef) -> Self {
        Self {
            base_move_speed: def.base_move_speed,
            max_move_speed: def.max_move_speed,
            speed_return_rate: def.speed_return_rate,
            jump_force: def.jump_force,
            wall_jump_force: Vec2::new(def.wall_jump_force.0, def.wall_jump_force.1),
            coyote_time: def.coyote_time,
            wall_jump_window: def.wall_jump_window,
            wall_hit_cooldown: def.wall_hit_cooldown,
            bump_normal_threshold: def.bump_normal_threshold,
            grounded_reversal: def.grounded_reversal,
            ground_probe: def.ground_probe.into(),
            wall_probe: def.wall_probe.into(),
            wall_cast_distance: def.wall_cast_distance,
        }
    }
}
