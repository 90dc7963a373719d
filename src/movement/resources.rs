//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

use crate::movement::ProbeRegion;

/// How a grounded bump into a wall decides whether to turn the character around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum GroundedReversal {
    /// Reverse on any sufficiently horizontal wall contact.
    Always,
    /// Reverse only when the contact normal opposes the direction of travel.
    #[default]
    TowardWall,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LocomotionTuning {
    pub base_move_speed: f32,
    pub max_move_speed: f32,
    /// Units per second that a boosted speed decays back toward `base_move_speed`.
    pub speed_return_rate: f32,
    pub jump_force: f32,
    /// x is pushed away from the wall, y is the vertical override.
    pub wall_jump_force: Vec2,
    pub coyote_time: f32,
    pub wall_jump_window: f32,
    pub wall_hit_cooldown: f32,
    /// Minimum |normal.x| for a grounded contact to count as a wall bump.
    pub bump_normal_threshold: f32,
    pub grounded_reversal: GroundedReversal,
    pub ground_probe: ProbeRegion,
    /// Authored on the right-hand side; mirrored to follow the facing.
    pub wall_probe: ProbeRegion,
    pub wall_cast_distance: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            base_move_speed: 280.0,
            max_move_speed: 560.0,
            speed_return_rate: 140.0,
            jump_force: 680.0,
            wall_jump_force: Vec2::new(420.0, 640.0),
            coyote_time: 0.1,
            wall_jump_window: 0.3,
            wall_hit_cooldown: 0.2,
            bump_normal_threshold: 0.6,
            grounded_reversal: GroundedReversal::TowardWall,
            ground_probe: ProbeRegion::new(Vec2::new(0.0, -26.0), Vec2::new(10.0, 3.0)),
            wall_probe: ProbeRegion::new(Vec2::new(14.0, 0.0), Vec2::new(3.0, 20.0)),
            wall_cast_distance: 4.0,
        }
    }
}

/// A tunable that cannot drive a character.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningError {
    pub field: &'static str,
    pub reason: String,
}

impl std::fmt::Display for TuningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid locomotion tuning '{}': {}", self.field, self.reason)
    }
}

impl std::error::Error for TuningError {}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError {
            field,
            reason: format!("expected a finite value >= 0, got {value}"),
        })
    }
}

fn positive_extents(field: &'static str, region: &ProbeRegion) -> Result<(), TuningError> {
    let ext = region.half_extents;
    if ext.is_finite() && ext.x > 0.0 && ext.y > 0.0 && region.offset.is_finite() {
        Ok(())
    } else {
        Err(TuningError {
            field,
            reason: format!("probe half extents must be > 0, got {ext}"),
        })
    }
}

impl LocomotionTuning {
    /// Reject configurations that would leave the character unable to function.
    pub fn validate(&self) -> Result<(), TuningError> {
        non_negative("base_move_speed", self.base_move_speed)?;
        if self.base_move_speed == 0.0 {
            return Err(TuningError {
                field: "base_move_speed",
                reason: "must be greater than zero".to_string(),
            });
        }
        non_negative("max_move_speed", self.max_move_speed)?;
        if self.max_move_speed < self.base_move_speed {
            return Err(TuningError {
                field: "max_move_speed",
                reason: format!(
                    "{} is below base_move_speed {}",
                    self.max_move_speed, self.base_move_speed
                ),
            });
        }
        non_negative("speed_return_rate", self.speed_return_rate)?;
        non_negative("jump_force", self.jump_force)?;
        non_negative("wall_jump_force.x", self.wall_jump_force.x)?;
        non_negative("wall_jump_force.y", self.wall_jump_force.y)?;
        non_negative("coyote_time", self.coyote_time)?;
        non_negative("wall_jump_window", self.wall_jump_window)?;
        non_negative("wall_hit_cooldown", self.wall_hit_cooldown)?;
        non_negative("wall_cast_distance", self.wall_cast_distance)?;
        if !(self.bump_normal_threshold > 0.0 && self.bump_normal_threshold <= 1.0) {
            return Err(TuningError {
                field: "bump_normal_threshold",
                reason: format!("expected (0, 1], got {}", self.bump_normal_threshold),
            });
        }
        positive_extents("ground_probe", &self.ground_probe)?;
        positive_extents("wall_probe", &self.wall_probe)?;
        Ok(())
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub jump_just_pressed: bool,
}
