//! Core domain: camera follow and shake state.

use bevy::prelude::*;

/// Smoothed point the camera tracks, before shake is applied.
#[derive(Component, Debug, Default)]
pub struct CameraRig {
    pub focus: Vec2,
}

/// Decaying screen shake, kicked toward the direction of the hit.
#[derive(Resource, Debug, Clone)]
pub struct CameraShake {
    pub duration: f32,
    pub strength: f32,
    remaining: f32,
    elapsed: f32,
    direction: f32,
}

impl Default for CameraShake {
    fn default() -> Self {
        Self {
            duration: 0.15,
            strength: 6.0,
            remaining: 0.0,
            elapsed: 0.0,
            direction: 1.0,
        }
    }
}

impl CameraShake {
    const FREQUENCY: f32 = 55.0;

    /// Restart the shake; `direction` is the sign of the horizontal kick.
    pub fn trigger(&mut self, direction: f32) {
        self.remaining = self.duration;
        self.elapsed = 0.0;
        self.direction = if direction < 0.0 { -1.0 } else { 1.0 };
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0.0
    }

    /// Advance by `dt` and return the offset to add to the camera.
    pub fn tick(&mut self, dt: f32) -> Vec2 {
        if !self.is_active() || self.duration <= 0.0 {
            self.remaining = 0.0;
            return Vec2::ZERO;
        }

        self.remaining = (self.remaining - dt).max(0.0);
        self.elapsed += dt;

        let falloff = self.remaining / self.duration;
        let phase = self.elapsed * Self::FREQUENCY;
        let kick = Vec2::new(self.direction * phase.cos(), 0.5 * (phase * 1.3).sin());
        kick * self.strength * falloff
    }
}
