//! Movement domain: the locomotion state machine.
//!
//! Engine-agnostic: physics is reached only through [`PhysicsOracle`], and the
//! result of every tick is handed back as a [`TickOutcome`] for the ECS systems
//! to apply to the rigid body and forward as feedback messages.

use bevy::prelude::*;

use crate::movement::{
    Facing, GameLayer, GroundedReversal, LocomotionTuning, ProbeRegion, TuningError,
};

/// Time step for a single frame or fixed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub dt: f32,
    /// Monotonic clock in seconds, used for cooldowns and the wall-jump deadline.
    pub now: f32,
}

impl Tick {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastHit {
    pub distance: f32,
    /// Surface normal of the hit collider.
    pub normal: Vec2,
}

/// Physics queries, relative to the character being driven.
pub trait PhysicsOracle {
    fn overlaps(&self, region: &ProbeRegion, layer: GameLayer) -> bool;

    fn cast(
        &self,
        origin: Vec2,
        size: Vec2,
        direction: Dir2,
        distance: f32,
        layer: GameLayer,
    ) -> Option<CastHit>;
}

/// Single-shot timer for the wall-jump window. Starting it again replaces any
/// pending deadline.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WallJumpWindow {
    deadline: Option<f32>,
}

impl WallJumpWindow {
    pub fn start(&mut self, now: f32, duration: f32) {
        self.deadline = Some(now + duration);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_open(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<f32> {
        self.deadline
    }

    /// Closes the window and returns true on the first poll at or after the deadline.
    pub fn poll_expired(&mut self, now: f32) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Wall,
    /// The orb applies its own vertical impulse.
    Orb(Entity),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionEvent {
    Jump(JumpKind),
    Land,
    /// Carries the direction of travel after the reversal.
    WallHit(Facing),
}

/// Velocity overrides; `None` leaves the engine-owned component untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VelocityCommand {
    pub horizontal: Option<f32>,
    pub vertical: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    pub velocity: VelocityCommand,
    pub events: Vec<LocomotionEvent>,
}

impl TickOutcome {
    #[cfg(test)]
    pub fn jump(&self) -> Option<JumpKind> {
        self.events.iter().find_map(|event| match event {
            LocomotionEvent::Jump(kind) => Some(*kind),
            _ => None,
        })
    }

    #[cfg(test)]
    pub fn wall_hits(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, LocomotionEvent::WallHit(_)))
            .count()
    }
}

#[derive(Component, Debug, Clone)]
pub struct LocomotionState {
    facing: Facing,
    move_speed: f32,
    is_grounded: bool,
    was_grounded_last_frame: bool,
    time_since_grounded: f32,
    is_touching_wall: bool,
    wall_jump_window: WallJumpWindow,
    last_wall_hit_time: f32,
    wall_probe: ProbeRegion,
    current_orb: Option<Entity>,
}

impl LocomotionState {
    pub fn new(tuning: &LocomotionTuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            facing: Facing::Right,
            move_speed: tuning.base_move_speed,
            is_grounded: false,
            was_grounded_last_frame: false,
            time_since_grounded: 0.0,
            is_touching_wall: false,
            wall_jump_window: WallJumpWindow::default(),
            last_wall_hit_time: f32::NEG_INFINITY,
            wall_probe: tuning.wall_probe.facing(Facing::Right),
            current_orb: None,
        })
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    pub fn is_grounded(&self) -> bool {
        self.is_grounded
    }

    #[cfg(test)]
    pub fn time_since_grounded(&self) -> f32 {
        self.time_since_grounded
    }

    pub fn is_touching_wall(&self) -> bool {
        self.is_touching_wall
    }

    pub fn can_wall_jump(&self) -> bool {
        self.wall_jump_window.is_open()
    }

    #[cfg(test)]
    pub fn wall_jump_deadline(&self) -> Option<f32> {
        self.wall_jump_window.deadline()
    }

    #[cfg(test)]
    pub fn last_wall_hit_time(&self) -> f32 {
        self.last_wall_hit_time
    }

    /// Wall probe, already mirrored to the side the character is travelling toward.
    pub fn wall_probe(&self) -> &ProbeRegion {
        &self.wall_probe
    }

    #[cfg(test)]
    pub fn current_orb(&self) -> Option<Entity> {
        self.current_orb
    }

    /// Variable-step tick: ground sampling, landing, and jump dispatch.
    pub fn tick_frame(
        &mut self,
        tuning: &LocomotionTuning,
        tick: Tick,
        oracle: &impl PhysicsOracle,
        jump_pressed: bool,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        self.sample_ground(tuning, tick, oracle, &mut outcome);

        if jump_pressed {
            self.dispatch_jump(tuning, tick, &mut outcome);
        }

        outcome
    }

    /// Fixed-step tick: horizontal velocity, boost decay, and the wall-jump window.
    pub fn tick_physics(
        &mut self,
        tuning: &LocomotionTuning,
        tick: Tick,
        oracle: &impl PhysicsOracle,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        outcome.velocity.horizontal = Some(self.facing.sign() * self.move_speed);
        self.decay_speed(tuning, tick.dt);

        self.is_touching_wall = oracle.overlaps(&self.wall_probe, GameLayer::Wall);

        if self.wall_jump_window.is_open() {
            if self.wall_jump_window.poll_expired(tick.now) {
                self.expire_wall_jump_window(tuning, tick, oracle, &mut outcome);
            }
        } else if !self.is_grounded
            && self.is_touching_wall
            && self.cooldown_elapsed(tuning, tick.now)
            && self.moving_into_wall(tuning, oracle)
        {
            self.wall_jump_window.start(tick.now, tuning.wall_jump_window);
            self.last_wall_hit_time = tick.now;
            debug!(
                "Wall-jump window opened: facing={:?}, deadline={:?}",
                self.facing,
                self.wall_jump_window.deadline()
            );
        }

        outcome
    }

    /// Collision-begin against a wall while grounded. `normal` is the wall's
    /// surface normal at the contact.
    pub fn on_wall_contact(
        &mut self,
        tuning: &LocomotionTuning,
        now: f32,
        normal: Vec2,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if !self.is_grounded || normal.x.abs() <= tuning.bump_normal_threshold {
            return outcome;
        }

        let opposes_travel = normal.x * self.facing.sign() < 0.0;
        if tuning.grounded_reversal == GroundedReversal::TowardWall && !opposes_travel {
            return outcome;
        }

        if !self.cooldown_elapsed(tuning, now) {
            return outcome;
        }

        self.wall_jump_window.cancel();
        self.reverse(tuning, now, &mut outcome);
        debug!("Grounded wall bump: now facing {:?}", self.facing);
        outcome
    }

    /// Adds to the current speed; boosts do not stack separately.
    pub fn apply_speed_boost(&mut self, tuning: &LocomotionTuning, amount: f32) {
        self.move_speed = (self.move_speed + amount).clamp(0.0, tuning.max_move_speed);
        debug!("Speed boost {}: move_speed now {}", amount, self.move_speed);
    }

    pub fn enter_orb_zone(&mut self, orb: Entity) {
        self.current_orb = Some(orb);
    }

    /// Ignored unless `orb` is the zone currently stored.
    pub fn exit_orb_zone(&mut self, orb: Entity) {
        if self.current_orb == Some(orb) {
            self.current_orb = None;
        }
    }

    fn sample_ground(
        &mut self,
        tuning: &LocomotionTuning,
        tick: Tick,
        oracle: &impl PhysicsOracle,
        outcome: &mut TickOutcome,
    ) {
        self.is_grounded = oracle.overlaps(&tuning.ground_probe, GameLayer::Ground);

        if self.is_grounded {
            self.time_since_grounded = 0.0;
            if !self.was_grounded_last_frame {
                debug!("Landed: facing={:?}", self.facing);
                outcome.events.push(LocomotionEvent::Land);
            }
        } else {
            self.time_since_grounded += tick.dt;
        }

        self.was_grounded_last_frame = self.is_grounded;
    }

    fn dispatch_jump(&mut self, tuning: &LocomotionTuning, tick: Tick, outcome: &mut TickOutcome) {
        if self.is_grounded || self.time_since_grounded <= tuning.coyote_time {
            outcome.velocity.vertical = Some(tuning.jump_force);
            outcome.events.push(LocomotionEvent::Jump(JumpKind::Ground));
            debug!(
                "Ground jump: grounded={}, time_since_grounded={}",
                self.is_grounded, self.time_since_grounded
            );
        } else if self.wall_jump_window.is_open() {
            self.wall_jump_window.cancel();
            outcome.velocity.horizontal = Some(-tuning.wall_jump_force.x * self.facing.sign());
            outcome.velocity.vertical = Some(tuning.wall_jump_force.y);
            outcome.events.push(LocomotionEvent::Jump(JumpKind::Wall));
            self.reverse(tuning, tick.now, outcome);
            debug!("Wall jump: now facing {:?}", self.facing);
        } else if let Some(orb) = self.current_orb.take() {
            outcome.events.push(LocomotionEvent::Jump(JumpKind::Orb(orb)));
            debug!("Orb jump: orb={:?}", orb);
        }
    }

    fn expire_wall_jump_window(
        &mut self,
        tuning: &LocomotionTuning,
        tick: Tick,
        oracle: &impl PhysicsOracle,
        outcome: &mut TickOutcome,
    ) {
        // Re-check contact: the character may have slid off the wall.
        if self.is_touching_wall && self.moving_into_wall(tuning, oracle) {
            self.reverse(tuning, tick.now, outcome);
            debug!("Wall-jump window expired: now facing {:?}", self.facing);
        } else {
            debug!("Wall-jump window expired without contact");
        }
    }

    /// Flip travel direction, stamp the cooldown, and mirror the wall probe.
    fn reverse(&mut self, tuning: &LocomotionTuning, now: f32, outcome: &mut TickOutcome) {
        self.facing = self.facing.flipped();
        self.last_wall_hit_time = now;
        self.wall_probe = tuning.wall_probe.facing(self.facing);
        outcome.events.push(LocomotionEvent::WallHit(self.facing));
    }

    fn cooldown_elapsed(&self, tuning: &LocomotionTuning, now: f32) -> bool {
        now > self.last_wall_hit_time + tuning.wall_hit_cooldown
    }

    fn moving_into_wall(&self, tuning: &LocomotionTuning, oracle: &impl PhysicsOracle) -> bool {
        oracle
            .cast(
                self.wall_probe.offset,
                self.wall_probe.size(),
                self.facing.as_dir(),
                tuning.wall_cast_distance,
                GameLayer::Wall,
            )
            .is_some()
    }

    fn decay_speed(&mut self, tuning: &LocomotionTuning, dt: f32) {
        let base = tuning.base_move_speed;
        let step = tuning.speed_return_rate * dt;
        if self.move_speed > base {
            self.move_speed = (self.move_speed - step).max(base);
        } else if self.move_speed < base {
            self.move_speed = (self.move_speed + step).min(base);
        }
    }
}
