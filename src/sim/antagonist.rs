//! Antagonist behavior: a timed Idle/Attacking state machine
//!
//! Two independent clocks run here:
//! - the behavior clock, which decides when to attack and for how long
//! - the animation clock, which only cycles sprite frames at a fixed cadence
//!
//! Each [`Antagonist::advance`] performs at most one behavior transition,
//! and the Idle → Attacking edge is the only place a spawn is emitted.

use glam::Vec2;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::tuning::AntagonistTuning;

/// Sprite frames per animation state
pub const FRAMES_PER_STATE: u32 = 2;

/// Behavior state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationState {
    #[default]
    Idle,
    Attacking,
}

/// Outcome of the transition function for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    /// Idle → Attacking: emit a spawn
    BeginAttack,
    /// Attacking → Idle: re-roll the attack interval
    EndAttack,
}

/// Total transition function over (state, clock)
pub fn next_transition(
    state: AnimationState,
    clock: f32,
    attack_interval: f32,
    attack_duration: f32,
) -> Transition {
    match state {
        AnimationState::Idle if clock >= attack_interval => Transition::BeginAttack,
        AnimationState::Attacking if clock >= attack_duration => Transition::EndAttack,
        _ => Transition::Stay,
    }
}

/// One-shot request to create a projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnEvent {
    pub pos: Vec2,
}

/// Fixed-cadence sprite frame counter
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnimationClock {
    pub timer: f32,
    pub frame: u32,
}

impl AnimationClock {
    /// Advance by `dt`, stepping at most one frame per call
    ///
    /// Time beyond the stepped frame is dropped, so the timer always stays
    /// below `frame_duration` and `advance(0.0)` never steps.
    pub fn advance(&mut self, dt: f32, frame_duration: f32) {
        self.timer += dt;
        if self.timer >= frame_duration {
            self.frame = self.frame.wrapping_add(1);
            self.timer %= frame_duration;
        }
    }

    pub fn restart(&mut self) {
        self.frame = 0;
    }
}

/// The barrel-throwing antagonist
#[derive(Debug, Clone)]
pub struct Antagonist<R = Pcg32> {
    pos: Vec2,
    size: Vec2,
    state: AnimationState,
    /// Seconds spent in the current behavior state
    state_clock: f32,
    /// Idle time before the next attack; re-rolled only on entering Idle
    attack_interval: f32,
    min_attack_delay: f32,
    max_attack_delay: f32,
    attack_duration: f32,
    frame_duration: f32,
    animation: AnimationClock,
    rng: R,
}

impl Antagonist<Pcg32> {
    /// Create an antagonist with a seeded PCG source
    pub fn new(tuning: &AntagonistTuning, seed: u64) -> Self {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<R: RngCore> Antagonist<R> {
    /// Create an antagonist drawing attack intervals from `rng`
    pub fn with_rng(tuning: &AntagonistTuning, rng: R) -> Self {
        let mut kong = Self {
            pos: tuning.position,
            size: tuning.size,
            state: AnimationState::Idle,
            state_clock: 0.0,
            attack_interval: 0.0,
            min_attack_delay: tuning.min_attack_delay,
            max_attack_delay: tuning.max_attack_delay,
            attack_duration: tuning.attack_duration,
            frame_duration: 1.0 / tuning.animation_fps,
            animation: AnimationClock::default(),
            rng,
        };
        kong.attack_interval = kong.roll_attack_interval();
        kong
    }

    /// Advance both clocks by `dt` seconds (`dt >= 0`)
    ///
    /// Returns the spawn event on the call that enters `Attacking`,
    /// `None` on every other call.
    pub fn advance(&mut self, dt: f32) -> Option<SpawnEvent> {
        self.animation.advance(dt, self.frame_duration);
        self.state_clock += dt;

        match next_transition(
            self.state,
            self.state_clock,
            self.attack_interval,
            self.attack_duration,
        ) {
            Transition::Stay => None,
            Transition::BeginAttack => {
                self.enter(AnimationState::Attacking);
                let spawn = SpawnEvent {
                    pos: self.spawn_position(),
                };
                log::debug!("Antagonist attacks, spawn at {:?}", spawn.pos);
                Some(spawn)
            }
            Transition::EndAttack => {
                self.enter(AnimationState::Idle);
                self.attack_interval = self.roll_attack_interval();
                log::debug!("Antagonist idle, next attack in {:.2}s", self.attack_interval);
                None
            }
        }
    }

    fn enter(&mut self, state: AnimationState) {
        self.state = state;
        self.state_clock = 0.0;
        self.animation.restart();
    }

    /// Uniform sample from the closed delay range
    fn roll_attack_interval(&mut self) -> f32 {
        if self.min_attack_delay >= self.max_attack_delay {
            return self.min_attack_delay;
        }
        self.rng
            .random_range(self.min_attack_delay..=self.max_attack_delay)
    }

    /// Where a thrown projectile appears: bottom-centre of the body
    pub fn spawn_position(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y + self.size.y)
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn state_clock(&self) -> f32 {
        self.state_clock
    }

    pub fn attack_interval(&self) -> f32 {
        self.attack_interval
    }

    pub fn animation(&self) -> AnimationClock {
        self.animation
    }

    /// Sprite index within the current state's frames
    pub fn sprite_frame(&self) -> u32 {
        self.animation.frame % FRAMES_PER_STATE
    }
}
