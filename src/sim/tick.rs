//! Per-frame simulation tick
//!
//! Fixed update order while playing:
//! 1. player kinematics against platforms and ladders
//! 2. world bounds, with an immediate reset if the player fell out
//! 3. antagonist timers, relaying any spawn to the sink

use glam::Vec2;

use super::antagonist::SpawnEvent;
use super::kinematics::{BoundsCheck, clamp_to_world_bounds, step_player};
use super::state::{GamePhase, GameState};

/// Resolved player intent for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Horizontal axis, -1 (left) to 1 (right)
    pub move_x: f32,
    /// Vertical axis, -1 (up) to 1 (down); only used on ladders
    pub move_y: f32,
    /// Climb held
    pub wants_climb: bool,
    /// Jump pressed
    pub jump: bool,
}

/// Receiver for projectile spawns
pub trait SpawnSink {
    fn spawn_projectile(&mut self, at: Vec2);
}

impl SpawnSink for Vec<SpawnEvent> {
    fn spawn_projectile(&mut self, at: Vec2) {
        self.push(SpawnEvent { pos: at });
    }
}

/// Discards spawns
impl SpawnSink for () {
    fn spawn_projectile(&mut self, _at: Vec2) {}
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    pub spawn: Option<SpawnEvent>,
    /// Player fell off the world and was sent back to spawn
    pub player_reset: bool,
}

/// Advance the game state by `dt` seconds
///
/// No-op unless the phase is `Playing`. `dt` must already be capped and
/// non-negative (see [`crate::Tuning::clamp_dt`]).
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, sink: &mut impl SpawnSink) -> FrameReport {
    let mut report = FrameReport::default();
    if state.phase != GamePhase::Playing {
        return report;
    }
    state.time_ticks += 1;

    step_player(&mut state.player, input, &state.level, &state.tuning.player, dt);

    let (width, height) = (state.level.width(), state.level.height());
    if clamp_to_world_bounds(&mut state.player, width, height) == BoundsCheck::FellOffWorld {
        log::info!("Player fell off the world at {:?}, resetting", state.player.pos);
        state.reset_player();
        report.player_reset = true;
    }

    if let Some(kong) = state.antagonist.as_mut()
        && let Some(spawn) = kong.advance(dt)
    {
        sink.spawn_projectile(spawn.pos);
        report.spawn = Some(spawn);
    }

    report
}
