//! Game state and session phase
//!
//! Everything the per-frame tick mutates lives in [`GameState`]. The level
//! is shared read-only behind an `Arc` for the whole session.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::antagonist::Antagonist;
use super::geometry::Level;
use super::kinematics::Player;
use crate::consts::PLAYER_STARTING_LIVES;
use crate::tuning::Tuning;

/// Coarse session phase; only `Playing` lets the simulation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Game is paused
    Paused,
    /// Run ended
    GameOver,
}

/// Complete simulation state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub tuning: Tuning,
    pub level: Arc<Level>,
    pub player: Player,
    /// Absent in sessions without a barrel thrower
    pub antagonist: Option<Antagonist>,
    pub score: u64,
    pub lives: u8,
    /// Frames simulated while playing
    pub time_ticks: u64,
}

impl GameState {
    /// Stock level with the antagonist in place
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let level = Arc::new(Level::stock(&tuning.world));
        let antagonist = Antagonist::new(&tuning.antagonist, seed);
        Self::with_level(tuning, level, Some(antagonist), seed)
    }

    pub fn with_level(tuning: Tuning, level: Arc<Level>, antagonist: Option<Antagonist>, seed: u64) -> Self {
        log::info!("Game initialized with seed: {}", seed);
        Self {
            seed,
            phase: GamePhase::Playing,
            player: Player::from_tuning(&tuning.player),
            tuning,
            level,
            antagonist,
            score: 0,
            lives: PLAYER_STARTING_LIVES,
            time_ticks: 0,
        }
    }

    /// Overwrite the phase; no transition rules are enforced here
    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
        }
        self.phase = phase;
    }

    /// Send the player back to spawn
    pub fn reset_player(&mut self) {
        self.player.reset(self.tuning.player.spawn);
    }

    /// Restart the session: player, counters and phase. Antagonist timers
    /// keep running on their own schedule.
    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = PLAYER_STARTING_LIVES;
        self.reset_player();
        self.set_phase(GamePhase::Playing);
    }
}
