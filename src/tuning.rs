//! Data-driven game balance
//!
//! Every number the simulation reads lives here. A tuning document is plain
//! JSON; any section or field it leaves out falls back to the defaults in
//! [`crate::consts`]. Validation runs once, when the document is loaded.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected tuning document
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{name}: min {min} is greater than max {max}")]
    InvalidRange { name: &'static str, min: f32, max: f32 },
    #[error("{name} must be positive (got {value})")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: f32 },
    #[error("player width {player} does not fit in world width {world}")]
    PlayerTooWide { player: f32, world: f32 },
    #[error("player spawn ({x}, {y}) puts the player outside the {width}x{height} world")]
    SpawnOutsideWorld { x: f32, y: f32, width: f32, height: f32 },
    #[error("world {width}x{height} is smaller than the stock level ({min_width}x{min_height})")]
    WorldTooSmall { width: f32, height: f32, min_width: f32, min_height: f32 },
}

/// World bounds (the visible canvas)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for WorldTuning {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
        }
    }
}

/// Player body and movement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub width: f32,
    pub height: f32,
    /// Top-left corner the player (re)spawns at
    pub spawn: Vec2,
    /// Horizontal speed at full stick deflection (px/s)
    pub move_speed: f32,
    /// Vertical speed while mounted on a ladder (px/s)
    pub climb_speed: f32,
    /// Downward acceleration (px/s²)
    pub gravity: f32,
    /// Initial upward speed of a jump (px/s)
    pub jump_speed: f32,
    /// Terminal fall speed (px/s)
    pub max_fall_speed: f32,
    /// How far the feet may be from a platform top and still stand on it
    pub support_tolerance: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            spawn: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            move_speed: PLAYER_MOVE_SPEED,
            climb_speed: PLAYER_CLIMB_SPEED,
            gravity: GRAVITY,
            jump_speed: PLAYER_JUMP_SPEED,
            max_fall_speed: MAX_FALL_SPEED,
            support_tolerance: SUPPORT_TOLERANCE,
        }
    }
}

/// Antagonist placement and attack timing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AntagonistTuning {
    /// Top-left corner (fixed once placed)
    pub position: Vec2,
    pub size: Vec2,
    /// Shortest idle time before an attack (seconds)
    pub min_attack_delay: f32,
    /// Longest idle time before an attack (seconds)
    pub max_attack_delay: f32,
    /// How long the attack pose is held (seconds)
    pub attack_duration: f32,
    /// Sprite frame cadence; display only, never drives behavior
    pub animation_fps: f32,
}

impl Default for AntagonistTuning {
    fn default() -> Self {
        Self {
            position: Vec2::new(KONG_X, KONG_Y),
            size: Vec2::splat(KONG_SIZE),
            min_attack_delay: ATTACK_MIN_DELAY,
            max_attack_delay: ATTACK_MAX_DELAY,
            attack_duration: ATTACK_DURATION,
            animation_fps: KONG_ANIMATION_FPS,
        }
    }
}

/// Complete tuning set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub world: WorldTuning,
    pub player: PlayerTuning,
    pub antagonist: AntagonistTuning,
    /// Upper bound applied to raw frame time before it reaches the sim
    pub max_frame_dt: f32,
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject configurations the simulation cannot run with
    ///
    /// Tuning documents drive the stock level, so the world must also be big
    /// enough to hold it and the spawn must put the player inside the world.
    pub fn validate(&self) -> Result<(), TuningError> {
        positive("world.width", self.world.width)?;
        positive("world.height", self.world.height)?;
        positive("player.width", self.player.width)?;
        positive("player.height", self.player.height)?;
        positive("player.support_tolerance", self.player.support_tolerance)?;
        positive("max_frame_dt", self.max_frame_dt)?;
        if self.player.width >= self.world.width {
            return Err(TuningError::PlayerTooWide {
                player: self.player.width,
                world: self.world.width,
            });
        }

        let a = &self.antagonist;
        non_negative("antagonist.min_attack_delay", a.min_attack_delay)?;
        non_negative("antagonist.attack_duration", a.attack_duration)?;
        positive("antagonist.animation_fps", a.animation_fps)?;
        if a.min_attack_delay > a.max_attack_delay {
            return Err(TuningError::InvalidRange {
                name: "antagonist.attack_delay",
                min: a.min_attack_delay,
                max: a.max_attack_delay,
            });
        }

        let (world, player) = (&self.world, &self.player);
        if player.spawn.x < 0.0
            || player.spawn.x + player.width > world.width
            || player.spawn.y + player.height > world.height
        {
            return Err(TuningError::SpawnOutsideWorld {
                x: player.spawn.x,
                y: player.spawn.y,
                width: world.width,
                height: world.height,
            });
        }
        if world.width < STOCK_MIN_WORLD_WIDTH || world.height < STOCK_MIN_WORLD_HEIGHT {
            return Err(TuningError::WorldTooSmall {
                width: world.width,
                height: world.height,
                min_width: STOCK_MIN_WORLD_WIDTH,
                min_height: STOCK_MIN_WORLD_HEIGHT,
            });
        }
        Ok(())
    }

    /// Cap raw frame time to `[0, max_frame_dt]`
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        if dt.is_nan() {
            return 0.0;
        }
        dt.clamp(0.0, self.max_frame_dt)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world: WorldTuning::default(),
            player: PlayerTuning::default(),
            antagonist: AntagonistTuning::default(),
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), TuningError> {
    // `!(x > 0)` also rejects NaN
    if !(value > 0.0) {
        return Err(TuningError::NonPositive { name, value });
    }
    Ok(())
}

fn non_negative(name: &'static str, value: f32) -> Result<(), TuningError> {
    if !(value >= 0.0) {
        return Err(TuningError::Negative { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "antagonist": { "min_attack_delay": 2.0, "max_attack_delay": 2.0 } }"#;
        let tuning = Tuning::from_json(json).unwrap();
        assert_eq!(tuning.antagonist.min_attack_delay, 2.0);
        assert_eq!(tuning.antagonist.max_attack_delay, 2.0);
        assert_eq!(tuning.antagonist.attack_duration, ATTACK_DURATION);
        assert_eq!(tuning.world, WorldTuning::default());
        assert_eq!(tuning.max_frame_dt, MAX_FRAME_DT);
    }

    #[test]
    fn test_inverted_delay_range_rejected() {
        let json = r#"{ "antagonist": { "min_attack_delay": 4.0, "max_attack_delay": 1.0 } }"#;
        let err = Tuning::from_json(json).unwrap_err();
        assert!(matches!(err, TuningError::InvalidRange { .. }));
    }

    #[test]
    fn test_player_wider_than_world_rejected() {
        let mut tuning = Tuning::default();
        tuning.world.width = 30.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::PlayerTooWide { .. })
        ));
    }

    #[test]
    fn test_spawn_below_short_world_rejected() {
        // Default spawn has the player's feet at y=680
        let err = Tuning::from_json(r#"{ "world": { "height": 600 } }"#).unwrap_err();
        assert!(matches!(err, TuningError::SpawnOutsideWorld { .. }));
    }

    #[test]
    fn test_spawn_past_right_edge_rejected() {
        let mut tuning = Tuning::default();
        tuning.player.spawn.x = tuning.world.width - 10.0;
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::SpawnOutsideWorld { .. })
        ));
    }

    #[test]
    fn test_world_smaller_than_stock_level_rejected() {
        // Spawn still fits, but the ground floor (y=680..700) does not
        let err = Tuning::from_json(r#"{ "world": { "height": 690 } }"#).unwrap_err();
        assert!(matches!(err, TuningError::WorldTooSmall { .. }));

        let err = Tuning::from_json(r#"{ "world": { "width": 1000 } }"#).unwrap_err();
        assert!(matches!(err, TuningError::WorldTooSmall { .. }));
    }

    #[test]
    fn test_zero_fps_rejected() {
        let mut tuning = Tuning::default();
        tuning.antagonist.animation_fps = 0.0;
        assert!(matches!(tuning.validate(), Err(TuningError::NonPositive { .. })));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(TuningError::Parse(_))));
    }

    #[test]
    fn test_clamp_dt() {
        let tuning = Tuning::default();
        assert_eq!(tuning.clamp_dt(-1.0), 0.0);
        assert_eq!(tuning.clamp_dt(f32::NAN), 0.0);
        assert_eq!(tuning.clamp_dt(10.0), MAX_FRAME_DT);
        assert_eq!(tuning.clamp_dt(0.01), 0.01);
    }
}
