//! Ladder Kong - a platformer simulation core
//!
//! Core modules:
//! - `sim`: Per-frame simulation (geometry, antagonist timing, player kinematics)
//! - `render`: Draw surface abstraction and the render pass
//! - `tuning`: Data-driven game balance

pub mod render;
pub mod sim;
pub mod tuning;

pub use render::{DrawSurface, render};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the native runner
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Largest frame time handed to the sim (avoids huge jumps after a stall)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 1280.0;
    pub const WORLD_HEIGHT: f32 = 720.0;

    /// Floor heights (y of each platform's top edge), bottom to top
    pub const PLATFORM_GROUND: f32 = 680.0;
    pub const PLATFORM_1: f32 = 540.0;
    pub const PLATFORM_2: f32 = 400.0;
    pub const PLATFORM_3: f32 = 260.0;
    pub const PLATFORM_4: f32 = 120.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    pub const LADDER_WIDTH: f32 = 40.0;
    /// Smallest world the stock layout fits in (rightmost ladder, ground floor)
    pub const STOCK_MIN_WORLD_WIDTH: f32 = 1000.0 + LADDER_WIDTH;
    pub const STOCK_MIN_WORLD_HEIGHT: f32 = PLATFORM_GROUND + PLATFORM_HEIGHT;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = PLATFORM_GROUND - PLAYER_HEIGHT;
    pub const PLAYER_MOVE_SPEED: f32 = 200.0;
    pub const PLAYER_CLIMB_SPEED: f32 = 150.0;
    pub const PLAYER_JUMP_SPEED: f32 = 400.0;
    pub const PLAYER_STARTING_LIVES: u8 = 3;
    /// Downward acceleration (px/s²)
    pub const GRAVITY: f32 = 1200.0;
    pub const MAX_FALL_SPEED: f32 = 900.0;
    /// Feet-to-platform distance still counted as standing
    pub const SUPPORT_TOLERANCE: f32 = 5.0;

    /// Antagonist defaults - sits on the top floor, left side
    pub const KONG_SIZE: f32 = 60.0;
    pub const KONG_X: f32 = 50.0;
    pub const KONG_Y: f32 = PLATFORM_4 - KONG_SIZE;
    pub const KONG_ANIMATION_FPS: f32 = 4.0;
    /// Barrel throw timing (seconds)
    pub const ATTACK_MIN_DELAY: f32 = 2.0;
    pub const ATTACK_MAX_DELAY: f32 = 4.0;
    pub const ATTACK_DURATION: f32 = 0.5;
}
