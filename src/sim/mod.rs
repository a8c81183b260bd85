//! Per-frame simulation module
//!
//! All gameplay logic lives here. It must stay deterministic:
//! - Seeded RNG only
//! - Geometry is read-only once the level is built
//! - No rendering or platform dependencies

pub mod antagonist;
pub mod geometry;
pub mod kinematics;
pub mod state;
pub mod tick;

pub use antagonist::{AnimationClock, AnimationState, Antagonist, SpawnEvent, Transition, next_transition};
pub use geometry::{Level, Rect};
pub use kinematics::{BoundsCheck, Player, clamp_to_world_bounds, resolve_climb, resolve_support, step_player};
pub use state::{GamePhase, GameState};
pub use tick::{FrameReport, SpawnSink, TickInput, tick};
