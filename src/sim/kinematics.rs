//! Player kinematics against level geometry
//!
//! Support (standing on a platform), climb eligibility (overlapping a
//! ladder) and world-bound containment. The resolver only detects falling
//! off the world; recovering from it is the caller's job.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Level, Rect};
use super::tick::TickInput;
use crate::tuning::PlayerTuning;

/// The player character. Position is the top-left corner and is the only
/// place position is stored; [`Player::rect`] is a read-only view of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Mounted on a ladder this frame
    pub climbing: bool,
    /// Standing on a platform after this frame's resolution
    pub grounded: bool,
}

impl Player {
    pub fn new(spawn: Vec2, size: Vec2) -> Self {
        Self {
            pos: spawn,
            vel: Vec2::ZERO,
            size,
            climbing: false,
            grounded: false,
        }
    }

    pub fn from_tuning(tuning: &PlayerTuning) -> Self {
        Self::new(tuning.spawn, Vec2::new(tuning.width, tuning.height))
    }

    /// Back to spawn: zero velocity, off any ladder
    pub fn reset(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
        self.climbing = false;
        self.grounded = false;
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// Result of the world-bounds check
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundsCheck {
    Contained,
    /// Top edge went below the world; the attempt is over
    FellOffWorld,
}

/// Platform the player is standing on, if any
///
/// The player's feet must be within `tolerance` of the platform top and the
/// horizontal extents must overlap. When several platforms qualify the one
/// whose top is nearest the feet wins; equal distances go to the higher
/// platform (smaller `y`), so seams between stacked platforms never let the
/// player drop through.
pub fn resolve_support<'a>(player: &Rect, platforms: &'a [Rect], tolerance: f32) -> Option<&'a Rect> {
    let feet = player.bottom();
    platforms
        .iter()
        .filter(|p| (feet - p.top()).abs() <= tolerance && player.overlaps_x(p))
        .min_by(|a, b| {
            (feet - a.top())
                .abs()
                .total_cmp(&(feet - b.top()).abs())
                .then(a.top().total_cmp(&b.top()))
        })
}

/// Ladder the player could climb, if any
///
/// Eligible when the player's horizontal centre lies within the ladder's
/// horizontal extent and the vertical extents overlap (touching counts, so a
/// player standing at the top of a ladder can climb down it).
pub fn resolve_climb<'a>(player: &Rect, ladders: &'a [Rect]) -> Option<&'a Rect> {
    let cx = player.center_x();
    ladders
        .iter()
        .find(|l| cx >= l.left() && cx <= l.right() && player.touches_y(l))
}

/// Platform a falling player lands on between `prev` and `next`
///
/// Static support first, then a sweep for feet that crossed a platform top
/// during the frame.
fn resolve_landing<'a>(prev: &Rect, next: &Rect, platforms: &'a [Rect], tolerance: f32) -> Option<&'a Rect> {
    resolve_support(next, platforms, tolerance).or_else(|| {
        platforms
            .iter()
            .filter(|p| {
                next.overlaps_x(p) && prev.bottom() <= p.top() + tolerance && next.bottom() >= p.top()
            })
            .min_by(|a, b| a.top().total_cmp(&b.top()))
    })
}

/// Keep the player inside the world horizontally and report falling out
///
/// The left edge is checked first and wins if both sides are violated. There
/// is no top clamp. Falling off is `y > height` exactly: resting at
/// `y == height` is still in the world.
pub fn clamp_to_world_bounds(player: &mut Player, world_width: f32, world_height: f32) -> BoundsCheck {
    if player.pos.x < 0.0 {
        player.pos.x = 0.0;
        player.vel.x = 0.0;
    } else if player.pos.x + player.size.x > world_width {
        player.pos.x = world_width - player.size.x;
        player.vel.x = 0.0;
    }

    if player.pos.y > world_height {
        BoundsCheck::FellOffWorld
    } else {
        BoundsCheck::Contained
    }
}

/// Integrate one frame of player movement against the level
///
/// `move_x`/`move_y` are clamped to `[-1, 1]` and scaled by the tuning
/// speeds. Climb intent on an eligible ladder overrides gravity and support
/// for the frame.
pub fn step_player(player: &mut Player, input: &TickInput, level: &Level, tuning: &PlayerTuning, dt: f32) {
    let move_x = input.move_x.clamp(-1.0, 1.0);
    let move_y = input.move_y.clamp(-1.0, 1.0);

    let ladder = if input.wants_climb {
        resolve_climb(&player.rect(), level.ladders()).copied()
    } else {
        None
    };

    if let Some(ladder) = ladder {
        player.climbing = true;
        player.grounded = false;
        // No sideways drift while mounted
        player.vel = Vec2::new(0.0, move_y * tuning.climb_speed);
        player.pos.y += player.vel.y * dt;
        // Feet stay within the ladder's span
        let top = ladder.top() - player.size.y;
        let bottom = ladder.bottom() - player.size.y;
        player.pos.y = player.pos.y.clamp(top, bottom);
        return;
    }
    if player.climbing {
        // Dismount: climb speed is not momentum
        player.vel.y = 0.0;
        player.climbing = false;
    }

    let prev = player.rect();
    let supported = resolve_support(&prev, level.platforms(), tuning.support_tolerance).is_some();

    player.vel.x = move_x * tuning.move_speed;
    if input.jump && supported && player.vel.y >= 0.0 {
        player.vel.y = -tuning.jump_speed;
    }
    player.vel.y = (player.vel.y + tuning.gravity * dt).min(tuning.max_fall_speed);
    player.pos += player.vel * dt;

    player.grounded = false;
    if player.vel.y >= 0.0 {
        let next = player.rect();
        if let Some(platform) = resolve_landing(&prev, &next, level.platforms(), tuning.support_tolerance) {
            player.pos.y = platform.top() - player.size.y;
            player.vel.y = 0.0;
            player.grounded = true;
        }
    }
    log::trace!("player pos={:?} vel={:?} grounded={}", player.pos, player.vel, player.grounded);
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y), Vec2::new(40.0, 50.0))
    }

    fn flat_level() -> Level {
        Level::new(
            800.0,
            600.0,
            vec![Rect::new(0.0, 500.0, 800.0, 20.0), Rect::new(0.0, 300.0, 800.0, 20.0)],
            vec![Rect::new(200.0, 300.0, 40.0, 200.0)],
        )
    }

    #[test]
    fn test_support_within_tolerance() {
        let platforms = [Rect::new(0.0, 100.0, 200.0, 20.0)];
        let p = Rect::new(10.0, 53.0, 40.0, 50.0); // feet at 103
        assert_eq!(resolve_support(&p, &platforms, 5.0), Some(&platforms[0]));
        let p = Rect::new(10.0, 40.0, 40.0, 50.0); // feet at 90
        assert_eq!(resolve_support(&p, &platforms, 5.0), None);
    }

    #[test]
    fn test_support_needs_horizontal_overlap() {
        let platforms = [Rect::new(0.0, 100.0, 200.0, 20.0)];
        let p = Rect::new(200.0, 50.0, 40.0, 50.0);
        assert_eq!(resolve_support(&p, &platforms, 5.0), None);
    }

    #[test]
    fn test_support_tie_goes_to_higher_platform() {
        // Seam: 99 and 101 are both 1px from the feet
        let platforms = [
            Rect::new(0.0, 103.0, 200.0, 20.0),
            Rect::new(0.0, 99.0, 200.0, 20.0),
            Rect::new(0.0, 101.0, 200.0, 20.0),
        ];
        let p = Rect::new(10.0, 50.0, 40.0, 50.0);
        assert_eq!(resolve_support(&p, &platforms, 5.0), Some(&platforms[1]));
    }

    #[test]
    fn test_support_prefers_nearest_over_highest() {
        // Feet at 100: the platform at 96 is higher, the one at 99.5 nearer
        let platforms = [Rect::new(0.0, 96.0, 200.0, 20.0), Rect::new(0.0, 99.5, 200.0, 20.0)];
        let p = Rect::new(10.0, 50.0, 40.0, 50.0);
        assert_eq!(resolve_support(&p, &platforms, 5.0), Some(&platforms[1]));
    }

    #[test]
    fn test_climb_uses_horizontal_centre() {
        let ladders = [Rect::new(100.0, 0.0, 40.0, 200.0)];
        // Centre at 95: overlapping the ladder but not centred on it
        assert_eq!(resolve_climb(&Rect::new(75.0, 50.0, 40.0, 50.0), &ladders), None);
        // Centre at 120
        assert_eq!(resolve_climb(&Rect::new(100.0, 50.0, 40.0, 50.0), &ladders), Some(&ladders[0]));
        // Standing on top of the ladder still counts
        assert_eq!(resolve_climb(&Rect::new(100.0, -50.0, 40.0, 50.0), &ladders), Some(&ladders[0]));
        // Above it does not
        assert_eq!(resolve_climb(&Rect::new(100.0, -60.0, 40.0, 50.0), &ladders), None);
    }

    #[test]
    fn test_clamp_left_edge() {
        let mut p = player_at(-5.0, 100.0);
        p.vel.x = -200.0;
        assert_eq!(clamp_to_world_bounds(&mut p, 800.0, 600.0), BoundsCheck::Contained);
        assert_eq!(p.x(), 0.0);
        assert_eq!(p.vel.x, 0.0);
    }

    #[test]
    fn test_clamp_right_edge() {
        let mut p = player_at(790.0, 100.0);
        p.vel.x = 200.0;
        assert_eq!(clamp_to_world_bounds(&mut p, 800.0, 600.0), BoundsCheck::Contained);
        assert_eq!(p.x(), 760.0);
        assert_eq!(p.vel.x, 0.0);
    }

    #[test]
    fn test_left_wins_when_both_violated() {
        let mut p = player_at(-1.0, 0.0);
        p.size.x = 100.0;
        let _ = clamp_to_world_bounds(&mut p, 50.0, 600.0);
        assert_eq!(p.x(), 0.0);
    }

    #[test]
    fn test_fall_off_is_strictly_below() {
        let mut p = player_at(100.0, 600.0);
        assert_eq!(clamp_to_world_bounds(&mut p, 800.0, 600.0), BoundsCheck::Contained);
        p.pos.y = 600.5;
        assert_eq!(clamp_to_world_bounds(&mut p, 800.0, 600.0), BoundsCheck::FellOffWorld);
        // No top clamp
        p.pos.y = -500.0;
        assert_eq!(clamp_to_world_bounds(&mut p, 800.0, 600.0), BoundsCheck::Contained);
        assert_eq!(p.y(), -500.0);
    }

    #[test]
    fn test_standing_player_stays_put() {
        let level = flat_level();
        let tuning = PlayerTuning::default();
        let mut p = player_at(400.0, 450.0);
        for _ in 0..120 {
            step_player(&mut p, &TickInput::default(), &level, &tuning, DT);
        }
        assert_eq!(p.y(), 450.0);
        assert_eq!(p.vel, Vec2::ZERO);
        assert!(p.grounded);
    }

    #[test]
    fn test_fast_fall_lands_instead_of_tunnelling() {
        let level = flat_level();
        let tuning = PlayerTuning::default();
        let mut p = player_at(400.0, 200.0);
        p.vel.y = tuning.max_fall_speed;
        // One 0.1s step moves 90px, far past the tolerance band
        step_player(&mut p, &TickInput::default(), &level, &tuning, 0.1);
        assert_eq!(p.y(), 250.0);
        assert!(p.grounded);
    }

    #[test]
    fn test_climbing_zeroes_horizontal_velocity() {
        let level = flat_level();
        let tuning = PlayerTuning::default();
        let mut p = player_at(200.0, 450.0);
        p.vel.x = 5000.0;
        let input = TickInput {
            move_x: 1.0,
            move_y: -1.0,
            wants_climb: true,
            ..Default::default()
        };
        step_player(&mut p, &input, &level, &tuning, DT);
        assert!(p.climbing);
        assert_eq!(p.vel.x, 0.0);
        assert_eq!(p.x(), 200.0);
        assert!(p.y() < 450.0);
    }

    #[test]
    fn test_climb_up_ends_on_upper_floor() {
        let level = flat_level();
        let tuning = PlayerTuning::default();
        let mut p = player_at(200.0, 450.0);
        let up = TickInput {
            move_y: -1.0,
            wants_climb: true,
            ..Default::default()
        };
        for _ in 0..240 {
            step_player(&mut p, &up, &level, &tuning, DT);
        }
        // Feet clamp to the ladder top, which is the upper floor
        assert_eq!(p.y(), 250.0);

        step_player(&mut p, &TickInput::default(), &level, &tuning, DT);
        assert!(!p.climbing);
        assert!(p.grounded);
        assert_eq!(p.y(), 250.0);
    }

    #[test]
    fn test_climb_without_ladder_is_ignored() {
        let level = flat_level();
        let tuning = PlayerTuning::default();
        let mut p = player_at(600.0, 450.0);
        let input = TickInput {
            move_x: 1.0,
            wants_climb: true,
            ..Default::default()
        };
        step_player(&mut p, &input, &level, &tuning, DT);
        assert!(!p.climbing);
        assert_eq!(p.vel.x, tuning.move_speed);
    }

    #[test]
    fn test_jump_only_when_supported() {
        let level = flat_level();
        let tuning = PlayerTuning::default();
        let jump = TickInput {
            jump: true,
            ..Default::default()
        };

        let mut p = player_at(400.0, 450.0);
        step_player(&mut p, &jump, &level, &tuning, DT);
        assert!(p.vel.y < 0.0);
        assert!(!p.grounded);

        let mut airborne = player_at(400.0, 100.0);
        step_player(&mut airborne, &jump, &level, &tuning, DT);
        assert!(airborne.vel.y > 0.0);
    }

    #[test]
    fn test_reset_restores_spawn() {
        let mut p = player_at(10.0, 10.0);
        p.vel = Vec2::new(3.0, 4.0);
        p.climbing = true;
        p.reset(Vec2::new(100.0, 200.0));
        assert_eq!(p.pos, Vec2::new(100.0, 200.0));
        assert_eq!(p.vel, Vec2::ZERO);
        assert!(!p.climbing);
    }
}
