//! Axis-aligned level geometry
//!
//! Platforms and ladders are plain rectangles in world pixels with `y`
//! growing downward. A [`Level`] is built once and then only read.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::WorldTuning;

/// Axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle with its top-left corner at `pos`
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Horizontal extents overlap (touching edges do not count)
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// Vertical extents overlap, touching edges included
    #[inline]
    pub fn touches_y(&self, other: &Rect) -> bool {
        self.top() <= other.bottom() && self.bottom() >= other.top()
    }
}

/// Immutable level layout: platforms, ladders and world bounds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    width: f32,
    height: f32,
    platforms: Vec<Rect>,
    ladders: Vec<Rect>,
}

impl Level {
    pub fn new(width: f32, height: f32, platforms: Vec<Rect>, ladders: Vec<Rect>) -> Self {
        log::info!(
            "Level {}x{}: {} platforms, {} ladders",
            width,
            height,
            platforms.len(),
            ladders.len()
        );
        Self {
            width,
            height,
            platforms,
            ladders,
        }
    }

    /// The stock level: five floors, the middle-upper ones split by a gap,
    /// one ladder between each pair of neighbouring floors
    ///
    /// Floors sit at fixed heights; `world` must be at least
    /// `STOCK_MIN_WORLD_WIDTH` x `STOCK_MIN_WORLD_HEIGHT` (checked by
    /// [`crate::Tuning::validate`]).
    pub fn stock(world: &WorldTuning) -> Self {
        let w = world.width;
        let platforms = vec![
            Rect::new(0.0, PLATFORM_GROUND, w, PLATFORM_HEIGHT),
            Rect::new(0.0, PLATFORM_1, 600.0, PLATFORM_HEIGHT),
            Rect::new(680.0, PLATFORM_1, w - 680.0, PLATFORM_HEIGHT),
            Rect::new(0.0, PLATFORM_2, w, PLATFORM_HEIGHT),
            Rect::new(0.0, PLATFORM_3, 600.0, PLATFORM_HEIGHT),
            Rect::new(680.0, PLATFORM_3, w - 680.0, PLATFORM_HEIGHT),
            Rect::new(0.0, PLATFORM_4, w, PLATFORM_HEIGHT),
        ];
        let ladders = vec![
            Rect::new(300.0, PLATFORM_1, LADDER_WIDTH, PLATFORM_GROUND - PLATFORM_1),
            Rect::new(900.0, PLATFORM_2, LADDER_WIDTH, PLATFORM_1 - PLATFORM_2),
            Rect::new(450.0, PLATFORM_3, LADDER_WIDTH, PLATFORM_2 - PLATFORM_3),
            Rect::new(
                STOCK_MIN_WORLD_WIDTH - LADDER_WIDTH,
                PLATFORM_4,
                LADDER_WIDTH,
                PLATFORM_3 - PLATFORM_4,
            ),
        ];
        Self::new(world.width, world.height, platforms, ladders)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn ladders(&self) -> &[Rect] {
        &self.ladders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center_x(), 25.0);
    }

    #[test]
    fn test_overlap_excludes_touching_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps_x(&b));
        // Stacked rectangles touch vertically
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(a.touches_y(&c));
        assert!(!c.touches_y(&Rect::new(0.0, 25.0, 10.0, 10.0)));
    }

    #[test]
    fn test_stock_level_ladders_span_floors() {
        let level = Level::stock(&WorldTuning::default());
        assert_eq!(level.platforms().len(), 7);
        assert_eq!(level.ladders().len(), 4);
        // Every ladder's top and bottom sit on a platform top
        for ladder in level.ladders() {
            for edge in [ladder.top(), ladder.bottom()] {
                assert!(
                    level
                        .platforms()
                        .iter()
                        .any(|p| p.top() == edge && p.left() <= ladder.left() && p.right() >= ladder.right()),
                    "ladder {:?} edge {} not on a floor",
                    ladder,
                    edge
                );
            }
        }
    }
}
