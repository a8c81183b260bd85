//! Render pass over an abstract draw surface
//!
//! The simulation never draws. A frontend implements [`DrawSurface`] and
//! calls [`render`] between ticks; it reads the state and nothing else.

use glam::Vec2;

use crate::sim::{AnimationState, Antagonist, GameState, Player, Rect};

/// Linear RGBA
pub type Color = [f32; 4];

pub const COLOR_BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
pub const COLOR_PLATFORM: Color = [0.8, 0.2, 0.3, 1.0];
pub const COLOR_LADDER: Color = [0.2, 0.8, 0.9, 1.0];
pub const COLOR_PLAYER: Color = [0.9, 0.2, 0.2, 1.0];
pub const COLOR_KONG: Color = [0.55, 0.27, 0.07, 1.0];
pub const COLOR_KONG_HEAD: Color = [0.63, 0.32, 0.18, 1.0];
pub const COLOR_EYES: Color = [1.0, 1.0, 1.0, 1.0];
pub const COLOR_TEXT: Color = [1.0, 1.0, 1.0, 1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// Sprite sheets a frontend may provide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteSheet {
    Player,
    Kong,
}

/// Kong sprite cells (column, row) per state
const KONG_IDLE_CELLS: [(u32, u32); 2] = [(0, 0), (1, 0)];
const KONG_THROW_CELLS: [(u32, u32); 2] = [(2, 0), (3, 0)];

/// Drawing backend
pub trait DrawSurface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Color, align: TextAlign);
    /// Blit sheet cell `(column, row)` into `dst`
    fn draw_sprite(&mut self, sheet: SpriteSheet, cell: (u32, u32), dst: Rect);
    /// Whether `sheet` is loaded; unloaded sheets get fallback shapes
    fn sprite_ready(&self, _sheet: SpriteSheet) -> bool {
        false
    }
}

/// Draw one frame: background, level, actors, HUD
pub fn render(state: &GameState, surface: &mut impl DrawSurface) {
    surface.clear(COLOR_BACKGROUND);

    for platform in state.level.platforms() {
        surface.fill_rect(*platform, COLOR_PLATFORM);
    }
    for ladder in state.level.ladders() {
        draw_ladder(ladder, surface);
    }

    if let Some(kong) = &state.antagonist {
        draw_kong(kong, surface);
    }
    draw_player(&state.player, surface);

    draw_hud(state, surface);
}

fn draw_ladder(ladder: &Rect, surface: &mut impl DrawSurface) {
    const RAIL: f32 = 4.0;
    const RUNG_SPACING: f32 = 20.0;

    surface.fill_rect(Rect::new(ladder.x, ladder.y, RAIL, ladder.height), COLOR_LADDER);
    surface.fill_rect(
        Rect::new(ladder.right() - RAIL, ladder.y, RAIL, ladder.height),
        COLOR_LADDER,
    );
    let mut y = ladder.y + RUNG_SPACING / 2.0;
    while y < ladder.bottom() {
        surface.fill_rect(Rect::new(ladder.x, y, ladder.width, RAIL / 2.0), COLOR_LADDER);
        y += RUNG_SPACING;
    }
}

fn draw_player(player: &Player, surface: &mut impl DrawSurface) {
    let dst = player.rect();
    if surface.sprite_ready(SpriteSheet::Player) {
        let cell = if player.climbing { (5, 0) } else { (0, 0) };
        surface.draw_sprite(SpriteSheet::Player, cell, dst);
    } else {
        surface.fill_rect(dst, COLOR_PLAYER);
    }
}

fn draw_kong(kong: &Antagonist, surface: &mut impl DrawSurface) {
    let b = kong.bounds();
    let attacking = kong.state() == AnimationState::Attacking;

    if surface.sprite_ready(SpriteSheet::Kong) {
        let cells = if attacking { &KONG_THROW_CELLS } else { &KONG_IDLE_CELLS };
        let cell = cells[kong.sprite_frame() as usize % cells.len()];
        surface.draw_sprite(SpriteSheet::Kong, cell, b);
        return;
    }

    // Fallback: body, head, arms, eyes
    let part = |fx: f32, fy: f32, fw: f32, fh: f32| {
        Rect::new(b.x + b.width * fx, b.y + b.height * fy, b.width * fw, b.height * fh)
    };
    surface.fill_rect(part(0.2, 0.3, 0.6, 0.5), COLOR_KONG);
    surface.fill_rect(part(0.15, 0.0, 0.7, 0.4), COLOR_KONG_HEAD);
    if attacking {
        // One arm raised
        surface.fill_rect(part(0.7, 0.2, 0.15, 0.3), COLOR_KONG);
    } else {
        surface.fill_rect(part(0.05, 0.3, 0.15, 0.4), COLOR_KONG);
        surface.fill_rect(part(0.8, 0.3, 0.15, 0.4), COLOR_KONG);
    }
    surface.fill_rect(part(0.35, 0.15, 0.1, 0.08), COLOR_EYES);
    surface.fill_rect(part(0.55, 0.15, 0.1, 0.08), COLOR_EYES);
}

fn draw_hud(state: &GameState, surface: &mut impl DrawSurface) {
    let w = state.level.width();
    let y = 30.0;
    surface.draw_text(
        &format!("SCORE: {}", state.score),
        Vec2::new(20.0, y),
        COLOR_TEXT,
        TextAlign::Left,
    );
    surface.draw_text(
        &format!("LIVES: {}", state.lives),
        Vec2::new(w - 20.0, y),
        COLOR_TEXT,
        TextAlign::Right,
    );
    if state.player.climbing {
        surface.draw_text("CLIMBING", Vec2::new(w / 2.0, y), COLOR_LADDER, TextAlign::Center);
    }
}
