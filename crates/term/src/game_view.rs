//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The 576x1024 logical field is scaled to the largest area that fits the
//! viewport. Terminal glyphs are roughly twice as tall as they are wide, so one
//! row covers twice the logical distance of one column.

use crate::core::{BirdSnapshot, GameSnapshot, PipeSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{
    Phase, BIRD_HEIGHT, BIRD_WIDTH, FLOOR_HEIGHT, FLOOR_Y, PIPE_HEIGHT, PIPE_THICKNESS,
    SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Smallest field (in cells) worth drawing.
pub const MIN_FIELD_COLS: u16 = 18;
pub const MIN_FIELD_ROWS: u16 = 16;

/// Terminal rows per terminal column for the same on-screen distance.
const CELL_ASPECT: f64 = 2.0;

const SKY: Rgb = Rgb::new(18, 26, 52);
const PIPE: Rgb = Rgb::new(96, 176, 56);
const PIPE_RIM: Rgb = Rgb::new(140, 220, 90);
const GRASS: Rgb = Rgb::new(120, 200, 70);
const GRASS_DARK: Rgb = Rgb::new(80, 150, 50);
const SAND: Rgb = Rgb::new(220, 200, 140);
const SAND_DARK: Rgb = Rgb::new(190, 170, 110);
const BIRD: Rgb = Rgb::new(250, 200, 40);
const BEAK: Rgb = Rgb::new(240, 110, 40);
const INK: Rgb = Rgb::new(30, 30, 30);
const TEXT: Rgb = Rgb::new(255, 255, 255);

/// Width in logical units of one floor stripe.
const FLOOR_STRIPE: f64 = 24.0;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the logical field sits in the viewport and how it is scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldLayout {
    pub origin_x: i32,
    pub origin_y: i32,
    pub cols: u16,
    pub rows: u16,
}

impl FieldLayout {
    /// Largest aspect-correct field that fits `viewport`, centred.
    pub fn fit(viewport: Viewport) -> Option<Self> {
        let ratio = SCREEN_WIDTH / SCREEN_HEIGHT * CELL_ASPECT;

        let mut rows = viewport.height as f64;
        let mut cols = (rows * ratio).floor();
        if cols > viewport.width as f64 {
            cols = viewport.width as f64;
            rows = (cols / ratio).floor();
        }

        let (cols, rows) = (cols as u16, rows as u16);
        if cols < MIN_FIELD_COLS || rows < MIN_FIELD_ROWS {
            return None;
        }

        Some(Self {
            origin_x: ((viewport.width - cols) / 2) as i32,
            origin_y: ((viewport.height - rows) / 2) as i32,
            cols,
            rows,
        })
    }

    pub fn to_cell_x(&self, x: f64) -> i32 {
        self.origin_x + (x * self.cols as f64 / SCREEN_WIDTH).floor() as i32
    }

    pub fn to_cell_y(&self, y: f64) -> i32 {
        self.origin_y + (y * self.rows as f64 / SCREEN_HEIGHT).floor() as i32
    }

    /// Logical x at the left edge of terminal column `cx`.
    pub fn to_world_x(&self, cx: i32) -> f64 {
        (cx - self.origin_x) as f64 * SCREEN_WIDTH / self.cols as f64
    }

    pub fn center_col(&self) -> i32 {
        self.origin_x + self.cols as i32 / 2
    }

    /// Cell rectangle `(x, y, w, h)` covering a logical rectangle, clipped
    /// to the field. Anything visible covers at least one cell.
    fn rect(&self, x: f64, y: f64, w: f64, h: f64) -> Option<(i32, i32, i32, i32)> {
        let x0 = self.to_cell_x(x).max(self.origin_x);
        let y0 = self.to_cell_y(y).max(self.origin_y);
        let x1 = self
            .to_cell_x(x + w)
            .max(self.to_cell_x(x) + 1)
            .min(self.origin_x + self.cols as i32);
        let y1 = self
            .to_cell_y(y + h)
            .max(self.to_cell_y(y) + 1)
            .min(self.origin_y + self.rows as i32);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0, y0, x1 - x0, y1 - y0))
    }
}

/// A lightweight terminal renderer for the game.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let Some(layout) = FieldLayout::fit(viewport) else {
            let hint = CellStyle::default().bold();
            fb.put_str(0, 0, "enlarge the terminal to play", hint);
            return;
        };

        let sky = CellStyle::new(TEXT, SKY);
        fb.fill_rect(
            layout.origin_x,
            layout.origin_y,
            layout.cols as i32,
            layout.rows as i32,
            ' ',
            sky,
        );

        for pipe in &snap.pipes {
            self.draw_pipe(fb, &layout, pipe);
        }
        self.draw_floor(fb, &layout, snap.floor_x);
        self.draw_bird(fb, &layout, &snap.bird);

        let score_style = CellStyle::new(TEXT, SKY).bold();
        fb.put_str_centered(
            layout.center_col(),
            layout.to_cell_y(50.0),
            &snap.score.to_string(),
            score_style,
        );

        match snap.phase {
            Phase::Idle => self.draw_welcome(fb, &layout, snap),
            Phase::Playing => {}
            Phase::GameOver => self.draw_game_over(fb, &layout, snap),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_pipe(&self, fb: &mut FrameBuffer, layout: &FieldLayout, pipe: &PipeSnapshot) {
        let body = CellStyle::new(PIPE, SKY);
        let rim = CellStyle::new(PIPE_RIM, SKY);
        let gap_start = pipe.gap_start as f64;
        let gap_end = (pipe.gap_start + pipe.gap_height) as f64;

        // Top half hangs down to the gap, bottom half rises from it.
        let halves = [
            (gap_start - PIPE_HEIGHT, PIPE_HEIGHT, '▄'),
            (gap_end, PIPE_HEIGHT.min(FLOOR_Y - gap_end), '▀'),
        ];
        for (y, h, rim_ch) in halves {
            let Some((cx, cy, cw, ch)) = layout.rect(pipe.x, y, PIPE_THICKNESS, h) else {
                continue;
            };
            fb.fill_rect(cx, cy, cw, ch, '█', body);
            let rim_row = if rim_ch == '▄' { cy + ch - 1 } else { cy };
            fb.fill_rect(cx, rim_row, cw, 1, rim_ch, rim);
        }
    }

    fn draw_floor(&self, fb: &mut FrameBuffer, layout: &FieldLayout, floor_x: f64) {
        let Some((cx, cy, cw, ch)) = layout.rect(0.0, FLOOR_Y, SCREEN_WIDTH, FLOOR_HEIGHT) else {
            return;
        };

        for col in cx..cx + cw {
            // Floor tiles repeat every screen width, so the stripe phase only
            // depends on the offset within one tile.
            let world = layout.to_world_x(col) - floor_x;
            let light = (world / FLOOR_STRIPE).floor() as i64 % 2 == 0;
            let (grass, sand) = if light {
                (GRASS, SAND)
            } else {
                (GRASS_DARK, SAND_DARK)
            };
            fb.put_char(col, cy, '▀', CellStyle::new(grass, sand));
            fb.fill_rect(col, cy + 1, 1, ch - 1, '░', CellStyle::new(SAND_DARK, SAND));
        }
    }

    fn draw_bird(&self, fb: &mut FrameBuffer, layout: &FieldLayout, bird: &BirdSnapshot) {
        let Some((cx, cy, cw, ch)) = layout.rect(bird.x, bird.y, BIRD_WIDTH, BIRD_HEIGHT) else {
            return;
        };
        let body = CellStyle::new(INK, BIRD);
        fb.fill_rect(cx, cy, cw, ch, ' ', body);

        let mid_y = cy + ch / 2;
        fb.put_char(cx, mid_y, wing_glyph(bird.wing_frame), body.bold());
        if cw > 1 {
            fb.put_char(cx + cw - 1, mid_y, beak_glyph(bird.rotation), CellStyle::new(INK, BEAK));
        }
    }

    fn draw_welcome(&self, fb: &mut FrameBuffer, layout: &FieldLayout, snap: &GameSnapshot) {
        let title = CellStyle::new(BIRD, SKY).bold();
        let text = CellStyle::new(TEXT, SKY).bold();
        let center = layout.center_col();

        let score_row = layout.to_cell_y(50.0);
        let title_row = layout.to_cell_y(112.0).max(score_row + 1);
        let mode_row = layout.to_cell_y(200.0).max(title_row + 2);
        fb.put_str_centered(center, title_row, "FLAPPY BIRD", title);
        fb.put_str_centered(
            center,
            mode_row,
            &format!("Mode  {}", snap.difficulty.label()),
            text,
        );

        let floor_row = layout.to_cell_y(FLOOR_Y);
        fb.put_str_centered(center, floor_row - 1, "Press SPACE", text);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, layout: &FieldLayout, snap: &GameSnapshot) {
        let banner = CellStyle::new(BEAK, SKY).bold();
        let text = CellStyle::new(TEXT, SKY).bold();
        let center = layout.center_col();
        let mid = SCREEN_HEIGHT / 2.0;

        let over_row = layout.to_cell_y(mid - 100.0);
        let score_row = layout.to_cell_y(mid).max(over_row + 1);
        let high_row = layout.to_cell_y(mid + 50.0).max(score_row + 1);
        fb.put_str_centered(center, over_row, "GAME OVER", banner);
        fb.put_str_centered(center, score_row, &format!("Score  {}", snap.score), text);
        fb.put_str_centered(
            center,
            high_row,
            &format!("High Score  {}", snap.high_score),
            text,
        );
    }
}

/// Up, mid, and down wing positions.
fn wing_glyph(frame: u8) -> char {
    match frame {
        0 => '^',
        1 => '-',
        _ => 'v',
    }
}

fn beak_glyph(rotation: f64) -> char {
    if rotation > 5.0 {
        '/'
    } else if rotation < -45.0 {
        '\\'
    } else {
        '>'
    }
}
