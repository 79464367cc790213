//! GameView: maps a core `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O), so every projection rule can be
//! unit-tested against a framebuffer.
//!
//! The volume is shown as two orthographic projections side by side:
//!
//! - the **elevation**: looking horizontally into the field, columns across,
//!   gravity down; for each screen cell the nearest occupied voxel wins and
//!   deeper voxels render progressively darker
//! - the **plan**: looking straight down, showing the footprint of the
//!   stack and the falling piece
//!
//! Both projections honor the view yaw, which orbits in quarter turns so
//! the player can inspect the stack from all four sides.

use crate::core::{GameSnapshot, MAX_BLOCKS};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{HighScoreEntry, Mode, GRID_DEPTH, GRID_HEIGHT, GRID_WIDTH};

use arrayvec::ArrayVec;

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

/// Quarter-turn orbit position of the view around the vertical axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewYaw {
    #[default]
    Front,
    Right,
    Back,
    Left,
}

impl ViewYaw {
    pub fn turned_cw(self) -> Self {
        match self {
            ViewYaw::Front => ViewYaw::Right,
            ViewYaw::Right => ViewYaw::Back,
            ViewYaw::Back => ViewYaw::Left,
            ViewYaw::Left => ViewYaw::Front,
        }
    }

    pub fn turned_ccw(self) -> Self {
        match self {
            ViewYaw::Front => ViewYaw::Left,
            ViewYaw::Left => ViewYaw::Back,
            ViewYaw::Back => ViewYaw::Right,
            ViewYaw::Right => ViewYaw::Front,
        }
    }

    /// Camera yaw in degrees, for camera-relative input resolution.
    pub fn degrees(self) -> f32 {
        match self {
            ViewYaw::Front => 0.0,
            ViewYaw::Right => 90.0,
            ViewYaw::Back => 180.0,
            ViewYaw::Left => 270.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewYaw::Front => "FRONT",
            ViewYaw::Right => "RIGHT",
            ViewYaw::Back => "BACK",
            ViewYaw::Left => "LEFT",
        }
    }
}

/// Grid coordinates for a view column and depth under the given yaw.
/// Depth 0 is the voxel nearest the viewer. Relies on the field footprint
/// being square.
fn grid_coords(yaw: ViewYaw, across: u8, depth: u8) -> (u8, u8) {
    let w = GRID_WIDTH - 1;
    let d = GRID_DEPTH - 1;
    match yaw {
        ViewYaw::Front => (across, depth),
        ViewYaw::Right => (depth, d - across),
        ViewYaw::Back => (w - across, d - depth),
        ViewYaw::Left => (w - depth, across),
    }
}

/// Everything a single frame needs beyond the raw snapshot.
pub struct Frame<'a> {
    pub snapshot: &'a GameSnapshot,
    pub mode: Mode,
    pub yaw: ViewYaw,
    pub scores: &'a [HighScoreEntry],
    pub new_high_score: bool,
    pub loading_percent: u32,
}

/// A lightweight terminal renderer for the voxel game.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, frame: &Frame<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        if frame.mode == Mode::Loading {
            self.draw_loading(frame, viewport, fb);
            return;
        }

        let elev_w = (GRID_WIDTH as u16) * self.cell_w;
        let elev_h = GRID_HEIGHT as u16;
        let frame_w = elev_w + 2;
        let frame_h = elev_h + 2;

        let total_w = frame_w + 2 + (GRID_WIDTH as u16) * self.cell_w + 2 + 18;
        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        self.draw_elevation(frame, fb, start_x + 1, start_y + 1);

        let plan_x = start_x + frame_w + 2;
        let plan_frame_h = (GRID_DEPTH as u16) + 2;
        self.draw_border(fb, plan_x, start_y, frame_w, plan_frame_h, border);
        self.draw_plan(frame, fb, plan_x + 1, start_y + 1);

        let panel_x = plan_x + frame_w + 2;
        self.draw_side_panel(frame, viewport, fb, panel_x, start_y);

        match frame.mode {
            Mode::MainMenu => self.draw_menu_overlay(frame, fb, start_x, start_y, frame_w, frame_h),
            Mode::Paused => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "PAUSED");
            }
            Mode::GameOver => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "GAME OVER");
                if frame.new_high_score {
                    self.draw_overlay_text(
                        fb,
                        start_x,
                        start_y,
                        frame_w,
                        frame_h,
                        1,
                        "NEW HIGH SCORE",
                    );
                }
            }
            _ => {}
        }
    }

    /// Convenience helper that allocates a fresh framebuffer.
    pub fn render(&self, frame: &Frame<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_loading(&self, frame: &Frame<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        let title = "V O X T R I S";
        let mid_y = viewport.height / 2;
        let title_x = viewport.width.saturating_sub(title.len() as u16) / 2;
        let title_style = CellStyle {
            fg: Rgb::new(120, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(title_x, mid_y.saturating_sub(2), title, title_style);

        // A 20-cell bar filled in proportion to elapsed load time.
        let bar_w: u16 = 20;
        let filled = (bar_w as u32 * frame.loading_percent.min(100) / 100) as u16;
        let bar_x = viewport.width.saturating_sub(bar_w) / 2;
        let on = CellStyle {
            fg: Rgb::new(120, 220, 220),
            ..CellStyle::default()
        };
        let off = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        for i in 0..bar_w {
            let style = if i < filled { on } else { off };
            fb.put_char(bar_x + i, mid_y, '━', style);
        }

        let hint = "press enter to skip";
        let hint_x = viewport.width.saturating_sub(hint.len() as u16) / 2;
        fb.put_str(hint_x, mid_y + 2, hint, off);
    }

    fn draw_elevation(&self, frame: &Frame<'_>, fb: &mut FrameBuffer, ox: u16, oy: u16) {
        let snap = frame.snapshot;
        let ghost = ghost_cells(snap);

        for across in 0..GRID_WIDTH {
            for gy in 0..GRID_HEIGHT {
                let row = oy + (GRID_HEIGHT - 1 - gy) as u16;
                let col = ox + (across as u16) * self.cell_w;

                let mut drawn = false;
                for depth in 0..GRID_DEPTH {
                    let (x, z) = grid_coords(frame.yaw, across, depth);
                    let brightness = 1.0 - 0.09 * depth as f32;
                    let dim = depth >= 4;

                    if let Some(active) = &snap.active {
                        if active.cells.contains(&(x as i8, gy as i8, z as i8)) {
                            let style = CellStyle {
                                fg: Rgb::from_unit(active.color).scaled(brightness),
                                bg: Rgb::new(20, 20, 28),
                                bold: depth == 0,
                                dim,
                            };
                            fb.fill_rect(col, row, self.cell_w, 1, '█', style);
                            drawn = true;
                            break;
                        }
                    }
                    if let Some(color) = snap.grid[gy as usize][z as usize][x as usize] {
                        let style = CellStyle {
                            fg: Rgb::from_unit(color).scaled(brightness),
                            bg: Rgb::new(20, 20, 28),
                            bold: false,
                            dim,
                        };
                        fb.fill_rect(col, row, self.cell_w, 1, '█', style);
                        drawn = true;
                        break;
                    }
                    if ghost.contains(&(x as i8, gy as i8, z as i8)) {
                        let style = CellStyle {
                            fg: Rgb::new(140, 140, 140).scaled(brightness),
                            bg: Rgb::new(20, 20, 28),
                            bold: false,
                            dim: true,
                        };
                        fb.fill_rect(col, row, self.cell_w, 1, '░', style);
                        drawn = true;
                        break;
                    }
                }

                if !drawn {
                    let style = CellStyle {
                        fg: Rgb::new(70, 70, 85),
                        bg: Rgb::new(20, 20, 28),
                        bold: false,
                        dim: true,
                    };
                    fb.fill_rect(col, row, self.cell_w, 1, ' ', style);
                    fb.put_char(col, row, '·', style);
                }
            }
        }
    }

    fn draw_plan(&self, frame: &Frame<'_>, fb: &mut FrameBuffer, ox: u16, oy: u16) {
        let snap = frame.snapshot;

        for across in 0..GRID_WIDTH {
            for depth in 0..GRID_DEPTH {
                let (x, z) = grid_coords(frame.yaw, across, depth);
                let row = oy + depth as u16;
                let col = ox + (across as u16) * self.cell_w;

                // Falling piece footprint takes precedence over the stack.
                let active_here = snap.active.as_ref().is_some_and(|a| {
                    a.cells
                        .iter()
                        .any(|&(ax, _, az)| ax == x as i8 && az == z as i8)
                });
                if active_here {
                    if let Some(active) = &snap.active {
                        let style = CellStyle {
                            fg: Rgb::from_unit(active.color),
                            bg: Rgb::new(20, 20, 28),
                            bold: true,
                            dim: false,
                        };
                        fb.fill_rect(col, row, self.cell_w, 1, '█', style);
                        continue;
                    }
                }

                // Otherwise the highest locked voxel in this column, shaded
                // by its altitude.
                let top = (0..GRID_HEIGHT)
                    .rev()
                    .find_map(|gy| snap.grid[gy as usize][z as usize][x as usize].map(|c| (gy, c)));
                match top {
                    Some((gy, color)) => {
                        let altitude = 0.45 + 0.55 * (gy + 1) as f32 / GRID_HEIGHT as f32;
                        let style = CellStyle {
                            fg: Rgb::from_unit(color).scaled(altitude),
                            bg: Rgb::new(20, 20, 28),
                            bold: false,
                            dim: false,
                        };
                        fb.fill_rect(col, row, self.cell_w, 1, '█', style);
                    }
                    None => {
                        let style = CellStyle {
                            fg: Rgb::new(70, 70, 85),
                            bg: Rgb::new(20, 20, 28),
                            bold: false,
                            dim: true,
                        };
                        fb.fill_rect(col, row, self.cell_w, 1, ' ', style);
                        fb.put_char(col, row, '·', style);
                    }
                }
            }
        }
    }

    fn draw_side_panel(
        &self,
        frame: &Frame<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let snap = frame.snapshot;
        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        y = self.draw_piece_footprint(fb, panel_x, y, snap.next.as_ref());
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "LAST", label);
        y = y.saturating_add(1);
        y = self.draw_piece_footprint(fb, panel_x, y, snap.last.as_ref());
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "VIEW", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, frame.yaw.label(), value);
    }

    /// Draw the XZ footprint of a piece preview in a small centered grid.
    /// Returns the row after the preview.
    fn draw_piece_footprint(
        &self,
        fb: &mut FrameBuffer,
        panel_x: u16,
        y: u16,
        preview: Option<&crate::core::PiecePreview>,
    ) -> u16 {
        const SPAN: i8 = 5;
        let Some(preview) = preview else {
            let dim = CellStyle {
                dim: true,
                ..CellStyle::default()
            };
            fb.put_str(panel_x, y, "-", dim);
            return y + 1;
        };

        let style = CellStyle {
            fg: Rgb::from_unit(preview.color),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        for &(dx, _, dz) in preview.blocks.iter() {
            let px = dx + SPAN / 2;
            let pz = dz + SPAN / 2;
            if (0..SPAN).contains(&px) && (0..SPAN).contains(&pz) {
                let col = panel_x + (px as u16) * self.cell_w;
                fb.fill_rect(col, y + pz as u16, self.cell_w, 1, '█', style);
            }
        }
        y + SPAN as u16
    }

    fn draw_menu_overlay(
        &self,
        frame: &Frame<'_>,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, -3, "V O X T R I S");
        self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, -1, "S - START");

        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let mid_y = start_y.saturating_add(frame_h / 2);
        let x = start_x + 2;
        for (i, entry) in frame.scores.iter().take(5).enumerate() {
            let row = mid_y + 1 + i as u16;
            fb.put_u32(x, row, i as u32 + 1, value);
            fb.put_char(x + 1, row, '.', value);
            fb.put_u32(x + 3, row, entry.score, value);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        row_offset: i16,
        text: &str,
    ) {
        let mid_y = (start_y.saturating_add(frame_h / 2) as i16 + row_offset).max(0) as u16;
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}

/// Where the falling piece would land, as absolute cells.
fn ghost_cells(snap: &GameSnapshot) -> ArrayVec<(i8, i8, i8), MAX_BLOCKS> {
    let mut out = ArrayVec::new();
    if let Some(active) = &snap.active {
        if active.landing_distance > 0 {
            for &(x, y, z) in active.cells.iter() {
                out.push((x, y - active.landing_distance, z));
            }
        }
    }
    out
}
