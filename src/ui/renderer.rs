/// Presentation layer: double-buffered, diff-based terminal renderer
/// that doubles as the engine's `Surface`.
///
/// How it works:
///   1. `redraw` composes the next frame into `front`: the static
///      scene buffer first, then every floating token in insertion
///      order (later placements draw on top)
///   2. Compare each cell with `back` (previous frame)
///   3. Only emit terminal commands for cells that changed
///   4. All commands are batched with `queue!`, flushed once
///   5. Swap front/back
///
/// This eliminates flicker, which matters here: screen shake is
/// nothing but redraws in rapid succession.

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::domain::entity::IconRect;
use crate::domain::style::{Hue, Tint};
use crate::fx::surface::{Surface, TokenId};

// ── Cell: the unit of the back-buffer ──

#[derive(Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: [u8; 4],
    ch_len: u8,
    fg: Color,
    bg: Color,
}

impl Cell {
    /// Explicit dark background for all "empty" cells, so the arena
    /// reads as one uniform panel regardless of the terminal's own
    /// default background.
    const BASE_BG: Color = Color::Rgb { r: 16, g: 18, b: 30 };

    const BLANK: Cell = Cell {
        ch: [b' ', 0, 0, 0],
        ch_len: 1,
        fg: Color::White,
        bg: Cell::BASE_BG,
    };

    /// Sentinel cell used to invalidate the back buffer.
    /// Different from any real cell, so every position will be diff'd.
    const INVALID: Cell = Cell {
        ch: [b'?', 0, 0, 0],
        ch_len: 1,
        fg: Color::Magenta,
        bg: Color::Magenta,
    };

    fn from_char(c: char, fg: Color) -> Self {
        let mut cell = Self::BLANK;
        let len = c.encode_utf8(&mut cell.ch).len() as u8;
        cell.ch_len = len;
        cell.fg = fg;
        cell
    }

    fn as_str(&self) -> &str {
        if self.ch_len == 0 {
            return "";
        }
        // ch always holds the utf8 bytes just encoded in from_char
        unsafe { std::str::from_utf8_unchecked(&self.ch[..self.ch_len as usize]) }
    }
}

/// Style-token → concrete color. Bold tints read as a brighter shade
/// of the same hue.
fn tint_color(tint: Tint) -> Color {
    let (r, g, b) = match tint.hue {
        Hue::White => (220, 220, 225),
        Hue::Grey => (130, 130, 140),
        Hue::Red => (200, 70, 55),
        Hue::Blue => (80, 120, 225),
        Hue::SkyBlue => (125, 185, 245),
        Hue::Cyan => (90, 200, 210),
        Hue::Green => (95, 185, 95),
        Hue::Yellow => (215, 195, 70),
        Hue::Amber => (190, 140, 60),
        Hue::Purple => (160, 95, 205),
    };
    if tint.bold {
        let up = |v: u8| v.saturating_add(45);
        Color::Rgb { r: up(r), g: up(g), b: up(b) }
    } else {
        Color::Rgb { r, g, b }
    }
}

// ── FrameBuffer: a 2D grid of Cells ──

struct FrameBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    fn new(w: usize, h: usize) -> Self {
        FrameBuffer {
            width: w,
            height: h,
            cells: vec![Cell::BLANK; w * h],
        }
    }

    fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x] = cell;
        }
    }

    fn get(&self, x: usize, y: usize) -> Cell {
        if x < self.width && y < self.height {
            self.cells[y * self.width + x]
        } else {
            Cell::BLANK
        }
    }

    /// Write a string at (x, y). Each char occupies 1 column.
    fn put_str(&mut self, x: usize, y: usize, s: &str, fg: Color) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, Cell::from_char(ch, fg));
            cx += 1;
        }
    }
}

// ── BattleScreen ──

/// One floating overlay text, keyed by the id handed to the engine.
struct Float {
    id: TokenId,
    text: String,
    tint: Tint,
    x: i32,
    y: i32,
}

pub struct BattleScreen {
    writer: BufWriter<io::Stdout>,
    front: FrameBuffer,
    back: FrameBuffer,
    base: FrameBuffer,
    floats: Vec<Float>,
    cols: i32,
    rows: i32,
    next_id: u64,
}

impl BattleScreen {
    pub fn new(cols: i32, rows: i32) -> Self {
        let (w, h) = (cols.max(1) as usize, rows.max(1) as usize);
        BattleScreen {
            writer: BufWriter::with_capacity(16384, io::stdout()),
            front: FrameBuffer::new(w, h),
            back: FrameBuffer::new(w, h),
            base: FrameBuffer::new(w, h),
            floats: Vec::new(),
            cols: w as i32,
            rows: h as i32,
            next_id: 0,
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            SetBackgroundColor(Cell::BASE_BG),
            Clear(ClearType::All)
        )?;
        // Force full repaint on first frame: back ≠ front everywhere.
        self.back.cells.fill(Cell::INVALID);
        Ok(())
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            self.writer,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    // ── Scene painting (static layer under the floats) ──

    pub fn paint_str(&mut self, x: i32, y: i32, s: &str, tint: Tint) {
        if x < 0 || y < 0 {
            return;
        }
        self.base.put_str(x as usize, y as usize, s, tint_color(tint));
    }

    /// Bordered box with a blanked interior; combatant sprites sit in
    /// these.
    pub fn paint_box(&mut self, rect: IconRect, tint: Tint) {
        if !rect.is_drawable() {
            return;
        }
        let fg = tint_color(tint);
        let (x0, y0) = (rect.x, rect.y);
        let (x1, y1) = (rect.x + rect.width - 1, rect.y + rect.height - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                if x < 0 || y < 0 {
                    continue;
                }
                let ch = match (x, y) {
                    _ if x == x0 && y == y0 => '┌',
                    _ if x == x1 && y == y0 => '┐',
                    _ if x == x0 && y == y1 => '└',
                    _ if x == x1 && y == y1 => '┘',
                    _ if y == y0 || y == y1 => '─',
                    _ if x == x0 || x == x1 => '│',
                    _ => ' ',
                };
                self.base.set(x as usize, y as usize, Cell::from_char(ch, fg));
            }
        }
    }

    // ── Frame output ──

    fn fits(&self, text: &str, x: i32, y: i32) -> bool {
        let len = text.chars().count() as i32;
        y >= 0 && y < self.rows && x >= 0 && x + len <= self.cols
    }

    fn compose(&mut self) {
        self.front.cells.copy_from_slice(&self.base.cells);
        for f in &self.floats {
            let fg = tint_color(f.tint);
            let mut cx = f.x;
            for ch in f.text.chars() {
                self.front.set(cx as usize, f.y as usize, Cell::from_char(ch, fg));
                cx += 1;
            }
        }
    }

    /// Diff against the previous frame and emit only changed cells.
    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_fg = Color::White;
        let mut last_bg = Cell::BASE_BG;
        let mut need_move = true;
        let mut last_x: usize = 0;
        let mut last_y: usize = 0;

        queue!(
            self.writer,
            SetForegroundColor(Color::White),
            SetBackgroundColor(Cell::BASE_BG),
        )?;

        for y in 0..self.front.height {
            for x in 0..self.front.width {
                let cell = self.front.get(x, y);
                if cell == self.back.get(x, y) {
                    need_move = true;
                    continue;
                }

                if need_move || x != last_x + 1 || y != last_y {
                    queue!(self.writer, MoveTo(x as u16, y as u16))?;
                    need_move = false;
                }
                if cell.fg != last_fg {
                    queue!(self.writer, SetForegroundColor(cell.fg))?;
                    last_fg = cell.fg;
                }
                if cell.bg != last_bg {
                    queue!(self.writer, SetBackgroundColor(cell.bg))?;
                    last_bg = cell.bg;
                }
                queue!(self.writer, Print(cell.as_str()))?;
                last_x = x;
                last_y = y;
            }
        }

        self.writer.flush()
    }

    fn flush_frame(&mut self) -> io::Result<()> {
        self.compose();
        self.flush_diff()?;
        std::mem::swap(&mut self.front, &mut self.back);
        Ok(())
    }
}

impl Surface for BattleScreen {
    fn place(&mut self, text: &str, tint: Tint, x: i32, y: i32) -> Option<TokenId> {
        if !self.fits(text, x, y) {
            return None;
        }
        let id = TokenId(self.next_id);
        self.next_id += 1;
        self.floats.push(Float { id, text: text.to_string(), tint, x, y });
        Some(id)
    }

    fn shift(&mut self, id: TokenId, dx: i32, dy: i32) -> bool {
        let Some(idx) = self.floats.iter().position(|f| f.id == id) else {
            return false;
        };
        let (nx, ny) = (self.floats[idx].x + dx, self.floats[idx].y + dy);
        if !self.fits(&self.floats[idx].text, nx, ny) {
            return false;
        }
        self.floats[idx].x = nx;
        self.floats[idx].y = ny;
        true
    }

    fn remove(&mut self, id: TokenId) {
        self.floats.retain(|f| f.id != id);
    }

    fn redraw(&mut self) {
        // A write failure must not abort a beat mid-animation; the
        // demo's cleanup path reports persistent terminal trouble.
        let _ = self.flush_frame();
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::style::{Hue, Tint};

    use super::*;

    const TINT: Tint = Tint::plain(Hue::White);

    #[test]
    fn place_respects_bounds() {
        let mut screen = BattleScreen::new(20, 10);
        assert!(screen.place("hit", TINT, 0, 0).is_some());
        assert!(screen.place("hit", TINT, 17, 9).is_some());
        assert!(screen.place("hit", TINT, 18, 0).is_none()); // overhangs right edge
        assert!(screen.place("hit", TINT, -1, 0).is_none());
        assert!(screen.place("hit", TINT, 0, 10).is_none());
    }

    #[test]
    fn shift_fails_without_moving() {
        let mut screen = BattleScreen::new(20, 10);
        let id = screen.place("5", TINT, 0, 0).unwrap();
        assert!(!screen.shift(id, -1, 0));
        assert!(!screen.shift(id, 0, -1));
        assert!(screen.shift(id, 3, 3));
        assert_eq!(screen.floats[0].x, 3);
        assert_eq!(screen.floats[0].y, 3);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut screen = BattleScreen::new(20, 10);
        let id = screen.place("Z", TINT, 5, 5).unwrap();
        screen.remove(id);
        screen.remove(id);
        assert!(screen.floats.is_empty());
        assert!(!screen.shift(id, 1, 0)); // gone ids no longer move
    }

    #[test]
    fn floats_compose_over_the_scene() {
        let mut screen = BattleScreen::new(20, 10);
        screen.paint_str(0, 2, "#####", TINT);
        let _ = screen.place("X", Tint::bold(Hue::Red), 2, 2);
        screen.compose();
        assert_eq!(screen.front.get(1, 2).as_str(), "#");
        assert_eq!(screen.front.get(2, 2).as_str(), "X");
    }
}
