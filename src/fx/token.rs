/// GlyphToken: one piece of floating text with an explicit
/// unplaced/placed state machine.
///
///   new → place (silent failure keeps it unplaced)
///       → shift* (no-op while unplaced, position unchanged on a
///         failed move)
///       → dispose (idempotent)
///
/// Dropping a token disposes it, so a glyph can never outlive the
/// animator that created it, whichever path that animator exits by.
/// Tokens are exclusively owned; the surface handle they keep is the
/// shared one all animators in a beat draw against.

use crate::domain::style::Tint;

use super::surface::{SurfaceHandle, TokenId};

pub struct GlyphToken {
    surface: SurfaceHandle,
    text: String,
    tint: Tint,
    placed: Option<(TokenId, i32, i32)>,
}

impl GlyphToken {
    pub fn new(surface: &SurfaceHandle, text: impl Into<String>, tint: Tint) -> Self {
        GlyphToken {
            surface: surface.clone(),
            text: text.into(),
            tint,
            placed: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    #[allow(dead_code)]
    pub fn is_placed(&self) -> bool {
        self.placed.is_some()
    }

    pub fn position(&self) -> Option<(i32, i32)> {
        self.placed.map(|(_, x, y)| (x, y))
    }

    /// Attempt placement. Out-of-bounds coordinates leave the token
    /// unplaced and return false; an already-placed token stays put.
    pub fn place(&mut self, x: i32, y: i32) -> bool {
        if self.placed.is_some() {
            return true;
        }
        match self.surface.borrow_mut().place(&self.text, self.tint, x, y) {
            Some(id) => {
                self.placed = Some((id, x, y));
                true
            }
            None => false,
        }
    }

    /// Relative move. Returns false without moving when unplaced or
    /// when the target would leave the grid.
    pub fn shift(&mut self, dx: i32, dy: i32) -> bool {
        let Some((id, x, y)) = self.placed else {
            return false;
        };
        if self.surface.borrow_mut().shift(id, dx, dy) {
            self.placed = Some((id, x + dx, y + dy));
            true
        } else {
            false
        }
    }

    /// Remove from the surface if placed. Safe to call any number of
    /// times.
    pub fn dispose(&mut self) {
        if let Some((id, _, _)) = self.placed.take() {
            self.surface.borrow_mut().remove(id);
        }
    }
}

impl Drop for GlyphToken {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::style::{Hue, Tint};
    use crate::fx::surface::probe::probe;

    use super::*;

    const TINT: Tint = Tint::plain(Hue::White);

    #[test]
    fn place_then_dispose() {
        let (p, handle) = probe(20, 10);
        let mut tok = GlyphToken::new(&handle, "5", TINT);
        assert!(tok.place(4, 4));
        assert!(tok.is_placed());
        assert_eq!(p.borrow().live_count(), 1);
        tok.dispose();
        assert!(!tok.is_placed());
        assert_eq!(p.borrow().live_count(), 0);
    }

    #[test]
    fn dispose_is_idempotent() {
        let (p, handle) = probe(20, 10);
        let mut tok = GlyphToken::new(&handle, "!", TINT);
        tok.place(1, 1);
        tok.dispose();
        tok.dispose();
        tok.dispose();
        assert_eq!(p.borrow().live_count(), 0);
        // Disposing an unplaced token is also fine
        let mut never = GlyphToken::new(&handle, "x", TINT);
        never.dispose();
        assert_eq!(p.borrow().live_count(), 0);
    }

    #[test]
    fn out_of_bounds_place_stays_unplaced() {
        let (p, handle) = probe(10, 5);
        let mut tok = GlyphToken::new(&handle, "MISS", TINT);
        assert!(!tok.place(8, 2)); // text would overhang the right edge
        assert!(!tok.place(0, -1));
        assert!(!tok.is_placed());
        assert_eq!(p.borrow().live_count(), 0);
    }

    #[test]
    fn shift_is_noop_while_unplaced() {
        let (p, handle) = probe(10, 5);
        let mut tok = GlyphToken::new(&handle, "7", TINT);
        assert!(!tok.shift(0, -1));
        assert_eq!(p.borrow().live_count(), 0);
    }

    #[test]
    fn failed_shift_keeps_position() {
        let (_p, handle) = probe(10, 5);
        let mut tok = GlyphToken::new(&handle, "7", TINT);
        tok.place(3, 0);
        assert!(!tok.shift(0, -1)); // already on the top row
        assert_eq!(tok.position(), Some((3, 0)));
        assert!(tok.shift(0, 1));
        assert_eq!(tok.position(), Some((3, 1)));
    }

    #[test]
    fn drop_cleans_up() {
        let (p, handle) = probe(20, 10);
        {
            let mut tok = GlyphToken::new(&handle, "9", TINT);
            tok.place(2, 2);
            assert_eq!(p.borrow().live_count(), 1);
        }
        assert_eq!(p.borrow().live_count(), 0);
    }
}
