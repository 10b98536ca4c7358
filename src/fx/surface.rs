/// The drawing capability the effects engine consumes.
///
/// The engine never talks to a terminal directly; it places, moves and
/// removes floating text through this trait and forces repaints with
/// `redraw`. Failure is part of the contract, not an error: placements
/// and moves outside the visible grid report `None`/`false` and the
/// caller skips that glyph or step. Nothing here panics.

use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::style::Tint;

/// Opaque handle to one placed floating text, issued by the surface.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TokenId(pub u64);

pub trait Surface {
    /// Place floating text with its first character at (x, y).
    /// Every character must land inside the visible grid; otherwise
    /// nothing is placed and `None` is returned.
    fn place(&mut self, text: &str, tint: Tint, x: i32, y: i32) -> Option<TokenId>;

    /// Move a placed text by (dx, dy). Returns false and leaves the
    /// position unchanged when the target would fall out of bounds or
    /// the id is unknown.
    fn shift(&mut self, id: TokenId, dx: i32, dy: i32) -> bool;

    /// Remove a placed text. Idempotent: unknown or already-removed
    /// ids are a no-op.
    fn remove(&mut self, id: TokenId);

    /// Repaint the current grid state.
    fn redraw(&mut self);
}

/// One shared mutable surface, sequentially owned by at most one
/// animator at a time. The engine is single-threaded throughout.
pub type SurfaceHandle = Rc<RefCell<dyn Surface>>;

// ── Test probe ──

/// Recording surface for unit tests: configurable bounds, a log of
/// every operation, and the set of currently placed tokens (which must
/// always be empty after an animator finishes).
#[cfg(test)]
pub mod probe {
    use std::collections::HashMap;

    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    pub enum Op {
        Place { text: String, x: i32, y: i32, ok: bool },
        Shift { dx: i32, dy: i32, ok: bool },
        Remove,
        Redraw,
    }

    pub struct ProbeSurface {
        pub cols: i32,
        pub rows: i32,
        pub live: HashMap<TokenId, (String, i32, i32)>,
        pub log: Vec<Op>,
        next_id: u64,
    }

    impl ProbeSurface {
        pub fn new(cols: i32, rows: i32) -> Rc<RefCell<ProbeSurface>> {
            Rc::new(RefCell::new(ProbeSurface {
                cols,
                rows,
                live: HashMap::new(),
                log: Vec::new(),
                next_id: 0,
            }))
        }

        fn fits(&self, text: &str, x: i32, y: i32) -> bool {
            let len = text.chars().count() as i32;
            y >= 0 && y < self.rows && x >= 0 && x + len <= self.cols
        }

        pub fn live_count(&self) -> usize {
            self.live.len()
        }

        pub fn placements(&self) -> Vec<&Op> {
            self.log
                .iter()
                .filter(|op| matches!(op, Op::Place { .. }))
                .collect()
        }

        pub fn redraw_count(&self) -> usize {
            self.log.iter().filter(|op| matches!(op, Op::Redraw)).count()
        }
    }

    impl Surface for ProbeSurface {
        fn place(&mut self, text: &str, _tint: Tint, x: i32, y: i32) -> Option<TokenId> {
            let ok = self.fits(text, x, y);
            self.log.push(Op::Place { text: text.to_string(), x, y, ok });
            if !ok {
                return None;
            }
            let id = TokenId(self.next_id);
            self.next_id += 1;
            self.live.insert(id, (text.to_string(), x, y));
            Some(id)
        }

        fn shift(&mut self, id: TokenId, dx: i32, dy: i32) -> bool {
            let entry = self.live.get(&id).map(|(t, x, y)| (t.clone(), *x, *y));
            let ok = match entry {
                Some((text, x, y)) => {
                    let (nx, ny) = (x + dx, y + dy);
                    if self.fits(&text, nx, ny) {
                        self.live.insert(id, (text, nx, ny));
                        true
                    } else {
                        false
                    }
                }
                None => false,
            };
            self.log.push(Op::Shift { dx, dy, ok });
            ok
        }

        fn remove(&mut self, id: TokenId) {
            self.log.push(Op::Remove);
            self.live.remove(&id);
        }

        fn redraw(&mut self) {
            self.log.push(Op::Redraw);
        }
    }

    /// Shorthand: a probe plus its trait-object handle for the engine.
    pub fn probe(cols: i32, rows: i32) -> (Rc<RefCell<ProbeSurface>>, SurfaceHandle) {
        let p = ProbeSurface::new(cols, rows);
        let handle: SurfaceHandle = p.clone();
        (p, handle)
    }
}
