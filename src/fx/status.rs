/// Status effect indicator: `+sym` when an effect lands, `-sym` when it
/// wears off, rising one row per cycle above the target.

use std::time::Duration;

use crate::domain::style::StatusKind;

use super::surface::SurfaceHandle;
use super::tempo::Tempo;
use super::token::GlyphToken;

const RISE_CYCLES: u32 = 3;

pub struct StatusIndicator {
    surface: SurfaceHandle,
    token: GlyphToken,
    x: i32,
    y: i32,
}

impl StatusIndicator {
    pub fn new(surface: &SurfaceHandle, kind: StatusKind, x: i32, y: i32, applied: bool) -> Self {
        let sign = if applied { '+' } else { '-' };
        let text = format!("{sign}{}", kind.symbol());
        StatusIndicator {
            surface: surface.clone(),
            token: GlyphToken::new(surface, text, kind.tint()),
            x,
            y,
        }
    }

    #[allow(dead_code)]
    pub fn text(&self) -> &str {
        self.token.text()
    }

    pub fn play(mut self, duration: Duration, tempo: &dyn Tempo) {
        if !self.token.place(self.x, self.y) {
            return;
        }
        let cycle_delay = duration / (RISE_CYCLES * 2);
        for _ in 0..RISE_CYCLES {
            self.surface.borrow_mut().redraw();
            tempo.wait(cycle_delay);
            if !self.token.shift(0, -1) {
                break;
            }
        }
        self.token.dispose();
    }
}

#[cfg(test)]
mod tests {
    use crate::fx::surface::probe::probe;
    use crate::fx::tempo::ScaledTempo;

    use super::*;

    #[test]
    fn applied_and_removed_signs() {
        let (_p, handle) = probe(40, 20);
        let on = StatusIndicator::new(&handle, StatusKind::Burning, 5, 5, true);
        assert_eq!(on.text(), "+*");
        let off = StatusIndicator::new(&handle, StatusKind::Sleep, 5, 5, false);
        assert_eq!(off.text(), "-Z");
    }

    #[test]
    fn rises_and_cleans_up() {
        let (p, handle) = probe(40, 20);
        let ind = StatusIndicator::new(&handle, StatusKind::Freezing, 8, 10, true);
        ind.play(Duration::from_millis(600), &ScaledTempo::new(0.0));
        let p = p.borrow();
        assert_eq!(p.live_count(), 0);
        assert_eq!(p.redraw_count(), 3);
    }

    #[test]
    fn off_surface_position_is_a_noop() {
        let (p, handle) = probe(20, 10);
        let ind = StatusIndicator::new(&handle, StatusKind::Poison, -5, 3, true);
        ind.play(Duration::from_millis(600), &ScaledTempo::new(0.0));
        let p = p.borrow();
        assert_eq!(p.live_count(), 0);
        assert_eq!(p.redraw_count(), 0);
    }

    #[test]
    fn bounds_stop_still_cleans_up() {
        let (p, handle) = probe(40, 20);
        // One row below the top: the first rise lands on row 0, the
        // second fails and ends the loop early
        let ind = StatusIndicator::new(&handle, StatusKind::Confusion, 8, 1, true);
        ind.play(Duration::from_millis(600), &ScaledTempo::new(0.0));
        assert_eq!(p.borrow().live_count(), 0);
    }
}
