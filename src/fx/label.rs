/// Effectiveness label: "SUPER!" above a super-effective hit,
/// "WEAK..." above a resisted one, nothing at all for a neutral
/// multiplier.

use std::time::Duration;

use crate::domain::style::{Hue, Tint};

use super::surface::SurfaceHandle;
use super::tempo::Tempo;
use super::token::GlyphToken;

pub struct EffectLabel {
    surface: SurfaceHandle,
    token: Option<GlyphToken>,
    x: i32,
    y: i32,
}

impl EffectLabel {
    pub fn new(surface: &SurfaceHandle, x: i32, y: i32, effectiveness: f64) -> Self {
        let token = if effectiveness > 1.0 {
            Some(GlyphToken::new(surface, "SUPER!", Tint::bold(Hue::Green)))
        } else if effectiveness < 1.0 {
            Some(GlyphToken::new(surface, "WEAK...", Tint::plain(Hue::Red)))
        } else {
            None
        };
        EffectLabel { surface: surface.clone(), token, x, y }
    }

    #[allow(dead_code)]
    pub fn text(&self) -> &str {
        self.token.as_ref().map_or("", |t| t.text())
    }

    /// Hold the label for `duration`, then remove it. Neutral
    /// effectiveness never touches the surface.
    pub fn play(mut self, duration: Duration, tempo: &dyn Tempo) {
        let Some(token) = self.token.as_mut() else {
            return;
        };
        if !token.place(self.x, self.y) {
            return;
        }
        self.surface.borrow_mut().redraw();
        tempo.wait(duration);
        token.dispose();
    }
}

#[cfg(test)]
mod tests {
    use crate::fx::surface::probe::probe;
    use crate::fx::tempo::ScaledTempo;

    use super::*;

    #[test]
    fn label_text_per_multiplier() {
        let (_p, handle) = probe(40, 20);
        assert_eq!(EffectLabel::new(&handle, 5, 5, 1.5).text(), "SUPER!");
        assert_eq!(EffectLabel::new(&handle, 5, 5, 0.5).text(), "WEAK...");
        assert_eq!(EffectLabel::new(&handle, 5, 5, 1.0).text(), "");
    }

    #[test]
    fn neutral_multiplier_never_touches_the_surface() {
        let (p, handle) = probe(40, 20);
        EffectLabel::new(&handle, 5, 5, 1.0).play(
            Duration::from_millis(400),
            &ScaledTempo::new(0.0),
        );
        let p = p.borrow();
        assert!(p.log.is_empty());
    }

    #[test]
    fn label_shows_then_cleans_up() {
        let (p, handle) = probe(40, 20);
        EffectLabel::new(&handle, 5, 5, 2.0).play(
            Duration::from_millis(400),
            &ScaledTempo::new(0.0),
        );
        let p = p.borrow();
        assert_eq!(p.live_count(), 0);
        assert_eq!(p.placements().len(), 1);
        assert_eq!(p.redraw_count(), 1);
    }

    #[test]
    fn off_surface_label_is_a_silent_noop() {
        let (p, handle) = probe(10, 5);
        EffectLabel::new(&handle, 8, 2, 2.0).play(
            Duration::from_millis(400),
            &ScaledTempo::new(0.0),
        );
        let p = p.borrow();
        assert_eq!(p.live_count(), 0);
        assert_eq!(p.redraw_count(), 0);
    }
}
