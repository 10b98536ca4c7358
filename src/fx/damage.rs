/// Floating combat numbers: damage rises and disappears, heals rise in
/// green, a miss wobbles in place. One token per number, disposed on
/// every exit path.

use std::time::Duration;

use rand::{Rng, RngCore};

use crate::domain::style::{Hue, Tint};

use super::surface::SurfaceHandle;
use super::tempo::Tempo;
use super::token::GlyphToken;

/// Rise cadence: one row per ~150ms of nominal duration.
const RISE_STEP: f64 = 0.15;
/// Half-cycle of the miss wobble.
const WOBBLE_DELAY: Duration = Duration::from_millis(100);
/// Rows at or above this never scroll further up.
const TOP_MARGIN: i32 = 1;

pub struct DamageNumber {
    surface: SurfaceHandle,
    token: GlyphToken,
    x: i32,
    y: i32,
    miss: bool,
}

impl DamageNumber {
    /// `amount == 0` reads as a miss unless `is_heal` is set.
    pub fn new(
        surface: &SurfaceHandle,
        amount: i32,
        x: i32,
        y: i32,
        is_critical: bool,
        is_heal: bool,
    ) -> Self {
        let (text, tint) = if is_heal {
            (format!("+{amount}"), Tint::bold(Hue::Green))
        } else if amount == 0 {
            ("MISS".to_string(), Tint::plain(Hue::Grey))
        } else if is_critical {
            (format!("!{amount}!"), Tint::bold(Hue::Yellow))
        } else {
            (amount.to_string(), Tint::plain(Hue::White))
        };
        let miss = amount == 0 && !is_heal;
        DamageNumber {
            surface: surface.clone(),
            token: GlyphToken::new(surface, text, tint),
            x,
            y,
            miss,
        }
    }

    #[allow(dead_code)]
    pub fn text(&self) -> &str {
        self.token.text()
    }

    /// Run the full animation. A failed initial placement is a silent
    /// no-op; a mid-flight bounds failure ends the rise early. The
    /// token is gone from the surface when this returns.
    pub fn play(mut self, duration: Duration, tempo: &dyn Tempo, rng: &mut dyn RngCore) {
        if self.miss {
            self.play_miss(tempo, rng);
            return;
        }
        if !self.token.place(self.x, self.y) {
            return;
        }

        let steps = ((duration.as_secs_f64() / RISE_STEP) as u32).max(3);
        let step_delay = duration / steps;
        for _ in 0..steps {
            self.surface.borrow_mut().redraw();
            tempo.wait(step_delay);
            match self.token.position() {
                Some((_, y)) if y > TOP_MARGIN => {
                    if !self.token.shift(0, -1) {
                        break;
                    }
                }
                _ => break,
            }
        }
        self.token.dispose();
    }

    /// Wobble left/right instead of rising.
    fn play_miss(&mut self, tempo: &dyn Tempo, rng: &mut dyn RngCore) {
        if !self.token.place(self.x, self.y) {
            return;
        }
        for _ in 0..3 {
            self.surface.borrow_mut().redraw();
            tempo.wait(WOBBLE_DELAY);
            let dx = if rng.gen_bool(0.5) { 1 } else { -1 };
            self.token.shift(dx, 0);
            self.surface.borrow_mut().redraw();
            tempo.wait(WOBBLE_DELAY);
            let dx = if rng.gen_bool(0.5) { -1 } else { 1 };
            self.token.shift(dx, 0);
        }
        self.token.dispose();
    }
}
