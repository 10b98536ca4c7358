/// Hit flash: the attack type's impact glyphs pulse at the four points
/// just outside the corners of the target's icon. A corner that falls
/// off the surface is skipped; the rest still flash.

use std::time::Duration;

use crate::domain::entity::IconRect;
use crate::domain::style::AttackStyle;

use super::surface::SurfaceHandle;
use super::tempo::Tempo;
use super::token::GlyphToken;

const FLASH_DELAY: Duration = Duration::from_millis(80);

pub struct HitFlash {
    surface: SurfaceHandle,
    target: IconRect,
    style: &'static AttackStyle,
}

impl HitFlash {
    pub fn new(surface: &SurfaceHandle, target: IconRect, style: &'static AttackStyle) -> Self {
        HitFlash { surface: surface.clone(), target, style }
    }

    fn corners(&self) -> [(i32, i32); 4] {
        let t = self.target;
        [
            (t.x - 1, t.y),
            (t.x + t.width, t.y),
            (t.x - 1, t.y + t.height - 1),
            (t.x + t.width, t.y + t.height - 1),
        ]
    }

    /// One pulse per impact glyph, capped at `flashes`. Every pulse
    /// disposes its corner tokens before the next begins.
    pub fn play(&self, flashes: usize, tempo: &dyn Tempo) {
        let corners = self.corners();
        for glyph in self.style.impact.iter().take(flashes) {
            let mut burst: Vec<GlyphToken> = Vec::with_capacity(4);
            for (x, y) in corners {
                let mut tok =
                    GlyphToken::new(&self.surface, glyph.to_string(), self.style.tint);
                if tok.place(x, y) {
                    burst.push(tok);
                }
            }
            self.surface.borrow_mut().redraw();
            tempo.wait(FLASH_DELAY);
            for tok in &mut burst {
                tok.dispose();
            }
        }
    }
}
