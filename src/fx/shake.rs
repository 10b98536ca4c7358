/// Screen shake: a burst of rapid repaints whose length scales with
/// attack intensity. No glyphs are placed, so there is nothing to
/// clean up; the "shake" itself is the renderer repainting in quick
/// succession (a renderer may additionally jitter its viewport).

use std::time::Duration;

use crate::domain::intensity::Intensity;

use super::surface::SurfaceHandle;
use super::tempo::Tempo;

const SHAKE_DELAY: Duration = Duration::from_millis(30);

pub fn magnitude(intensity: Intensity) -> u32 {
    match intensity {
        Intensity::Weak => 0,
        Intensity::Normal => 1,
        Intensity::Strong => 2,
        Intensity::Critical => 3,
    }
}

pub struct ScreenShake {
    surface: SurfaceHandle,
    intensity: Intensity,
}

impl ScreenShake {
    pub fn new(surface: &SurfaceHandle, intensity: Intensity) -> Self {
        ScreenShake { surface: surface.clone(), intensity }
    }

    pub fn play(&self, tempo: &dyn Tempo) {
        let amount = magnitude(self.intensity);
        if amount == 0 {
            return;
        }
        for _ in 0..amount * 2 {
            self.surface.borrow_mut().redraw();
            tempo.wait(SHAKE_DELAY);
        }
    }
}
