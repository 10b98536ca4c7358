/// Frame pacing. Every inter-frame delay in the engine goes through a
/// `Tempo`, which applies the global time-scale factor before blocking.
/// Scale 0 disables delays entirely (used by tests and by players who
/// want instant battles).

use std::thread;
use std::time::Duration;

pub trait Tempo {
    /// Block for `base` scaled by the global speed factor.
    fn wait(&self, base: Duration);
}

pub struct ScaledTempo {
    scale: f64,
}

impl ScaledTempo {
    pub fn new(scale: f64) -> Self {
        // Negative or NaN scales would panic in mul_f64
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 0.0 };
        ScaledTempo { scale }
    }
}

impl Tempo for ScaledTempo {
    fn wait(&self, base: Duration) {
        let scaled = base.mul_f64(self.scale);
        if !scaled.is_zero() {
            thread::sleep(scaled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_scale_returns_immediately() {
        let t = ScaledTempo::new(0.0);
        let before = std::time::Instant::now();
        t.wait(Duration::from_secs(60));
        assert!(before.elapsed() < Duration::from_millis(50));
    }

    #[test]
    fn bad_scales_are_neutralized() {
        // Must not panic
        ScaledTempo::new(-3.0).wait(Duration::from_secs(1));
        ScaledTempo::new(f64::NAN).wait(Duration::from_secs(1));
    }
}
