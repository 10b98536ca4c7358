/// Particle stream: a handful of type-styled glyphs drifting from one
/// point to another with per-step jitter, leaving a short trail of the
/// style's trail glyph behind the stream head.
///
/// A particle that fails to spawn, or whose move lands off the
/// surface, drops out of the active set; whatever was placed is
/// disposed when the stream finishes, however far it got.

use std::time::Duration;

use rand::{Rng, RngCore};

use crate::domain::style::AttackStyle;

use super::surface::SurfaceHandle;
use super::tempo::Tempo;
use super::token::GlyphToken;

const STEP_DELAY: Duration = Duration::from_millis(50);
const TRAIL_LEN: usize = 3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Trajectory {
    /// Straight interpolation from start to end.
    Line,
    /// Lobbed: the path is lifted by the parabola 6·t·(1−t) rows.
    Arc,
}

struct Particle {
    token: GlyphToken,
    live: bool,
}

pub struct ParticleStream {
    surface: SurfaceHandle,
    start: (i32, i32),
    end: (i32, i32),
    style: &'static AttackStyle,
    trajectory: Trajectory,
}

impl ParticleStream {
    pub fn new(
        surface: &SurfaceHandle,
        start: (i32, i32),
        end: (i32, i32),
        style: &'static AttackStyle,
        trajectory: Trajectory,
    ) -> Self {
        ParticleStream {
            surface: surface.clone(),
            start,
            end,
            style,
            trajectory,
        }
    }

    /// Stream head position at progress `t` in [0, 1].
    fn head_at(&self, t: f64) -> (i32, i32) {
        let x = self.start.0 as f64 + (self.end.0 - self.start.0) as f64 * t;
        let y = self.start.1 as f64 + (self.end.1 - self.start.1) as f64 * t;
        let lift = match self.trajectory {
            Trajectory::Line => 0.0,
            Trajectory::Arc => 6.0 * t * (1.0 - t),
        };
        (x.round() as i32, (y - lift).round() as i32)
    }

    pub fn play(&self, count: usize, tempo: &dyn Tempo, rng: &mut dyn RngCore) {
        let mut particles: Vec<Particle> = Vec::with_capacity(count);
        for _ in 0..count {
            let mut token = GlyphToken::new(
                &self.surface,
                self.style.particle.to_string(),
                self.style.tint,
            );
            let ox: i32 = rng.gen_range(-1..=1);
            let oy: i32 = rng.gen_range(-1..=1);
            if token.place(self.start.0 + ox, self.start.1 + oy) {
                particles.push(Particle { token, live: true });
            }
        }

        let dx = (self.end.0 - self.start.0).abs();
        let dy = (self.end.1 - self.start.1).abs();
        let steps = dx.max(dy).max(1);
        let mut trail: Vec<GlyphToken> = Vec::with_capacity(TRAIL_LEN + 1);

        for step in 0..steps {
            let t = step as f64 / steps as f64;
            let head = self.head_at(t);

            for p in particles.iter_mut().filter(|p| p.live) {
                let target = (head.0 + rng.gen_range(-1..=1), head.1 + rng.gen_range(-1..=1));
                let Some((px, py)) = p.token.position() else {
                    p.live = false;
                    continue;
                };
                if !p.token.shift(target.0 - px, target.1 - py) {
                    p.live = false;
                }
            }

            if step > 0 {
                let prev = self.head_at((step - 1) as f64 / steps as f64);
                let mut dot = GlyphToken::new(
                    &self.surface,
                    self.style.trail.to_string(),
                    self.style.tint,
                );
                if dot.place(prev.0, prev.1) {
                    trail.push(dot);
                }
                if trail.len() > TRAIL_LEN {
                    let mut oldest = trail.remove(0);
                    oldest.dispose();
                }
            }

            self.surface.borrow_mut().redraw();
            tempo.wait(STEP_DELAY);
        }

        for p in &mut particles {
            p.token.dispose();
        }
        for dot in &mut trail {
            dot.dispose();
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::domain::style::AttackKind;
    use crate::fx::surface::probe::probe;
    use crate::fx::tempo::ScaledTempo;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn stream_runs_and_cleans_up() {
        let (p, handle) = probe(70, 24);
        let stream = ParticleStream::new(
            &handle,
            (10, 12),
            (50, 6),
            AttackKind::Water.style(),
            Trajectory::Line,
        );
        stream.play(3, &ScaledTempo::new(0.0), &mut rng());
        let p = p.borrow();
        assert_eq!(p.live_count(), 0);
        assert!(!p.placements().is_empty());
        assert_eq!(p.redraw_count(), 40); // steps = |Δx| = 40
    }

    #[test]
    fn arc_also_cleans_up() {
        let (p, handle) = probe(70, 24);
        let stream = ParticleStream::new(
            &handle,
            (8, 10),
            (60, 10),
            AttackKind::Electro.style(),
            Trajectory::Arc,
        );
        stream.play(3, &ScaledTempo::new(0.0), &mut rng());
        assert_eq!(p.borrow().live_count(), 0);
    }

    #[test]
    fn arc_lifts_the_midpoint() {
        let (_p, handle) = probe(70, 24);
        let stream = ParticleStream::new(
            &handle,
            (0, 10),
            (40, 10),
            AttackKind::Electro.style(),
            Trajectory::Arc,
        );
        let (_, y_mid) = stream.head_at(0.5);
        assert_eq!(y_mid, 9); // 10 − 6·0.5·0.5 = 8.5, rounded
        let (_, y_start) = stream.head_at(0.0);
        assert_eq!(y_start, 10);
        let (_, y_end) = stream.head_at(1.0);
        assert_eq!(y_end, 10);
    }

    #[test]
    fn off_surface_spawn_drops_every_particle() {
        let (p, handle) = probe(30, 20);
        let stream = ParticleStream::new(
            &handle,
            (200, 200),
            (220, 200),
            AttackKind::Normal.style(),
            Trajectory::Line,
        );
        stream.play(3, &ScaledTempo::new(0.0), &mut rng());
        assert_eq!(p.borrow().live_count(), 0);
    }

    #[test]
    fn degenerate_stream_takes_one_step() {
        let (p, handle) = probe(30, 20);
        let stream = ParticleStream::new(
            &handle,
            (10, 10),
            (10, 10),
            AttackKind::Stone.style(),
            Trajectory::Line,
        );
        stream.play(2, &ScaledTempo::new(0.0), &mut rng());
        let p = p.borrow();
        assert_eq!(p.redraw_count(), 1);
        assert_eq!(p.live_count(), 0);
    }
}
