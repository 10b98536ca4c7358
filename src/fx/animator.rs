/// BattleAnimator: composes the primitive animators into one beat per
/// combat event, against a single shared surface.
///
/// Every public operation guards on the target having a drawable icon
/// and degrades to a silent no-op otherwise — a skipped flourish must
/// never interrupt combat resolution. Primitives run strictly one
/// after another; each has disposed its glyphs before the next starts.
///
/// Attack beat order:
///   1. hit flash on the defender (skipped on miss / zero damage)
///   2. damage number above the defender (miss shows MISS)
///   3. effectiveness label (skipped on miss / neutral multiplier)
///   4. screen shake when intensity reaches Strong

use rand::RngCore;

use crate::config::{AnimConfig, EffectsConfig};
use crate::domain::entity::{Combatant, IconRect, Strike};
use crate::domain::intensity::{classify, Intensity};
use crate::domain::style::StatusKind;

use super::damage::DamageNumber;
use super::flash::HitFlash;
use super::label::EffectLabel;
use super::particles::{ParticleStream, Trajectory};
use super::shake::ScreenShake;
use super::status::StatusIndicator;
use super::surface::SurfaceHandle;
use super::tempo::{ScaledTempo, Tempo};

/// A hit is critical when it is both well amplified and heavy.
const CRITICAL_EFFECTIVENESS: f64 = 1.2;
const CRITICAL_DAMAGE: i32 = 5;

/// Number/label anchor: icon horizontal center, one row above the
/// icon, never above the top margin.
fn anchor_above(icon: IconRect) -> (i32, i32) {
    (icon.center_x(), (icon.y - 1).max(1))
}

pub struct BattleAnimator {
    surface: SurfaceHandle,
    effects: EffectsConfig,
    tempo: Box<dyn Tempo>,
    rng: Box<dyn RngCore>,
}

impl BattleAnimator {
    pub fn new(surface: SurfaceHandle, config: &AnimConfig) -> Self {
        BattleAnimator::with_parts(
            surface,
            config.effects.clone(),
            Box::new(ScaledTempo::new(config.timing.time_scale)),
            Box::new(rand::thread_rng()),
        )
    }

    /// Full injection point: tests pass a zero-scale tempo and a
    /// seeded RNG.
    pub fn with_parts(
        surface: SurfaceHandle,
        effects: EffectsConfig,
        tempo: Box<dyn Tempo>,
        rng: Box<dyn RngCore>,
    ) -> Self {
        BattleAnimator { surface, effects, tempo, rng }
    }

    /// The complete attack beat. `damage` is what combat resolution
    /// dealt; a miss displays as MISS regardless of the value.
    pub fn play_attack(
        &mut self,
        _attacker: &Combatant,
        defender: &Combatant,
        strike: Strike,
        damage: i32,
        effectiveness: f64,
        is_miss: bool,
    ) {
        let Some(icon) = defender.drawable_icon() else {
            return;
        };
        let style = strike.kind.style();

        if !is_miss && damage > 0 {
            HitFlash::new(&self.surface, icon, style)
                .play(self.effects.flash_count, self.tempo.as_ref());
        }

        let (ax, ay) = anchor_above(icon);
        let is_critical = effectiveness > CRITICAL_EFFECTIVENESS && damage > CRITICAL_DAMAGE;
        let shown = if is_miss { 0 } else { damage };
        DamageNumber::new(&self.surface, shown, ax, ay, is_critical, false).play(
            self.effects.damage_duration(),
            self.tempo.as_ref(),
            self.rng.as_mut(),
        );

        if !is_miss && effectiveness != 1.0 {
            EffectLabel::new(&self.surface, ax - 2, (ay - 1).max(1), effectiveness)
                .play(self.effects.label_duration(), self.tempo.as_ref());
        }

        let intensity = classify(damage, strike.factor);
        if intensity >= Intensity::Strong {
            ScreenShake::new(&self.surface, intensity).play(self.tempo.as_ref());
        }
    }

    /// Ranged delivery: a particle stream from the attacker's icon
    /// edge to the defender's, played before the impact beat.
    pub fn play_projectile(
        &mut self,
        attacker: &Combatant,
        defender: &Combatant,
        strike: Strike,
        trajectory: Trajectory,
    ) {
        let (Some(from), Some(to)) = (attacker.drawable_icon(), defender.drawable_icon())
        else {
            return;
        };
        let start = from.edge_toward(to);
        let end = to.edge_toward(from);
        ParticleStream::new(&self.surface, start, end, strike.kind.style(), trajectory).play(
            self.effects.particle_count,
            self.tempo.as_ref(),
            self.rng.as_mut(),
        );
    }

    /// Status effect landing on (or wearing off) the target.
    /// Unrecognized effect names render nothing.
    pub fn play_status_effect(&mut self, target: &Combatant, effect_name: &str, applied: bool) {
        let Some(icon) = target.drawable_icon() else {
            return;
        };
        let Some(kind) = StatusKind::from_name(effect_name) else {
            return;
        };
        let (ax, ay) = anchor_above(icon);
        StatusIndicator::new(&self.surface, kind, ax, ay, applied)
            .play(self.effects.status_duration(), self.tempo.as_ref());
    }

    pub fn play_heal(&mut self, target: &Combatant, heal_amount: i32) {
        let Some(icon) = target.drawable_icon() else {
            return;
        };
        let (ax, ay) = anchor_above(icon);
        DamageNumber::new(&self.surface, heal_amount, ax, ay, false, true).play(
            self.effects.heal_duration(),
            self.tempo.as_ref(),
            self.rng.as_mut(),
        );
    }
}
