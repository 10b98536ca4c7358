/// Attack intensity classification.
///
/// Pure function over (damage, strike factor) — no side effects.
/// Effective power = damage × factor, banded as:
///
/// ┌──────────────────┬───────────┐
/// │ Effective power   │ Tier      │
/// ├──────────────────┼───────────┤
/// │ ≤ 2               │ Weak      │
/// │ ≤ 5               │ Normal    │
/// │ ≤ 10              │ Strong    │
/// │ > 10              │ Critical  │
/// └──────────────────┴───────────┘
///
/// Boundaries are inclusive on the lower tier: exactly 2 is Weak,
/// exactly 5 is Normal, exactly 10 is Strong.

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Intensity {
    Weak,
    Normal,
    Strong,
    Critical,
}

pub fn classify(damage: i32, factor: f64) -> Intensity {
    let effective_power = damage as f64 * factor;
    if effective_power <= 2.0 {
        Intensity::Weak
    } else if effective_power <= 5.0 {
        Intensity::Normal
    } else if effective_power <= 10.0 {
        Intensity::Strong
    } else {
        Intensity::Critical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries_are_inclusive_below() {
        assert_eq!(classify(2, 1.0), Intensity::Weak);
        assert_eq!(classify(5, 1.0), Intensity::Normal);
        assert_eq!(classify(10, 1.0), Intensity::Strong);
        assert_eq!(classify(11, 1.0), Intensity::Critical);
    }

    #[test]
    fn factor_scales_damage() {
        assert_eq!(classify(1, 1.0), Intensity::Weak);
        assert_eq!(classify(5, 1.5), Intensity::Strong); // 7.5
        assert_eq!(classify(10, 2.0), Intensity::Critical); // 20
        assert_eq!(classify(3, 1.5), Intensity::Normal); // 4.5
    }

    #[test]
    fn zero_damage_is_weak() {
        assert_eq!(classify(0, 0.0), Intensity::Weak);
        assert_eq!(classify(0, 99.0), Intensity::Weak);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(Intensity::Weak < Intensity::Normal);
        assert!(Intensity::Normal < Intensity::Strong);
        assert!(Intensity::Strong < Intensity::Critical);
    }

    #[test]
    fn monotonic_in_effective_power() {
        let mut last = Intensity::Weak;
        for tenths in 0..300 {
            let tier = classify(tenths, 0.1);
            assert!(tier >= last, "tier dropped at power {}", tenths as f64 * 0.1);
            last = tier;
        }
    }
}
