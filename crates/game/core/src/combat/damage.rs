//! Damage curve: maps a modified attack total to a damage multiplier.
//!
//! The curve is piecewise. It is punishing at the bottom, linear through
//! the middle and exponential once a roll clears 9. Past 14 it flattens into a
//! gentle linear tail so stacked modifiers cannot run away.
//!
//! | modified total | multiplier |
//! |---|---|
//! | ≤ 2 | `max(0, -1 + softener)` |
//! | (2, 5] | 0 |
//! | (5, 6] | 0.4 |
//! | (6, 9] | +0.3 per point, reaching 1.3 at 9 |
//! | (9, 14) | `1.3 · e^((t − 9) / 4)` |
//! | ≥ 14 | `1.3 · e^1.25 + 0.15 · (t − 14)` |
//!
//! The result is rounded to three decimals, then halved for half-damage
//! attacks.

/// Exponential ramp coefficient and its knee.
const RAMP_SCALE: f64 = 1.3;
const RAMP_START: f64 = 9.0;
const RAMP_DIVISOR: f64 = 4.0;

/// Where the ramp hands over to the linear tail.
const TAIL_START: f64 = 14.0;
const TAIL_SLOPE: f64 = 0.15;

/// Fixed-point scale used for the final floor so that products such as
/// `10 × 0.7` land on the exact integer.
const FIXED_POINT: f64 = 10_000.0;

fn ramp(total: f64) -> f64 {
    RAMP_SCALE * ((total - RAMP_START) / RAMP_DIVISOR).exp()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Multiplier for a modified total.
///
/// `crit_fail_softener` only matters in the critical-failure band. Players pass
/// `skill × 0.25`; every other attacker passes 0.
pub fn multiplier(total: f64, half: bool, crit_fail_softener: f64) -> f64 {
    let raw = if total <= 2.0 {
        (-1.0 + crit_fail_softener).max(0.0)
    } else if total <= 5.0 {
        0.0
    } else if total <= 6.0 {
        0.4
    } else if total <= RAMP_START {
        0.4 + 0.3 * (total - 6.0)
    } else if total < TAIL_START {
        ramp(total)
    } else {
        ramp(TAIL_START) + TAIL_SLOPE * (total - TAIL_START)
    };

    let rounded = round3(raw);
    if half {
        rounded / 2.0
    } else {
        rounded
    }
}

/// Final damage: `floor(base × multiplier)`, never negative.
pub fn final_damage(base: i32, multiplier: f64) -> i32 {
    let fixed = (multiplier * FIXED_POINT).round() as i64;
    let scaled = i64::from(base) * fixed;
    scaled.div_euclid(FIXED_POINT as i64).max(0) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(total: i32) -> f64 {
        multiplier(f64::from(total), false, 0.0)
    }

    #[test]
    fn band_anchor_values() {
        assert_eq!(full(2), 0.0);
        assert_eq!(full(3), 0.0);
        assert_eq!(full(5), 0.0);
        assert_eq!(full(6), 0.4);
        assert_eq!(full(7), 0.7);
        assert_eq!(full(8), 1.0);
        assert_eq!(full(9), 1.3);
        assert_eq!(full(10), 1.669);
        assert_eq!(full(12), 2.752);
        assert_eq!(full(14), 4.537);
        assert_eq!(full(16), 4.837);
    }

    #[test]
    fn exponential_ramp_is_continuous_into_the_tail() {
        let before = multiplier(13.999, false, 0.0);
        let at = multiplier(14.0, false, 0.0);
        assert!(before <= at);
        assert!(at - before < 0.01);
    }

    #[test]
    fn negative_totals_use_the_crit_fail_band() {
        assert_eq!(full(-3), 0.0);
        assert_eq!(multiplier(-3.0, false, 1.5), 0.5);
    }

    #[test]
    fn softener_below_one_yields_zero() {
        assert_eq!(multiplier(2.0, false, 0.5), 0.0);
        assert_eq!(multiplier(2.0, false, 1.0), 0.0);
        assert_eq!(multiplier(2.0, false, 1.25), 0.25);
    }

    #[test]
    fn half_damage_halves_after_rounding() {
        assert_eq!(multiplier(10.0, true, 0.0), 1.669 / 2.0);
        assert_eq!(multiplier(6.0, true, 0.0), 0.2);
    }

    #[test]
    fn final_damage_floors() {
        assert_eq!(final_damage(8, 1.3), 10);
        assert_eq!(final_damage(10, 0.7), 7);
        assert_eq!(final_damage(3, 0.7), 2);
        assert_eq!(final_damage(8, 2.752), 22);
        assert_eq!(final_damage(5, 0.0), 0);
        assert_eq!(final_damage(0, 4.537), 0);
    }

    #[test]
    fn final_damage_is_never_negative() {
        assert_eq!(final_damage(-4, 1.0), 0);
    }

    mod properties {
        use super::super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn multiplier_is_non_negative(total in -50.0f64..50.0, half in any::<bool>(), softener in 0.0f64..10.0) {
                prop_assert!(multiplier(total, half, softener) >= 0.0);
            }

            #[test]
            fn multiplier_is_monotonic_above_six(a in 6.0f64..40.0, b in 6.0f64..40.0) {
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                prop_assert!(multiplier(lo, false, 0.0) <= multiplier(hi, false, 0.0));
                prop_assert!(multiplier(lo, true, 0.0) <= multiplier(hi, true, 0.0));
            }

            #[test]
            fn half_is_exactly_half(total in -20.0f64..40.0, softener in 0.0f64..5.0) {
                let full = multiplier(total, false, softener);
                let half = multiplier(total, true, softener);
                prop_assert_eq!(half, full / 2.0);
            }

            #[test]
            fn damage_is_non_negative(base in -10i32..100, total in -20.0f64..40.0) {
                prop_assert!(final_damage(base, multiplier(total, false, 0.0)) >= 0);
            }
        }
    }
}
