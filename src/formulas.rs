//! Strength calculation formulas: 1RM estimation, percent scaling, and rounding.

/// Increment (lb) that all displayed loads are rounded to.
pub const DEFAULT_INCREMENT: f64 = 5.0;

/// Default class-rule add-on (lb).
pub const DEFAULT_ADD_ON: f64 = 10.0;

/// Rounds `x` to the nearest multiple of `increment`.
///
/// Ties round half-away-from-zero (`f64::round` semantics); since every
/// displayed load passes through here, this one rule determines all downstream
/// output. An `increment` of zero or less returns `x` unchanged.
pub fn round_to_increment(x: f64, increment: f64) -> f64 {
    if increment <= 0.0 {
        return x;
    }
    (x / increment).round() * increment
}

/// Class rule: 1RM is the measured working weight plus a fixed add-on
/// (default +10 lb), floored at zero. Ignores reps entirely.
pub fn class_rule_1rm(weight_lbs: f64, add_on_lbs: f64) -> f64 {
    (weight_lbs + add_on_lbs).max(0.0)
}

/// Epley (1985): 1RM = w × (1 + r/30).
///
/// Reps are clamped to a minimum of 1. Reasonable for 1-10 reps; there is no
/// upper clamp, accuracy simply degrades beyond that range.
pub fn epley_1rm(weight_lbs: f64, reps: u32) -> f64 {
    let r = reps.max(1) as f64;
    weight_lbs * (1.0 + r / 30.0)
}

/// Brzycki (1993): 1RM = w × 36 / (37 - r).
///
/// Reps are clamped to a minimum of 1. At 37 or more reps the denominator hits
/// zero or goes negative, so the formula falls back to the input weight
/// unchanged rather than blowing up.
pub fn brzycki_1rm(weight_lbs: f64, reps: u32) -> f64 {
    let r = reps.max(1);
    if r >= 37 {
        return weight_lbs;
    }
    weight_lbs * 36.0 / (37.0 - r as f64)
}

/// Returns the target load at a given percent of a 1RM.
///
/// No clamping: values above 100 (over-max work) are meaningful to the caller.
pub fn percent_of_1rm(one_rm: f64, percent: f64) -> f64 {
    one_rm * (percent / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_nearest_five() {
        assert_eq!(round_to_increment(117.0, 5.0), 115.0);
        assert_eq!(round_to_increment(203.5, 5.0), 205.0);
        assert_eq!(round_to_increment(0.0, 5.0), 0.0);
    }

    #[test]
    fn test_round_ties_go_away_from_zero() {
        assert_eq!(round_to_increment(2.5, 5.0), 5.0);
        assert_eq!(round_to_increment(-2.5, 5.0), -5.0);
        assert_eq!(round_to_increment(-7.5, 5.0), -10.0);
    }

    #[test]
    fn test_round_is_idempotent() {
        for x in [-312.7, -2.5, 0.0, 1.0, 62.4, 117.0, 203.5, 9_999.9] {
            let once = round_to_increment(x, 5.0);
            assert_eq!(round_to_increment(once, 5.0), once);
        }
    }

    #[test]
    fn test_round_degenerate_increment_is_identity() {
        assert_eq!(round_to_increment(117.3, 0.0), 117.3);
        assert_eq!(round_to_increment(117.3, -5.0), 117.3);
    }

    #[test]
    fn test_class_rule_adds_fixed_amount() {
        assert_eq!(class_rule_1rm(185.0, 10.0), 195.0);
        assert_eq!(class_rule_1rm(0.0, 10.0), 10.0);
    }

    #[test]
    fn test_class_rule_floors_at_zero() {
        assert_eq!(class_rule_1rm(0.0, -10.0), 0.0);
        assert_eq!(class_rule_1rm(5.0, -20.0), 0.0);
    }

    #[test]
    fn test_epley_known_values() {
        assert_eq!(epley_1rm(100.0, 1), 100.0 * (1.0 + 1.0 / 30.0));
        assert_eq!(epley_1rm(100.0, 10), 100.0 * (1.0 + 10.0 / 30.0));
    }

    #[test]
    fn test_epley_clamps_reps_to_one() {
        assert_eq!(epley_1rm(100.0, 0), epley_1rm(100.0, 1));
    }

    #[test]
    fn test_brzycki_known_values() {
        // 1 rep: 36 / 36 = 1, the estimate equals the weight
        assert_eq!(brzycki_1rm(100.0, 1), 100.0);
        // 36 reps: last rep count before the singularity
        assert_eq!(brzycki_1rm(100.0, 36), 3600.0);
    }

    #[test]
    fn test_brzycki_out_of_domain_falls_back_to_weight() {
        assert_eq!(brzycki_1rm(100.0, 37), 100.0);
        assert_eq!(brzycki_1rm(100.0, 50), 100.0);
    }

    #[test]
    fn test_brzycki_clamps_reps_to_one() {
        assert_eq!(brzycki_1rm(100.0, 0), brzycki_1rm(100.0, 1));
    }

    #[test]
    fn test_percent_of_1rm() {
        assert_eq!(percent_of_1rm(200.0, 50.0), 100.0);
        assert_eq!(percent_of_1rm(200.0, 110.0), 220.0);
        assert_eq!(percent_of_1rm(200.0, 0.0), 0.0);
    }
}
