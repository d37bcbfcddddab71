//! Barbell and sled plate math: greedy per-side decomposition and plan
//! formatting.
//!
//! The decomposition is the standard gym heuristic, not an optimal change-maker:
//! it walks the available denominations in caller order and takes as many of
//! each as fit. It is not guaranteed to use the fewest plates or to hit the
//! target exactly; whatever cannot be represented is reported as a remainder.

use serde::Serialize;

/// Default bar weight (lb) for a standard olympic barbell.
pub const DEFAULT_BAR_WEIGHT: f64 = 45.0;

/// Default plate denominations (lb), heaviest first.
pub const DEFAULT_PLATE_SIZES: [f64; 4] = [45.0, 25.0, 10.0, 5.0];

/// Remainders smaller than this (lb) count as an exact solution.
pub const REMAINDER_EPSILON: f64 = 0.01;

/// One denomination and how many of it go on each side of the bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlateCount {
    pub size_lbs: f64,
    pub per_side: u32,
}

/// A per-side loading plan plus the residual load the given denominations
/// cannot represent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatePlan {
    /// Plates in the same order as the input denominations; counts are ≥ 1.
    pub plates: Vec<PlateCount>,
    /// Leftover per-side load (lb), rounded to 4 decimal places. Negative means
    /// the requested total was below the bar or sled's own weight.
    pub remainder_lbs: f64,
}

impl PlatePlan {
    /// True when the plan hits the target within [`REMAINDER_EPSILON`].
    pub fn is_exact(&self) -> bool {
        self.remainder_lbs.abs() < REMAINDER_EPSILON
    }
}

/// Computes the per-side plate loading for a given TOTAL weight, bar included.
///
/// Works for a symmetric two-sided bar or a sled-style machine whose empty
/// weight stands in for `bar_weight`. Denominations are consumed greedily in
/// the order given; callers are expected to supply them heaviest first. The
/// order is a precondition, not enforced here — an ascending list still
/// terminates but silently produces a plate-heavier plan.
///
/// A `total_weight` below `bar_weight` yields an empty plan and a negative
/// remainder equal to the shortfall, signalling "under the bar weight" to the
/// caller rather than failing.
pub fn plate_math(total_weight: f64, bar_weight: f64, plate_sizes: &[f64]) -> PlatePlan {
    if total_weight < bar_weight {
        return PlatePlan {
            plates: Vec::new(),
            remainder_lbs: total_weight - bar_weight,
        };
    }

    let load_total = total_weight - bar_weight;
    let mut per_side = load_total / 2.0;
    let mut plates = Vec::new();

    for &size in plate_sizes {
        let count = (per_side / size).floor() as u32;
        if count > 0 {
            plates.push(PlateCount {
                size_lbs: size,
                per_side: count,
            });
            per_side -= count as f64 * size;
        }
    }

    PlatePlan {
        plates,
        remainder_lbs: round4(per_side),
    }
}

/// Renders a plan like `45×1, 25×1 (per side)`.
///
/// An empty plan renders as `—`. The remainder clause is appended only when
/// its magnitude is at least 0.01 lb, formatted to one decimal place.
pub fn format_plate_plan(plan: &PlatePlan) -> String {
    if plan.plates.is_empty() {
        return "—".to_string();
    }

    let parts: Vec<String> = plan
        .plates
        .iter()
        .map(|p| format!("{}×{}", format_size(p.size_lbs), p.per_side))
        .collect();

    let mut s = format!("{} (per side)", parts.join(", "));
    if plan.remainder_lbs.abs() >= REMAINDER_EPSILON {
        s.push_str(&format!(" + remainder {:.1} lb", plan.remainder_lbs));
    }
    s
}

/// Integral sizes print without a decimal point, fractional ones with a single
/// decimal (45 vs 2.5).
fn format_size(size: f64) -> String {
    if size.fract() == 0.0 {
        format!("{}", size as i64)
    } else {
        format!("{size:.1}")
    }
}

/// Remainders are reported to 4 decimal places.
fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
