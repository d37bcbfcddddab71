//! Result-table assembly shared by the CLI and the web adapters.
//!
//! Both front ends show the same thing: one row per estimation method with the
//! rounded 1RM, the rounded target load at the requested percent, and the plate
//! math for that target. This module owns that pipeline so the two shells stay
//! in lockstep.

use serde::Serialize;

use crate::domain::{Exercise, Loading};
use crate::error::InputError;
use crate::formulas::{
    DEFAULT_INCREMENT, brzycki_1rm, class_rule_1rm, epley_1rm, percent_of_1rm, round_to_increment,
};
use crate::plates::{format_plate_plan, plate_math};

/// Percentages shown in the common-percentages table.
pub const COMMON_PERCENTS: [f64; 8] = [60.0, 65.0, 70.0, 75.0, 80.0, 85.0, 90.0, 100.0];

/// The three estimation methods shown side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    ClassRule,
    Epley,
    Brzycki,
}

impl Method {
    /// Returns all methods in display order.
    pub fn all() -> &'static [Method] {
        &[Method::ClassRule, Method::Epley, Method::Brzycki]
    }

    /// Display label; the class rule carries its add-on ("Class +10").
    pub fn label(&self, add_on_lbs: f64) -> String {
        match self {
            Method::ClassRule => format!("Class +{add_on_lbs:.0}"),
            Method::Epley => "Epley".to_string(),
            Method::Brzycki => "Brzycki".to_string(),
        }
    }

    /// Raw (unrounded) 1RM estimate for this method.
    fn estimate(&self, weight_lbs: f64, reps: u32, add_on_lbs: f64) -> f64 {
        match self {
            Method::ClassRule => class_rule_1rm(weight_lbs, add_on_lbs),
            Method::Epley => epley_1rm(weight_lbs, reps),
            Method::Brzycki => brzycki_1rm(weight_lbs, reps),
        }
    }
}

/// One report request: the numbers a user would type into either front end.
#[derive(Debug, Clone)]
pub struct ReportInputs {
    pub exercise: Exercise,
    pub weight_lbs: f64,
    pub reps: u32,
    pub add_on_lbs: f64,
    pub percent: f64,
    /// Empty-sled weight for the leg press; ignored for other exercises.
    pub sled_weight_lbs: Option<f64>,
    /// Plate denominations, heaviest first.
    pub plate_sizes: Vec<f64>,
}

impl ReportInputs {
    /// Checks the numeric bounds the original form widgets enforced: all
    /// numbers finite, weights non-negative, plate sizes positive.
    ///
    /// The engine itself never validates; anything that passes here is safe to
    /// feed straight through.
    pub fn validate(&self) -> Result<(), InputError> {
        check_finite("weight", self.weight_lbs)?;
        check_non_negative("weight", self.weight_lbs)?;
        check_finite("add-on", self.add_on_lbs)?;
        check_finite("percent", self.percent)?;

        if let Some(sled) = self.sled_weight_lbs {
            check_finite("sled weight", sled)?;
            check_non_negative("sled weight", sled)?;
        }

        if self.plate_sizes.is_empty() {
            return Err(InputError::EmptyPlates);
        }
        for &size in &self.plate_sizes {
            if !size.is_finite() || size <= 0.0 {
                return Err(InputError::InvalidPlateSize(size.to_string()));
            }
        }

        Ok(())
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::NonFinite { name, value })
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), InputError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(InputError::Negative { name, value })
    }
}

/// Parses a comma-separated plate list like `45,25,10,5,2.5`.
pub fn parse_plate_sizes(s: &str) -> Result<Vec<f64>, InputError> {
    let sizes: Vec<f64> = s
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>()
                .map_err(|_| InputError::InvalidPlateSize(part.to_string()))
        })
        .collect::<Result<_, _>>()?;

    if sizes.is_empty() {
        return Err(InputError::EmptyPlates);
    }
    Ok(sizes)
}

// === Row Types ===

/// One row of the main results table.
#[derive(Debug, Clone, Serialize)]
pub struct MethodRow {
    pub method: String,
    /// Estimated 1RM, rounded to the display increment.
    pub one_rm_lbs: f64,
    pub percent: f64,
    /// Target load at `percent`, rounded to the display increment.
    pub target_lbs: f64,
    /// Plate plan string, or a placeholder when plate math does not apply.
    pub plates: String,
}

/// The common-percentages table for one method.
#[derive(Debug, Clone, Serialize)]
pub struct PercentTable {
    pub method: String,
    pub one_rm_lbs: f64,
    pub rows: Vec<PercentRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PercentRow {
    pub percent: f64,
    pub target_lbs: f64,
    pub plates: String,
}

// === Assembly ===

/// Builds the per-method results table for one set of inputs.
///
/// Each estimate is rounded before scaling and the scaled target is rounded
/// again, so the table only ever shows loads on the display increment.
pub fn build_report(inputs: &ReportInputs) -> Vec<MethodRow> {
    Method::all()
        .iter()
        .map(|method| {
            let estimate = method.estimate(inputs.weight_lbs, inputs.reps, inputs.add_on_lbs);
            let one_rm = round_to_increment(estimate, DEFAULT_INCREMENT);
            let target =
                round_to_increment(percent_of_1rm(one_rm, inputs.percent), DEFAULT_INCREMENT);

            MethodRow {
                method: method.label(inputs.add_on_lbs),
                one_rm_lbs: one_rm,
                percent: inputs.percent,
                target_lbs: target,
                plates: plate_summary(inputs, target),
            }
        })
        .collect()
}

/// Builds the common-percentages tables (60-100%), one per method.
pub fn build_percent_tables(inputs: &ReportInputs) -> Vec<PercentTable> {
    Method::all()
        .iter()
        .map(|method| {
            let estimate = method.estimate(inputs.weight_lbs, inputs.reps, inputs.add_on_lbs);
            let one_rm = round_to_increment(estimate, DEFAULT_INCREMENT);

            let rows = COMMON_PERCENTS
                .iter()
                .map(|&percent| {
                    let target =
                        round_to_increment(percent_of_1rm(one_rm, percent), DEFAULT_INCREMENT);
                    PercentRow {
                        percent,
                        target_lbs: target,
                        plates: plate_summary(inputs, target),
                    }
                })
                .collect();

            PercentTable {
                method: method.label(inputs.add_on_lbs),
                one_rm_lbs: one_rm,
                rows,
            }
        })
        .collect()
}

/// Plate-math column for a target load, honoring the exercise's loading kind.
fn plate_summary(inputs: &ReportInputs, target_lbs: f64) -> String {
    match inputs.exercise.loading() {
        Loading::Barbell { bar_weight_lbs } => {
            format_plate_plan(&plate_math(target_lbs, bar_weight_lbs, &inputs.plate_sizes))
        }
        Loading::Sled => match inputs.sled_weight_lbs {
            Some(sled) if sled > 0.0 => {
                format_plate_plan(&plate_math(target_lbs, sled, &inputs.plate_sizes))
            }
            _ => "Set sled weight".to_string(),
        },
        Loading::Fixed => "—".to_string(),
    }
}
