//! Domain types: the class exercise catalog and how each exercise is loaded.

use std::str::FromStr;

use serde::Serialize;

use crate::error::InputError;
use crate::plates::DEFAULT_BAR_WEIGHT;

/// Exercises tracked by the class workout sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    BenchPress,
    LegPress,
    FacePulls,
    GobletSquats,
    WideGripLatPulldown,
    DumbbellIncline,
    LegCurls,
    DumbbellCurls,
    TricepPushdown,
    DumbbellFrontRaises,
    InclineBench,
    SeatedRow,
    DumbbellRdl,
    HammerCurls,
}

/// How a target load is physically set up for an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Loading {
    /// Symmetric two-sided bar with a known bar weight.
    Barbell { bar_weight_lbs: f64 },
    /// Plate-loaded machine; the empty-sled weight comes from the user.
    Sled,
    /// Fixed dumbbells, stacks, or cables: no plate math to show.
    Fixed,
}

impl Exercise {
    /// Returns all exercise variants in worksheet order.
    pub fn all() -> &'static [Exercise] {
        &[
            Exercise::BenchPress,
            Exercise::LegPress,
            Exercise::FacePulls,
            Exercise::GobletSquats,
            Exercise::WideGripLatPulldown,
            Exercise::DumbbellIncline,
            Exercise::LegCurls,
            Exercise::DumbbellCurls,
            Exercise::TricepPushdown,
            Exercise::DumbbellFrontRaises,
            Exercise::InclineBench,
            Exercise::SeatedRow,
            Exercise::DumbbellRdl,
            Exercise::HammerCurls,
        ]
    }

    /// Returns the display name for the exercise.
    pub fn display_name(&self) -> &'static str {
        match self {
            Exercise::BenchPress => "Bench Press",
            Exercise::LegPress => "Leg Press",
            Exercise::FacePulls => "Face Pulls",
            Exercise::GobletSquats => "Goblet Squats",
            Exercise::WideGripLatPulldown => "Wide Grip Lat Pulldown",
            Exercise::DumbbellIncline => "Dumbbell Incline",
            Exercise::LegCurls => "Leg Curls",
            Exercise::DumbbellCurls => "Dumbbell Curls",
            Exercise::TricepPushdown => "Tricep Pushdown",
            Exercise::DumbbellFrontRaises => "Dumbbell Front Raises",
            Exercise::InclineBench => "Incline Bench",
            Exercise::SeatedRow => "Seated Row",
            Exercise::DumbbellRdl => "Dumbbell RDL",
            Exercise::HammerCurls => "Hammer Curls",
        }
    }

    /// Stable kebab-case identifier used by the CLI and the HTTP API.
    pub fn id(&self) -> &'static str {
        match self {
            Exercise::BenchPress => "bench-press",
            Exercise::LegPress => "leg-press",
            Exercise::FacePulls => "face-pulls",
            Exercise::GobletSquats => "goblet-squats",
            Exercise::WideGripLatPulldown => "wide-grip-lat-pulldown",
            Exercise::DumbbellIncline => "dumbbell-incline",
            Exercise::LegCurls => "leg-curls",
            Exercise::DumbbellCurls => "dumbbell-curls",
            Exercise::TricepPushdown => "tricep-pushdown",
            Exercise::DumbbellFrontRaises => "dumbbell-front-raises",
            Exercise::InclineBench => "incline-bench",
            Exercise::SeatedRow => "seated-row",
            Exercise::DumbbellRdl => "dumbbell-rdl",
            Exercise::HammerCurls => "hammer-curls",
        }
    }

    /// How this exercise is loaded. Only the two barbell lifts get automatic
    /// plate math; the leg press gets it once a sled weight is supplied.
    pub fn loading(&self) -> Loading {
        match self {
            Exercise::BenchPress | Exercise::InclineBench => Loading::Barbell {
                bar_weight_lbs: DEFAULT_BAR_WEIGHT,
            },
            Exercise::LegPress => Loading::Sled,
            _ => Loading::Fixed,
        }
    }
}

impl FromStr for Exercise {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "bench-press" | "bench" => Ok(Exercise::BenchPress),
            "leg-press" => Ok(Exercise::LegPress),
            "face-pulls" => Ok(Exercise::FacePulls),
            "goblet-squats" => Ok(Exercise::GobletSquats),
            "wide-grip-lat-pulldown" | "lat-pulldown" => Ok(Exercise::WideGripLatPulldown),
            "dumbbell-incline" => Ok(Exercise::DumbbellIncline),
            "leg-curls" => Ok(Exercise::LegCurls),
            "dumbbell-curls" => Ok(Exercise::DumbbellCurls),
            "tricep-pushdown" => Ok(Exercise::TricepPushdown),
            "dumbbell-front-raises" => Ok(Exercise::DumbbellFrontRaises),
            "incline-bench" | "incline" => Ok(Exercise::InclineBench),
            "seated-row" => Ok(Exercise::SeatedRow),
            "dumbbell-rdl" => Ok(Exercise::DumbbellRdl),
            "hammer-curls" => Ok(Exercise::HammerCurls),
            _ => Err(InputError::UnknownExercise(s.to_string())),
        }
    }
}

impl std::fmt::Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_from_str_ids() {
        assert_eq!(
            Exercise::from_str("bench-press").unwrap(),
            Exercise::BenchPress
        );
        assert_eq!(Exercise::from_str("leg-press").unwrap(), Exercise::LegPress);
        assert_eq!(
            Exercise::from_str("hammer-curls").unwrap(),
            Exercise::HammerCurls
        );
    }

    #[test]
    fn test_exercise_from_str_display_names() {
        assert_eq!(
            Exercise::from_str("Bench Press").unwrap(),
            Exercise::BenchPress
        );
        assert_eq!(
            Exercise::from_str("Wide Grip Lat Pulldown").unwrap(),
            Exercise::WideGripLatPulldown
        );
    }

    #[test]
    fn test_exercise_from_str_with_whitespace() {
        assert_eq!(
            Exercise::from_str("  incline bench  ").unwrap(),
            Exercise::InclineBench
        );
    }

    #[test]
    fn test_exercise_from_str_invalid() {
        assert!(Exercise::from_str("curlz").is_err());
        assert!(Exercise::from_str("").is_err());
    }

    #[test]
    fn test_id_round_trips() {
        for ex in Exercise::all() {
            assert_eq!(&Exercise::from_str(ex.id()).unwrap(), ex);
        }
    }

    #[test]
    fn test_loading_classification() {
        assert_eq!(
            Exercise::BenchPress.loading(),
            Loading::Barbell {
                bar_weight_lbs: 45.0
            }
        );
        assert_eq!(
            Exercise::InclineBench.loading(),
            Loading::Barbell {
                bar_weight_lbs: 45.0
            }
        );
        assert_eq!(Exercise::LegPress.loading(), Loading::Sled);
        assert_eq!(Exercise::DumbbellCurls.loading(), Loading::Fixed);
    }
}
