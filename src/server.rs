//! Web server for the 1RM helper.
//!
//! Provides a small REST API over the calculation engine and serves the static
//! form page. The engine is stateless, so there is no shared application state:
//! every request carries its own inputs.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use axum::{
    Router,
    extract::Query,
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use crate::domain::{Exercise, Loading};
use crate::error::InputError;
use crate::formulas::DEFAULT_ADD_ON;
use crate::report::{
    MethodRow, PercentTable, ReportInputs, build_percent_tables, build_report, parse_plate_sizes,
};

// === JSON Response Types ===

#[derive(Serialize)]
pub struct ExerciseSummary {
    pub id: String,
    pub name: String,
    pub loading: Loading,
}

#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorBody>);

// === Query Parameters ===

/// Inputs for `/api/report` and `/api/table`, mirroring the form fields.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    #[serde(default = "default_exercise")]
    exercise: String,
    #[serde(default = "default_weight")]
    weight: f64,
    #[serde(default = "default_reps")]
    reps: u32,
    #[serde(default = "default_add_on")]
    add_on: f64,
    #[serde(default = "default_percent")]
    percent: f64,
    sled: Option<f64>,
    /// Comma-separated plate denominations, heaviest first.
    plates: Option<String>,
}

fn default_exercise() -> String {
    "bench-press".to_string()
}

fn default_weight() -> f64 {
    185.0
}

fn default_reps() -> u32 {
    3
}

fn default_add_on() -> f64 {
    DEFAULT_ADD_ON
}

fn default_percent() -> f64 {
    60.0
}

impl ReportQuery {
    /// Resolves the query into validated report inputs.
    fn into_inputs(self) -> Result<ReportInputs, ApiError> {
        let exercise = Exercise::from_str(&self.exercise).map_err(api_error)?;

        let plate_sizes = match &self.plates {
            Some(list) => parse_plate_sizes(list).map_err(api_error)?,
            None => vec![45.0, 25.0, 10.0, 5.0, 2.5],
        };

        let inputs = ReportInputs {
            exercise,
            weight_lbs: self.weight,
            reps: self.reps,
            add_on_lbs: self.add_on,
            percent: self.percent,
            sled_weight_lbs: self.sled,
            plate_sizes,
        };
        inputs.validate().map_err(api_error)?;
        Ok(inputs)
    }
}

/// Maps an input error to its HTTP status: unknown exercise is a 404, any
/// other bad input is a 400.
fn api_error(err: InputError) -> ApiError {
    let status = match err {
        InputError::UnknownExercise(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
}

// === Router Setup ===

/// Creates the application router.
pub fn create_router(static_dir: PathBuf) -> Router {
    Router::new()
        .route("/api/exercises", get(get_exercises))
        .route("/api/report", get(get_report))
        .route("/api/table", get(get_table))
        .fallback_service(ServeDir::new(static_dir).append_index_html_on_directories(true))
}

/// Runs the web server.
pub async fn run_server(port: u16, static_dir: PathBuf) -> anyhow::Result<()> {
    let app = create_router(static_dir);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    println!("Server running at http://localhost:{}", port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// === API Handlers ===

/// GET /api/exercises - The exercise catalog with loading kinds.
async fn get_exercises() -> Json<Vec<ExerciseSummary>> {
    let summaries: Vec<ExerciseSummary> = Exercise::all()
        .iter()
        .map(|ex| ExerciseSummary {
            id: ex.id().to_string(),
            name: ex.display_name().to_string(),
            loading: ex.loading(),
        })
        .collect();

    Json(summaries)
}

/// GET /api/report - Per-method 1RM, target load, and plate math.
async fn get_report(Query(query): Query<ReportQuery>) -> Result<Json<Vec<MethodRow>>, ApiError> {
    let inputs = query.into_inputs()?;
    log::debug!(
        "report: {} {}x{} @ {}%",
        inputs.exercise,
        inputs.weight_lbs,
        inputs.reps,
        inputs.percent
    );
    Ok(Json(build_report(&inputs)))
}

/// GET /api/table - Common-percentages tables (60-100%), one per method.
async fn get_table(Query(query): Query<ReportQuery>) -> Result<Json<Vec<PercentTable>>, ApiError> {
    let inputs = query.into_inputs()?;
    Ok(Json(build_percent_tables(&inputs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(exercise: &str) -> ReportQuery {
        ReportQuery {
            exercise: exercise.to_string(),
            weight: default_weight(),
            reps: default_reps(),
            add_on: default_add_on(),
            percent: default_percent(),
            sled: None,
            plates: None,
        }
    }

    #[test]
    fn test_query_defaults_resolve() {
        let inputs = query("bench-press").into_inputs().unwrap();
        assert_eq!(inputs.exercise, Exercise::BenchPress);
        assert_eq!(inputs.weight_lbs, 185.0);
        assert_eq!(inputs.reps, 3);
        assert_eq!(inputs.plate_sizes, vec![45.0, 25.0, 10.0, 5.0, 2.5]);
    }

    #[test]
    fn test_unknown_exercise_is_404() {
        let err = query("zercher-squat").into_inputs().unwrap_err();
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_bad_plate_list_is_400() {
        let mut q = query("bench-press");
        q.plates = Some("45,abc".to_string());
        let err = q.into_inputs().unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_non_finite_weight_is_400() {
        let mut q = query("bench-press");
        q.weight = f64::NAN;
        let err = q.into_inputs().unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }
}
