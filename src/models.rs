use serde::{Deserialize, Serialize};

use crate::domain::plot::PlotSpec;
use crate::domain::present::Report;
use crate::domain::problem::BuildError;
use crate::domain::solve::SolveReport;

// ---------- API (wire) types: owned & serde-friendly ----------

/// Input boundary of `POST /solve`: one snapshot of the collaborator UI's
/// fields. Array lengths must match the declared counts; the builder checks.
#[derive(Debug, Clone, Deserialize)]
pub struct SolveRequest {
    pub num_products: usize,
    pub num_constraints: usize,
    pub product_names: Vec<String>,
    pub profits: Vec<f64>,
    pub constraint_names: Vec<String>,
    pub constraint_matrix: Vec<Vec<f64>>,
    pub resource_limits: Vec<f64>,
}

/// Output boundary: the display-ready report, with the feasible-region plot
/// description attached when one exists.
#[derive(Debug, Clone, Serialize)]
pub struct SolveResponse {
    #[serde(flatten)]
    pub report: Report,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot: Option<PlotSpec>,
}

impl From<SolveReport> for SolveResponse {
    fn from(result: SolveReport) -> Self {
        SolveResponse { report: result.report, plot: result.plot }
    }
}

/// Body of a 400 response for requests that never reach the solver.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error_kind: &'static str,
    pub message: String,
}

impl From<&BuildError> for ErrorBody {
    fn from(err: &BuildError) -> Self {
        ErrorBody { error_kind: err.kind(), message: err.to_string() }
    }
}
