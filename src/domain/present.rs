use serde::Serialize;

use crate::domain::problem::ProblemSpec;
use crate::domain::solver::SolveOutcome;

const CURRENCY_PREFIX: &str = "Rp";
const INFEASIBLE_MESSAGE: &str =
    "No feasible solution found. Review the resource constraints and try again.";

/// One row of the allocation report, ordered like the products.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllocationLine {
    pub product: String,
    /// Units to produce, rounded to 2 decimal places.
    pub units: f64,
}

/// Display-ready result of one solve. Rendering is the collaborator's job;
/// this is only the structure it renders from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Report {
    Optimal {
        allocation: Vec<AllocationLine>,
        /// Formatted like `Rp 1,234,567.89`.
        total_profit: String,
        objective_value: f64,
    },
    Infeasible {
        message: String,
    },
    Error {
        message: String,
    },
}

/// Format an outcome for display against the problem it was computed from.
pub fn present(problem: &ProblemSpec, outcome: &SolveOutcome) -> Report {
    match outcome {
        SolveOutcome::Optimal { allocation, objective_value } => Report::Optimal {
            allocation: problem
                .products()
                .iter()
                .zip(allocation)
                .map(|(product, &units)| AllocationLine {
                    product: product.name.clone(),
                    units: round2(units),
                })
                .collect(),
            total_profit: format!("{} {}", CURRENCY_PREFIX, format_thousands(*objective_value)),
            objective_value: *objective_value,
        },
        SolveOutcome::Infeasible => Report::Infeasible { message: INFEASIBLE_MESSAGE.to_string() },
        // Backend message passes through verbatim.
        SolveOutcome::SolverError { message } => Report::Error { message: message.clone() },
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render `value` with comma-grouped thousands and exactly two decimals.
fn format_thousands(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, fraction)
}
