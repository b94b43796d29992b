use crate::domain::plot::{feasible_region, PlotSpec};
use crate::domain::present::{present, Report};
use crate::domain::problem::{BuildError, ProblemSpec};
use crate::domain::solver::{SolveOutcome, Solver};
use crate::models::SolveRequest;

/// Everything the presentation layer needs from one solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport {
    pub report: Report,
    /// Present only for 2-product problems with an optimal outcome.
    pub plot: Option<PlotSpec>,
}

/// Run the full pipeline for one request: build the problem (failing fast,
/// without invoking the solver), solve it, and shape the result for display.
pub fn run_solve(request: &SolveRequest, solver: &dyn Solver) -> Result<SolveReport, BuildError> {
    let problem = ProblemSpec::build(request)?;
    let outcome = solver.solve(&problem);

    log::info!(
        "{} solved a {}x{} problem: {}",
        solver.name(),
        problem.num_constraints(),
        problem.num_products(),
        outcome_summary(&outcome),
    );

    let plot = match &outcome {
        SolveOutcome::Optimal { allocation, .. } => feasible_region(&problem, allocation),
        _ => None,
    };

    Ok(SolveReport { report: present(&problem, &outcome), plot })
}

fn outcome_summary(outcome: &SolveOutcome) -> &'static str {
    match outcome {
        SolveOutcome::Optimal { .. } => "optimal",
        SolveOutcome::Infeasible => "infeasible",
        SolveOutcome::SolverError { .. } => "solver error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::solvers::MicrolpSolver;

    fn request() -> SolveRequest {
        SolveRequest {
            num_products: 2,
            num_constraints: 1,
            product_names: vec!["Chairs".to_string(), "Tables".to_string()],
            profits: vec![10.0, 15.0],
            constraint_names: vec!["Labor hours".to_string()],
            constraint_matrix: vec![vec![1.0, 2.0]],
            resource_limits: vec![100.0],
        }
    }

    #[test]
    fn test_run_solve_produces_report_and_plot_for_two_products() {
        let result = run_solve(&request(), &MicrolpSolver::new()).unwrap();
        match result.report {
            Report::Optimal { allocation, total_profit, .. } => {
                assert_eq!(allocation[1].units, 50.0);
                assert_eq!(total_profit, "Rp 750.00");
            }
            other => panic!("expected optimal report, got {:?}", other),
        }
        let plot = result.plot.expect("2-product solve should carry a plot");
        assert_eq!(plot.boundaries.len(), 1);
    }

    #[test]
    fn test_run_solve_omits_plot_for_three_products() {
        let mut req = request();
        req.num_products = 3;
        req.product_names.push("Desks".to_string());
        req.profits.push(12.0);
        req.constraint_matrix = vec![vec![1.0, 2.0, 1.5]];
        let result = run_solve(&req, &MicrolpSolver::new()).unwrap();
        assert!(matches!(result.report, Report::Optimal { .. }));
        assert!(result.plot.is_none());
    }

    #[test]
    fn test_run_solve_build_failure_skips_solver() {
        struct PanickingSolver;
        impl Solver for PanickingSolver {
            fn solve(&self, _problem: &ProblemSpec) -> SolveOutcome {
                panic!("solver must not run on invalid input");
            }
            fn name(&self) -> &str {
                "panicking"
            }
        }

        let mut req = request();
        req.constraint_matrix = vec![vec![1.0, 2.0, 3.0]];
        let err = run_solve(&req, &PanickingSolver).unwrap_err();
        assert_eq!(err.kind(), "invalid_dimension");
    }

    #[test]
    fn test_run_solve_unbounded_reports_infeasible_without_plot() {
        let mut req = request();
        req.constraint_matrix = vec![vec![0.0, 0.0]];
        let result = run_solve(&req, &MicrolpSolver::new()).unwrap();
        assert!(matches!(result.report, Report::Infeasible { .. }));
        assert!(result.plot.is_none());
    }
}
