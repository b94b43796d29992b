use ::highs::{ColProblem, HighsModelStatus, Sense};

use crate::domain::problem::ProblemSpec;
use crate::domain::solver::{total_profit, SolveOutcome, Solver};

/// HiGHS solver implementation
pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        HighsSolver
    }
}

impl Solver for HighsSolver {
    fn solve(&self, problem: &ProblemSpec) -> SolveOutcome {
        let mut col_problem = ColProblem::new();

        // First, add all constraint rows
        let rows: Vec<_> = problem
            .constraints()
            .iter()
            .map(|constraint| col_problem.add_row(..=constraint.limit))
            .collect();

        // Add variables (columns) with their constraint coefficients;
        // HiGHS minimizes the negated profits, same as the default backend.
        for (col_idx, product) in problem.products().iter().enumerate() {
            let row_factors: Vec<_> = problem
                .constraints()
                .iter()
                .enumerate()
                .map(|(row_idx, constraint)| (rows[row_idx], constraint.coefficients[col_idx]))
                .collect();

            col_problem.add_column(-product.unit_profit, 0.0.., &row_factors);
        }

        let mut model = col_problem.optimise(Sense::Minimise);
        model.set_option("presolve", "off");
        let solved = model.solve();

        match solved.status() {
            HighsModelStatus::Optimal => {
                let allocation: Vec<f64> = solved.get_solution().columns().to_vec();
                let objective_value = total_profit(problem, &allocation);
                SolveOutcome::Optimal { allocation, objective_value }
            }
            HighsModelStatus::Infeasible
            | HighsModelStatus::Unbounded
            | HighsModelStatus::UnboundedOrInfeasible => SolveOutcome::Infeasible,
            other => SolveOutcome::SolverError {
                message: format!("HiGHS terminated with status {:?}", other),
            },
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
