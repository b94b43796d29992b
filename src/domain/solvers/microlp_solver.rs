use microlp::{ComparisonOp, OptimizationDirection, Problem};

use crate::domain::problem::ProblemSpec;
use crate::domain::solver::{total_profit, SolveOutcome, Solver};

/// microlp solver implementation (pure-Rust simplex, the default backend).
pub struct MicrolpSolver;

impl MicrolpSolver {
    pub fn new() -> Self {
        MicrolpSolver
    }
}

impl Solver for MicrolpSolver {
    fn solve(&self, problem: &ProblemSpec) -> SolveOutcome {
        // microlp minimizes, so maximization runs on the negated profits.
        let mut lp = Problem::new(OptimizationDirection::Minimize);

        let vars: Vec<microlp::Variable> = problem
            .products()
            .iter()
            .map(|product| lp.add_var(-product.unit_profit, (0.0, f64::INFINITY)))
            .collect();

        for constraint in problem.constraints() {
            lp.add_constraint(
                vars.iter().copied().zip(constraint.coefficients.iter().copied()),
                ComparisonOp::Le,
                constraint.limit,
            );
        }

        match lp.solve() {
            Ok(solution) => {
                let allocation: Vec<f64> = solution.iter().map(|entry| *entry.1).collect();
                let objective_value = total_profit(problem, &allocation);
                SolveOutcome::Optimal { allocation, objective_value }
            }
            Err(microlp::Error::Infeasible) | Err(microlp::Error::Unbounded) => {
                SolveOutcome::Infeasible
            }
            Err(other) => SolveOutcome::SolverError { message: other.to_string() },
        }
    }

    fn name(&self) -> &str {
        "microlp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::problem::{Constraint, Product};

    const TOLERANCE: f64 = 1e-6;

    fn problem(profits: &[f64], rows: &[(&[f64], f64)]) -> ProblemSpec {
        let products = profits
            .iter()
            .enumerate()
            .map(|(i, &unit_profit)| Product {
                name: format!("Product {}", i + 1),
                unit_profit,
            })
            .collect();
        let constraints = rows
            .iter()
            .enumerate()
            .map(|(j, (coefficients, limit))| Constraint {
                name: format!("Resource {}", j + 1),
                coefficients: coefficients.to_vec(),
                limit: *limit,
            })
            .collect();
        ProblemSpec::new(products, constraints).unwrap()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < TOLERANCE, "got {:?}, expected {:?}", actual, expected);
        }
    }

    #[test]
    fn test_solve_single_constraint_puts_everything_into_best_product() {
        let problem = problem(&[10.0, 15.0], &[(&[1.0, 2.0], 100.0)]);
        match MicrolpSolver::new().solve(&problem) {
            SolveOutcome::Optimal { allocation, objective_value } => {
                assert_close(&allocation, &[0.0, 50.0]);
                assert!((objective_value - 750.0).abs() < TOLERANCE);
            }
            other => panic!("expected optimal outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_solve_two_constraints_reference_optimum() {
        // max 5a + 4b s.t. 6a + 4b <= 24, a + 2b <= 6 has the classic
        // optimum (3, 1.5) with value 21.
        let problem = problem(&[5.0, 4.0], &[(&[6.0, 4.0], 24.0), (&[1.0, 2.0], 6.0)]);
        match MicrolpSolver::new().solve(&problem) {
            SolveOutcome::Optimal { allocation, objective_value } => {
                assert_close(&allocation, &[3.0, 1.5]);
                assert!((objective_value - 21.0).abs() < TOLERANCE);
            }
            other => panic!("expected optimal outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_solve_zero_limit_pins_allocation_to_origin() {
        let problem = problem(&[10.0, 15.0], &[(&[1.0, 1.0], 0.0)]);
        match MicrolpSolver::new().solve(&problem) {
            SolveOutcome::Optimal { allocation, objective_value } => {
                assert_close(&allocation, &[0.0, 0.0]);
                assert!(objective_value.abs() < TOLERANCE);
            }
            other => panic!("expected optimal outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_solve_allocation_is_non_negative_and_objective_matches() {
        let problem = problem(
            &[3.0, 7.0, 2.0],
            &[(&[2.0, 1.0, 4.0], 30.0), (&[1.0, 3.0, 1.0], 20.0)],
        );
        match MicrolpSolver::new().solve(&problem) {
            SolveOutcome::Optimal { allocation, objective_value } => {
                assert!(allocation.iter().all(|&units| units >= -TOLERANCE));
                let recomputed: f64 = allocation
                    .iter()
                    .zip(problem.products())
                    .map(|(units, product)| units * product.unit_profit)
                    .sum();
                assert!((objective_value - recomputed).abs() < TOLERANCE);
            }
            other => panic!("expected optimal outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_solve_is_deterministic_across_calls() {
        let problem = problem(&[5.0, 4.0], &[(&[6.0, 4.0], 24.0), (&[1.0, 2.0], 6.0)]);
        let solver = MicrolpSolver::new();
        let first = solver.solve(&problem);
        let second = solver.solve(&problem);
        match (first, second) {
            (
                SolveOutcome::Optimal { allocation: a1, objective_value: v1 },
                SolveOutcome::Optimal { allocation: a2, objective_value: v2 },
            ) => {
                assert_close(&a1, &a2);
                assert!((v1 - v2).abs() < TOLERANCE);
            }
            other => panic!("expected two optimal outcomes, got {:?}", other),
        }
    }

    #[test]
    fn test_solve_unbounded_objective_reports_infeasible() {
        // An all-zero row constrains nothing, so profit grows without limit;
        // the backend's unbounded status normalizes to Infeasible.
        let problem = problem(&[10.0, 15.0], &[(&[0.0, 0.0], 10.0)]);
        assert_eq!(MicrolpSolver::new().solve(&problem), SolveOutcome::Infeasible);
    }

    #[test]
    fn test_solver_name() {
        assert_eq!(MicrolpSolver::new().name(), "microlp");
    }
}
