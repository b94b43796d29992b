use crate::domain::problem::ProblemSpec;

/// Common interface for LP solver backends.
///
/// Implementations translate the profit-maximization problem into the
/// backend's native form (minimizing the negated profits over
/// `A x <= b, x >= 0`) and normalize whatever the backend reports into a
/// [`SolveOutcome`]. A backend failure must surface as
/// [`SolveOutcome::SolverError`], never as a panic.
pub trait Solver: Send + Sync {
    /// Solve one problem and normalize the result.
    fn solve(&self, problem: &ProblemSpec) -> SolveOutcome;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}

/// Normalized result of one solve.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// An optimum was found. `allocation` is ordered like the products;
    /// `objective_value` is the total profit at that point.
    Optimal { allocation: Vec<f64>, objective_value: f64 },
    /// No feasible point exists, or the backend reported the objective as
    /// unbounded. Both are surfaced identically to the caller.
    Infeasible,
    /// The backend failed for a reason unrelated to feasibility.
    SolverError { message: String },
}

/// Total profit at `allocation`, recomputed from the original per-unit
/// profits rather than read back from a backend's minimized objective.
pub(crate) fn total_profit(problem: &ProblemSpec, allocation: &[f64]) -> f64 {
    problem
        .products()
        .iter()
        .zip(allocation)
        .map(|(product, &units)| product.unit_profit * units)
        .sum()
}
