use serde::Serialize;

use crate::domain::problem::ProblemSpec;

/// Sample count along the x axis for sloped boundaries.
const SAMPLES: usize = 100;
/// Minimum x-axis span, so the domain never collapses when the optimum
/// sits at the origin.
const MIN_X_SPAN: f64 = 5.0;

/// A renderable description of the feasible region for a 2-product problem.
/// Rendering itself is delegated to the collaborator UI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Upper end of the sampled x domain (lower end is always 0).
    pub x_max: f64,
    pub boundaries: Vec<Boundary>,
    /// Labels of constraints with no drawable boundary (all-zero rows).
    pub omitted: Vec<String>,
    pub optimum: Marker,
    pub legend: bool,
    pub grid: bool,
}

/// One constraint boundary with its legend label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Boundary {
    pub label: String,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    /// `y = (limit - a*x) / b` sampled over `[0, x_max]`; the region between
    /// `y = 0` and the polyline is shaded as a half-plane approximation.
    Sloped { points: Vec<[f64; 2]> },
    /// Vertical line for a constraint with no y coefficient; the feasible
    /// side is everything left of `x`.
    Vertical { x: f64 },
}

/// The optimal point, marked distinctly from the boundaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Describe the feasible region and optimal point of a 2-product problem.
/// Returns `None` for any other dimension.
pub fn feasible_region(problem: &ProblemSpec, allocation: &[f64]) -> Option<PlotSpec> {
    if problem.num_products() != 2 || allocation.len() != 2 {
        return None;
    }

    // Matches the allocation marker's x range so the optimum stays visible.
    let x_max = (allocation[0] * 1.5).max(MIN_X_SPAN);

    let mut boundaries = Vec::new();
    let mut omitted = Vec::new();
    for constraint in problem.constraints() {
        let a = constraint.coefficients[0];
        let b = constraint.coefficients[1];
        let label = format!("{}: {}x + {}y <= {}", constraint.name, a, b, constraint.limit);

        if b != 0.0 {
            let points = (0..SAMPLES)
                .map(|i| {
                    let x = x_max * i as f64 / (SAMPLES - 1) as f64;
                    [x, (constraint.limit - a * x) / b]
                })
                .collect();
            boundaries.push(Boundary { label, geometry: Geometry::Sloped { points } });
        } else if a != 0.0 {
            // No y coefficient: the boundary is the vertical line x = limit/a.
            boundaries.push(Boundary {
                label,
                geometry: Geometry::Vertical { x: constraint.limit / a },
            });
        } else {
            // 0x + 0y <= limit has no boundary in the plane; report it
            // rather than dropping it.
            omitted.push(label);
        }
    }

    let products = problem.products();
    Some(PlotSpec {
        title: "Feasible region and optimal point".to_string(),
        x_label: format!("Production of {}", products[0].name),
        y_label: format!("Production of {}", products[1].name),
        x_max,
        boundaries,
        omitted,
        optimum: Marker {
            x: allocation[0],
            y: allocation[1],
            label: format!("Optimal ({:.1}, {:.1})", allocation[0], allocation[1]),
        },
        legend: true,
        grid: true,
    })
}
