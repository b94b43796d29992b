use thiserror::Error;

use crate::models::SolveRequest;

/// Allowed number of decision variables (products).
pub const PRODUCT_RANGE: std::ops::RangeInclusive<usize> = 2..=5;
/// Allowed number of inequality constraints.
pub const CONSTRAINT_RANGE: std::ops::RangeInclusive<usize> = 1..=3;

/// One product: a decision variable with a per-unit profit.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub unit_profit: f64,
}

/// One resource constraint: `sum(coefficients[i] * x[i]) <= limit`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub name: String,
    pub coefficients: Vec<f64>,
    pub limit: f64,
}

/// A validated linear program: maximize profit subject to resource limits,
/// all variables bounded below by zero.
///
/// Instances only exist via [`ProblemSpec::new`] or [`ProblemSpec::build`],
/// so every constraint row is known to match the product count and every
/// numeric field is finite and non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemSpec {
    products: Vec<Product>,
    constraints: Vec<Constraint>,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    /// Counts outside their allowed ranges, or an array whose length
    /// disagrees with the declared counts.
    #[error("invalid dimension: {details}")]
    InvalidDimension { details: String },
    /// A non-finite or negative number, or an empty product name.
    #[error("invalid value: {details}")]
    InvalidValue { details: String },
}

impl BuildError {
    fn dimension(details: impl Into<String>) -> Self {
        BuildError::InvalidDimension { details: details.into() }
    }

    fn value(details: impl Into<String>) -> Self {
        BuildError::InvalidValue { details: details.into() }
    }

    /// Stable identifier used as `error_kind` on the wire.
    pub fn kind(&self) -> &'static str {
        match self {
            BuildError::InvalidDimension { .. } => "invalid_dimension",
            BuildError::InvalidValue { .. } => "invalid_value",
        }
    }
}

impl ProblemSpec {
    /// Validate and assemble a problem from already-shaped parts.
    pub fn new(products: Vec<Product>, constraints: Vec<Constraint>) -> Result<Self, BuildError> {
        if !PRODUCT_RANGE.contains(&products.len()) {
            return Err(BuildError::dimension(format!(
                "number of products must be between {} and {}, got {}",
                PRODUCT_RANGE.start(),
                PRODUCT_RANGE.end(),
                products.len()
            )));
        }
        if !CONSTRAINT_RANGE.contains(&constraints.len()) {
            return Err(BuildError::dimension(format!(
                "number of constraints must be between {} and {}, got {}",
                CONSTRAINT_RANGE.start(),
                CONSTRAINT_RANGE.end(),
                constraints.len()
            )));
        }

        for (i, product) in products.iter().enumerate() {
            if product.name.trim().is_empty() {
                return Err(BuildError::value(format!("product {} has an empty name", i + 1)));
            }
            check_non_negative(product.unit_profit, || {
                format!("unit profit of product '{}'", product.name)
            })?;
        }

        for constraint in &constraints {
            if constraint.coefficients.len() != products.len() {
                return Err(BuildError::dimension(format!(
                    "constraint '{}' has {} coefficients, expected {}",
                    constraint.name,
                    constraint.coefficients.len(),
                    products.len()
                )));
            }
            for (i, &coefficient) in constraint.coefficients.iter().enumerate() {
                check_non_negative(coefficient, || {
                    format!("coefficient {} of constraint '{}'", i + 1, constraint.name)
                })?;
            }
            check_non_negative(constraint.limit, || {
                format!("limit of constraint '{}'", constraint.name)
            })?;
        }

        Ok(ProblemSpec { products, constraints })
    }

    /// Assemble a problem from the raw per-field arrays supplied by the
    /// input-collection boundary, checking every declared count first.
    pub fn build(request: &SolveRequest) -> Result<Self, BuildError> {
        check_len("product_names", request.product_names.len(), request.num_products)?;
        check_len("profits", request.profits.len(), request.num_products)?;
        check_len("constraint_names", request.constraint_names.len(), request.num_constraints)?;
        check_len("constraint_matrix", request.constraint_matrix.len(), request.num_constraints)?;
        check_len("resource_limits", request.resource_limits.len(), request.num_constraints)?;

        let products = request
            .product_names
            .iter()
            .zip(&request.profits)
            .map(|(name, &unit_profit)| Product { name: name.clone(), unit_profit })
            .collect();

        let constraints = request
            .constraint_names
            .iter()
            .zip(&request.constraint_matrix)
            .zip(&request.resource_limits)
            .map(|((name, row), &limit)| Constraint {
                name: name.clone(),
                coefficients: row.clone(),
                limit,
            })
            .collect();

        Self::new(products, constraints)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn num_products(&self) -> usize {
        self.products.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

fn check_len(field: &str, actual: usize, declared: usize) -> Result<(), BuildError> {
    if actual != declared {
        return Err(BuildError::dimension(format!(
            "{} has {} entries, expected {}",
            field, actual, declared
        )));
    }
    Ok(())
}

fn check_non_negative(value: f64, describe: impl Fn() -> String) -> Result<(), BuildError> {
    if !value.is_finite() {
        return Err(BuildError::value(format!("{} is not a finite number", describe())));
    }
    if value < 0.0 {
        return Err(BuildError::value(format!("{} is negative ({})", describe(), value)));
    }
    Ok(())
}
