use std::{convert::Infallible, fmt};

use super::ConstrainedProblem;

type Function<'a> = Box<dyn Fn(&[f64]) -> f64 + 'a>;

/// A [`ConstrainedProblem`] built from closures.
///
/// ```rust
/// use hoelder_core::{ConstrainedProblem, FnProblem};
///
/// let problem = FnProblem::new(|x: &[f64]| x[0] * x[0])
///     .with_constraint(|x: &[f64]| 0.5 - x[0]);
///
/// assert_eq!(problem.constraint_count(), 1);
/// assert_eq!(problem.slot(1, &[2.0]).unwrap(), 4.0);
/// ```
pub struct FnProblem<'a> {
    objective: Function<'a>,
    constraints: Vec<Function<'a>>,
}

impl<'a> FnProblem<'a> {
    /// Creates an unconstrained problem minimizing `objective`.
    pub fn new(objective: impl Fn(&[f64]) -> f64 + 'a) -> Self {
        Self {
            objective: Box::new(objective),
            constraints: Vec::new(),
        }
    }

    /// Appends the constraint `constraint(x) <= 0`.
    ///
    /// Constraints are evaluated in the order they are added.
    #[must_use]
    pub fn with_constraint(mut self, constraint: impl Fn(&[f64]) -> f64 + 'a) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }
}

impl fmt::Debug for FnProblem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProblem")
            .field("constraints", &self.constraints.len())
            .finish_non_exhaustive()
    }
}

impl ConstrainedProblem for FnProblem<'_> {
    type Error = Infallible;

    fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    fn constraint(&self, index: usize, x: &[f64]) -> Result<f64, Self::Error> {
        Ok((self.constraints[index])(x))
    }

    fn objective(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok((self.objective)(x))
    }
}
