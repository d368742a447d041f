/// Defines a constrained minimization problem to be solved.
///
/// A constrained problem has `m` inequality constraints `g_i(x) <= 0` and one
/// objective `f(x)`. Each function is exposed separately so that solvers can
/// evaluate them lazily, in order, and skip the remaining functions as soon
/// as a constraint is violated.
///
/// Functions are addressed by *slot*: slots `0..m` are the constraints in
/// their declared order and slot `m` is the objective.
///
/// Implementations are expected to be deterministic and free of side effects,
/// since solvers never re-evaluate a point.
pub trait ConstrainedProblem {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the number of inequality constraints.
    fn constraint_count(&self) -> usize;

    /// Evaluates constraint `index` at `x`.
    ///
    /// The constraint is satisfied when the returned value is `<= 0`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the constraint cannot be evaluated at `x`.
    fn constraint(&self, index: usize, x: &[f64]) -> Result<f64, Self::Error>;

    /// Evaluates the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be evaluated at `x`.
    fn objective(&self, x: &[f64]) -> Result<f64, Self::Error>;

    /// Evaluates the function in `slot` at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function cannot be evaluated at `x`.
    fn slot(&self, slot: usize, x: &[f64]) -> Result<f64, Self::Error> {
        if slot < self.constraint_count() {
            self.constraint(slot, x)
        } else {
            self.objective(x)
        }
    }
}
