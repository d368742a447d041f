//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry an objective value
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use hoelder_core::Observer;
//! use hoelder_observers::traits::{CanStopEarly, HasObjective};
//!
//! struct FirstBelow {
//!     level: f64,
//! }
//!
//! impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for FirstBelow {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.objective() < self.level).then(A::stop_early)
//!     }
//! }
//! ```

use hoelder_core::ConstrainedProblem;

use hoelder_solvers::optimization::global_search;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    ///
    /// Returns `f64::NAN` when the event carries no objective, for example
    /// when it reports an infeasible point or an error.
    fn objective(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasObjective for global_search::Event ---

impl<P> HasObjective for global_search::Event<'_, P>
where
    P: ConstrainedProblem,
{
    fn objective(&self) -> f64 {
        match self.trial() {
            Some(trial) if trial.is_feasible() => trial.value(),
            _ => f64::NAN,
        }
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for global_search::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use hoelder_core::FnProblem;
    use hoelder_solvers::optimization::global_search::{Bounds, Config, Event, minimize};

    #[test]
    fn infeasible_trials_have_no_objective() {
        let problem = FnProblem::new(|x: &[f64]| x[0]).with_constraint(|x: &[f64]| x[0] - 0.25);
        let bounds = Bounds::new(vec![0.0], vec![1.0]).unwrap();
        let config = Config::new(40, 1e-9).unwrap();

        let mut seen = Vec::new();
        let observer = |event: &Event<'_, FnProblem<'_>>| {
            if let Event::Evaluated { trial, .. } = event {
                seen.push((trial.is_feasible(), event.objective()));
            }
            None
        };
        minimize(&problem, &bounds, &config, observer).expect("should finish");

        assert!(seen.iter().any(|(feasible, _)| *feasible));
        assert!(seen.iter().any(|(feasible, _)| !*feasible));
        for (feasible, objective) in seen {
            assert_eq!(feasible, !objective.is_nan());
        }
    }
}
