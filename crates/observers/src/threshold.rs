use hoelder_core::Observer;

use crate::traits::{CanStopEarly, HasObjective};

/// Stops a solver once a feasible objective reaches a target.
///
/// Events without an objective are ignored. The first `min_events` events
/// never stop the solver, which keeps a lucky early trial from cutting the
/// search short.
///
/// # Example
///
/// ```rust
/// use hoelder_core::FnProblem;
/// use hoelder_observers::Threshold;
/// use hoelder_solvers::optimization::global_search::{Bounds, Config, Status, minimize};
///
/// let problem = FnProblem::new(|x: &[f64]| (x[0] - 0.3).powi(2));
/// let bounds = Bounds::new(vec![-1.0], vec![1.0]).unwrap();
/// let config = Config::new(20_000, 1e-4).unwrap();
///
/// let solution = minimize(&problem, &bounds, &config, Threshold::new(1e-3)).unwrap();
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert!(solution.best.value() <= 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    target: f64,
    min_events: usize,
    events: usize,
}

impl Threshold {
    /// Creates an observer that stops once an objective is `<= target`.
    #[must_use]
    pub fn new(target: f64) -> Self {
        Self {
            target,
            min_events: 0,
            events: 0,
        }
    }

    /// Ignores the first `min_events` events.
    #[must_use]
    pub fn after(self, min_events: usize) -> Self {
        Self { min_events, ..self }
    }
}

impl<E: HasObjective, A: CanStopEarly> Observer<E, A> for Threshold {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events += 1;
        if self.events > self.min_events && event.objective() <= self.target {
            return Some(A::stop_early());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Objective(f64);

    impl HasObjective for Objective {
        fn objective(&self) -> f64 {
            self.0
        }
    }

    #[derive(Debug, PartialEq)]
    struct Stop;

    impl CanStopEarly for Stop {
        fn stop_early() -> Self {
            Stop
        }
    }

    #[test]
    fn stops_at_target() {
        let mut threshold = Threshold::new(1.0);

        let a: Option<Stop> = threshold.observe(&Objective(2.0));
        let b: Option<Stop> = threshold.observe(&Objective(f64::NAN));
        let c: Option<Stop> = threshold.observe(&Objective(1.0));

        assert_eq!((a, b, c), (None, None, Some(Stop)));
    }

    #[test]
    fn waits_for_min_events() {
        let mut threshold = Threshold::new(1.0).after(2);

        let early: Vec<Option<Stop>> = (0..2).map(|_| threshold.observe(&Objective(0.0))).collect();
        let late: Option<Stop> = threshold.observe(&Objective(0.0));

        assert_eq!(early, vec![None, None]);
        assert_eq!(late, Some(Stop));
    }
}
