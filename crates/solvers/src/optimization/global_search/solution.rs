use super::Trial;

/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Every interval became narrower than the configured precision, or the
    /// selected interval became too small to hold another trial.
    Converged,

    /// Reached the trial budget without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a global search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The best trial found.
    ///
    /// When no feasible point was found this is the trial that got furthest
    /// through the constraints.
    pub best: Trial,

    /// Number of trials performed.
    pub iters: usize,

    /// Number of calls to each function slot; the objective is last.
    pub evaluations: Vec<usize>,

    /// Final Hölder constant estimate of each function slot.
    pub estimates: Vec<f64>,
}

impl Solution {
    /// Returns the best trial if it satisfies every constraint.
    #[must_use]
    pub fn optimum(&self) -> Option<&Trial> {
        self.best.is_feasible().then_some(&self.best)
    }

    /// Returns `true` if a feasible point was found.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.best.is_feasible()
    }

    /// Returns the number of constraints of the solved problem.
    #[must_use]
    pub fn constraint_count(&self) -> usize {
        self.evaluations.len() - 1
    }

    /// Returns the number of objective evaluations.
    #[must_use]
    pub fn objective_evaluations(&self) -> usize {
        self.evaluations[self.constraint_count()]
    }
}
