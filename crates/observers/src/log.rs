use hoelder_core::{ConstrainedProblem, Observer};
use hoelder_solvers::optimization::global_search::{Action, Event};
use tracing::{debug, info, trace, warn};

/// Logs global search events through `tracing`.
///
/// Trials are logged at `TRACE` level, raised Hölder estimates at `DEBUG`,
/// function failures at `WARN` and the end of the search at `INFO`.
/// Use [`TracingObserver::every`] to thin out trial logging on long runs.
///
/// The observer never steers the search.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    every: usize,
    trials: usize,
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl TracingObserver {
    /// Creates an observer that logs every trial.
    #[must_use]
    pub fn new() -> Self {
        Self {
            every: 1,
            trials: 0,
        }
    }

    /// Logs only every `every`-th trial. Zero is treated as one.
    #[must_use]
    pub fn every(self, every: usize) -> Self {
        Self {
            every: every.max(1),
            ..self
        }
    }

    /// Returns the number of trials seen so far.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }
}

impl<P> Observer<Event<'_, P>, Action> for TracingObserver
where
    P: ConstrainedProblem,
{
    fn observe(&mut self, event: &Event<'_, P>) -> Option<Action> {
        match event {
            Event::Evaluated { trial, best } => {
                self.trials += 1;
                if self.trials % self.every == 0 {
                    trace!(
                        trial = self.trials,
                        t = trial.t(),
                        point = ?trial.point(),
                        index = trial.index(),
                        value = trial.value(),
                        best = best.value(),
                        "trial"
                    );
                }
            }
            Event::EstimateRaised { slot, estimate } => {
                debug!(slot, estimate, "hölder estimate raised");
            }
            Event::FunctionFailed { t, point, error } => {
                warn!(t, point = ?point, error = ?error, "function evaluation failed");
            }
            Event::Finished { status, best } => {
                info!(
                    ?status,
                    trials = self.trials,
                    feasible = best.is_feasible(),
                    value = best.value(),
                    point = ?best.point(),
                    "global search finished"
                );
            }
        }
        None
    }
}
