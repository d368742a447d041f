use hoelder_core::ConstrainedProblem;

use crate::optimization::EvalError;

use super::{Status, Trial};

/// Events emitted by the global search solver.
pub enum Event<'a, P>
where
    P: ConstrainedProblem,
{
    /// A trial was evaluated and inserted into the search.
    Evaluated {
        /// The new trial.
        trial: &'a Trial,

        /// The best trial so far, which may be the new one.
        best: &'a Trial,
    },

    /// The Hölder constant estimate of a function slot increased.
    EstimateRaised {
        /// The function slot.
        slot: usize,

        /// The new estimate.
        estimate: f64,
    },

    /// A problem function failed or returned a non-finite value.
    FunctionFailed {
        /// The curve parameter of the attempted trial.
        t: f64,

        /// The point where evaluation failed.
        point: &'a [f64],

        /// The evaluation error.
        error: &'a EvalError<P::Error>,
    },

    /// The search finished; emitted once, after the last trial.
    Finished {
        /// Why the search stopped.
        status: Status,

        /// The best trial found.
        best: &'a Trial,
    },
}

impl<P> Event<'_, P>
where
    P: ConstrainedProblem,
{
    /// Returns the trial this event reports, if it reports one.
    #[must_use]
    pub fn trial(&self) -> Option<&Trial> {
        match self {
            Self::Evaluated { trial, .. } => Some(*trial),
            Self::Finished { best, .. } => Some(*best),
            Self::EstimateRaised { .. } | Self::FunctionFailed { .. } => None,
        }
    }

    /// Returns the best trial known when the event was emitted.
    #[must_use]
    pub fn best(&self) -> Option<&Trial> {
        match self {
            Self::Evaluated { best, .. } | Self::Finished { best, .. } => Some(*best),
            Self::EstimateRaised { .. } | Self::FunctionFailed { .. } => None,
        }
    }
}
