//! Derivative-free global search with inequality constraints.
//!
//! # Algorithm
//!
//! The search box is reduced to the unit interval by a Peano-type
//! space-filling curve, so an `n`-dimensional problem becomes a
//! one-dimensional one whose objective is Hölder continuous with exponent
//! `1/n`. Constraints are handled with the index scheme: a trial evaluates the
//! constraints in order and stops at the first violated one, and the number of
//! satisfied constraints is the trial's index.
//!
//! Every interval between adjacent trials gets a characteristic built from
//! adaptive Hölder constant estimates. The solver repeatedly places a trial
//! in the interval with the largest characteristic, until every interval is
//! narrower than the configured precision or the trial budget runs out.
//!
//! # When to Use
//!
//! Global search is appropriate when:
//! - The objective is multimodal and a local method would get stuck
//! - Derivative information is unavailable
//! - The dimension is small (at most [`MAX_DIMENSION`])
//! - Constraints can be expressed as `g(x) <= 0`
//!
//! # Limitations
//!
//! - **Low dimension only**: the curve resolution shrinks as `n` grows
//! - **Inequality constraints only**: at most [`MAX_CONSTRAINTS`]
//! - **Sequential**: trials are evaluated one at a time
//!
//! # Observer Events
//!
//! - [`Event::Evaluated`] after every trial, including the first
//! - [`Event::EstimateRaised`] before `Evaluated`, for each estimate the trial raised
//! - [`Event::FunctionFailed`] when a problem function fails
//! - [`Event::Finished`] once, when the search stops without an error
//!
//! Observers can return [`Action::StopEarly`] to halt. Returning it from
//! `FunctionFailed` turns the failure into a normal stop with the best trial
//! so far, unless the failure happened on the very first trial.

mod action;
mod bounds;
mod characteristic;
mod config;
mod error;
mod event;
mod holder;
mod mapping;
mod search;
mod solution;
mod state;
mod trial;


pub use action::Action;
pub use bounds::{Bounds, BoundsError, MAX_DIMENSION};
pub use config::{Config, ConfigError, MAX_DENSITY};
pub use error::Error;
pub use event::Event;
pub use mapping::PeanoCurve;
pub use solution::{Solution, Status};
pub use trial::Trial;

use hoelder_core::{ConstrainedProblem, Observer};
use tracing::{debug, instrument};

use search::search;

/// Maximum number of inequality constraints.
pub const MAX_CONSTRAINTS: usize = 10;

/// A validated, single-use global search.
///
/// All argument checks happen in [`Session::new`], so a session that exists
/// can only fail while evaluating the problem.
pub struct Session<'p, P> {
    problem: &'p P,
    curve: PeanoCurve,
    config: Config,
}

impl<'p, P> Session<'p, P>
where
    P: ConstrainedProblem,
{
    /// Creates a session for `problem` over `bounds`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooManyConstraints`] if the problem has more than
    /// [`MAX_CONSTRAINTS`] constraints.
    pub fn new(problem: &'p P, bounds: &Bounds, config: Config) -> Result<Self, Error> {
        let count = problem.constraint_count();
        if count > MAX_CONSTRAINTS {
            return Err(Error::TooManyConstraints { count });
        }

        Ok(Self {
            problem,
            curve: PeanoCurve::new(bounds, config.density()),
            config,
        })
    }

    /// Runs the search to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if a problem function fails and the observer does not
    /// stop the search, or if the search degenerates.
    #[instrument(
        name = "global_search",
        skip_all,
        fields(
            dimension = self.curve.dimension(),
            constraints = self.problem.constraint_count(),
        )
    )]
    pub fn solve<Obs>(self, observer: Obs) -> Result<Solution, Error>
    where
        Obs: for<'a> Observer<Event<'a, P>, Action>,
    {
        debug!(
            max_iters = self.config.max_iters(),
            precision = self.config.precision(),
            reliability = self.config.reliability(),
            "starting global search"
        );
        search(self.problem, &self.curve, &self.config, observer)
    }
}

/// Finds the global minimum of a constrained problem over `bounds`.
///
/// See the [module docs](self) for the events the observer receives.
///
/// # Errors
///
/// Returns an error if the problem has too many constraints, if a problem
/// function fails and the observer does not stop the search, or if the search
/// degenerates.
pub fn minimize<P, Obs>(
    problem: &P,
    bounds: &Bounds,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    P: ConstrainedProblem,
    Obs: for<'a> Observer<Event<'a, P>, Action>,
{
    Session::new(problem, bounds, *config)?.solve(observer)
}

/// Finds the global minimum without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Same as [`minimize`].
pub fn minimize_unobserved<P>(
    problem: &P,
    bounds: &Bounds,
    config: &Config,
) -> Result<Solution, Error>
where
    P: ConstrainedProblem,
{
    minimize(problem, bounds, config, ())
}
