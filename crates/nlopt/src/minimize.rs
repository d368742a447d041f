use std::convert::Infallible;

use hoelder_core::ConstrainedProblem;
use hoelder_observers::{Report, TracingObserver};
use hoelder_solvers::optimization::global_search::{
    Bounds, Config, Error, MAX_CONSTRAINTS, MAX_DIMENSION, Session, Solution, Status,
};
use tracing::{debug, error, info};

use crate::{Constraint, ReturnCode, Settings, Stopping};

/// Callbacks and user data seen through [`ConstrainedProblem`].
struct Callbacks<'c, 'a, D, F> {
    objective: F,
    constraints: &'c [Constraint<'a, D>],
    data: &'c D,
}

impl<D, F> ConstrainedProblem for Callbacks<'_, '_, D, F>
where
    F: Fn(&[f64], &D) -> f64,
{
    type Error = Infallible;

    fn constraint_count(&self) -> usize {
        self.constraints.len()
    }

    fn constraint(&self, index: usize, x: &[f64]) -> Result<f64, Self::Error> {
        Ok(self.constraints[index].value(x, self.data))
    }

    fn objective(&self, x: &[f64]) -> Result<f64, Self::Error> {
        Ok((self.objective)(x, self.data))
    }
}

/// Minimizes `objective` over the box `[lower, upper]` subject to
/// `constraints`, NLopt style.
///
/// `n` is the dimension and `m` the number of constraints; both are checked
/// against the slices. `data` is passed to every callback. When a feasible
/// point is found, its coordinates are written to `x` and its objective to
/// `min_value`; otherwise both are left untouched.
///
/// Returns [`ReturnCode::InvalidArgs`] without calling any callback if
/// - `n` is zero or above [`MAX_DIMENSION`],
/// - `m` is above [`MAX_CONSTRAINTS`] or differs from `constraints.len()`,
/// - a constraint descriptor has more than one output,
/// - `x`, `lower` or `upper` do not have length `n`, or the bounds are invalid,
/// - the settings or the evaluation budget are out of range.
///
/// Otherwise returns [`ReturnCode::MaxEvalReached`] if the budget ran out,
/// [`ReturnCode::Failure`] if no feasible point was found or the search
/// failed, and [`ReturnCode::Success`] if the search converged.
#[allow(clippy::too_many_arguments)]
pub fn minimize<D, F>(
    n: usize,
    objective: F,
    data: &D,
    m: usize,
    constraints: &[Constraint<'_, D>],
    x: &mut [f64],
    min_value: &mut f64,
    lower: &[f64],
    upper: &[f64],
    stop: &Stopping,
    settings: &Settings,
) -> ReturnCode
where
    F: Fn(&[f64], &D) -> f64,
{
    if n == 0 || n > MAX_DIMENSION {
        debug!(n, "dimension out of range");
        return ReturnCode::InvalidArgs;
    }
    if m > MAX_CONSTRAINTS || m != constraints.len() {
        debug!(
            m,
            descriptors = constraints.len(),
            "constraint count mismatch"
        );
        return ReturnCode::InvalidArgs;
    }
    if let Some(index) = constraints.iter().position(|g| g.outputs() != 1) {
        debug!(index, "vector-valued constraint");
        return ReturnCode::InvalidArgs;
    }
    if x.len() != n || lower.len() != n || upper.len() != n {
        debug!(
            n,
            x = x.len(),
            lower = lower.len(),
            upper = upper.len(),
            "buffer length mismatch"
        );
        return ReturnCode::InvalidArgs;
    }

    let bounds = match Bounds::new(lower.to_vec(), upper.to_vec()) {
        Ok(bounds) => bounds,
        Err(err) => {
            debug!(%err, "invalid bounds");
            return ReturnCode::InvalidArgs;
        }
    };
    let config = match settings.config(stop.max_evals) {
        Ok(config) => config,
        Err(err) => {
            debug!(%err, "invalid settings");
            return ReturnCode::InvalidArgs;
        }
    };

    let problem = Callbacks {
        objective,
        constraints,
        data,
    };
    let solution = match run(&problem, &bounds, config, settings.verbose) {
        Ok(solution) => solution,
        Err(err) if err.is_invalid_argument() => {
            debug!(%err, "session rejected");
            return ReturnCode::InvalidArgs;
        }
        Err(err) => {
            error!(%err, "global search failed");
            return ReturnCode::Failure;
        }
    };

    if settings.verbose {
        info!("\n{}", Report::new(&solution));
    }

    let Some(best) = solution.optimum() else {
        debug!(index = solution.best.index(), "no feasible point found");
        return ReturnCode::Failure;
    };
    x.copy_from_slice(best.point());
    *min_value = best.value();

    match solution.status {
        Status::MaxIters => ReturnCode::MaxEvalReached,
        Status::Converged | Status::StoppedByObserver => ReturnCode::Success,
    }
}

/// Runs the session, logging solver events when `verbose` is set.
fn run<P: ConstrainedProblem>(
    problem: &P,
    bounds: &Bounds,
    config: Config,
    verbose: bool,
) -> Result<Solution, Error> {
    let session = Session::new(problem, bounds, config)?;
    if verbose {
        session.solve(TracingObserver::new())
    } else {
        session.solve(())
    }
}
