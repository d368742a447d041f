use tracing::{debug, trace};

use hoelder_core::{ConstrainedProblem, Observer};

use crate::optimization::evaluate;

use super::{
    Action, Config, Error, Event, Solution, Status, Trial, mapping::PeanoCurve, state::State,
};

/// Curve parameter of the first trial.
const FIRST_TRIAL: f64 = 0.5;

/// Core global search loop.
///
/// The first trial goes to the middle of the curve. Each iteration then picks
/// the interval with the largest characteristic, places a trial inside it, and
/// updates the estimates, targets and characteristics that the trial affects.
/// The search converges once every interval is narrower than the precision,
/// or when the selected interval is too narrow to split.
pub(super) fn search<P, Obs>(
    problem: &P,
    curve: &PeanoCurve,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: ConstrainedProblem,
    Obs: for<'a> Observer<Event<'a, P>, Action>,
{
    let mut evaluations = vec![0; problem.constraint_count() + 1];

    let outcome = eval_and_observe(
        problem,
        curve,
        FIRST_TRIAL,
        &mut evaluations,
        &mut observer,
    )?;
    let first = match outcome {
        Outcome::Evaluated(trial) => trial,
        Outcome::StopEarly(error) => return Err(error),
    };
    let mut state = State::new(curve.dimension(), first, evaluations, config);
    let mut stop = notify(&state, 0, &[], &mut observer);

    let status = loop {
        if stop {
            break Status::StoppedByObserver;
        }
        if state.iters() >= config.max_iters() {
            break Status::MaxIters;
        }

        if state.max_delta() < config.precision() {
            break Status::Converged;
        }

        let selected = state.select();
        let proposal = state.propose(selected, config.reliability());
        if !proposal.is_inside() {
            if proposal.is_unresolvable() {
                debug!(
                    left = proposal.left,
                    right = proposal.right,
                    "interval reached floating-point resolution"
                );
                break Status::Converged;
            }
            return Err(Error::Degenerate {
                t: proposal.t,
                left: proposal.left,
                right: proposal.right,
            });
        }

        let outcome = eval_and_observe(
            problem,
            curve,
            proposal.t,
            state.evaluations_mut(),
            &mut observer,
        )?;
        let trial = match outcome {
            Outcome::Evaluated(trial) => trial,
            Outcome::StopEarly(error) => {
                debug!(%error, "observer stopped the search after a failed evaluation");
                break Status::StoppedByObserver;
            }
        };

        let pos = state.insert(trial)?;
        let raised = state.absorb(pos, config.reserve());
        state.refresh(pos, config.reliability());
        stop = notify(&state, pos, &raised, &mut observer);
    };

    let finished: Event<'_, P> = Event::Finished {
        status,
        best: state.best(),
    };
    observer.observe(&finished);

    debug!(
        ?status,
        iters = state.iters(),
        best = state.best().value(),
        feasible = state.best().is_feasible(),
        "global search finished"
    );

    Ok(state.into_solution(status))
}

// ============================================================================
// Eval + observe helpers
// ============================================================================

enum Outcome {
    Evaluated(Trial),
    StopEarly(Error),
}

/// Maps `t` to the box, evaluates it, and reports failures to the observer.
fn eval_and_observe<P, Obs>(
    problem: &P,
    curve: &PeanoCurve,
    t: f64,
    evaluations: &mut [usize],
    observer: &mut Obs,
) -> Result<Outcome, Error>
where
    P: ConstrainedProblem,
    Obs: for<'a> Observer<Event<'a, P>, Action>,
{
    let point = curve.map(t);
    match evaluate(problem, &point, evaluations) {
        Ok(eval) => {
            let trial = Trial::new(t, point, eval, problem.constraint_count());
            trace!(
                t,
                index = trial.index(),
                value = trial.value(),
                "trial evaluated"
            );
            Ok(Outcome::Evaluated(trial))
        }
        Err(error) => {
            let event: Event<'_, P> = Event::FunctionFailed {
                t,
                point: &point,
                error: &error,
            };
            let action = observer.observe(&event);
            match action {
                Some(Action::StopEarly) => Ok(Outcome::StopEarly(error.into())),
                None => Err(error.into()),
            }
        }
    }
}

/// Emits the events for the trial at `pos`.
///
/// Returns `true` if the observer asked to stop.
fn notify<P, Obs>(state: &State, pos: usize, raised: &[usize], observer: &mut Obs) -> bool
where
    P: ConstrainedProblem,
    Obs: for<'a> Observer<Event<'a, P>, Action>,
{
    let mut stop = false;

    for &slot in raised {
        let event: Event<'_, P> = Event::EstimateRaised {
            slot,
            estimate: state.estimate(slot),
        };
        stop |= matches!(observer.observe(&event), Some(Action::StopEarly));
    }

    let event: Event<'_, P> = Event::Evaluated {
        trial: state.trial(pos),
        best: state.best(),
    };
    stop |= matches!(observer.observe(&event), Some(Action::StopEarly));

    stop
}
