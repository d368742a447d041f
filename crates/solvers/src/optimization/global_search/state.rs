use super::characteristic::{Endpoint, Rule, Targets, delta};
use super::holder::HolderEstimates;
use super::solution::Status;
use super::{Config, Error, Solution, Trial};

#[derive(Debug, Clone, Copy, Default)]
struct Interval {
    delta: f64,
    characteristic: f64,
}

/// A candidate trial inside a selected interval.
#[derive(Debug, Clone, Copy)]
pub(super) struct Proposal {
    pub(super) t: f64,
    pub(super) left: f64,
    pub(super) right: f64,
}

impl Proposal {
    /// Returns `true` if `t` lies strictly inside the interval.
    pub(super) fn is_inside(&self) -> bool {
        self.t > self.left && self.t < self.right
    }

    /// Returns `true` if the interval is too narrow to hold any new trial.
    pub(super) fn is_unresolvable(&self) -> bool {
        let mid = 0.5 * (self.left + self.right);
        mid <= self.left || mid >= self.right
    }
}

/// The sorted trial sequence and everything derived from it.
///
/// Interval `i` lies between trial `i - 1` and trial `i`, with the unevaluated
/// ends of `[0, 1]` closing the first and last intervals, so there is always
/// one more interval than trials.
pub(super) struct State {
    dimension: usize,
    constraint_count: usize,
    trials: Vec<Trial>,
    intervals: Vec<Interval>,
    estimates: HolderEstimates,
    targets: Targets,
    min_delta: f64,
    max_delta: f64,
    best: Trial,
    evaluations: Vec<usize>,
    stale: bool,
}

impl State {
    /// Creates the state from the first trial.
    ///
    /// `evaluations` holds the per-slot call counts accumulated so far.
    pub(super) fn new(
        dimension: usize,
        first: Trial,
        evaluations: Vec<usize>,
        config: &Config,
    ) -> Self {
        let slots = evaluations.len();
        let mut state = Self {
            dimension,
            constraint_count: slots - 1,
            trials: Vec::new(),
            intervals: vec![Interval::default()],
            estimates: HolderEstimates::new(slots),
            targets: Targets::new(slots),
            min_delta: f64::INFINITY,
            max_delta: 0.0,
            best: first.clone(),
            evaluations,
            stale: true,
        };
        state.place(0, first);
        state.absorb(0, config.reserve());
        state.refresh(0, config.reliability());
        state
    }

    /// Returns the number of trials performed.
    pub(super) fn iters(&self) -> usize {
        self.trials.len()
    }

    pub(super) fn evaluations_mut(&mut self) -> &mut [usize] {
        &mut self.evaluations
    }

    pub(super) fn trial(&self, pos: usize) -> &Trial {
        &self.trials[pos]
    }

    pub(super) fn best(&self) -> &Trial {
        &self.best
    }

    pub(super) fn estimate(&self, slot: usize) -> f64 {
        self.estimates.get(slot)
    }

    /// Returns the index of the interval with the largest characteristic.
    ///
    /// Ties go to the leftmost interval.
    pub(super) fn select(&self) -> usize {
        let mut selected = 0;
        for (i, interval) in self.intervals.iter().enumerate().skip(1) {
            if interval.characteristic > self.intervals[selected].characteristic {
                selected = i;
            }
        }
        selected
    }

    /// Returns the size of interval `i` in the curve metric.
    #[cfg(test)]
    pub(super) fn delta(&self, i: usize) -> f64 {
        self.intervals[i].delta
    }

    /// Returns the size of the largest interval in the curve metric.
    pub(super) fn max_delta(&self) -> f64 {
        self.max_delta
    }

    /// Computes where the next trial in interval `i` should go.
    pub(super) fn propose(&self, i: usize, reliability: f64) -> Proposal {
        let (left, right) = endpoints(&self.trials, i);
        let rule = Rule {
            reliability,
            dimension: self.dimension,
            estimates: &self.estimates,
            targets: &self.targets,
        };
        Proposal {
            t: rule.next_point(left, right),
            left: left.t(),
            right: right.t(),
        }
    }

    /// Inserts a trial, keeping the sequence sorted by `t`.
    ///
    /// Returns the position of the new trial.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateTrial`] if a trial already exists at `t`.
    pub(super) fn insert(&mut self, trial: Trial) -> Result<usize, Error> {
        let t = trial.t();
        match self.trials.binary_search_by(|p| p.t().total_cmp(&t)) {
            Ok(_) => Err(Error::DuplicateTrial { t }),
            Err(pos) => {
                self.place(pos, trial);
                Ok(pos)
            }
        }
    }

    /// Splits the interval at `pos` around a new trial.
    fn place(&mut self, pos: usize, trial: Trial) {
        let split = self.intervals[pos].delta;
        self.trials.insert(pos, trial);
        self.intervals.insert(pos, Interval::default());
        for i in [pos, pos + 1] {
            let (left, right) = endpoints(&self.trials, i);
            let d = delta(left.t(), right.t(), self.dimension);
            self.intervals[i].delta = d;
            self.min_delta = self.min_delta.min(d);
        }

        // Intervals only shrink, so the maximum moves only when it was split.
        if split >= self.max_delta {
            self.max_delta = self
                .intervals
                .iter()
                .map(|interval| interval.delta)
                .fold(0.0, f64::max);
        }
    }

    /// Updates estimates, targets and the best trial with the trial at `pos`.
    ///
    /// Returns the slots whose Hölder estimate was raised.
    pub(super) fn absorb(&mut self, pos: usize, reserve: f64) -> Vec<usize> {
        let raised = self
            .estimates
            .update_around(&self.trials, pos, self.dimension);
        if !raised.is_empty() {
            self.stale = true;
        }

        let trial = &self.trials[pos];
        if self
            .targets
            .update(trial, reserve, &self.estimates, self.min_delta)
        {
            self.stale = true;
        }

        if self.improves(trial, reserve) {
            self.best = trial.clone();
        }

        raised
    }

    /// Returns `true` if `trial` should replace the best trial.
    ///
    /// A feasible trial must beat a feasible best by more than the reserve
    /// margin `reserve * H_m * δ_min`.
    fn improves(&self, trial: &Trial, reserve: f64) -> bool {
        let best = &self.best;
        if trial.index() != best.index() {
            return trial.index() > best.index();
        }
        let margin = if trial.is_feasible() {
            reserve * self.estimates.get(self.constraint_count) * self.min_delta
        } else {
            0.0
        };
        trial.value() < best.value() - margin
    }

    /// Recomputes characteristics after inserting the trial at `pos`.
    ///
    /// Only the two intervals touching the trial are recomputed, unless an
    /// estimate or target changed since the last refresh.
    pub(super) fn refresh(&mut self, pos: usize, reliability: f64) {
        let Self {
            dimension,
            trials,
            intervals,
            estimates,
            targets,
            stale,
            ..
        } = self;
        let rule = Rule {
            reliability,
            dimension: *dimension,
            estimates: &*estimates,
            targets: &*targets,
        };

        let range = if *stale {
            0..intervals.len()
        } else {
            pos..pos + 2
        };
        for i in range {
            let (left, right) = endpoints(&trials[..], i);
            intervals[i].characteristic = rule.characteristic(left, right, intervals[i].delta);
        }
        *stale = false;
    }

    pub(super) fn into_solution(self, status: Status) -> Solution {
        Solution {
            status,
            iters: self.trials.len(),
            best: self.best,
            estimates: self.estimates.snapshot(),
            evaluations: self.evaluations,
        }
    }

    #[cfg(test)]
    pub(super) fn trials(&self) -> &[Trial] {
        &self.trials
    }

    #[cfg(test)]
    pub(super) fn characteristic(&self, i: usize) -> f64 {
        self.intervals[i].characteristic
    }
}

/// Returns the ends of interval `i`.
fn endpoints(trials: &[Trial], i: usize) -> (Endpoint<'_>, Endpoint<'_>) {
    let left = match i.checked_sub(1) {
        Some(j) => Endpoint::Trial(&trials[j]),
        None => Endpoint::Boundary(0.0),
    };
    let right = match trials.get(i) {
        Some(trial) => Endpoint::Trial(trial),
        None => Endpoint::Boundary(1.0),
    };
    (left, right)
}
