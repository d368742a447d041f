use super::trial::Trial;

/// Slopes at or below this level are treated as flat and never become an
/// estimate.
const FLAT_SLOPE: f64 = 1e-12;

/// Estimate used for a slot until a pair of trials has measured it.
const FALLBACK: f64 = 1.0;

/// Adaptive lower bounds on the Hölder constant of each function slot.
///
/// The estimate for slot `i` is the steepest slope observed between trials
/// that both reached slot `i`, measured in the curve metric
/// `|t1 - t2|^(1/n)`. Estimates only ever increase.
#[derive(Debug, Clone)]
pub(super) struct HolderEstimates {
    measured: Vec<Option<f64>>,
}

impl HolderEstimates {
    pub(super) fn new(slots: usize) -> Self {
        Self {
            measured: vec![None; slots],
        }
    }

    /// Returns the estimate for `slot`, or the fallback if it is unmeasured.
    pub(super) fn get(&self, slot: usize) -> f64 {
        self.measured[slot].unwrap_or(FALLBACK)
    }

    /// Returns the measured estimate for `slot`, if any.
    pub(super) fn measured(&self, slot: usize) -> Option<f64> {
        self.measured[slot]
    }

    /// Raises the estimate for `slot` to `slope` if that is steeper.
    ///
    /// Returns `true` if the estimate changed.
    pub(super) fn raise(&mut self, slot: usize, slope: f64) -> bool {
        let current = self.measured[slot].unwrap_or(FLAT_SLOPE);
        if slope > current {
            self.measured[slot] = Some(slope);
            true
        } else {
            false
        }
    }

    /// Returns the current estimate of every slot.
    pub(super) fn snapshot(&self) -> Vec<f64> {
        (0..self.measured.len())
            .map(|slot| self.get(slot))
            .collect()
    }

    /// Updates the estimates after the trial at `pos` was inserted.
    ///
    /// The new trial is compared at its own slot with the nearest trial on
    /// each side that reached that slot. An adjacent trial that stopped at a
    /// lower slot is compared with the new trial at the adjacent trial's slot,
    /// since the new trial is now its nearest comparable neighbour.
    ///
    /// Returns the slots whose estimate changed.
    pub(super) fn update_around(
        &mut self,
        trials: &[Trial],
        pos: usize,
        dimension: usize,
    ) -> Vec<usize> {
        let new = &trials[pos];
        let slot = new.index();
        let mut raised = Vec::new();

        let left = trials[..pos].iter().rev().find(|t| t.index() >= slot);
        let right = trials[pos + 1..].iter().find(|t| t.index() >= slot);
        for other in left.into_iter().chain(right) {
            if self.raise(slot, slope(new, other, slot, dimension)) {
                raised.push(slot);
            }
        }

        let adjacent = pos
            .checked_sub(1)
            .map(|i| &trials[i])
            .into_iter()
            .chain(trials.get(pos + 1));
        for other in adjacent {
            let lower = other.index();
            if lower < slot && self.raise(lower, slope(new, other, lower, dimension)) {
                raised.push(lower);
            }
        }

        raised.dedup();
        raised
    }
}

/// Returns the slope between two trials at `slot` in the curve metric.
pub(super) fn slope(a: &Trial, b: &Trial, slot: usize, dimension: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let distance = (a.t() - b.t()).abs().powf(1.0 / dimension as f64);
    (a.values()[slot] - b.values()[slot]).abs() / distance
}
