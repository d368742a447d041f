//! Interval characteristics and trial placement.
//!
//! Every interval between neighbouring trials gets a characteristic `R`
//! estimating how promising it is; the next trial goes into the interval with
//! the largest `R`. With `μ = r·H_v` (`H_v` the Hölder estimate of slot `v`)
//! and `z*_v` the slot target:
//!
//! - both ends are trials and `v` is the lower of their slots:
//!   `R = Δ + (z_r - z_l)² / (μ² Δ) - 2 (z_r + z_l - 2 z*_v) / μ`,
//!   using each end's value at slot `v`
//! - one end is a search boundary and `k` the trial end:
//!   `R = 2Δ - 4 (z_k - z*_k) / μ`
//!
//! where `Δ = (t_r - t_l)^(1/n)`. Every trial stores its values up to its own
//! slot, so both ends of an interval have a value at the lower slot.

use super::holder::HolderEstimates;
use super::trial::Trial;

/// One end of an interval: a trial or an unevaluated end of `[0, 1]`.
#[derive(Debug, Clone, Copy)]
pub(super) enum Endpoint<'a> {
    Boundary(f64),
    Trial(&'a Trial),
}

impl Endpoint<'_> {
    pub(super) fn t(&self) -> f64 {
        match self {
            Self::Boundary(t) => *t,
            Self::Trial(trial) => trial.t(),
        }
    }

    fn trial(&self) -> Option<&Trial> {
        match self {
            Self::Boundary(_) => None,
            Self::Trial(trial) => Some(*trial),
        }
    }
}

/// Returns the interval size `(t_r - t_l)^(1/n)` in the curve metric.
pub(super) fn delta(left: f64, right: f64, dimension: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let exponent = 1.0 / dimension as f64;
    (right - left).powf(exponent)
}

/// Target values `z*` that the characteristics measure trials against.
///
/// The highest slot reached so far (`top`) targets the smallest value
/// observed there. Lower slots target a small negative reserve, so that
/// intervals with nearly satisfied constraints still look promising.
#[derive(Debug, Clone)]
pub(super) struct Targets {
    values: Vec<f64>,
    top: Option<usize>,
}

impl Targets {
    pub(super) fn new(slots: usize) -> Self {
        Self {
            values: vec![f64::INFINITY; slots],
            top: None,
        }
    }

    pub(super) fn get(&self, slot: usize) -> f64 {
        self.values[slot]
    }

    /// Returns the highest slot reached by any trial.
    pub(super) fn top(&self) -> Option<usize> {
        self.top
    }

    /// Updates the targets with a new trial.
    ///
    /// Returns `true` if any target changed.
    pub(super) fn update(
        &mut self,
        trial: &Trial,
        reserve: f64,
        estimates: &HolderEstimates,
        min_delta: f64,
    ) -> bool {
        let slot = trial.index();
        match self.top {
            Some(top) if slot < top => false,
            Some(top) if slot == top => {
                if trial.value() < self.values[slot] {
                    self.values[slot] = trial.value();
                    true
                } else {
                    false
                }
            }
            _ => {
                self.top = Some(slot);
                for (v, target) in self.values[..slot].iter_mut().enumerate() {
                    *target = -reserve * estimates.get(v) * min_delta;
                }
                self.values[slot] = trial.value();
                true
            }
        }
    }
}

/// Computes characteristics and new trial points from the current estimates.
pub(super) struct Rule<'a> {
    pub(super) reliability: f64,
    pub(super) dimension: usize,
    pub(super) estimates: &'a HolderEstimates,
    pub(super) targets: &'a Targets,
}

impl Rule<'_> {
    /// Returns the characteristic of the interval `[left, right]`.
    pub(super) fn characteristic(
        &self,
        left: Endpoint<'_>,
        right: Endpoint<'_>,
        delta: f64,
    ) -> f64 {
        match (left.trial(), right.trial()) {
            (Some(l), Some(r)) => {
                let slot = l.index().min(r.index());
                let (zl, zr) = (l.values()[slot], r.values()[slot]);
                let mu = self.reliability * self.estimates.get(slot);
                let dz = zr - zl;
                delta + dz * dz / (mu * mu * delta)
                    - 2.0 * (zr + zl - 2.0 * self.targets.get(slot)) / mu
            }
            (Some(k), None) | (None, Some(k)) => self.one_sided(k, delta),
            (None, None) => delta,
        }
    }

    fn one_sided(&self, k: &Trial, delta: f64) -> f64 {
        let slot = k.index();
        let mu = self.reliability * self.estimates.get(slot);
        2.0 * delta - 4.0 * (k.value() - self.targets.get(slot)) / mu
    }

    /// Returns the parameter of the next trial inside `[left, right]`.
    ///
    /// When both ends are trials the midpoint is shifted away from the end
    /// with the larger value at their lower slot, by an amount that grows with
    /// the value difference relative to that slot's Hölder estimate. Next to a
    /// search boundary the midpoint is used.
    pub(super) fn next_point(&self, left: Endpoint<'_>, right: Endpoint<'_>) -> f64 {
        let mid = 0.5 * (left.t() + right.t());
        match (left.trial(), right.trial()) {
            (Some(l), Some(r)) => {
                let slot = l.index().min(r.index());
                let dz = r.values()[slot] - l.values()[slot];
                let ratio = dz.abs() / self.estimates.get(slot);
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let shift = ratio.powi(self.dimension as i32) / (2.0 * self.reliability);
                mid - dz.signum() * shift
            }
            _ => mid,
        }
    }
}
