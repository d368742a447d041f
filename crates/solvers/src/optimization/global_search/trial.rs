use std::cmp::Ordering;

use crate::optimization::Evaluation;

/// An evaluated point of the search.
///
/// A trial records the curve parameter `t`, the mapped point, and the values
/// of every function slot evaluated under the index scheme. Trials are
/// immutable once created.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trial {
    t: f64,
    point: Vec<f64>,
    values: Vec<f64>,
    index: usize,
    feasible: bool,
}

impl Trial {
    pub(super) fn new(t: f64, point: Vec<f64>, eval: Evaluation, constraint_count: usize) -> Self {
        Self {
            t,
            point,
            feasible: eval.index == constraint_count,
            values: eval.values,
            index: eval.index,
        }
    }

    /// Returns the curve parameter in `[0, 1]`.
    #[must_use]
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Returns the point in the search box.
    #[must_use]
    pub fn point(&self) -> &[f64] {
        &self.point
    }

    /// Returns the values of the evaluated slots, `index + 1` entries.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the last evaluated slot.
    ///
    /// This is the first violated constraint, or the constraint count when
    /// every constraint holds.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the value of the last evaluated slot.
    ///
    /// For a feasible trial this is the objective value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.values[self.index]
    }

    /// Returns `true` if every constraint holds at this trial.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    /// Compares two trials by quality; `Greater` means `self` is better.
    ///
    /// A trial that satisfies more constraints is always better. Among trials
    /// that stopped at the same slot the smaller value is better.
    #[must_use]
    pub fn quality_cmp(&self, other: &Self) -> Ordering {
        self.index
            .cmp(&other.index)
            .then_with(|| other.value().total_cmp(&self.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trial(values: Vec<f64>, m: usize) -> Trial {
        let index = values.len() - 1;
        Trial::new(0.5, vec![0.0], Evaluation { values, index }, m)
    }

    #[test]
    fn more_satisfied_constraints_win() {
        let far = trial(vec![-1.0, -1.0, 100.0], 2);
        let near = trial(vec![-1.0, 0.1], 2);

        assert!(far.is_feasible());
        assert!(!near.is_feasible());
        assert_eq!(far.quality_cmp(&near), Ordering::Greater);
        assert_eq!(near.quality_cmp(&far), Ordering::Less);
    }

    #[test]
    fn smaller_value_wins_at_same_slot() {
        let small = trial(vec![0.2], 1);
        let large = trial(vec![0.7], 1);

        assert_eq!(small.index(), 0);
        assert_eq!(small.value(), 0.2);
        assert_eq!(small.quality_cmp(&large), Ordering::Greater);
        assert_eq!(small.quality_cmp(&small.clone()), Ordering::Equal);
    }
}
