use thiserror::Error;

use hoelder_core::ConstrainedProblem;

/// The result of evaluating a problem at a point under the index scheme.
///
/// `values[i]` holds the value of slot `i` for every slot that was evaluated,
/// so `values.len() == index + 1`. Slots after `index` were skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub values: Vec<f64>,

    /// The last evaluated slot.
    ///
    /// Equal to the constraint count when every constraint is satisfied and
    /// the objective was evaluated, otherwise the first violated constraint.
    pub index: usize,
}

impl Evaluation {
    /// Returns the value of the last evaluated slot.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.values[self.index]
    }
}

/// Errors that can occur when evaluating a problem.
#[derive(Debug, Error)]
pub enum EvalError<PE> {
    /// A problem function returned an error.
    #[error("function in slot {slot} failed")]
    Function {
        slot: usize,
        #[source]
        source: PE,
    },

    /// A problem function returned NaN or an infinite value.
    #[error("function in slot {slot} returned non-finite value {value}")]
    NonFinite { slot: usize, value: f64 },
}

impl<PE> EvalError<PE> {
    /// Returns the slot of the function that failed.
    #[must_use]
    pub fn slot(&self) -> usize {
        match self {
            Self::Function { slot, .. } | Self::NonFinite { slot, .. } => *slot,
        }
    }
}

/// Evaluates the problem at `x` using the index scheme.
///
/// Constraints are evaluated in order and evaluation stops at the first
/// constraint with a value `> 0`. If every constraint is satisfied the
/// objective is evaluated. `counters[slot]` is incremented for every slot
/// that is called, including a violated constraint or a call that fails.
///
/// `counters` must have at least `constraint_count + 1` entries.
///
/// # Errors
///
/// Returns an error if a function fails or produces a non-finite value.
pub fn evaluate<P>(
    problem: &P,
    x: &[f64],
    counters: &mut [usize],
) -> Result<Evaluation, EvalError<P::Error>>
where
    P: ConstrainedProblem,
{
    let m = problem.constraint_count();
    let mut values = Vec::with_capacity(m + 1);

    for slot in 0..=m {
        counters[slot] += 1;
        let value = problem
            .slot(slot, x)
            .map_err(|source| EvalError::Function { slot, source })?;
        if !value.is_finite() {
            return Err(EvalError::NonFinite { slot, value });
        }
        values.push(value);

        if slot < m && value > 0.0 {
            return Ok(Evaluation {
                values,
                index: slot,
            });
        }
    }

    Ok(Evaluation { values, index: m })
}
