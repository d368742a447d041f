use thiserror::Error;

/// The largest number of search variables the solver supports.
pub const MAX_DIMENSION: usize = 10;

/// A validated search box `lower[i] <= x[i] <= upper[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Bounds {
    lower: Vec<f64>,
    upper: Vec<f64>,
}

/// Errors that can occur when validating search bounds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoundsError {
    #[error("bounds must have at least one dimension")]
    Empty,

    #[error("lower has {lower} entries but upper has {upper}")]
    LengthMismatch { lower: usize, upper: usize },

    #[error(
        "dimension {dimension} exceeds the supported maximum of {}",
        MAX_DIMENSION
    )]
    TooManyDimensions { dimension: usize },

    #[error("bound {index} is not finite")]
    NonFinite { index: usize },

    #[error("lower bound {index} is greater than its upper bound")]
    Reversed { index: usize },
}

impl Bounds {
    /// Creates a validated search box.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are empty, have different lengths, exceed
    /// [`MAX_DIMENSION`], are not finite, or have `lower[i] > upper[i]`.
    pub fn new(lower: Vec<f64>, upper: Vec<f64>) -> Result<Self, BoundsError> {
        if lower.len() != upper.len() {
            return Err(BoundsError::LengthMismatch {
                lower: lower.len(),
                upper: upper.len(),
            });
        }
        if lower.is_empty() {
            return Err(BoundsError::Empty);
        }
        if lower.len() > MAX_DIMENSION {
            return Err(BoundsError::TooManyDimensions {
                dimension: lower.len(),
            });
        }
        for (index, (lo, hi)) in lower.iter().zip(&upper).enumerate() {
            if !lo.is_finite() || !hi.is_finite() {
                return Err(BoundsError::NonFinite { index });
            }
            if lo > hi {
                return Err(BoundsError::Reversed { index });
            }
        }

        Ok(Self { lower, upper })
    }

    /// Returns the number of search variables.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.lower.len()
    }

    #[must_use]
    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    #[must_use]
    pub fn upper(&self) -> &[f64] {
        &self.upper
    }
}
