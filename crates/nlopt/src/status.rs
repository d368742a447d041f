/// Outcome of [`minimize`](crate::minimize), using NLopt's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReturnCode {
    /// The search converged; the outputs hold the best feasible point.
    Success,

    /// The arguments were rejected before any evaluation.
    InvalidArgs,

    /// The evaluation budget ran out; the outputs hold the best feasible point.
    MaxEvalReached,

    /// No feasible point was found, or the search failed.
    Failure,
}

impl ReturnCode {
    /// Returns NLopt's numeric code for this outcome.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 1,
            Self::MaxEvalReached => 5,
            Self::Failure => -1,
            Self::InvalidArgs => -2,
        }
    }

    /// Returns `true` if the outputs were written.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success | Self::MaxEvalReached)
    }
}
