use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::EvalError;

use super::MAX_CONSTRAINTS;

/// Errors that can occur during global search.
#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "{count} constraints exceed the supported maximum of {}",
        MAX_CONSTRAINTS
    )]
    TooManyConstraints { count: usize },

    #[error("function in slot {slot} failed")]
    Function {
        slot: usize,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("function in slot {slot} returned non-finite value {value}")]
    NonFinite { slot: usize, value: f64 },

    #[error("trial at t = {t} falls outside the interval ({left}, {right})")]
    Degenerate { t: f64, left: f64, right: f64 },

    #[error("a trial already exists at t = {t}")]
    DuplicateTrial { t: f64 },
}

impl Error {
    /// Returns `true` if the error was raised while creating the session,
    /// before any function was evaluated.
    ///
    /// [`Config`](super::Config) and [`Bounds`](super::Bounds) validate
    /// themselves, so the only such error is [`Error::TooManyConstraints`].
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::TooManyConstraints { .. })
    }
}

impl<PE> From<EvalError<PE>> for Error
where
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<PE>) -> Self {
        match err {
            EvalError::Function { slot, source } => Self::Function {
                slot,
                source: Box::new(source),
            },
            EvalError::NonFinite { slot, value } => Self::NonFinite { slot, value },
        }
    }
}
