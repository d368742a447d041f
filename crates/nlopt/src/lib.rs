//! NLopt-style front end for the Hoelder global search.
//!
//! [`minimize`] takes the dimension, callbacks, opaque user data, bounds and
//! stopping criteria the way NLopt algorithms do, validates them, runs a
//! [`global_search`] session, and reports the outcome as a [`ReturnCode`].
//! Results are written to the caller's buffers only when a feasible point
//! was found.
//!
//! Tuning parameters live in [`Settings`], passed explicitly on every call.
//!
//! [`global_search`]: hoelder_solvers::optimization::global_search

mod constraint;
mod minimize;
mod settings;
mod status;

pub use constraint::Constraint;
pub use minimize::minimize;
pub use settings::{Settings, Stopping};
pub use status::ReturnCode;

pub use hoelder_solvers::optimization::global_search::{MAX_CONSTRAINTS, MAX_DIMENSION};
