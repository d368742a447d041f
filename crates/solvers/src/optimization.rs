//! Solvers for constrained optimization problems.
//!
//! A [`ConstrainedProblem`] exposes `m` inequality constraints and an
//! objective as separate function slots. Solvers in this module evaluate those
//! slots through the index scheme (see [`evaluate`]) and search for the point
//! that minimizes the objective while satisfying every constraint.
//!
//! # Solvers
//!
//! - [`global_search`] — derivative-free global search for multimodal
//!   Hölder-continuous problems over a box
//!
//! [`ConstrainedProblem`]: hoelder_core::ConstrainedProblem

mod evaluate;

pub use evaluate::{EvalError, Evaluation, evaluate};

pub mod global_search;
