//! Core traits and types for the Hoelder framework.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`ConstrainedProblem`] — an objective plus an ordered list of inequality
//!   constraints, evaluated one function slot at a time
//! - [`FnProblem`] — a closure-backed [`ConstrainedProblem`]
//! - [`Observer`] — receives solver events and optionally returns control actions

mod observer;
mod problems;

pub use observer::Observer;
pub use problems::{ConstrainedProblem, FnProblem};
