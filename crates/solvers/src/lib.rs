//! Numerical solvers for the Hoelder framework.
//!
//! - [`optimization`] — global minimization of constrained problems

pub mod optimization;
