//! Reusable observers for the Hoelder framework.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the solvers in `hoelder-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasObjective`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TracingObserver`] — logs global search events through `tracing`
//! - [`Threshold`] — stops a solver once a feasible objective is good enough
//!
//! # Reporting
//!
//! [`Report`] renders the statistics block of a finished global search.
//!
//! [`Observer`]: hoelder_core::Observer
//! [`HasObjective`]: traits::HasObjective
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod log;
mod report;
mod threshold;

pub use log::TracingObserver;
pub use report::Report;
pub use threshold::Threshold;
