//! Use cases (application services)
//!
//! - [`run_sweep`] — enumerate the sweep and run the solver once per combination

pub mod run_sweep;
