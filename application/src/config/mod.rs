//! Application-level configuration.
//!
//! - [`SweepConfig`] — the thread levels and parallel triple sequences a sweep
//!   is enumerated from, plus the pairing policy

pub mod sweep_config;

pub use sweep_config::SweepConfig;
