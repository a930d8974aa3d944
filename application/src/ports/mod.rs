//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod input_probe;
pub mod progress;
pub mod solver_launcher;
