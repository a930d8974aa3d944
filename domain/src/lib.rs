//! Domain layer for solver-sweep
//!
//! This crate contains the sweep entities, value objects and enumeration
//! rules. It has no dependencies on process spawning, the filesystem or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Sweep
//!
//! A sweep runs an external solver once per (parameter triple, thread level)
//! combination:
//!
//! - **Parameter Triple**: one input file with its sample-count and
//!   iteration-count, paired positionally from three parallel sequences
//! - **Thread Level**: the concurrency degree forwarded to the solver, crossed
//!   with every triple
//!
//! ## Order
//!
//! Outer loop over triples by configured index, inner loop over thread levels
//! in configured order. [`SweepPlan`] fixes this order once, before anything
//! runs.

pub mod core;
pub mod sweep;

// Re-export commonly used types
pub use core::error::DomainError;
pub use sweep::{
    entities::{ParameterTriple, SweepSpec},
    invocation::InvocationDescriptor,
    layout::{DEFAULT_DATA_DIR, DEFAULT_EXEC_FOLDER, DEFAULT_EXECUTABLE, ExecutionLayout},
    plan::{Combination, SweepPlan},
    value_objects::{PairingPolicy, SolverExit, ThreadLevel},
};
