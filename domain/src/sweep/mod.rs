//! Sweep subdomain — what gets run, in which order, and how it is resolved.
//!
//! - [`entities`] — [`ParameterTriple`](entities::ParameterTriple) and the raw
//!   [`SweepSpec`](entities::SweepSpec) with the positional pairing rule
//! - [`plan`] — [`SweepPlan`](plan::SweepPlan): triples × thread levels in
//!   execution order
//! - [`layout`] — [`ExecutionLayout`](layout::ExecutionLayout): execution root,
//!   solver and data locations
//! - [`invocation`] — [`InvocationDescriptor`](invocation::InvocationDescriptor):
//!   one resolved command line
//! - [`value_objects`] — thread levels, pairing policy, solver exit status

pub mod entities;
pub mod invocation;
pub mod layout;
pub mod plan;
pub mod value_objects;
