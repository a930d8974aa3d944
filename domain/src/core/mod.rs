//! Core domain concepts shared across the sweep subdomain.
//!
//! - [`error::DomainError`] — configuration errors detected before a sweep starts

pub mod error;
