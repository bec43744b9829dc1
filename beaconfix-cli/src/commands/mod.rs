//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`check`] - Test a point against a fence file
//! - [`resolve`] - Resolve beacon readings into a located region

pub mod check;
pub mod resolve;
