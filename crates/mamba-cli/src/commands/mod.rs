//! Command handlers, one module per subcommand.
//!
//! Each handler wires adapters into a core service, runs it, and reports
//! the outcome through the [`OutputManager`](crate::output::OutputManager).

pub mod build;
pub mod config;
pub mod create;
pub mod dev;
