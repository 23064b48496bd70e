//! Project entry point runners.

mod command;

pub use command::CommandEntry;
