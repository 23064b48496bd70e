//! External CSS tool adapters.

mod tailwind;

pub use tailwind::{TailwindCli, TailwindWatch};
