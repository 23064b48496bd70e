//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `mamba-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `AssetTool` / `WatchHandle`: External CSS processor
//!   - `EntryRunner`: The project's own build binary
//!   - `StaticServer`: HTTP transport for the dev server
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{AssetTool, EntryRunner, Filesystem, StaticServer, WatchHandle};
