//! Dev server transport adapters.

mod static_files;

pub use static_files::TinyHttpServer;
