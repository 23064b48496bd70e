//! Mamba Core - component model and build pipeline.
//!
//! This crate provides the domain and application layers for Mamba, a
//! static-site generator where pages are composed from components that
//! render to HTML strings.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            mamba-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (BuildPipeline, ScaffoldService, ...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Filesystem, AssetTool, StaticServer)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     mamba-adapters (Infrastructure)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mamba_core::prelude::*;
//!
//! struct Hero {
//!     base: ComponentBase,
//! }
//!
//! impl Renderable for Hero {
//!     fn render(&self) -> RenderResult {
//!         let title = self.base.prop("title").and_then(Value::as_str).unwrap_or("");
//!         Ok(format!("<section class=\"py-20\"><h1>{title}</h1></section>"))
//!     }
//! }
//!
//! impl Component for Hero {
//!     fn base(&self) -> &ComponentBase { &self.base }
//!     fn base_mut(&mut self) -> &mut ComponentBase { &mut self.base }
//! }
//!
//! # fn filesystem() -> Box<dyn Filesystem> { unimplemented!() }
//! let pipeline = BuildPipeline::new(filesystem(), DocumentShell::new("My Site"));
//! let mut page: Vec<Box<dyn Component>> = vec![Box::new(Hero {
//!     base: ComponentBase::new(props! { "title" => "Hello" }),
//! })];
//! pipeline.build(&mut page, "dist/index.html").unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what component authors and adapters should use
pub mod prelude {
    pub use crate::application::{
        BuildPipeline, BuildReport, DevService, ProjectBuildConfig, ProjectBuildService,
        ScaffoldService, ServerConfig,
        ports::{AssetTool, EntryRunner, Filesystem, StaticServer, WatchHandle},
    };
    pub use crate::domain::{
        Component, ComponentBase, DocumentShell, Lifecycle, Markup, Props, RenderResult,
        Renderable, State, Value,
    };
    pub use crate::error::{MambaError, MambaResult};
    pub use crate::props;
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
