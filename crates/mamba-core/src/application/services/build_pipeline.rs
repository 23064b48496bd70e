//! Build Pipeline - composes components into a page and writes it.
//!
//! 1. Mount every component, in list order
//! 2. Render every component, in list order
//! 3. Join the fragments and wrap them in the document shell
//! 4. Ensure the destination directory exists, then replace the file
//!
//! Any failure in steps 1-3 aborts before the filesystem is touched, so a
//! failed build never clobbers the previous artifact.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{Component, DocumentShell, Markup, Renderable},
    error::MambaResult,
};

/// Summary of a finished build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub path: PathBuf,
    pub components: usize,
    pub bytes: usize,
}

/// Mounts, renders and writes an ordered list of components.
pub struct BuildPipeline {
    filesystem: Box<dyn Filesystem>,
    shell: DocumentShell,
}

impl BuildPipeline {
    pub fn new(filesystem: Box<dyn Filesystem>, shell: DocumentShell) -> Self {
        Self { filesystem, shell }
    }

    pub fn shell(&self) -> &DocumentShell {
        &self.shell
    }

    /// Mount then render all components and return the full page.
    ///
    /// Order of `components` is the vertical order of the page.
    pub fn render_page(&self, components: &mut [Box<dyn Component>]) -> MambaResult<String> {
        for component in components.iter_mut() {
            component.mount()?;
        }

        let mut fragments: Vec<Markup> = Vec::with_capacity(components.len());
        for component in components.iter() {
            let markup = component.render()?;
            debug!(component = component.name(), bytes = markup.len(), "rendered");
            fragments.push(markup);
        }

        Ok(self.shell.compose(&fragments))
    }

    /// Render the page and fully overwrite `destination` with it.
    #[instrument(
        skip_all,
        fields(
            components = components.len(),
            destination = %destination.as_ref().display()
        )
    )]
    pub fn build(
        &self,
        components: &mut [Box<dyn Component>],
        destination: impl AsRef<Path>,
    ) -> MambaResult<BuildReport> {
        let destination = destination.as_ref();

        let page = self.render_page(components)?;

        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(destination, &page)?;

        info!(bytes = page.len(), "Page written");
        Ok(BuildReport {
            path: destination.to_path_buf(),
            components: components.len(),
            bytes: page.len(),
        })
    }
}
