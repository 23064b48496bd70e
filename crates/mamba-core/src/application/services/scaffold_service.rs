//! Scaffold Service - creates a new project from the starter templates.
//!
//! 1. Validate the project name
//! 2. Refuse if the target directory already exists
//! 3. Render the starter templates
//! 4. Write to filesystem, rolling back on failure

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        DomainValidator as validator, FsEntry, ProjectStructure, RenderContext, starter_project,
        templates::DEFAULT_OUTPUT_DIR,
    },
    error::{MambaError, MambaResult},
};

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    output_dir: String,
}

impl ScaffoldService {
    /// Create a new scaffold service writing through `filesystem`.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            filesystem,
            output_dir: DEFAULT_OUTPUT_DIR.to_owned(),
        }
    }

    /// Build output directory baked into the starter entry point.
    pub fn with_output_dir(mut self, output_dir: impl Into<String>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Scaffold `project_name` inside `parent_dir`.
    ///
    /// Returns the path of the created project root. Fails with
    /// `AlreadyExists` (and writes nothing) if that root is already present.
    #[instrument(
        skip_all,
        fields(
            project = %project_name.as_ref(),
            parent = %parent_dir.as_ref().display()
        )
    )]
    pub fn scaffold(
        &self,
        project_name: impl AsRef<str>,
        parent_dir: impl AsRef<Path>,
    ) -> MambaResult<PathBuf> {
        let project_name = project_name.as_ref();
        validator::validate_project_name(project_name).map_err(MambaError::Domain)?;

        let root = parent_dir.as_ref().join(project_name);
        let context =
            RenderContext::new(project_name).with_variable("OUTPUT_DIR", self.output_dir.as_str());
        let structure = starter_project(&root, &context);
        validator::validate_project_structure(&structure).map_err(MambaError::Domain)?;

        self.write_structure(&structure)?;

        info!(root = %root.display(), "Scaffold completed successfully");
        Ok(root)
    }

    /// Write project structure to filesystem with rollback on failure.
    fn write_structure(&self, structure: &ProjectStructure) -> MambaResult<()> {
        if self.filesystem.exists(structure.root()) {
            return Err(ApplicationError::AlreadyExists {
                path: structure.root().clone(),
            }
            .into());
        }

        match self.write_all(structure) {
            Ok(()) => {
                info!(entries = structure.entry_count(), "Successfully wrote all files");
                Ok(())
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(structure.root());
                Err(e)
            }
        }
    }

    fn write_all(&self, structure: &ProjectStructure) -> MambaResult<()> {
        self.filesystem.create_dir_all(structure.root())?;

        for entry in structure.entries() {
            let path = structure.root().join(entry.path());
            match entry {
                FsEntry::Directory(_) => self.filesystem.create_dir_all(&path)?,
                FsEntry::File(file) => {
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockFilesystem;
    use crate::error::ErrorKind;
    use mockall::predicate::eq;

    #[test]
    fn existing_root_is_refused_without_writes() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .with(eq(Path::new("out/demo")))
            .return_const(true);
        fs.expect_create_dir_all().times(0);
        fs.expect_write_file().times(0);

        let err = ScaffoldService::new(Box::new(fs))
            .scaffold("demo", "out")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    }

    #[test]
    fn invalid_name_is_rejected_before_io() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().times(0);
        let err = ScaffoldService::new(Box::new(fs))
            .scaffold(".hidden", ".")
            .unwrap_err();
        assert!(matches!(
            err,
            MambaError::Domain(crate::domain::DomainError::InvalidProjectName { .. })
        ));
    }

    #[test]
    fn write_failure_rolls_back_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        fs.expect_remove_dir_all()
            .with(eq(Path::new("out/demo")))
            .times(1)
            .returning(|_| Ok(()));

        let err = ScaffoldService::new(Box::new(fs))
            .scaffold("demo", "out")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn success_returns_project_root() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _| Ok(()));

        let root = ScaffoldService::new(Box::new(fs))
            .scaffold("demo", "out")
            .unwrap();
        assert_eq!(root, PathBuf::from("out/demo"));
    }

    #[test]
    fn configured_output_dir_replaces_dist() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all()
            .withf(|path| !path.ends_with("dist"))
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|path, content| {
                path != Path::new("out/demo/main.rs") || content.contains("\"public/index.html\"")
            })
            .returning(|_, _| Ok(()));

        ScaffoldService::new(Box::new(fs))
            .with_output_dir("public")
            .scaffold("demo", "out")
            .unwrap();
    }
}
