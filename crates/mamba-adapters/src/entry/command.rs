//! Runs the project's entry point as a child process.

use std::path::Path;
use std::process::Command;

use mamba_core::{
    application::{ApplicationError, ports::EntryRunner},
    error::{MambaError, MambaResult},
};
use tracing::{debug, info};

/// Argv-configured entry runner; `cargo run --quiet` by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    program: String,
    args: Vec<String>,
}

impl CommandEntry {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from a full argv. `None` if it is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.iter().cloned()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandEntry {
    fn default() -> Self {
        Self::new("cargo", ["run", "--quiet"])
    }
}

impl EntryRunner for CommandEntry {
    fn run(&self, project_root: &Path) -> MambaResult<()> {
        debug!(program = %self.program, args = ?self.args, "running entry point");

        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(project_root)
            .status()
            .map_err(|e| -> MambaError {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ApplicationError::ExternalToolMissing {
                        tool: self.program.clone(),
                    }
                    .into()
                } else {
                    MambaError::Internal {
                        message: format!("failed to launch {}: {e}", self.program),
                    }
                }
            })?;

        if !status.success() {
            return Err(ApplicationError::ExternalToolFailed {
                tool: self.program.clone(),
                status: status.code(),
            }
            .into());
        }

        info!("Entry point finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mamba_core::error::ErrorKind;

    #[test]
    fn default_is_cargo_run() {
        let entry = CommandEntry::default();
        assert_eq!(entry.program(), "cargo");
        assert_eq!(entry.args, vec!["run", "--quiet"]);
    }

    #[test]
    fn empty_argv_is_rejected() {
        assert!(CommandEntry::from_argv(&[]).is_none());
    }

    #[test]
    fn missing_program_is_reported() {
        let entry = CommandEntry::new("mamba-no-such-entry-xyz", Vec::<String>::new());
        let err = entry.run(Path::new(".")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExternalToolMissing);
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_is_checked() {
        let argv = ["sh", "-c", "exit 3"].map(String::from);
        let err = CommandEntry::from_argv(&argv)
            .unwrap()
            .run(Path::new("."))
            .unwrap_err();
        assert!(err.to_string().contains('3'));

        let ok = ["true"].map(String::from);
        CommandEntry::from_argv(&ok).unwrap().run(Path::new(".")).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn runs_in_project_root() {
        let tmp = tempfile::TempDir::new().unwrap();
        let argv = ["sh", "-c", "touch ran"].map(String::from);
        CommandEntry::from_argv(&argv).unwrap().run(tmp.path()).unwrap();
        assert!(tmp.path().join("ran").exists());
    }
}
