//! Tailwind CSS CLI adapter.
//!
//! Runs `<runner> <tool> -i <input> -o <output> --minify` once for builds,
//! or with `--watch=always` as a long-lived child for the dev server.

use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use mamba_core::{
    application::{
        ApplicationError,
        ports::{AssetTool, WatchHandle},
    },
    error::{Context, MambaError, MambaResult},
};
use tracing::{debug, info, warn};

/// Invocation of the Tailwind CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailwindCli {
    /// Launcher looked up on `PATH`, usually `npx`.
    pub runner: String,
    pub tool: String,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for TailwindCli {
    fn default() -> Self {
        Self {
            runner: "npx".into(),
            tool: "tailwindcss".into(),
            input: PathBuf::from("./input.css"),
            output: PathBuf::from("./dist/tailwind.css"),
        }
    }
}

impl TailwindCli {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the runner on `PATH`.
    fn locate(&self) -> MambaResult<PathBuf> {
        which::which(&self.runner).map_err(|e| {
            debug!(runner = %self.runner, error = %e, "runner lookup failed");
            MambaError::from(ApplicationError::ExternalToolMissing {
                tool: self.runner.clone(),
            })
        })
    }

    fn command(&self, project_root: &Path, mode: &str) -> MambaResult<Command> {
        let mut cmd = Command::new(self.locate()?);
        cmd.arg(&self.tool)
            .arg("-i")
            .arg(&self.input)
            .arg("-o")
            .arg(&self.output)
            .arg(mode)
            .current_dir(project_root);
        Ok(cmd)
    }

    fn spawn_error(&self, e: std::io::Error) -> MambaError {
        if e.kind() == std::io::ErrorKind::NotFound {
            ApplicationError::ExternalToolMissing {
                tool: self.runner.clone(),
            }
            .into()
        } else {
            MambaError::Internal {
                message: format!("failed to launch {}: {e}", self.runner),
            }
        }
    }
}

impl AssetTool for TailwindCli {
    fn compile(&self, project_root: &Path) -> MambaResult<()> {
        let mut cmd = self.command(project_root, "--minify")?;
        debug!(?cmd, "running asset compile");

        let status = cmd.status().map_err(|e| self.spawn_error(e))?;
        if !status.success() {
            return Err(ApplicationError::ExternalToolFailed {
                tool: self.tool.clone(),
                status: status.code(),
            }
            .into());
        }

        info!(output = %self.output.display(), "Stylesheet compiled");
        Ok(())
    }

    fn watch(&self, project_root: &Path) -> MambaResult<Box<dyn WatchHandle>> {
        // Tailwind quits once stdin reaches EOF, so stdin stays piped and open.
        let mut cmd = self.command(project_root, "--watch=always")?;
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let child = cmd.spawn().map_err(|e| self.spawn_error(e))?;
        debug!(pid = child.id(), "asset watcher started");
        Ok(Box::new(TailwindWatch::new(child)))
    }
}

/// Running watch-mode child. Killed on [`WatchHandle::stop`] or drop.
#[derive(Debug)]
pub struct TailwindWatch {
    child: Option<Child>,
    /// Held open for the child's lifetime.
    stdin: Option<ChildStdin>,
}

impl TailwindWatch {
    pub fn new(mut child: Child) -> Self {
        let stdin = child.stdin.take();
        Self {
            child: Some(child),
            stdin,
        }
    }
}

impl WatchHandle for TailwindWatch {
    fn id(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }

    fn is_running(&mut self) -> bool {
        match self.child.as_mut() {
            Some(child) => matches!(child.try_wait(), Ok(None)),
            None => false,
        }
    }

    fn stop(&mut self) -> MambaResult<()> {
        self.stdin.take();
        let Some(mut child) = self.child.take() else {
            return Ok(());
        };

        // Already exited on its own: kill fails with InvalidInput, wait still reaps.
        if let Err(e) = child.kill() {
            debug!(error = %e, "kill skipped");
        }
        child.wait().context("failed to reap asset watcher")?;
        Ok(())
    }
}

impl Drop for TailwindWatch {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            warn!(error = %e, "asset watcher cleanup failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mamba_core::error::ErrorKind;

    fn missing_runner() -> TailwindCli {
        TailwindCli {
            runner: "mamba-no-such-runner-xyz".into(),
            ..TailwindCli::default()
        }
    }

    #[test]
    fn missing_runner_on_compile() {
        let err = missing_runner().compile(Path::new(".")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ExternalToolMissing);
        assert!(err.to_string().contains("mamba-no-such-runner-xyz"));
    }

    #[test]
    fn missing_runner_on_watch() {
        let err = missing_runner().watch(Path::new(".")).err().unwrap();
        assert_eq!(err.kind(), ErrorKind::ExternalToolMissing);
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_failure() {
        let cli = TailwindCli {
            runner: "false".into(),
            ..TailwindCli::default()
        };
        let err = cli.compile(Path::new(".")).unwrap_err();
        assert!(matches!(
            err,
            MambaError::Application(ApplicationError::ExternalToolFailed { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn successful_exit_compiles() {
        let cli = TailwindCli {
            runner: "true".into(),
            ..TailwindCli::default()
        };
        cli.compile(Path::new(".")).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn watcher_outlives_stdin_sensitive_tool() {
        let tmp = tempfile::TempDir::new().unwrap();
        // Stand-in for the CLI: records its argv, then exits at stdin EOF.
        std::fs::write(
            tmp.path().join("fake-tailwind.sh"),
            "echo \"$@\" > args.txt\ncat > /dev/null\n",
        )
        .unwrap();
        let cli = TailwindCli {
            runner: "sh".into(),
            tool: "fake-tailwind.sh".into(),
            ..TailwindCli::default()
        };

        let mut watch = cli.watch(tmp.path()).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(500));

        assert!(watch.is_running());
        let args = std::fs::read_to_string(tmp.path().join("args.txt")).unwrap();
        assert!(args.contains("--watch=always"), "{args}");

        watch.stop().unwrap();
        assert!(!watch.is_running());
    }

    #[cfg(unix)]
    #[test]
    fn stop_kills_child_and_is_idempotent() {
        let child = Command::new("sleep").arg("30").spawn().unwrap();
        let mut watch = TailwindWatch::new(child);

        assert!(watch.id().is_some());
        assert!(watch.is_running());
        watch.stop().unwrap();
        assert!(!watch.is_running());
        assert!(watch.id().is_none());
        watch.stop().unwrap();
    }
}
