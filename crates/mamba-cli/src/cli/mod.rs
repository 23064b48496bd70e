//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here.

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mamba",
    bin_name = "mamba",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Component-based static site generator",
    long_about = "Mamba builds static HTML pages from components that render \
                  to markup, styled with Tailwind CSS.",
    after_help = "EXAMPLES:\n\
        \x20 mamba create my-site\n\
        \x20 mamba build\n\
        \x20 mamba dev --port 3000",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new project directory.
    #[command(
        visible_alias = "new",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 mamba create my-site\n\
            \x20 cd my-site && mamba build"
    )]
    Create(CreateArgs),

    /// Run the project's entry point, then compile the stylesheet.
    #[command(
        about = "Build the site into dist/",
        after_help = "EXAMPLES:\n\
            \x20 mamba build\n\
            \x20 mamba build --skip-css"
    )]
    Build(BuildArgs),

    /// Serve the project directory with the CSS watcher running.
    #[command(
        visible_alias = "serve",
        about = "Start the development server",
        after_help = "EXAMPLES:\n\
            \x20 mamba dev\n\
            \x20 mamba dev --port 3000 --no-watch"
    )]
    Dev(DevArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Show configuration",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 mamba config list\n\
            \x20 mamba config get server.port\n\
            \x20 mamba config path"
    )]
    Config(ConfigCommands),
}

// ── create ────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Directory name of the new project, created in the current directory.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,
}

// ── build ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Skip the Tailwind compile step.
    #[arg(long = "skip-css", help = "Do not run the CSS tool")]
    pub skip_css: bool,
}

// ── dev ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DevArgs {
    /// Port to listen on; overrides `server.port`.
    #[arg(short = 'p', long = "port", value_name = "PORT", help = "Port to listen on")]
    pub port: Option<u16>,

    /// Do not start the CSS watcher.
    #[arg(long = "no-watch", help = "Disable the CSS watcher")]
    pub no_watch: bool,
}

// ── config ────────────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one value by dotted key.
    Get {
        #[arg(value_name = "KEY", help = "Dotted key, e.g. server.port")]
        key: String,
    },
    /// Print the whole effective configuration as TOML.
    List,
    /// Print the global configuration file location.
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn dev_flags_parse() {
        let cli = Cli::try_parse_from(["mamba", "dev", "--port", "3000", "--no-watch"]).unwrap();
        match cli.command {
            Commands::Dev(args) => {
                assert_eq!(args.port, Some(3000));
                assert!(args.no_watch);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn new_is_alias_for_create() {
        let cli = Cli::try_parse_from(["mamba", "new", "site"]).unwrap();
        assert!(matches!(cli.command, Commands::Create(CreateArgs { ref name }) if name == "site"));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["mamba", "build", "-vv", "--skip-css"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["mamba", "-q", "-v", "build"]).is_err());
    }
}
