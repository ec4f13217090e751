//! CLI argument parsing using clap derive macros

use anyhow::{Context, Result};
use clap::Parser;

use crate::build::BuildContext;
use crate::commands::{self, Action};
use crate::exec::subprocess::ShellRunner;
use crate::utils::terminal;

/// An auxiliary tool for building the project.
///
/// Flags are checked in order (--build, --build-clean, --clean, --pcc)
/// and only the first one given is acted upon.
#[derive(Parser, Debug)]
#[command(name = "buildaux")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// (Re)build project
    #[arg(long)]
    pub build: bool,

    /// Clean build files and build project
    #[arg(long)]
    pub build_clean: bool,

    /// Clean build files
    #[arg(long)]
    pub clean: bool,

    /// Pull compile commands to the root of the project
    #[arg(long)]
    pub pcc: bool,

    /// Build project with debug symbols. Use with --build or --build-clean.
    #[arg(long)]
    pub dbg: bool,

    /// Program used for the configure and build steps
    ///
    /// A single program name or path, quoted as one word. Launcher
    /// prefixes such as "ccache cmake" are not split.
    #[arg(long, env = "BUILDAUX_CMAKE", default_value = "cmake")]
    pub cmake: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// The action selected by the flags, first match wins
    pub fn action(&self) -> Option<Action> {
        if self.build {
            Some(Action::Build)
        } else if self.build_clean {
            Some(Action::BuildClean)
        } else if self.clean {
            Some(Action::Clean)
        } else if self.pcc {
            Some(Action::PullCompileCommands)
        } else {
            None
        }
    }

    /// Execute the selected action
    pub fn execute(self) -> Result<()> {
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let Some(action) = self.action() else {
            return Ok(());
        };

        let project_root = std::env::current_dir()
            .context("Failed to get current working directory")?;
        let ctx = BuildContext::new(project_root, self.cmake).debug(self.dbg);

        if self.verbose && action.needs_cmake() && which::which(ctx.cmake()).is_err() {
            terminal::print_warning(&format!(
                "'{}' not found in PATH, the build steps will likely fail",
                ctx.cmake()
            ));
        }

        let mut runner = ShellRunner::new(self.verbose);
        commands::dispatch(action, &ctx, &mut runner);

        Ok(())
    }
}
