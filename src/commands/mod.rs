//! Command implementations
//!
//! Each action is a straight-line sequence of external commands. A failing
//! step is reported and the next step runs anyway.

pub mod build;
pub mod clean;
pub mod pcc;

use crate::build::BuildContext;
use crate::exec::subprocess::CommandRunner;

/// Top-level action selected by the flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// `--build`
    Build,
    /// `--build-clean`
    BuildClean,
    /// `--clean`
    Clean,
    /// `--pcc`
    PullCompileCommands,
}

impl Action {
    /// Whether the action runs the configure and build steps
    pub fn needs_cmake(self) -> bool {
        matches!(self, Action::Build | Action::BuildClean)
    }
}

/// Run `action` against `ctx`
pub fn dispatch(action: Action, ctx: &BuildContext, runner: &mut impl CommandRunner) {
    match action {
        Action::Build => build::build(ctx, runner),
        Action::BuildClean => build::build_clean(ctx, runner),
        Action::Clean => clean::clean(ctx, runner),
        Action::PullCompileCommands => pcc::pull_compile_commands(ctx, runner),
    }
}
