//! Clean action

use crate::build::{BuildContext, COMPILE_COMMANDS};
use crate::exec::run_and_report;
use crate::exec::subprocess::{quote_path, CommandRunner, ShellCommand};

/// Remove the build directory and the root-level compile commands.
///
/// Does nothing when the build directory is absent. Otherwise the
/// compile-commands removal is attempted even if that file does not exist.
pub fn clean(ctx: &BuildContext, runner: &mut impl CommandRunner) {
    if !ctx.build_dir().exists() {
        return;
    }

    let root = ctx.project_root().to_path_buf();

    let remove_build = ShellCommand::new(
        format!("rm -rf {}", quote_path(ctx.build_dir())),
        root.clone(),
    );
    run_and_report(runner, &remove_build);

    let remove_cc = ShellCommand::new(format!("rm {}", COMPILE_COMMANDS), root);
    run_and_report(runner, &remove_cc);
}
