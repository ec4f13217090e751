//! Pull `compile_commands.json` from the build directory to the project root

use crate::build::BuildContext;
use crate::exec::run_and_report;
use crate::exec::subprocess::{quote_path, CommandRunner, ShellCommand};

/// Copy `build/compile_commands.json` into the project root.
///
/// The source is not checked; a missing file shows up as a failed `cp`.
pub fn pull_compile_commands(ctx: &BuildContext, runner: &mut impl CommandRunner) {
    let copy = ShellCommand::new(
        format!("cp {} .", quote_path(&ctx.generated_compile_commands())),
        ctx.project_root().to_path_buf(),
    );
    run_and_report(runner, &copy);
}
