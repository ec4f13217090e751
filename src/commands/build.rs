//! Build and build-clean actions

use crate::build::{cmake, BuildContext};
use crate::commands::clean;
use crate::error::ExecError;
use crate::exec::run_and_report;
use crate::exec::subprocess::CommandRunner;
use crate::utils::terminal;

/// Create the build directory if needed, then configure and build.
///
/// The build step runs even when configure fails.
pub fn build(ctx: &BuildContext, runner: &mut impl CommandRunner) {
    let build_dir = ctx.build_dir();
    if !build_dir.exists() {
        if let Err(source) = std::fs::create_dir_all(build_dir) {
            let err = ExecError::CreateDir {
                path: build_dir.to_path_buf(),
                source,
            };
            terminal::print_exec_error(&err);
        }
    }

    let configure = cmake::configure(ctx.cmake(), ctx.build_type(), build_dir.to_path_buf());
    run_and_report(runner, &configure);

    let compile = cmake::build(ctx.cmake(), build_dir.to_path_buf());
    run_and_report(runner, &compile);
}

/// [`clean::clean`] followed by [`build`], whatever clean reported
pub fn build_clean(ctx: &BuildContext, runner: &mut impl CommandRunner) {
    clean::clean(ctx, runner);
    build(ctx, runner);
}
