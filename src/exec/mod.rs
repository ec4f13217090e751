//! External command execution and status reporting

pub mod subprocess;

use subprocess::{CommandRunner, ShellCommand};

use crate::utils::terminal;

/// Run `command`, print its status line and hand back the exit code.
///
/// A command that cannot be started is reported as `-1`.
pub fn run_and_report(runner: &mut impl CommandRunner, command: &ShellCommand) -> i32 {
    let code = match runner.run(command) {
        Ok(code) => code,
        Err(err) => {
            terminal::print_exec_error(&err);
            -1
        }
    };
    terminal::print_report(command.line(), code);
    code
}
