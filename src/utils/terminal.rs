//! Terminal output utilities

use console::{style, StyledObject};

use crate::error::ExecError;

/// Prefix for stderr lines, colored by stderr's terminal detection
fn label(text: &'static str) -> StyledObject<&'static str> {
    style(text).for_stderr()
}

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}: {}", label("error").red().bold(), message);
}

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", label("warning").yellow().bold(), message);
}

/// Print an [`ExecError`] followed by its hint, if any
pub fn print_exec_error(err: &ExecError) {
    print_error(&err.to_string());
    if let Some(hint) = err.hint() {
        eprintln!("  {}: {}", label("hint").cyan(), hint);
    }
}

/// Print the status line of a finished command
pub fn print_report(command: &str, code: i32) {
    println!("{}", report_line(command, code));
}

fn report_line(command: &str, code: i32) -> String {
    if code == 0 {
        format!("Command '{}' {}", command, style("OK!").green())
    } else {
        format!(
            "Command '{}' {}",
            command,
            style(format!("returned {}", code)).red()
        )
    }
}
