//! Subprocess execution through the platform command interpreter

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::ExecError;

/// A command line and the directory it runs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    line: String,
    cwd: PathBuf,
}

impl ShellCommand {
    pub fn new(line: impl Into<String>, cwd: PathBuf) -> Self {
        Self {
            line: line.into(),
            cwd,
        }
    }

    /// The command line as handed to the interpreter
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}

/// Runs a command to completion and yields its exit code
pub trait CommandRunner {
    fn run(&mut self, command: &ShellCommand) -> Result<i32, ExecError>;
}

/// Runs commands through `sh -c` (`cmd /C` on Windows) with inherited stdio
#[derive(Debug)]
pub struct ShellRunner {
    verbose: bool,
}

impl ShellRunner {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&mut self, command: &ShellCommand) -> Result<i32, ExecError> {
        let mut cmd = interpreter(command.line());
        cmd.current_dir(command.cwd())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if self.verbose {
            eprintln!("Running: {} (in {})", command, command.cwd().display());
        }

        let status = cmd.status().map_err(|source| ExecError::Spawn {
            command: command.line().to_string(),
            source,
        })?;

        // Killed by a signal
        Ok(status.code().unwrap_or(-1))
    }
}

#[cfg(not(windows))]
fn interpreter(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}

#[cfg(windows)]
fn interpreter(line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(line);
    cmd
}

fn is_shell_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c)
}

/// Quote `word` for the command interpreter when it holds special characters
pub fn shell_quote(word: &str) -> String {
    if !word.is_empty() && word.chars().all(is_shell_safe) {
        return word.to_string();
    }

    if cfg!(windows) {
        format!("\"{}\"", word.replace('"', "\"\""))
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// [`shell_quote`] for a path
pub fn quote_path(path: &Path) -> String {
    shell_quote(&path.to_string_lossy())
}
