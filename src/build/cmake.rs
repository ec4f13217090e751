//! CMake command lines
//!
//! Both steps run with the build directory as working directory and the
//! project root (`..`) as source directory.

use std::path::PathBuf;

use crate::exec::subprocess::{shell_quote, ShellCommand};

/// CMake build type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildType {
    /// Whatever the project's CMakeLists selects
    #[default]
    Default,
    Debug,
}

impl BuildType {
    /// The `-D` option for the configure step, if any
    pub fn define(self) -> Option<&'static str> {
        match self {
            BuildType::Default => None,
            BuildType::Debug => Some("-DCMAKE_BUILD_TYPE=Debug"),
        }
    }
}

/// Configure step: `cmake [-DCMAKE_BUILD_TYPE=Debug] ..`
pub fn configure(cmake: &str, build_type: BuildType, build_dir: PathBuf) -> ShellCommand {
    let mut line = shell_quote(cmake);
    if let Some(define) = build_type.define() {
        line.push(' ');
        line.push_str(define);
    }
    line.push_str(" ..");
    ShellCommand::new(line, build_dir)
}

/// Build step: `cmake --build .`
pub fn build(cmake: &str, build_dir: PathBuf) -> ShellCommand {
    ShellCommand::new(format!("{} --build .", shell_quote(cmake)), build_dir)
}
