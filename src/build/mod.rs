//! Build invocation context
//!
//! Holds the paths and settings an action needs. The build directory is
//! always `<project_root>/build`.
//!
//! ## Modules
//!
//! - `cmake` - configure and build command lines

pub mod cmake;

use std::path::{Path, PathBuf};

use cmake::BuildType;

/// Name of the out-of-tree build directory under the project root
pub const BUILD_DIR_NAME: &str = "build";

/// Name of the generated compile-commands database
pub const COMPILE_COMMANDS: &str = "compile_commands.json";

/// Per-invocation context shared by every action
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Project root (the current working directory)
    project_root: PathBuf,
    /// `<project_root>/build`
    build_dir: PathBuf,
    /// Program run for the configure and build steps
    cmake: String,
    /// Build type passed to the configure step
    build_type: BuildType,
}

impl BuildContext {
    /// Create a context rooted at `project_root`
    pub fn new(project_root: PathBuf, cmake: impl Into<String>) -> Self {
        let build_dir = project_root.join(BUILD_DIR_NAME);
        Self {
            project_root,
            build_dir,
            cmake: cmake.into(),
            build_type: BuildType::Default,
        }
    }

    /// Select the debug build type
    pub fn debug(mut self, debug: bool) -> Self {
        self.build_type = if debug {
            BuildType::Debug
        } else {
            BuildType::Default
        };
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn build_dir(&self) -> &Path {
        &self.build_dir
    }

    pub fn cmake(&self) -> &str {
        &self.cmake
    }

    pub fn build_type(&self) -> BuildType {
        self.build_type
    }

    /// `build/compile_commands.json`, as produced by the configure step
    pub fn generated_compile_commands(&self) -> PathBuf {
        self.build_dir.join(COMPILE_COMMANDS)
    }
}
