//! Executable lookup on the search path.
//!
//! An entry is only offered to the user when its executable can actually
//! be started, so this is the single gate every record passes through.

use rustix::fs::{access, Access};
use std::fs;
use std::path::{Path, PathBuf};

/// Search path used when `PATH` is not set at all.
const DEFAULT_SEARCH_PATH: &str = "/bin:/usr/bin:.";

/// Ordered list of directories executables are looked up in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new<I, P>(dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Search path of the running process.
    pub fn from_env() -> Self {
        match std::env::var("PATH") {
            Ok(path) => Self::parse(&path),
            Err(_) => Self::parse(DEFAULT_SEARCH_PATH),
        }
    }

    /// Split a colon-separated path list. Empty components stand for the
    /// current directory.
    ///
    /// # Examples
    /// ```
    /// use std::path::PathBuf;
    /// use default_apps::path::SearchPath;
    ///
    /// let path = SearchPath::parse("/usr/local/bin::/usr/bin");
    /// assert_eq!(
    ///     path.dirs(),
    ///     [PathBuf::from("/usr/local/bin"), PathBuf::from("."), PathBuf::from("/usr/bin")]
    /// );
    /// ```
    pub fn parse(path: &str) -> Self {
        Self::new(
            path.split(':')
                .map(|dir| if dir.is_empty() { "." } else { dir }),
        )
    }

    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Resolve `program` to the file that would be executed.
    ///
    /// Names containing a `/` are checked as given; bare names are looked up
    /// in each directory of the search path, first hit wins.
    pub fn find_program(&self, program: &str) -> Option<PathBuf> {
        if program.is_empty() {
            return None;
        }

        if program.contains('/') {
            let candidate = PathBuf::from(program);
            return is_executable_file(&candidate).then_some(candidate);
        }

        self.dirs
            .iter()
            .map(|dir| dir.join(program))
            .find(|candidate| is_executable_file(candidate))
    }

    /// Check whether an entry's executable can be started.
    ///
    /// An absent executable is never valid.
    pub fn is_valid(&self, executable: Option<&str>) -> bool {
        executable.is_some_and(|name| self.find_program(name).is_some())
    }
}

impl Default for SearchPath {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Regular file (after following symlinks) the current user may execute.
fn is_executable_file(path: &Path) -> bool {
    match fs::metadata(path) {
        Ok(meta) => meta.is_file() && access(path, Access::EXEC_OK).is_ok(),
        Err(_) => false,
    }
}
