//! Spawning the git executable.

use std::env;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::error::GitError;

/// Default git executable name.
const DEFAULT_GIT: &str = "git";

/// Environment variable to override the git executable.
pub const GIT_ENV_VAR: &str = "CHANGEROLL_GIT";

/// Get the configured git executable.
///
/// Reads from CHANGEROLL_GIT if set, otherwise uses `git`. An empty value
/// is ignored with a warning.
fn git_program() -> String {
    match env::var(GIT_ENV_VAR) {
        Ok(v) if !v.trim().is_empty() => v,
        Ok(_) => {
            warn!("{} is set but empty, using '{}'", GIT_ENV_VAR, DEFAULT_GIT);
            DEFAULT_GIT.to_string()
        }
        Err(_) => DEFAULT_GIT.to_string(),
    }
}

/// A git executable bound to a working directory.
#[derive(Debug, Clone)]
pub struct Git {
    program: PathBuf,
    dir: PathBuf,
}

impl Git {
    /// Locate git and bind it to `dir`.
    ///
    /// Uses the `which` crate for cross-platform executable detection.
    pub fn discover(dir: impl Into<PathBuf>) -> Result<Self, GitError> {
        let program = git_program();
        let resolved = which::which(&program).map_err(|_| GitError::NotInstalled(program))?;

        Ok(Self {
            program: resolved,
            dir: dir.into(),
        })
    }

    /// Bind an explicit executable path without lookup.
    pub fn with_program(program: impl Into<PathBuf>, dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            dir: dir.into(),
        }
    }

    /// Run git with `args` and return its stdout.
    ///
    /// Stdout is decoded lossily. A non-zero exit is an error carrying the
    /// trimmed stderr.
    pub fn run(&self, args: &[&str]) -> Result<String, GitError> {
        debug!(dir = %self.dir.display(), ?args, "Running git");

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    GitError::NotInstalled(self.program.display().to_string())
                } else {
                    GitError::SpawnFailed(e)
                }
            })?;

        if !output.status.success() {
            return Err(GitError::NonZeroExit {
                command: args.first().copied().unwrap_or_default().to_string(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
