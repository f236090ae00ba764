//! Origin remote resolution for commit links.

use std::sync::LazyLock;

use regex_lite::Regex;
use tracing::debug;

use crate::error::GitError;

use super::command::Git;

/// `git@github.com:owner/repo.git`
static SCP_LIKE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._-]+@([^:/]+):(.+)$").expect("scp-like remote pattern is valid")
});

/// `ssh://git@github.com:22/owner/repo.git`
static SSH_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ssh://(?:[^@/]+@)?([^/:]+)(?::[0-9]+)?/(.+)$").expect("ssh remote pattern is valid")
});

/// `https://user@github.com/owner/repo.git`
static HTTP_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(https?)://(?:[^@/]+@)?(.+)$").expect("http remote pattern is valid")
});

/// Turn a remote URL into a browsable project URL ending in `/`.
///
/// Returns `None` for remotes that have no web form, such as local paths.
pub fn project_url(remote: &str) -> Option<String> {
    let remote = remote.trim();

    let (scheme, location) = if let Some(caps) = SCP_LIKE.captures(remote) {
        ("https", format!("{}/{}", &caps[1], &caps[2]))
    } else if let Some(caps) = SSH_URL.captures(remote) {
        ("https", format!("{}/{}", &caps[1], &caps[2]))
    } else if let Some(caps) = HTTP_URL.captures(remote) {
        let scheme = if &caps[1] == "http" { "http" } else { "https" };
        (scheme, caps[2].to_string())
    } else {
        debug!(remote, "Remote has no web form");
        return None;
    };

    let location = location.trim_end_matches('/');
    let location = location.strip_suffix(".git").unwrap_or(location);

    Some(format!("{}://{}/", scheme, location))
}

/// Resolve the project URL of the `origin` remote.
///
/// A repository without an origin is not an error.
pub fn fetch_project_url(git: &Git) -> Result<Option<String>, GitError> {
    match git.run(&["config", "--get", "remote.origin.url"]) {
        Ok(output) => Ok(project_url(&output)),
        Err(GitError::NonZeroExit { code: 1, .. }) => {
            debug!("No origin remote configured");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
