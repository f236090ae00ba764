//! Tests for the git invocation layer using a scripted fake git.
//!
//! The fake is installed through CHANGEROLL_GIT. These tests modify the
//! environment and must run serially.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use changeroll::changelog::{build_report, OutputFormat, ReportOptions};
use changeroll::git::command::GIT_ENV_VAR;
use changeroll::git::Git;
use changeroll::{AggregateError, CommitSourceError, GitError, ReportError, TagError};
use serial_test::serial;

/// Answers `log --tags`, `log <range>` and `config` like a small repository.
const FAKE_GIT: &str = r#"#!/bin/sh
case "$1" in
  log)
    if [ "$2" = "--tags" ]; then
      echo "2016-04-02 11:20:45 -0500 @ (HEAD -> master, tag: v0.0.2)"
      echo "2016-03-20 10:12:30 -0500 @ (tag: v0.0.1)"
      exit 0
    fi
    printf '%s\n' '{"shortcommit":"a1b2c3d", "commit":"a1b2c3d4e5f60718293a4b5c6d7e8f9012345678", "author":"Ada", "email":"ada@example.com", "date":"2016-04-02T11:20:45-05:00", "message":"Add-JSON-output"},'
    exit 0
    ;;
  config)
    echo "git@github.com:owner/repo.git"
    exit 0
    ;;
esac
echo "unexpected: $*" >&2
exit 2
"#;

/// Same tag history, but commit output that is not JSON.
const BROKEN_LOG_GIT: &str = r#"#!/bin/sh
if [ "$2" = "--tags" ]; then
  echo "2016-04-02 11:20:45 -0500 @ (tag: v0.0.2)"
  echo "2016-03-20 10:12:30 -0500 @ (tag: v0.0.1)"
  exit 0
fi
echo 'commit a1b2c3d'
"#;

const FAILING_GIT: &str = r#"#!/bin/sh
echo "fatal: not a git repository" >&2
exit 128
"#;

fn install_script(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("git");
    fs::write(&path, body).expect("Failed to write fake git");
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

#[test]
#[serial]
fn test_report_with_fake_git() {
    let dir = tempfile::tempdir().unwrap();
    let script = install_script(dir.path(), FAKE_GIT);

    temp_env::with_var(GIT_ENV_VAR, Some(&script), || {
        let git = Git::discover(dir.path()).expect("fake git should be found");
        let report = build_report(&git, &ReportOptions::default()).unwrap();

        assert_eq!(report.groups().len(), 1);
        assert_eq!(report.groups()[0].name, "v0.0.1..v0.0.2");

        let md = report.render(OutputFormat::Markdown, false).unwrap();
        assert_eq!(
            md,
            "# Changelog\n\n## v0.0.1..v0.0.2\n\n* [a1b2c3d](https://github.com/owner/repo/commit/a1b2c3d4e5f60718293a4b5c6d7e8f9012345678) Add JSON output [Ada](mailto:ada@example.com)\n"
        );
    });
}

#[test]
#[serial]
fn test_report_skips_origin_lookup_without_commit_links() {
    let dir = tempfile::tempdir().unwrap();
    // config is not answered by this script, so looking up origin would fail
    let script = install_script(dir.path(), &FAKE_GIT.replace("  config)", "  no-config)"));

    temp_env::with_var(GIT_ENV_VAR, Some(&script), || {
        let git = Git::discover(dir.path()).unwrap();
        let options = ReportOptions {
            commit_links: false,
            ..ReportOptions::default()
        };
        let report = build_report(&git, &options).unwrap();
        assert_eq!(report.groups().len(), 1);
    });
}

#[test]
#[serial]
fn test_malformed_commit_output_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let script = install_script(dir.path(), BROKEN_LOG_GIT);

    temp_env::with_var(GIT_ENV_VAR, Some(&script), || {
        let git = Git::discover(dir.path()).unwrap();
        let err = build_report(&git, &ReportOptions::default()).unwrap_err();

        assert!(matches!(
            err,
            ReportError::Aggregate(AggregateError::Range {
                source: CommitSourceError::Malformed { .. },
                ..
            })
        ));
    });
}

#[test]
#[serial]
fn test_git_failure_carries_stderr() {
    let dir = tempfile::tempdir().unwrap();
    let script = install_script(dir.path(), FAILING_GIT);

    let git = Git::with_program(&script, dir.path());
    let err = git.run(&["log", "--tags"]).unwrap_err();

    match err {
        GitError::NonZeroExit {
            command,
            code,
            stderr,
        } => {
            assert_eq!(command, "log");
            assert_eq!(code, 128);
            assert_eq!(stderr, "fatal: not a git repository");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
#[serial]
fn test_tag_log_failure_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let script = install_script(dir.path(), FAILING_GIT);

    temp_env::with_var(GIT_ENV_VAR, Some(&script), || {
        let git = Git::discover(dir.path()).unwrap();
        let err = build_report(&git, &ReportOptions::default()).unwrap_err();
        assert!(matches!(err, ReportError::Tags(TagError::Git(GitError::NonZeroExit { .. }))));
    });
}

#[test]
#[serial]
fn test_missing_git_is_not_installed() {
    temp_env::with_var(GIT_ENV_VAR, Some("/nonexistent/changeroll/git"), || {
        let err = Git::discover(".").unwrap_err();
        assert!(matches!(err, GitError::NotInstalled(_)));
    });
}
