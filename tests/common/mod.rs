//! Common test utilities for pagepush CLI tests.
//!
//! `TestEnv` owns a temporary working directory, an isolated config home and
//! a scripted stand-in for `git` that records every invocation.

#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tempfile::TempDir;

/// Shell stand-in for git. Behavior is driven by `FAKE_GIT_*` variables,
/// which pagepush passes through to its child processes.
const FAKE_GIT: &str = r#"#!/bin/sh
echo "$*" >> "$FAKE_GIT_LOG"
case "$1" in
  add)
    if [ -n "$FAKE_GIT_ADD_FAIL" ]; then
      echo "fatal: pathspec '$3' did not match any files" >&2
      exit 128
    fi
    ;;
  status)
    if [ -n "$FAKE_GIT_STATUS" ]; then
      printf '%s\n' "$FAKE_GIT_STATUS"
    fi
    ;;
  commit)
    echo "[main abc1234] $3"
    echo " 1 file changed, 1 insertion(+)"
    ;;
  push)
    if [ -n "$FAKE_GIT_PUSH_FAIL" ]; then
      echo "To host:owner/site.git" >&2
      echo " ! [rejected]        main -> main (fetch first)" >&2
      echo "error: failed to push some refs to 'host:owner/site.git'" >&2
      exit 1
    fi
    echo "To host:owner/site.git" >&2
    echo "   1234567..abc1234  main -> main" >&2
    ;;
  config)
    if [ -n "$FAKE_GIT_REMOTE" ]; then
      echo "$FAKE_GIT_REMOTE"
    else
      exit 1
    fi
    ;;
esac
exit 0
"#;

/// Result of running the pagepush binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

pub struct TestEnv {
    pub project_root: TempDir,
    tools_dir: TempDir,
    config_home: TempDir,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        let env = Self {
            project_root: TempDir::new().unwrap(),
            tools_dir: TempDir::new().unwrap(),
            config_home: TempDir::new().unwrap(),
            env: Vec::new(),
        };

        let git = env.git_path();
        fs::write(&git, FAKE_GIT).unwrap();
        fs::set_permissions(&git, fs::Permissions::from_mode(0o755)).unwrap();
        fs::write(env.log_path(), "").unwrap();
        env
    }

    pub fn git_path(&self) -> PathBuf {
        self.tools_dir.path().join("git")
    }

    fn log_path(&self) -> PathBuf {
        self.tools_dir.path().join("git.log")
    }

    /// Set a variable for every run
    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// `status --porcelain` reports a staged change
    pub fn with_staged_change(self) -> Self {
        self.set("FAKE_GIT_STATUS", "M  index.html")
    }

    pub fn with_remote(self, url: &str) -> Self {
        self.set("FAKE_GIT_REMOTE", url)
    }

    pub fn write_file(&self, relative: &str, content: &str) -> &Self {
        let path = self.project_root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    /// Every git invocation so far, one argument string per line
    pub fn git_calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    pub fn called(&self, prefix: &str) -> bool {
        self.git_calls().iter().any(|c| c.starts_with(prefix))
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_input(args, None)
    }

    /// Run with `input` piped to stdin (closed stdin when `None`)
    pub fn run_with_input(&self, args: &[&str], input: Option<&str>) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_pagepush"));
        cmd.args(args)
            .current_dir(self.project_root.path())
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        self.isolate(&mut cmd);

        let mut child = cmd.spawn().unwrap();
        if let Some(input) = input {
            let mut stdin = child.stdin.take().unwrap();
            // The child may exit without reading; a broken pipe is fine.
            let _ = stdin.write_all(input.as_bytes());
        }
        let output = child.wait_with_output().unwrap();

        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    fn isolate(&self, cmd: &mut Command) {
        for (key, _) in std::env::vars_os() {
            let name = key.to_string_lossy();
            if name.starts_with("PAGEPUSH_") || name.starts_with("FAKE_GIT_") {
                cmd.env_remove(&key);
            }
        }
        cmd.env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env("PAGEPUSH_GIT", self.git_path())
            .env("FAKE_GIT_LOG", self.log_path());
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
    }

    pub fn project_path(&self) -> &Path {
        self.project_root.path()
    }
}
