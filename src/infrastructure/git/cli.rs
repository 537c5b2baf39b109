//! Git CLI adapter
//!
//! Runs the `git` executable in the repository directory and captures its
//! output. Every invocation is sequential and waits for the child to exit.

use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use crate::domain::ports::{CommandOutput, VcsError, VcsResult, VersionControl};

/// `VersionControl` backed by the git command line
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    repo: PathBuf,
}

impl GitCli {
    pub fn new(repo: impl Into<PathBuf>) -> Self {
        Self::with_program("git", repo)
    }

    /// Use a specific executable (name on PATH or a path)
    pub fn with_program(program: impl Into<String>, repo: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            repo: repo.into(),
        }
    }

    fn run<I, S>(&self, args: I) -> VcsResult<CommandOutput>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.repo)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| self.spawn_error(e))?;

        into_result(output)
    }

    fn spawn_error(&self, err: io::Error) -> VcsError {
        if err.kind() == io::ErrorKind::NotFound {
            VcsError::NotFound {
                program: self.program.clone(),
            }
        } else {
            VcsError::Io(format!("failed to run `{}`: {}", self.program, err))
        }
    }
}

fn into_result(output: Output) -> VcsResult<CommandOutput> {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if output.status.success() {
        Ok(CommandOutput { stdout, stderr })
    } else {
        // Some git failures (e.g. "nothing to commit") only print to stdout
        let stderr = if stderr.trim().is_empty() {
            stdout
        } else {
            stderr
        };
        Err(VcsError::Failed {
            exit_code: output.status.code(),
            stderr,
        })
    }
}

impl VersionControl for GitCli {
    fn program(&self) -> &str {
        &self.program
    }

    fn ensure_available(&self) -> VcsResult<()> {
        which::which(&self.program)
            .map(|_| ())
            .map_err(|_| VcsError::NotFound {
                program: self.program.clone(),
            })
    }

    fn add(&self, pathspecs: &[String]) -> VcsResult<CommandOutput> {
        let mut args: Vec<&str> = vec!["add", "--"];
        args.extend(pathspecs.iter().map(String::as_str));
        self.run(args)
    }

    fn status_porcelain(&self) -> VcsResult<String> {
        self.run(["status", "--porcelain"]).map(|out| out.stdout)
    }

    fn commit(&self, message: &str) -> VcsResult<CommandOutput> {
        self.run(["commit", "-m", message])
    }

    fn push(&self) -> VcsResult<CommandOutput> {
        self.run(["push"])
    }

    fn remote_url(&self, remote: &str) -> VcsResult<String> {
        let key = format!("remote.{}.url", remote);
        self.run(["config", "--get", key.as_str()])
            .map(|out| out.stdout.trim().to_string())
    }
}
