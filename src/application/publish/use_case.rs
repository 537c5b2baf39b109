//! Publish Use Case
//!
//! Orchestrates one publish run:
//! 1. Verify the version-control tool is available
//! 2. Check essential assets (extended asset mode only) and confirm
//! 3. Plan and execute the staging operations
//! 4. Stop early when nothing is staged
//! 5. Commit with a timestamped message
//! 6. Push
//! 7. Guess the public pages URL from the remote
//!
//! There is no rollback: if the push fails the local commit stays.

use crate::domain::entities::CommitRequest;
use crate::domain::ports::{
    Confirm, NoopEventSink, PublishEvent, PublishEventSink, VcsError, VersionControl,
};
use crate::domain::services::{check_essential_assets, plan_stage_ops, StagePlan};
use crate::domain::value_objects::{PendingChanges, RemoteDescriptor};
use crate::error::PublishError;

use super::options::PublishOptions;
use super::result::{PublishResult, PublishStatus};

const CONTINUE_PROMPT: &str = "Continue with the upload?";

/// Publish use case - parameterized by its ports so tests can swap them
pub struct PublishUseCase<VC, C>
where
    VC: VersionControl,
    C: Confirm,
{
    vcs: VC,
    confirm: C,
}

impl<VC, C> PublishUseCase<VC, C>
where
    VC: VersionControl,
    C: Confirm,
{
    pub fn new(vcs: VC, confirm: C) -> Self {
        Self { vcs, confirm }
    }

    /// Execute a publish run silently
    pub fn execute(&self, options: &PublishOptions) -> Result<PublishResult, PublishError> {
        self.execute_with_events(options, &NoopEventSink)
    }

    /// Execute a publish run, reporting progress to `events`
    pub fn execute_with_events(
        &self,
        options: &PublishOptions,
        events: &dyn PublishEventSink,
    ) -> Result<PublishResult, PublishError> {
        self.vcs
            .ensure_available()
            .map_err(|e| self.environment_error(e))?;

        events.on_event(PublishEvent::Started {
            root: options.root.clone(),
            selection: options.selection.describe(),
            strictness: options.strictness.to_string(),
        });

        let mut result = PublishResult::new(PublishStatus::Published);

        if options.selection.checks_essential_assets() {
            let check = check_essential_assets(&options.root, &options.essential_assets);
            for (name, present) in &check.entries {
                events.on_event(PublishEvent::AssetChecked {
                    name: name.clone(),
                    present: *present,
                });
            }

            if !check.all_present() {
                let missing = check.missing();
                events.on_event(PublishEvent::AssetsMissing {
                    missing: missing.clone(),
                });
                result.missing_assets = missing;

                let proceed = self
                    .confirm
                    .confirm(CONTINUE_PROMPT)
                    .map_err(PublishError::Prompt)?;
                if !proceed {
                    events.on_event(PublishEvent::Cancelled);
                    result.status = PublishStatus::Cancelled;
                    return Ok(result);
                }
            }
        }

        let plan = plan_stage_ops(&options.root, &options.selection, &options.plan)?;
        self.stage(&plan, options, events, &mut result)?;

        let porcelain = self.vcs.status_porcelain().map_err(|e| match e {
            VcsError::NotFound { .. } => self.environment_error(e),
            other => PublishError::StatusFailed {
                stderr: other.stderr(),
            },
        })?;
        if !PendingChanges::parse(&porcelain).has_staged() {
            events.on_event(PublishEvent::NothingToCommit);
            result.status = PublishStatus::NothingToCommit;
            return Ok(result);
        }

        let request = CommitRequest::now(&options.message_prefix).with_selectors(plan.pathspecs());
        events.on_event(PublishEvent::Committing {
            message: request.message.clone(),
        });
        let committed = self.vcs.commit(&request.message).map_err(|e| match e {
            VcsError::NotFound { .. } => self.environment_error(e),
            other => PublishError::CommitFailed {
                exit_code: other.exit_code(),
                stderr: other.stderr(),
            },
        })?;
        events.on_event(PublishEvent::Committed {
            output: committed.stdout_text().map(str::to_string),
        });
        result.commit_message = Some(request.message);

        events.on_event(PublishEvent::Pushing);
        let pushed = self.vcs.push().map_err(|e| match e {
            VcsError::NotFound { .. } => self.environment_error(e),
            other => PublishError::PushFailed {
                exit_code: other.exit_code(),
                stderr: other.stderr(),
            },
        })?;
        events.on_event(PublishEvent::Pushed {
            output: pushed.report_text().map(str::to_string),
        });

        // Best effort: a missing remote only loses the URL guess.
        if let Ok(url) = self.vcs.remote_url(&options.remote) {
            let remote = RemoteDescriptor::new(url.trim());
            result.guessed_url = remote.pages_url(&options.pages_suffix);
            if !remote.url.is_empty() {
                result.remote_url = Some(remote.url);
            }
        }

        events.on_event(PublishEvent::Completed {
            guessed_url: result.guessed_url.clone(),
            remote_url: result.remote_url.clone(),
        });

        Ok(result)
    }

    fn stage(
        &self,
        plan: &StagePlan,
        options: &PublishOptions,
        events: &dyn PublishEventSink,
        result: &mut PublishResult,
    ) -> Result<(), PublishError> {
        let strict = options.strictness.is_strict();

        for (pattern, message) in &plan.invalid {
            if strict {
                return Err(PublishError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: message.clone(),
                });
            }
            events.on_event(PublishEvent::StageWarning {
                label: pattern.clone(),
                error: message.clone(),
            });
            result.warnings.push(format!("{}: {}", pattern, message));
        }

        for (label, reason) in &plan.skipped {
            events.on_event(PublishEvent::StageSkipped {
                label: label.clone(),
                reason: reason.clone(),
            });
            result.skipped.push(label.clone());
        }

        events.on_event(PublishEvent::StagingStarted {
            operations: plan.ops.len(),
        });

        for op in &plan.ops {
            match self.vcs.add(&op.pathspecs) {
                Ok(_) => {
                    events.on_event(PublishEvent::Staged {
                        label: op.label.clone(),
                        pathspecs: op.pathspecs.clone(),
                        matched: op.matched,
                    });
                    result.staged.push(op.label.clone());
                    result.files_matched += op.matched.unwrap_or(0);
                }
                Err(e @ VcsError::NotFound { .. }) => return Err(self.environment_error(e)),
                Err(e) if strict => {
                    return Err(PublishError::StageFailed {
                        selector: op.label.clone(),
                        exit_code: e.exit_code(),
                        stderr: e.stderr(),
                    });
                }
                Err(e) => {
                    let error = e.stderr().trim().to_string();
                    events.on_event(PublishEvent::StageWarning {
                        label: op.label.clone(),
                        error: error.clone(),
                    });
                    result.warnings.push(format!("{}: {}", op.label, error));
                }
            }
        }

        if result.staged.is_empty() {
            events.on_event(PublishEvent::NothingStaged);
        }

        Ok(())
    }

    fn environment_error(&self, err: VcsError) -> PublishError {
        match err {
            VcsError::NotFound { program } => PublishError::ToolUnavailable { program },
            VcsError::Io(message) => PublishError::Io(std::io::Error::other(message)),
            VcsError::Failed { .. } => PublishError::ToolUnavailable {
                program: self.vcs.program().to_string(),
            },
        }
    }
}
