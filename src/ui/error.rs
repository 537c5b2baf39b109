use pagepush::{ConfigError, PublishError};

use crate::ui::blocks::error::ErrorBlock;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    if let Some(publish) = err.downcast_ref::<PublishError>() {
        return format_publish_error(publish, supports_color, supports_unicode);
    }

    if let Some(config) = err.downcast_ref::<ConfigError>() {
        return ErrorBlock::new("Configuration error", config.to_string())
            .with_fix("Fix or remove the file, then run pagepush again.")
            .render(supports_color, supports_unicode);
    }

    ErrorBlock::new("Error", format!("{:#}", err)).render(supports_color, supports_unicode)
}

fn format_publish_error(
    err: &PublishError,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (title, fix) = match err {
        PublishError::ToolUnavailable { .. } => (
            "git not found",
            Some("Install git, or set [publish] git / PAGEPUSH_GIT to its path."),
        ),
        PublishError::StageFailed { .. } => (
            "Staging failed",
            Some("Check the file pattern, or rerun with --lenient to skip failures."),
        ),
        PublishError::InvalidPattern { .. } => ("Invalid file pattern", None),
        PublishError::StatusFailed { .. } => (
            "Not a usable repository",
            Some("Run pagepush inside a git working tree, or pass --dir."),
        ),
        PublishError::CommitFailed { .. } => (
            "Commit failed",
            Some("Check user.name and user.email in your git config."),
        ),
        PublishError::PushFailed { .. } => (
            "Push failed",
            Some("Run `git pull` to integrate remote changes, then publish again. The local commit was kept."),
        ),
        PublishError::Walk { .. } | PublishError::Io(_) => ("File system error", None),
        PublishError::Prompt(_) => ("Prompt failed", Some("Rerun with --yes to skip the question.")),
    };

    // Display already appends tool output; show the headline and the output
    // separately so the latter can be dimmed.
    let message = err.to_string();
    let headline = match err.tool_stderr() {
        Some(_) => message.lines().next().unwrap_or_default().to_string(),
        None => message,
    };

    let mut block = ErrorBlock::new(title, headline);
    if let Some(stderr) = err.tool_stderr() {
        block = block.with_output(stderr);
    }
    if let Some(fix) = fix {
        block = block.with_fix(fix);
    }
    block.render(supports_color, supports_unicode)
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut event = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some(stderr) = err
            .downcast_ref::<PublishError>()
            .and_then(PublishError::tool_stderr)
        {
            event["stderr"] = serde_json::Value::String(stderr.to_string());
        }
        let _ = crate::ui::json::emit(event);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    eprint!(
        "{}",
        format_error(err, caps.supports_color && !caps.is_ci, caps.supports_unicode)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_rejection_shows_git_output_and_fix() {
        let err = anyhow::Error::new(PublishError::PushFailed {
            exit_code: Some(1),
            stderr: " ! [rejected]        main -> main (fetch first)\n".to_string(),
        });

        let rendered = format_error(&err, false, false);
        assert!(rendered.contains("[FAIL] Push failed"));
        assert!(rendered.contains("failed to push to the remote repository (exit code 1):"));
        assert!(rendered.contains("! [rejected]        main -> main (fetch first)"));
        assert!(rendered.contains("git pull"));
    }

    #[test]
    fn missing_tool_suggests_config() {
        let err = anyhow::Error::new(PublishError::ToolUnavailable {
            program: "git".to_string(),
        });
        let rendered = format_error(&err, false, false);
        assert!(rendered.contains("'git' was not found"));
        assert!(rendered.contains("PAGEPUSH_GIT"));
    }

    #[test]
    fn other_errors_use_plain_block() {
        let err = anyhow::anyhow!("something broke");
        let rendered = format_error(&err, false, false);
        assert!(rendered.contains("[FAIL] Error"));
        assert!(rendered.contains("something broke"));
    }
}
