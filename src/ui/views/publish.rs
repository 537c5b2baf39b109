use pagepush::{PublishOptions, PublishResult, PublishStatus};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

pub fn render_publish_header(
    options: &PublishOptions,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Publish, "pagepush");
    header.add("Directory", options.root.display().to_string());
    header.add("Files", options.selection.describe());
    header.add("Mode", options.strictness.to_string());
    header.add("Remote", options.remote.as_str());
    header.render(supports_color, supports_unicode)
}

/// Closing output for a run that did not fail
pub fn render_publish_result(
    result: &PublishResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match result.status {
        PublishStatus::Published => {
            let mut out = render_publish_summary(result, supports_color, supports_unicode);
            out.push_str(&match &result.guessed_url {
                Some(url) => render_pages_url(url, supports_color, supports_unicode),
                None => render_url_fallback(
                    result.remote_url.as_deref(),
                    supports_color,
                    supports_unicode,
                ),
            });
            out
        }
        // The progress line already said so.
        PublishStatus::NothingToCommit => String::new(),
        PublishStatus::Cancelled => {
            let mut summary = ResultSummary::partial("Upload cancelled");
            summary.add_info("Nothing was staged or committed");
            if !result.missing_assets.is_empty() {
                summary.add_next_step("Add the missing files, or rerun with --yes");
            }
            summary.render(supports_color, supports_unicode)
        }
    }
}

pub fn render_publish_summary(
    result: &PublishResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let clean = result.is_clean() && result.missing_assets.is_empty();
    let mut summary = if clean {
        ResultSummary::success("Published")
    } else {
        ResultSummary::partial("Published with warnings")
    };

    summary.add_stat("selectors staged", result.staged.len());
    if result.files_matched > 0 {
        summary.add_stat("files matched", result.files_matched);
    }
    if !result.skipped.is_empty() {
        summary.add_stat("selectors skipped", result.skipped.len());
    }

    if let Some(message) = &result.commit_message {
        summary.add_info(format!("Commit: {message}"));
    }
    for warning in &result.warnings {
        summary.add_warning(warning.clone());
    }
    if !result.missing_assets.is_empty() {
        summary.add_warning(format!(
            "Published without: {}",
            result.missing_assets.join(", ")
        ));
    }

    summary.render(supports_color, supports_unicode)
}

pub fn render_pages_url(url: &str, supports_color: bool, supports_unicode: bool) -> String {
    let header = format!(
        "{} {}",
        Icon::Link.colored(supports_color, supports_unicode),
        ColoredText::info("Your site").bold().render(supports_color)
    );
    let mut b = Box::with_title(header).style(BoxStyle::Info);
    b.add_line(ColoredText::info(url).bold().render(supports_color));
    b.add_empty();
    b.add_line(
        ColoredText::dim("The deploy usually takes 1-2 minutes to go live.").render(supports_color),
    );
    b.add_empty();
    b.add_line(ColoredText::dim("Next:").render(supports_color));
    let arrow = Icon::Arrow.colored(supports_color, supports_unicode);
    b.add_line(format!("{arrow} Open the URL and hard-refresh to skip the cache"));
    b.add_line(format!("{arrow} Check the repository's Actions tab if it does not update"));
    b.render(supports_color, supports_unicode)
}

pub fn render_url_fallback(
    remote_url: Option<&str>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = WarningBlock::new("Could not work out the site address");
    match remote_url {
        Some(url) => block.add_line(format!("Remote: {url}")),
        None => block.add_line("The remote URL could not be read."),
    }
    block.add_line("Find the published address under Settings > Pages");
    block.add_line("in the repository on the hosting platform.");
    block.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagepush::Preset;

    fn published() -> PublishResult {
        let mut result = PublishResult::new(PublishStatus::Published);
        result.staged = vec!["*.html".to_string(), "*.css".to_string()];
        result.files_matched = 3;
        result.commit_message = Some("Update HTML and CSS files - 2026-10-19 09:30:00".to_string());
        result
    }

    #[test]
    fn header_includes_directory_and_files() {
        let options = PublishOptions::new("site", Preset::Web);
        let rendered = render_publish_header(&options, false, false);
        assert!(rendered.contains("Directory: site"));
        assert!(rendered.contains("Files:     *.html *.css"));
        assert!(rendered.contains("Remote:    origin"));
    }

    #[test]
    fn published_with_url_shows_link_and_delay_note() {
        let mut result = published();
        result.guessed_url = Some("https://owner.github.io".to_string());

        let rendered = render_publish_result(&result, false, false);
        assert!(rendered.contains("[OK] Published"));
        assert!(rendered.contains("2 selectors staged"));
        assert!(rendered.contains("https://owner.github.io"));
        assert!(rendered.contains("1-2 minutes"));
    }

    #[test]
    fn published_without_url_points_to_settings() {
        let mut result = published();
        result.remote_url = Some("git@host:owner/project.git".to_string());

        let rendered = render_publish_result(&result, false, false);
        assert!(rendered.contains("Settings > Pages"));
        assert!(rendered.contains("Remote: git@host:owner/project.git"));
    }

    #[test]
    fn lenient_warnings_mark_the_summary_partial() {
        let mut result = published();
        result.warnings.push("images/*: permission denied".to_string());

        let rendered = render_publish_summary(&result, false, false);
        assert!(rendered.contains("[WARN] Published with warnings"));
        assert!(rendered.contains("images/*: permission denied"));
    }

    #[test]
    fn cancelled_run_suggests_yes_flag() {
        let mut result = PublishResult::new(PublishStatus::Cancelled);
        result.missing_assets = vec!["favicon.ico".to_string()];

        let rendered = render_publish_result(&result, false, false);
        assert!(rendered.contains("Upload cancelled"));
        assert!(rendered.contains("--yes"));
    }

    #[test]
    fn nothing_to_commit_renders_nothing_more() {
        let result = PublishResult::new(PublishStatus::NothingToCommit);
        assert!(render_publish_result(&result, false, false).is_empty());
    }
}
