//! Console Event Sink
//!
//! Renders publish events as progress lines in the terminal.

use std::io::{self, Write};
use std::sync::Mutex;

use pagepush::domain::ports::{PublishEvent, PublishEventSink};

use crate::ui::blocks::check_item::{CheckItem, CheckStatus};
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Event sink that writes human-readable progress
///
/// `-v` adds pathspecs and the commit message; `-vv` also echoes push output.
pub struct ConsoleEventSink {
    ui: UiContext,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(ui: UiContext) -> Self {
        Self::with_writer(ui, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(ui: UiContext, writer: W) -> Self {
        Self {
            ui,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write(&self, text: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.write_all(text.as_bytes());
            let _ = writer.flush();
        }
    }

    fn item(&self, item: CheckItem, min_verbosity: u8) -> String {
        item.render(
            self.ui.verbose >= min_verbosity,
            self.ui.color,
            self.ui.unicode,
        )
    }

    fn step(&self, icon: Icon, text: &str) -> String {
        format!("{} {}\n", icon.colored(self.ui.color, self.ui.unicode), text)
    }

    fn render(&self, event: PublishEvent) -> Option<String> {
        let color = self.ui.color;
        let unicode = self.ui.unicode;

        let text = match event {
            // The header is printed by the command before the run starts.
            PublishEvent::Started { .. } | PublishEvent::Completed { .. } => return None,
            PublishEvent::AssetChecked { name, present } => {
                let item = if present {
                    CheckItem::new(CheckStatus::Pass, name)
                } else {
                    CheckItem::new(CheckStatus::Warning, name).message("missing")
                };
                self.item(item, 1)
            }
            PublishEvent::AssetsMissing { missing } => {
                let mut block = WarningBlock::missing("essential file", &missing);
                block.add_line("The site may lack icons or a web manifest.");
                block.render(color, unicode)
            }
            PublishEvent::Cancelled => self.step(Icon::Skipped, "Upload cancelled"),
            PublishEvent::StagingStarted { operations } => self.step(
                Icon::Progress,
                &format!(
                    "Staging {} selector{}...",
                    operations,
                    if operations == 1 { "" } else { "s" }
                ),
            ),
            PublishEvent::Staged {
                label,
                pathspecs,
                matched,
            } => {
                let mut item = CheckItem::new(CheckStatus::Pass, label);
                if let Some(count) = matched {
                    item = item.message(format!(
                        "{} file{}",
                        count,
                        if count == 1 { "" } else { "s" }
                    ));
                }
                item = item.detail(format!("add -- {}", pathspecs.join(" ")));
                self.item(item, 1)
            }
            PublishEvent::StageSkipped { label, reason } => {
                self.item(CheckItem::new(CheckStatus::Skipped, label).message(reason), 1)
            }
            PublishEvent::StageWarning { label, error } => {
                let mut item = CheckItem::new(CheckStatus::Warning, label).message("not staged");
                if !error.is_empty() {
                    item = item.detail(error);
                }
                // Lenient failures are always worth seeing.
                self.item(item, 0)
            }
            PublishEvent::NothingStaged => self.step(Icon::Warning, "No files were staged"),
            PublishEvent::NothingToCommit => self.step(
                Icon::Success,
                &ColoredText::success("Nothing to commit; the site is up to date").render(color),
            ),
            PublishEvent::Committing { message } => {
                let mut text = self.step(Icon::Progress, "Committing...");
                if self.ui.verbose >= 1 {
                    text.push_str(&format!(
                        "  {} {}\n",
                        Icon::Arrow.colored(color, unicode),
                        ColoredText::dim(message).render(color)
                    ));
                }
                text
            }
            PublishEvent::Committed { output } => {
                let mut text = self.step(Icon::Success, "Committed");
                if let Some(output) = output {
                    text.push_str(&indent(&output));
                }
                text
            }
            PublishEvent::Pushing => self.step(Icon::Progress, "Pushing to remote..."),
            PublishEvent::Pushed { output } => {
                let mut text = self.step(Icon::Success, "Pushed");
                if self.ui.verbose >= 2 {
                    if let Some(output) = output {
                        text.push_str(&indent(&output));
                    }
                }
                text
            }
        };

        Some(text)
    }
}

impl PublishEventSink for ConsoleEventSink {
    fn on_event(&self, event: PublishEvent) {
        if let Some(text) = self.render(event) {
            self.write(&text);
        }
    }
}

fn indent(output: &str) -> String {
    output
        .lines()
        .map(|line| format!("    {line}\n"))
        .collect()
}
