use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Pass,
    Skipped,
    Warning,
}

impl CheckStatus {
    fn icon(&self) -> Icon {
        match self {
            CheckStatus::Pass => Icon::Success,
            CheckStatus::Skipped => Icon::Skipped,
            CheckStatus::Warning => Icon::Warning,
        }
    }
}

/// One progress line: `  <icon> <name> - <message>` plus indented details
#[derive(Debug, Clone)]
pub struct CheckItem {
    pub name: String,
    pub status: CheckStatus,
    pub message: Option<String>,
    pub details: Vec<String>,
}

impl CheckItem {
    pub fn new(status: CheckStatus, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            message: None,
            details: Vec::new(),
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    pub fn render(&self, verbose: bool, supports_color: bool, supports_unicode: bool) -> String {
        let icon = self.status.icon().colored(supports_color, supports_unicode);

        let mut out = match &self.message {
            Some(message) => format!(
                "  {} {} {}\n",
                icon,
                self.name,
                ColoredText::dim(format!("- {}", message)).render(supports_color)
            ),
            None => format!("  {} {}\n", icon, self.name),
        };

        if verbose {
            for detail in &self.details {
                for line in detail.lines() {
                    out.push_str(&format!(
                        "    {} {}\n",
                        Icon::Arrow.colored(supports_color, supports_unicode),
                        line
                    ));
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_includes_message() {
        let item = CheckItem::new(CheckStatus::Skipped, "*.js").message("no matching files");
        assert_eq!(
            item.render(false, false, false),
            "  [--] *.js - no matching files\n"
        );
    }

    #[test]
    fn details_only_render_when_verbose() {
        let item = CheckItem::new(CheckStatus::Pass, "index.html").detail("add -- index.html");

        assert!(!item.render(false, false, false).contains("add --"));
        assert!(item
            .render(true, false, false)
            .contains("    [>] add -- index.html"));
    }
}
