use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed end-of-run summary
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    infos: Vec<String>,
    warnings: Vec<String>,
    next_steps: Vec<String>,
}

impl ResultSummary {
    fn new(title: impl Into<String>, success: bool) -> Self {
        Self {
            title: title.into(),
            success,
            stats: Vec::new(),
            infos: Vec::new(),
            warnings: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, true)
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self::new(title, false)
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    /// Add an informational message (shown with success icon)
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.infos.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn add_next_step(&mut self, hint: impl Into<String>) {
        self.next_steps.push(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (style, icon, title) = if self.success {
            (
                BoxStyle::Success,
                Icon::Success,
                ColoredText::success(self.title.as_str()),
            )
        } else {
            (
                BoxStyle::Warning,
                Icon::Warning,
                ColoredText::warning(self.title.as_str()),
            )
        };

        let header = format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        );

        let mut b = Box::with_title(header).style(style);

        if !self.stats.is_empty() {
            b.add_empty();
            for (label, count) in &self.stats {
                b.add_line(format!("{} {}", count, label));
            }
        }

        let mut section = |icon: Icon, lines: &[String]| {
            if lines.is_empty() {
                return;
            }
            b.add_empty();
            for line in lines {
                b.add_line(format!(
                    "{} {}",
                    icon.colored(supports_color, supports_unicode),
                    line
                ));
            }
        };
        section(Icon::Success, &self.infos);
        section(Icon::Warning, &self.warnings);

        if !self.next_steps.is_empty() {
            b.add_empty();
            b.add_line(ColoredText::dim("Next:").render(supports_color));
            for step in &self.next_steps {
                b.add_line(format!(
                    "{} {}",
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    step
                ));
            }
        }

        b.render(supports_color, supports_unicode)
    }
}
