use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed fatal error: summary line, verbatim tool output, optional fix hint
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    title: String,
    message: String,
    output: Option<String>,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            output: None,
            fix: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(self.title.as_str())
                .bold()
                .render(supports_color)
        );
        let mut b = Box::with_title(header).style(BoxStyle::Error);

        b.add_empty();
        b.add_line(self.message.clone());

        if let Some(output) = &self.output {
            b.add_empty();
            for line in output.lines() {
                b.add_line(ColoredText::dim(format!("  {line}")).render(supports_color));
            }
        }

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}
