use pagepush::domain::ports::{AssumeYes, Confirm};
use pagepush::infrastructure::LineConfirm;

use crate::ui::context::UiContext;
use crate::ui::theme::PromptTheme;

/// Arrow-key capable confirmation on an interactive terminal
pub struct ThemedConfirm {
    theme: PromptTheme,
}

impl ThemedConfirm {
    pub fn new(unicode: bool) -> Self {
        Self {
            theme: PromptTheme::new(unicode),
        }
    }
}

impl Confirm for ThemedConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool, String> {
        dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| e.to_string())
    }
}

/// Pick the confirmation used when essential assets are missing.
///
/// `ask == false` (from `--yes` or `[publish] confirm = false`) never prompts.
/// Otherwise a terminal gets the themed prompt and anything else reads a
/// line from stdin, where end of input declines.
pub fn confirm_for(ui: &UiContext, ask: bool) -> Box<dyn Confirm> {
    if !ask {
        Box::new(AssumeYes)
    } else if ui.interactive() {
        Box::new(ThemedConfirm::new(ui.unicode))
    } else {
        Box::new(LineConfirm::stdio())
    }
}
