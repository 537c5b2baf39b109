//! Confirmation Port
//!
//! Asks the operator a yes/no question before a run continues.

/// Yes/no prompt
pub trait Confirm {
    /// Returns `Ok(true)` to continue. An `Err` carries the prompt failure text.
    fn confirm(&self, prompt: &str) -> Result<bool, String>;
}

impl<C: Confirm + ?Sized> Confirm for &C {
    fn confirm(&self, prompt: &str) -> Result<bool, String> {
        (**self).confirm(prompt)
    }
}

impl<C: Confirm + ?Sized> Confirm for Box<C> {
    fn confirm(&self, prompt: &str) -> Result<bool, String> {
        (**self).confirm(prompt)
    }
}

/// Answers yes without asking (`--yes`)
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> Result<bool, String> {
        Ok(true)
    }
}
