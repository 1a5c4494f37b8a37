//! Confirmation capability for destructive actions.

/// A blocking yes/no decision surfaced to the user
///
/// Implemented for any `Fn(&str) -> bool`, so callers can pass a closure
/// in place of a real prompt.
pub trait Confirm {
    /// Ask the user to confirm `prompt`; `true` means proceed.
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Confirms every prompt without asking
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
