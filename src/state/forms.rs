//! Per-form submission state machine.
//!
//! DESIGN
//! ======
//! Each form tracks one tag instead of loading/error/success boolean
//! triads, so rendering derives purely from the current variant and
//! impossible combinations (loading AND failed) cannot be represented.
//! The submitting tag doubles as the duplicate-submission guard: pages
//! disable their submit control while it is current.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Lifecycle of a single form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus<T> {
    /// Nothing in flight and nothing to show.
    #[default]
    Idle,
    /// A request is outstanding; the submit control is disabled.
    Submitting,
    /// The backend accepted the submission.
    Succeeded(T),
    /// The submission failed with a user-facing message.
    Failed(String),
}

impl<T> FormStatus<T> {
    /// Whether a request is currently outstanding.
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// The success payload, if the last submission succeeded.
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Succeeded(payload) => Some(payload),
            _ => None,
        }
    }

    /// The failure message, if the last submission failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
