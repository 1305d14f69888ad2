//! State for one email-capture form instance.
//!
//! The hero and CTA sections each own an independent [`SignupAttempt`];
//! they share copy layout but no state.

/// Lifecycle of a signup attempt. `Submitted` is terminal for the
/// session; only a full page reload yields a fresh attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupState {
    Idle,
    Submitting,
    Submitted,
}

/// One form instance: the entered email plus where it is in the
/// submission lifecycle. Encoding the lifecycle as an enum keeps
/// "submitting and submitted at once" unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupAttempt {
    email: String,
    state: SignupState,
}

impl SignupAttempt {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            state: SignupState::Idle,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn state(&self) -> SignupState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SignupState::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SignupState::Submitted
    }

    /// Replace the stored email verbatim. No trimming or validation;
    /// format checking is left to the browser's `type="email"` input.
    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    /// Try to start a submission. Returns `true` only on the
    /// `Idle -> Submitting` transition; an empty email, an in-flight
    /// submission, or a completed one all leave the state untouched.
    pub fn begin_submit(&mut self) -> bool {
        if self.state != SignupState::Idle || self.email.is_empty() {
            return false;
        }
        self.state = SignupState::Submitting;
        true
    }

    /// Record the outcome of the in-flight submission. Success reaches
    /// the terminal `Submitted` state; failure returns to `Idle` with
    /// the email kept for re-editing. Ignored outside `Submitting`.
    pub fn finish_submit(&mut self, success: bool) {
        if self.state != SignupState::Submitting {
            return;
        }
        self.state = if success {
            SignupState::Submitted
        } else {
            SignupState::Idle
        };
    }
}

impl Default for SignupAttempt {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt_with_email(email: &str) -> SignupAttempt {
        let mut attempt = SignupAttempt::new();
        attempt.set_email(email.to_string());
        attempt
    }

    #[test]
    fn test_new_attempt_starts_idle_and_empty() {
        let attempt = SignupAttempt::new();
        assert_eq!(attempt.state(), SignupState::Idle);
        assert_eq!(attempt.email(), "");
    }

    #[test]
    fn test_submit_with_email_reaches_submitted() {
        let mut attempt = attempt_with_email("user@example.com");
        assert!(attempt.begin_submit());
        assert_eq!(attempt.state(), SignupState::Submitting);
        attempt.finish_submit(true);
        assert_eq!(attempt.state(), SignupState::Submitted);
    }

    #[test]
    fn test_submit_with_empty_email_is_blocked() {
        let mut attempt = SignupAttempt::new();
        assert!(!attempt.begin_submit());
        assert_eq!(attempt.state(), SignupState::Idle);
    }

    #[test]
    fn test_resubmit_while_submitting_is_a_noop() {
        let mut attempt = attempt_with_email("user@example.com");
        assert!(attempt.begin_submit());
        assert!(!attempt.begin_submit());
        assert_eq!(attempt.state(), SignupState::Submitting);
        attempt.finish_submit(true);
        assert_eq!(attempt.state(), SignupState::Submitted);
    }

    #[test]
    fn test_submitted_is_terminal() {
        let mut attempt = attempt_with_email("user@example.com");
        attempt.begin_submit();
        attempt.finish_submit(true);
        assert!(!attempt.begin_submit());
        attempt.finish_submit(false);
        assert_eq!(attempt.state(), SignupState::Submitted);
    }

    #[test]
    fn test_failed_submit_returns_to_idle_with_email_kept() {
        let mut attempt = attempt_with_email("user@example.com");
        attempt.begin_submit();
        attempt.finish_submit(false);
        assert_eq!(attempt.state(), SignupState::Idle);
        assert_eq!(attempt.email(), "user@example.com");
        // The attempt can be retried after a failure.
        assert!(attempt.begin_submit());
    }

    #[test]
    fn test_finish_submit_outside_submitting_is_ignored() {
        let mut attempt = attempt_with_email("user@example.com");
        attempt.finish_submit(true);
        assert_eq!(attempt.state(), SignupState::Idle);
    }

    #[test]
    fn test_set_email_replaces_verbatim() {
        let mut attempt = SignupAttempt::new();
        attempt.set_email("  spaced@example.com  ".to_string());
        assert_eq!(attempt.email(), "  spaced@example.com  ");
    }
}
