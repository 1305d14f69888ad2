//! Email capture integration point.
//!
//! There is no backend yet: [`submit_email`] simulates the latency of a
//! real call and always succeeds. The signature already carries the
//! success/failure contract so a real HTTP request can replace the body
//! without touching callers.

use gloo_timers::future::TimeoutFuture;
use serde::Serialize;
use std::fmt;

/// Simulated round-trip time of the future signup service.
pub const SUBMIT_LATENCY_MS: u32 = 1_000;

#[derive(Serialize)]
struct SignupRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    Network(String),
    Rejected(String),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Network(msg) => write!(f, "network error: {}", msg),
            SubmitError::Rejected(msg) => write!(f, "signup rejected: {}", msg),
        }
    }
}

/// Submit an email address to the (future) capture service.
pub async fn submit_email(email: &str) -> Result<(), SubmitError> {
    let request = SignupRequest { email };
    match serde_json::to_string(&request) {
        Ok(payload) => log::info!("signup request (not sent): {}", payload),
        Err(e) => log::warn!("could not encode signup request: {}", e),
    }

    TimeoutFuture::new(SUBMIT_LATENCY_MS).await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_serializes_email_field() {
        let request = SignupRequest {
            email: "user@example.com",
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"email":"user@example.com"}"#);
    }

    #[test]
    fn test_submit_error_display() {
        let err = SubmitError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "network error: connection refused");
        let err = SubmitError::Rejected("duplicate signup".to_string());
        assert_eq!(err.to_string(), "signup rejected: duplicate signup");
    }
}
