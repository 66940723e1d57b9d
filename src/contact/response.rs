//! Response classification.
//!
//! Error bodies follow the form-backend shape
//! `{"errors":[{"message":"Email is required"}, ...]}`.

use serde::Deserialize;

use super::state::Outcome;
use super::transport::{TransportError, TransportResponse};
use crate::config::Messages;

#[derive(Debug, Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorDescriptor>,
}

#[derive(Debug, Deserialize)]
struct ErrorDescriptor {
    #[serde(default)]
    message: Option<String>,
}

/// Server-reported messages joined with ", ", if the body carries any.
pub fn server_messages(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let messages: Vec<String> = parsed
        .errors
        .into_iter()
        .filter_map(|e| e.message)
        .filter(|m| !m.is_empty())
        .collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join(", "))
    }
}

pub fn classify(
    result: Result<TransportResponse, TransportError>,
    messages: &Messages,
) -> Outcome {
    match result {
        Ok(response) if response.is_success() => Outcome::Success,
        Ok(response) => Outcome::Failure(
            server_messages(&response.body).unwrap_or_else(|| messages.generic_failure.clone()),
        ),
        Err(_) => Outcome::Failure(messages.generic_failure.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn response(status: u16, body: &str) -> Result<TransportResponse, TransportError> {
        Ok(TransportResponse {
            status,
            body: body.to_string(),
        })
    }

    fn generic() -> Outcome {
        Outcome::Failure(Messages::default().generic_failure)
    }

    #[test]
    fn test_any_2xx_is_success() {
        let m = Messages::default();
        assert_eq!(classify(response(200, ""), &m), Outcome::Success);
        assert_eq!(classify(response(201, "not json"), &m), Outcome::Success);
    }

    #[test]
    fn test_joins_server_messages() {
        let body = r#"{"errors":[{"message":"Email is required"},{"message":"Message is too short","field":"message"}]}"#;
        assert_eq!(
            classify(response(422, body), &Messages::default()),
            Outcome::Failure("Email is required, Message is too short".into())
        );
    }

    #[test]
    fn test_malformed_bodies_fall_back_to_generic() {
        let m = Messages::default();
        assert_eq!(classify(response(500, "<html>oops</html>"), &m), generic());
        assert_eq!(classify(response(400, r#"{"error":"bad"}"#), &m), generic());
        assert_eq!(classify(response(400, r#"{"errors":"bad"}"#), &m), generic());
        assert_eq!(classify(response(400, r#"{"errors":[]}"#), &m), generic());
        assert_eq!(classify(response(400, r#"{"errors":[{"code":"X"}]}"#), &m), generic());
    }

    #[test]
    fn test_skips_entries_without_message() {
        let body = r#"{"errors":[{"code":"X"},{"message":"Name is required"}]}"#;
        assert_eq!(server_messages(body).as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_transport_failures_are_generic() {
        let m = Messages::default();
        assert_eq!(
            classify(Err(TransportError::Network("offline".into())), &m),
            generic()
        );
        assert_eq!(
            classify(Err(TransportError::Timeout(Duration::from_secs(15))), &m),
            generic()
        );
    }
}
