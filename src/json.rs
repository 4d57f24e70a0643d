//! JSON output structures
//!
//! Consistent JSON shapes for `--json` output across commands.

use serde::Serialize;

use rotpass_core::{RotationUnit, RotationWindow};

/// Detailed error information
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`SCREAMING_SNAKE_CASE`)
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl From<&rotpass_core::Error> for ErrorDetail {
    fn from(err: &rotpass_core::Error) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

/// Rotation window as reported to the user
#[derive(Debug, Clone, Serialize)]
pub struct WindowOutput {
    pub rotation_unit: RotationUnit,
    pub window: i64,
    pub starts_at: i64,
    pub next_rotation_at: i64,
    pub seconds_until_rotation: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at_rfc3339: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_rotation_at_rfc3339: Option<String>,
}

impl WindowOutput {
    pub fn new(window: &RotationWindow, now: i64) -> Self {
        Self {
            rotation_unit: window.unit,
            window: window.bucket,
            starts_at: window.starts_at(),
            next_rotation_at: window.next_rotation_at(),
            seconds_until_rotation: window.seconds_until_rotation(now),
            starts_at_rfc3339: rfc3339(window.starts_at()),
            next_rotation_at_rfc3339: rfc3339(window.next_rotation_at()),
        }
    }
}

fn rfc3339(unix_seconds: i64) -> Option<String> {
    chrono::DateTime::from_timestamp(unix_seconds, 0).map(|at| at.to_rfc3339())
}

/// Result of deriving one service's password
#[derive(Debug, Clone, Serialize)]
pub struct ServiceOutput {
    pub identifier: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_unit: Option<RotationUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl ServiceOutput {
    pub fn derived(identifier: impl Into<String>, window: &RotationWindow, password: String) -> Self {
        Self {
            identifier: identifier.into(),
            success: true,
            password: Some(password),
            rotation_unit: Some(window.unit),
            window: Some(window.bucket),
            error: None,
        }
    }

    pub fn failed(identifier: impl Into<String>, err: &rotpass_core::Error) -> Self {
        Self {
            identifier: identifier.into(),
            success: false,
            password: None,
            rotation_unit: None,
            window: None,
            error: Some(ErrorDetail::from(err)),
        }
    }
}

/// `generate` command JSON output
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutput {
    pub success: bool,
    pub now: i64,
    pub services: Vec<ServiceOutput>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_failed_service_omits_password() {
        let err = rotpass_core::Error::invalid_length(3, 4);
        let value = serde_json::to_value(ServiceOutput::failed("x", &err)).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"]["code"], "INVALID_LENGTH");
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_window_output_times() {
        let window = RotationWindow::at(RotationUnit::Month, 1_760_000_000);
        let value = serde_json::to_value(WindowOutput::new(&window, 1_760_000_000)).unwrap();
        assert_eq!(value["rotation_unit"], "month");
        assert_eq!(value["window"], 669);
        assert_eq!(value["starts_at"], 1_759_300_074);
        assert_eq!(value["next_rotation_at"], 1_761_929_820);
        assert_eq!(value["seconds_until_rotation"], 1_929_820);
        assert_eq!(value["starts_at_rfc3339"], "2025-10-01T06:27:54+00:00");
    }
}
