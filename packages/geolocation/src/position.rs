use serde::{Deserialize, Serialize};

/// Represents a geographic coordinate
///
/// No range validation is done; the browser's values are stored as given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A successful position read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub coords: Coordinates,
    /// Accuracy of `coords` in metres, at 95% confidence.
    pub accuracy: f64,
}

/// Options handed to the browser with every position request.
///
/// Serializes to the `PositionOptions` dictionary the Geolocation API expects.
/// The default asks for a fresh, high accuracy fix within five seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    /// Milliseconds the browser may take before failing with a timeout.
    pub timeout: u32,
    /// Age in milliseconds of a cached position the browser may return instead.
    pub maximum_age: u32,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: true,
            timeout: 5000,
            maximum_age: 0,
        }
    }
}

/// The error callback's payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("ERROR({code}): {message}")]
pub struct PositionError {
    pub code: u16,
    pub message: String,
}

/// What a [`PositionError`] code means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionErrorKind {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
}

impl PositionError {
    pub const PERMISSION_DENIED: u16 = 1;
    pub const POSITION_UNAVAILABLE: u16 = 2;
    pub const TIMEOUT: u16 = 3;

    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// A failure that happened on our side of the request, reported as the
    /// browser would report a position it could not determine.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(Self::POSITION_UNAVAILABLE, message)
    }

    pub fn kind(&self) -> PositionErrorKind {
        match self.code {
            Self::PERMISSION_DENIED => PositionErrorKind::PermissionDenied,
            Self::POSITION_UNAVAILABLE => PositionErrorKind::PositionUnavailable,
            Self::TIMEOUT => PositionErrorKind::Timeout,
            _ => PositionErrorKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_matches_console_warning() {
        let err = PositionError::new(3, "Timeout expired");
        assert_eq!(err.to_string(), "ERROR(3): Timeout expired");
        assert_eq!(err.kind(), PositionErrorKind::Timeout);
    }

    #[test]
    fn unknown_codes_are_kept() {
        let err = PositionError::new(42, "odd");
        assert_eq!(err.kind(), PositionErrorKind::Unknown);
        assert_eq!(err.code, 42);
    }

    #[test]
    fn local_failures_use_a_browser_code() {
        let err = PositionError::unavailable("position request was abandoned");
        assert_eq!(err.code, 2);
        assert_eq!(err.kind(), PositionErrorKind::PositionUnavailable);
        assert_eq!(err.to_string(), "ERROR(2): position request was abandoned");
    }

    #[test]
    fn default_coordinates_are_origin() {
        assert_eq!(Coordinates::default(), Coordinates::new(0.0, 0.0));
    }
}
