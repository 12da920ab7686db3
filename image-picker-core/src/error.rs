//! Error types for image picking operations.
//!
//! Every failure reaches the caller as a rejected call. User cancellation is
//! not part of this taxonomy: an abandoned picker resolves with no assets.

use thiserror::Error;

use crate::models::RawResponse;

/// Errors that can occur while picking images.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The caller's options are malformed.
    /// Raised before the backend is touched and never retried.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The platform backend is missing or lacks a required entry point.
    #[error("Picker backend unavailable: {0}")]
    BackendUnavailable(String),

    /// There is no foreground activity / view controller to present on.
    #[error("No active host to present the picker: {0}")]
    NoActiveHost(String),

    /// The user refused photo library access.
    /// Calling again after the user changes settings may succeed.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Another picker session is still waiting for the user.
    #[error("An image picker session is already active")]
    Busy,

    /// Unclassified backend failure, surfaced verbatim.
    #[error("{0}")]
    Unknown(String),
}

/// Result type alias for picker operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Stable error code for programmatic handling on the frontend.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidArgument(_) => "INVALID_ARGUMENT",
            Error::BackendUnavailable(_) => "BACKEND_UNAVAILABLE",
            Error::NoActiveHost(_) => "NO_ACTIVE_HOST",
            Error::PermissionDenied(_) => "PERMISSION_DENIED",
            Error::Busy => "BUSY",
            Error::Unknown(_) => "UNKNOWN",
        }
    }

    pub(crate) fn invalid(message: &str) -> Self {
        Error::InvalidArgument(message.to_string())
    }
}

// ============================================================================
// Native rejection codes
// ============================================================================

/// How a native rejection should be treated by a backend adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeRejection {
    /// The user dismissed the picker. Backends report this as an empty result.
    Cancelled,
    /// A genuine failure.
    Failed(Error),
}

/// Classify the message of a rejected native call.
///
/// Native plugins reject with a code such as `PERMISSION_DENIED` embedded in
/// the error text. A host without the picker entry point rejects with
/// `No command ... found`, which means the backend is unavailable.
/// Unrecognized messages become [`Error::Unknown`].
pub fn classify_native_rejection(message: &str) -> NativeRejection {
    let message = message.trim();

    if message.contains("CANCELLED") || message.contains("CANCELED") {
        NativeRejection::Cancelled
    } else if message.contains("No command")
        || message.contains("NOT_IMPLEMENTED")
        || message.contains("not implemented")
    {
        NativeRejection::Failed(Error::BackendUnavailable(message.to_string()))
    } else if message.contains("NO_ACTIVITY")
        || message.contains("NO_ROOT_VC")
        || message.contains("NO_ACTIVE_HOST")
    {
        NativeRejection::Failed(Error::NoActiveHost(message.to_string()))
    } else if message.contains("PERMISSION_DENIED") {
        NativeRejection::Failed(Error::PermissionDenied(message.to_string()))
    } else if message.contains("BUSY") {
        NativeRejection::Failed(Error::Busy)
    } else {
        NativeRejection::Failed(Error::Unknown(message.to_string()))
    }
}

/// Resolve a rejected native call: cancellation is an empty response,
/// anything else is an error.
pub fn rejection_outcome(message: &str) -> Result<RawResponse> {
    match classify_native_rejection(message) {
        NativeRejection::Cancelled => Ok(RawResponse::empty()),
        NativeRejection::Failed(err) => Err(err),
    }
}

// ============================================================================
// Serialization for Tauri IPC
// ============================================================================

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Error", 2)?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = Error::invalid("checkboxTintColor must be a string color");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "INVALID_ARGUMENT");
        assert_eq!(
            json["message"],
            "Invalid argument: checkboxTintColor must be a string color"
        );
    }

    #[test]
    fn test_unknown_error_is_verbatim() {
        let err = Error::Unknown("camera exploded".into());
        assert_eq!(err.to_string(), "camera exploded");
        assert_eq!(err.code(), "UNKNOWN");
    }

    #[test]
    fn test_classify_cancellation() {
        assert_eq!(
            classify_native_rejection("CANCELLED: User cancelled image picker"),
            NativeRejection::Cancelled
        );
    }

    #[test]
    fn test_classify_host_errors() {
        for message in [
            "NO_ACTIVITY: Current activity is null",
            "NO_ROOT_VC: Root view controller not found",
        ] {
            match classify_native_rejection(message) {
                NativeRejection::Failed(Error::NoActiveHost(text)) => assert_eq!(text, message),
                other => panic!("unexpected classification: {:?}", other),
            }
        }
    }

    #[test]
    fn test_classify_permission_and_unknown() {
        assert!(matches!(
            classify_native_rejection("PERMISSION_DENIED: User denied photo library access."),
            NativeRejection::Failed(Error::PermissionDenied(_))
        ));
        assert_eq!(
            classify_native_rejection("BUSY"),
            NativeRejection::Failed(Error::Busy)
        );
        assert_eq!(
            classify_native_rejection("UNKNOWN_ERROR: something odd"),
            NativeRejection::Failed(Error::Unknown("UNKNOWN_ERROR: something odd".into()))
        );
    }

    #[test]
    fn test_classify_missing_entry_point() {
        for message in [
            "No command pickImages found for plugin com.imagepicker.plugin.ImagePickerPlugin",
            "[NOT_IMPLEMENTED] - pickImages is not available on this device",
            "pickImages not implemented",
        ] {
            match classify_native_rejection(message) {
                NativeRejection::Failed(Error::BackendUnavailable(text)) => {
                    assert_eq!(text, message)
                }
                other => panic!("unexpected classification: {:?}", other),
            }
        }
    }

    #[test]
    fn test_rejection_outcome_from_tauri_messages() {
        // Tauri renders native rejections as "[CODE] - message"
        assert_eq!(
            rejection_outcome("[CANCELLED] - User cancelled image picker"),
            Ok(RawResponse::empty())
        );
        assert_eq!(
            rejection_outcome("[NO_ACTIVITY] - Current activity is null"),
            Err(Error::NoActiveHost(
                "[NO_ACTIVITY] - Current activity is null".into()
            ))
        );
        assert_eq!(
            rejection_outcome("[PERMISSION_DENIED] - User denied photo library access."),
            Err(Error::PermissionDenied(
                "[PERMISSION_DENIED] - User denied photo library access.".into()
            ))
        );
        assert!(matches!(
            rejection_outcome("No command pickImages found for plugin"),
            Err(Error::BackendUnavailable(_))
        ));
    }
}
