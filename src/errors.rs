// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the photobooth core
//!
//! No error here is fatal to the process: source errors block capture
//! but leave the pre-session state intact, and a photo error aborts
//! only the current capture attempt. A trigger that races an in-flight
//! capture is not an error at all; it is dropped by the session's
//! debounce.

use crate::source::SourceError;
use std::fmt;

/// Result type alias using CaptureError
pub type CaptureResult<T> = Result<T, CaptureError>;

/// Errors surfaced by the capture session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// Camera source errors (permission, availability)
    Source(SourceError),
    /// Photo pipeline errors (encoding, saving)
    Photo(PhotoError),
}

/// Photo pipeline errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhotoError {
    /// Raster-to-image encoding failed
    EncodingFailed(String),
    /// Writing the encoded photo to disk failed
    SaveFailed(String),
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::Source(e) => write!(f, "Source error: {}", e),
            CaptureError::Photo(e) => write!(f, "Photo error: {}", e),
        }
    }
}

impl fmt::Display for PhotoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhotoError::EncodingFailed(msg) => write!(f, "Encoding failed: {}", msg),
            PhotoError::SaveFailed(msg) => write!(f, "Save failed: {}", msg),
        }
    }
}

impl std::error::Error for CaptureError {}
impl std::error::Error for PhotoError {}

impl From<SourceError> for CaptureError {
    fn from(err: SourceError) -> Self {
        CaptureError::Source(err)
    }
}

impl From<PhotoError> for CaptureError {
    fn from(err: PhotoError) -> Self {
        CaptureError::Photo(err)
    }
}

impl From<std::io::Error> for PhotoError {
    fn from(err: std::io::Error) -> Self {
        PhotoError::SaveFailed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversions() {
        let err: CaptureError = SourceError::PermissionDenied.into();
        assert_eq!(err, CaptureError::Source(SourceError::PermissionDenied));

        let err: CaptureError = PhotoError::EncodingFailed("bad raster".into()).into();
        assert_eq!(err.to_string(), "Photo error: Encoding failed: bad raster");
    }
}
