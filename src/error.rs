//! # Error Types
//!
//! This module defines error types used throughout the zpl-label library.
//!
//! Encoding a label never fails. Errors only come from the layers around
//! the encoder: previews, JSON documents, and device I/O.

use thiserror::Error;

/// Main error type for zpl-label operations
#[derive(Debug, Error)]
pub enum LabelError {
    /// Preview requested on a label without both dimensions
    #[error("Preview is only available on labels with both width and height set")]
    PreviewUnavailable,

    /// Unknown density profile name
    #[error("Invalid density: {0}")]
    InvalidDensity(String),

    /// Transport-level errors (device open, write)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Preview image errors (encoding, saving)
    #[error("Image error: {0}")]
    Image(String),

    /// Malformed JSON label document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
