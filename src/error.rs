//! Errors for jwtdecode

use std::fmt;
use thiserror::Error;

/// Which token segment an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Header,
    Payload,
}

impl SegmentKind {
    /// Label printed above the rendered block
    pub fn label(&self) -> &'static str {
        match self {
            SegmentKind::Header => "Header:",
            SegmentKind::Payload => "Payload:",
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentKind::Header => f.write_str("header"),
            SegmentKind::Payload => f.write_str("payload"),
        }
    }
}

/// jwtdecode Errors
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("invalid JWT format, expected 3 parts separated by '.' (found {parts})")]
    FormatInvalid { parts: usize },

    #[error("decoding {segment} failed: {source}")]
    Decode {
        segment: SegmentKind,
        #[source]
        source: base64::DecodeError,
    },

    #[error("parsing {segment} failed: {source}")]
    Parse {
        segment: SegmentKind,
        #[source]
        source: serde_json::Error,
    },

    // ============================================================================
    // Render Errors
    // ============================================================================
    #[error("segment must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("writing output failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for jwtdecode operations
pub type Result<T> = std::result::Result<T, Error>;
