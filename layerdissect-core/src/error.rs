//! Error types for layerdissect-core.
//!
//! This module provides structured error types for all dissection operations:
//!
//! - [`enum@Error`] - Main error enum that wraps all error types
//! - [`ProtocolError`] - Errors from decoding a single protocol header
//!
//! Unknown code points and unknown next layers are not errors. They are
//! represented in the decoded record (raw code, `"Reserved"`, or opaque
//! payload bytes) and never surface here.

use thiserror::Error;

/// Main error type for layerdissect-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error during protocol dissection
    #[error("Protocol dissection error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Errors related to protocol dissection.
///
/// A `ProtocolError` aborts the current header's decode only. Callers may
/// record the header as malformed and move on to the next frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Fewer bytes available than the current field requires
    #[error("{protocol}: truncated input reading {field} (need {needed} bytes, have {have})")]
    TruncatedInput {
        protocol: &'static str,
        field: &'static str,
        needed: usize,
        have: usize,
    },

    /// Integer read with a width outside {1, 2, 4, 8}
    #[error("unsupported integer width: {width} bytes")]
    InvalidWidth { width: usize },

    /// No dissector is registered for the chain's entry point
    #[error("no dissector for layer {context}")]
    UnknownLayer { context: String },
}

impl ProtocolError {
    /// Attach protocol and field names to a truncation raised by a bare cursor.
    ///
    /// Cursors do not know which protocol they are reading; dissectors use
    /// this to label the failure. Other variants pass through unchanged.
    pub fn in_field(self, protocol: &'static str, field: &'static str) -> Self {
        match self {
            ProtocolError::TruncatedInput { needed, have, .. } => ProtocolError::TruncatedInput {
                protocol,
                field,
                needed,
                have,
            },
            other => other,
        }
    }

    /// True for [`ProtocolError::TruncatedInput`].
    pub fn is_truncated(&self) -> bool {
        matches!(self, ProtocolError::TruncatedInput { .. })
    }
}

impl Error {
    /// True if the underlying protocol error is a truncation.
    pub fn is_truncated(&self) -> bool {
        match self {
            Error::Protocol(err) => err.is_truncated(),
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_field_relabels_truncation() {
        let err = ProtocolError::TruncatedInput {
            protocol: "",
            field: "",
            needed: 4,
            have: 1,
        };

        let labelled = err.in_field("ospf", "router_id");
        assert_eq!(
            labelled,
            ProtocolError::TruncatedInput {
                protocol: "ospf",
                field: "router_id",
                needed: 4,
                have: 1,
            }
        );
        assert!(labelled.is_truncated());
        assert_eq!(
            labelled.to_string(),
            "ospf: truncated input reading router_id (need 4 bytes, have 1)"
        );
    }

    #[test]
    fn test_in_field_keeps_other_variants() {
        let err = ProtocolError::InvalidWidth { width: 3 };
        assert_eq!(err.clone().in_field("ospf", "len"), err);
        assert!(!err.is_truncated());
    }

    #[test]
    fn test_error_is_truncated() {
        let err: Error = ProtocolError::TruncatedInput {
            protocol: "ospf",
            field: "len",
            needed: 2,
            have: 0,
        }
        .into();
        assert!(err.is_truncated());

        let err: Error = ProtocolError::InvalidWidth { width: 3 }.into();
        assert!(!err.is_truncated());
    }

    #[test]
    fn test_error_from_protocol_error() {
        let err: Error = ProtocolError::InvalidWidth { width: 5 }.into();
        assert_eq!(
            err.to_string(),
            "Protocol dissection error: unsupported integer width: 5 bytes"
        );
    }
}
