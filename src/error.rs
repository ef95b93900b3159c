//! Error types and handling infrastructure for screenprinter.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! library error types. The binary layers `anyhow` on top for reporting.
//!
//! ## Design Principles
//!
//! - **Surface usage errors immediately**: content that does not fit is never truncated
//! - **No retries**: every failure here is a caller or host problem, not a transient one
//! - **Consistency**: Standardized Result type across all modules

use thiserror::Error;

/// The main error type for screenprinter operations.
#[derive(Error, Debug)]
pub enum ScreenError {
    /// Invalid construction or update parameter (e.g. a zero screen width)
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// A line is longer than the width or frame it must fit into
    #[error("Line does not fit in width {width} (length {}): {line:?}", .line.chars().count())]
    Layout { line: String, width: usize },

    /// A frame's content area is wider than the space it has to fit into
    #[error("Frame content width {inner_width} exceeds the maximum of {max_inner_width}")]
    FrameTooWide {
        inner_width: usize,
        max_inner_width: usize,
    },

    /// An unrecognized variant name reached a closed set of options
    #[error("Unsupported operation: {message}")]
    UnsupportedOperation { message: String },

    /// Host terminal I/O failed
    #[error("Terminal operation failed: {message}")]
    Terminal {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for screenprinter operations.
pub type Result<T> = std::result::Result<T, ScreenError>;

impl ScreenError {
    /// Create a Configuration error with a descriptive message
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a Layout error for a line that exceeds `width`
    pub fn layout(line: impl Into<String>, width: usize) -> Self {
        Self::Layout {
            line: line.into(),
            width,
        }
    }

    /// Create a FrameTooWide error for a frame whose content area exceeds the maximum
    pub fn frame_too_wide(inner_width: usize, max_inner_width: usize) -> Self {
        Self::FrameTooWide {
            inner_width,
            max_inner_width,
        }
    }

    /// Create an UnsupportedOperation error with a descriptive message
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::UnsupportedOperation {
            message: message.into(),
        }
    }

    /// Create a Terminal error from an io::Error with additional context
    pub fn terminal(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Terminal {
            message: message.into(),
            source,
        }
    }
}

impl From<std::io::Error> for ScreenError {
    fn from(err: std::io::Error) -> Self {
        Self::Terminal {
            message: "IO operation failed".to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let config = ScreenError::configuration("screen width must be greater than 0");
        assert_eq!(
            config.to_string(),
            "Configuration error: screen width must be greater than 0"
        );

        let layout = ScreenError::layout("hello", 3);
        assert_eq!(
            layout.to_string(),
            "Line does not fit in width 3 (length 5): \"hello\""
        );

        let unsupported = ScreenError::unsupported("unknown arrow position 'sideways'");
        assert_eq!(
            unsupported.to_string(),
            "Unsupported operation: unknown arrow position 'sideways'"
        );

        let frame = ScreenError::frame_too_wide(90, 76);
        assert_eq!(
            frame.to_string(),
            "Frame content width 90 exceeds the maximum of 76"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
        let err: ScreenError = io_err.into();

        match err {
            ScreenError::Terminal { message, source } => {
                assert_eq!(message, "IO operation failed");
                assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe);
            }
            _ => panic!("Expected Terminal variant"),
        }
    }

    #[test]
    fn test_layout_error_counts_chars_not_bytes() {
        let err = ScreenError::layout("héé", 2);
        assert!(err.to_string().contains("(length 3)"));
    }
}
