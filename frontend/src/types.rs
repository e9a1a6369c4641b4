//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - the file picked in the resume input
//! - **Validation Types** - why a picked file was refused
//! - **Error Types** - frontend error handling

use std::fmt;

use crate::{ALLOWED_EXTENSIONS, MAX_FILE_SIZE, MAX_FILE_SIZE_MB};

// =============================================================================
// File Types
// =============================================================================

/// The file currently selected in the resume input.
///
/// Only lives for the duration of a single `change` event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as reported by the browser
    pub name: String,
    /// Size in bytes
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

// =============================================================================
// Validation Types
// =============================================================================

/// Reason a selection was refused by the file validator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing is selected. Reported silently.
    NoFile,
    /// The extension is not in the allow-list.
    InvalidExtension { extension: String },
    /// The file is larger than the upload limit.
    TooLarge { size: u64 },
}

impl ValidationError {
    /// Message shown to the user in the blocking alert, if any.
    pub fn alert_message(&self) -> Option<String> {
        match self {
            ValidationError::NoFile => None,
            ValidationError::InvalidExtension { .. } => Some(format!(
                "Invalid file type. Please upload a {} file.",
                ALLOWED_EXTENSIONS.join(", ")
            )),
            ValidationError::TooLarge { .. } => Some(format!(
                "File size exceeds {}MB limit. Please upload a smaller file.",
                MAX_FILE_SIZE_MB
            )),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoFile => write!(f, "no file selected"),
            ValidationError::InvalidExtension { extension } => {
                write!(f, "extension '{}' is not allowed", extension)
            }
            ValidationError::TooLarge { size } => {
                write!(f, "{} bytes exceeds the {} byte limit", size, MAX_FILE_SIZE)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// An element the page-load wiring needs is not on the page.
    MissingElement(&'static str),
    /// A DOM call failed or returned an unexpected node.
    Dom(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingElement(id) => write!(f, "Missing element: #{}", id),
            AppError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_has_no_alert() {
        assert_eq!(ValidationError::NoFile.alert_message(), None);
    }

    #[test]
    fn test_extension_alert_names_allowed_set() {
        let err = ValidationError::InvalidExtension {
            extension: "exe".to_string(),
        };
        assert_eq!(
            err.alert_message().as_deref(),
            Some("Invalid file type. Please upload a pdf, docx, doc, txt file.")
        );
        assert_eq!(err.to_string(), "extension 'exe' is not allowed");
    }

    #[test]
    fn test_size_alert_names_limit() {
        let err = ValidationError::TooLarge { size: 16_777_217 };
        assert_eq!(
            err.alert_message().as_deref(),
            Some("File size exceeds 16MB limit. Please upload a smaller file.")
        );
    }

    #[test]
    fn test_app_error_display() {
        assert_eq!(
            AppError::MissingElement("resumeForm").to_string(),
            "Missing element: #resumeForm"
        );
        assert_eq!(
            AppError::Dom("boom".to_string()).to_string(),
            "DOM error: boom"
        );
    }
}
