//! Application configuration.
//!
//! Centralized configuration for the resume upload page. Limits mirror
//! the ones enforced by the analysis server; the checks here are advisory.

/// Application name, used as the document title.
pub const APP_NAME: &str = "Resume Analyzer";

/// Endpoint the resume form posts to.
///
/// Served by the analysis backend, reached by a plain multipart submission.
pub const ANALYZE_URL: &str = "/analyze";

/// File extensions accepted for upload (lower-case, without the dot).
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "docx", "doc", "txt"];

/// `accept` attribute for the file picker, kept in sync with [`ALLOWED_EXTENSIONS`].
pub const ACCEPT_ATTRIBUTE: &str = ".pdf,.docx,.doc,.txt";

/// Maximum upload size in megabytes.
pub const MAX_FILE_SIZE_MB: u64 = 16;

/// Maximum upload size in bytes (16 MiB, inclusive).
pub const MAX_FILE_SIZE: u64 = MAX_FILE_SIZE_MB * 1024 * 1024;

/// Submit button label before submission.
pub const IDLE_TEXT: &str = "Analyze Resume";

/// Submit button label while the server analyzes the resume.
pub const LOADING_TEXT: &str = "Analyzing...";

/// Bootstrap utility class for hidden elements.
pub const HIDDEN_CLASS: &str = "d-none";

// Element IDs shared between the rendered page and the page-load wiring.
pub const RESUME_FORM_ID: &str = "resumeForm";
pub const ANALYZE_BUTTON_ID: &str = "analyzeBtn";
pub const BUTTON_TEXT_ID: &str = "btnText";
pub const LOADING_SPINNER_ID: &str = "loadingSpinner";
pub const RESUME_INPUT_ID: &str = "resume";
