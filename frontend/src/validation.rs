//! Resume file validation.
//!
//! Runs when the resume input changes: checks the first selected file's
//! extension against the allow-list, then its size against the upload
//! limit. A refused file triggers a blocking alert and clears the input.
//!
//! This only improves the user experience. The analysis server performs
//! its own checks on whatever it receives.

use crate::{SelectedFile, ValidationError, ALLOWED_EXTENSIONS, MAX_FILE_SIZE};

/// A file input element the validator can read and reset.
pub trait FileInput {
    /// First selected file, if any.
    fn first_file(&self) -> Option<SelectedFile>;

    /// Drop the current selection.
    fn clear(&self);
}

/// Blocking user-facing messages.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Extension of `name`: the part after the last `.`, lower-cased.
///
/// A name without any `.` is returned whole.
pub fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

/// Check a single file against the allow-list and the size limit.
///
/// The extension is checked first.
pub fn check_file(file: &SelectedFile) -> Result<(), ValidationError> {
    let extension = extension_of(&file.name);
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ValidationError::InvalidExtension { extension });
    }

    if file.size > MAX_FILE_SIZE {
        return Err(ValidationError::TooLarge { size: file.size });
    }

    Ok(())
}

/// Check the first file selected in `input`.
pub fn check_selection(input: &impl FileInput) -> Result<SelectedFile, ValidationError> {
    let file = input.first_file().ok_or(ValidationError::NoFile)?;
    check_file(&file)?;
    Ok(file)
}

/// Validate the resume input after a `change` event.
///
/// Returns `true` when the selected file may be uploaded. A refused file is
/// reported through `notifier` and removed from `input`; an empty selection
/// is refused without any message.
pub fn validate_file_input(input: &impl FileInput, notifier: &impl Notifier) -> bool {
    match check_selection(input) {
        Ok(file) => {
            log::debug!("Accepted resume: {}", accepted_summary(&file));
            true
        }
        Err(err) => {
            if let Some(message) = err.alert_message() {
                log::warn!("⚠️  Rejected resume file: {}", err);
                notifier.alert(&message);
                input.clear();
            }
            false
        }
    }
}

/// Log line for an accepted file. The file name stays out of the logs.
fn accepted_summary(file: &SelectedFile) -> String {
    format!(".{} file, {} bytes", extension_of(&file.name), file.size)
}
