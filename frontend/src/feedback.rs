//! Submit-time loading state.
//!
//! When the resume form is submitted the button label switches to
//! [`LOADING_TEXT`], the spinner is shown and the button is disabled.
//! The browser then submits the form as usual.

use crate::LOADING_TEXT;

/// The submit button and its loading indicator.
pub trait SubmitControls {
    fn set_button_text(&self, text: &str);
    fn reveal_spinner(&self);
    fn disable_button(&self);
}

/// Switch the submit controls to their loading state.
///
/// Never gates the submission: there is nothing to cancel and no error path.
pub fn apply_loading_state(controls: &impl SubmitControls) {
    controls.set_button_text(LOADING_TEXT);
    controls.reveal_spinner();
    controls.disable_button();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_file_input, FileInput, Notifier};
    use crate::{SelectedFile, IDLE_TEXT};
    use std::cell::{Cell, RefCell};

    struct FakeControls {
        text: RefCell<String>,
        spinner_hidden: Cell<bool>,
        disabled: Cell<bool>,
    }

    impl FakeControls {
        fn idle() -> Self {
            Self {
                text: RefCell::new(IDLE_TEXT.to_string()),
                spinner_hidden: Cell::new(true),
                disabled: Cell::new(false),
            }
        }
    }

    impl SubmitControls for FakeControls {
        fn set_button_text(&self, text: &str) {
            *self.text.borrow_mut() = text.to_string();
        }

        fn reveal_spinner(&self) {
            self.spinner_hidden.set(false);
        }

        fn disable_button(&self) {
            self.disabled.set(true);
        }
    }

    #[test]
    fn test_loading_state_applied() {
        let controls = FakeControls::idle();

        apply_loading_state(&controls);

        assert_eq!(*controls.text.borrow(), "Analyzing...");
        assert!(!controls.spinner_hidden.get());
        assert!(controls.disabled.get());
    }

    #[test]
    fn test_loading_state_is_idempotent() {
        let controls = FakeControls::idle();

        apply_loading_state(&controls);
        apply_loading_state(&controls);

        assert_eq!(*controls.text.borrow(), LOADING_TEXT);
        assert!(!controls.spinner_hidden.get());
        assert!(controls.disabled.get());
    }

    struct RejectedInput;

    impl FileInput for RejectedInput {
        fn first_file(&self) -> Option<SelectedFile> {
            Some(SelectedFile::new("virus.exe", 1))
        }

        fn clear(&self) {}
    }

    struct Silent;

    impl Notifier for Silent {
        fn alert(&self, _message: &str) {}
    }

    #[test]
    fn test_submit_ignores_validation_outcome() {
        let controls = FakeControls::idle();

        assert!(!validate_file_input(&RejectedInput, &Silent));
        apply_loading_state(&controls);

        assert_eq!(*controls.text.borrow(), LOADING_TEXT);
        assert!(!controls.spinner_hidden.get());
        assert!(controls.disabled.get());
    }
}
