//! `web_sys` adapters for the page elements the handlers drive.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlButtonElement, HtmlFormElement, HtmlInputElement,
    Window,
};

use crate::feedback::SubmitControls;
use crate::services::wiring::{Handler, Page};
use crate::validation::{FileInput, Notifier};
use crate::{AppError, AppResult, SelectedFile, HIDDEN_CLASS, RESUME_FORM_ID, RESUME_INPUT_ID};

/// Look up an element by ID and cast it to the expected type.
pub fn element_by_id<T: JsCast>(document: &Document, id: &'static str) -> AppResult<T> {
    document
        .get_element_by_id(id)
        .ok_or(AppError::MissingElement(id))?
        .dyn_into::<T>()
        .map_err(|_| AppError::Dom(format!("#{} has an unexpected element type", id)))
}

/// Register `handler` for `event` on `target` for the page's lifetime.
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: Closure<dyn FnMut(Event)>,
) -> AppResult<()> {
    target
        .add_event_listener_with_callback(event, handler.as_ref().unchecked_ref())
        .map_err(|e| AppError::Dom(format!("Failed to listen for {}: {:?}", event, e)))?;
    handler.forget();
    Ok(())
}

fn listen_with(target: &EventTarget, event: &str, mut handler: Handler) -> AppResult<()> {
    let closure = Closure::wrap(Box::new(move |_: Event| handler()) as Box<dyn FnMut(Event)>);
    listen(target, event, closure)
}

/// The resume `<input type="file">`.
#[derive(Clone)]
pub struct HtmlFileInput(pub HtmlInputElement);

impl FileInput for HtmlFileInput {
    fn first_file(&self) -> Option<SelectedFile> {
        let file = self.0.files()?.get(0)?;
        Some(SelectedFile::new(file.name(), file.size() as u64))
    }

    fn clear(&self) {
        self.0.set_value("");
    }
}

/// `window.alert`.
pub struct WindowAlert(pub Window);

impl Notifier for WindowAlert {
    fn alert(&self, message: &str) {
        if let Err(e) = self.0.alert_with_message(message) {
            log::error!("Failed to show alert: {:?}", e);
        }
    }
}

/// Submit button with its label and spinner.
pub struct SubmitButton {
    pub button: HtmlButtonElement,
    pub text: Element,
    pub spinner: Element,
}

impl SubmitButton {
    /// Find the submit controls on the page.
    pub fn find(document: &Document) -> AppResult<Self> {
        Ok(Self {
            button: element_by_id(document, crate::ANALYZE_BUTTON_ID)?,
            text: element_by_id(document, crate::BUTTON_TEXT_ID)?,
            spinner: element_by_id(document, crate::LOADING_SPINNER_ID)?,
        })
    }
}

impl SubmitControls for SubmitButton {
    fn set_button_text(&self, text: &str) {
        self.text.set_text_content(Some(text));
    }

    fn reveal_spinner(&self) {
        if let Err(e) = self.spinner.class_list().remove_1(HIDDEN_CLASS) {
            log::error!("Failed to show spinner: {:?}", e);
        }
    }

    fn disable_button(&self) {
        self.button.set_disabled(true);
    }
}

impl Page for Document {
    type Form = HtmlFormElement;
    type Controls = SubmitButton;
    type Input = HtmlFileInput;
    type Alert = WindowAlert;

    fn form(&self) -> AppResult<HtmlFormElement> {
        element_by_id(self, RESUME_FORM_ID)
    }

    fn submit_controls(&self) -> AppResult<SubmitButton> {
        SubmitButton::find(self)
    }

    fn file_input(&self) -> AppResult<HtmlFileInput> {
        element_by_id(self, RESUME_INPUT_ID).map(HtmlFileInput)
    }

    fn notifier(&self) -> AppResult<WindowAlert> {
        web_sys::window()
            .map(WindowAlert)
            .ok_or_else(|| AppError::Dom("no global window".to_string()))
    }

    fn on_submit(&self, form: &HtmlFormElement, handler: Handler) -> AppResult<()> {
        listen_with(form, "submit", handler)
    }

    fn on_change(&self, input: &HtmlFileInput, handler: Handler) -> AppResult<()> {
        listen_with(&input.0, "change", handler)
    }
}
