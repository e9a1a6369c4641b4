//! Page-load wiring.
//!
//! Attaches the submit feedback and file validation handlers to the page
//! by element ID, so it works the same on the Leptos-rendered page and on
//! a server-rendered one carrying the same IDs. A behavior whose elements
//! are missing is simply not attached.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Event};

use crate::feedback::{apply_loading_state, SubmitControls};
use crate::services::dom::listen;
use crate::validation::{validate_file_input, FileInput, Notifier};
use crate::{AppError, AppResult};

/// Event handler registered on a page element.
pub type Handler = Box<dyn FnMut()>;

/// The elements the handlers need, looked up by ID, and a way to listen
/// on them.
pub trait Page {
    type Form;
    type Controls: SubmitControls + 'static;
    type Input: FileInput + Clone + 'static;
    type Alert: Notifier + 'static;

    /// `#resumeForm`.
    fn form(&self) -> AppResult<Self::Form>;

    /// `#analyzeBtn`, `#btnText` and `#loadingSpinner`.
    fn submit_controls(&self) -> AppResult<Self::Controls>;

    /// `#resume`.
    fn file_input(&self) -> AppResult<Self::Input>;

    fn notifier(&self) -> AppResult<Self::Alert>;

    fn on_submit(&self, form: &Self::Form, handler: Handler) -> AppResult<()>;

    fn on_change(&self, input: &Self::Input, handler: Handler) -> AppResult<()>;
}

/// Which behaviors were attached to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Wiring {
    pub submit_feedback: bool,
    pub file_validation: bool,
}

/// Attach both handlers to `page`.
pub fn on_page_load(page: &impl Page) -> Wiring {
    Wiring {
        submit_feedback: report("submit feedback", bind_submit_feedback(page)),
        file_validation: report("file validation", bind_file_validation(page)),
    }
}

/// Run [`on_page_load`] now, or on `DOMContentLoaded` if the document is
/// still loading.
pub fn run_when_ready(document: Document) {
    if !still_loading(&document.ready_state()) {
        on_page_load(&document);
        return;
    }

    let target = document.clone();
    let on_ready = Closure::once(move |_: Event| {
        on_page_load(&document);
    });
    if let Err(e) = listen(&target, "DOMContentLoaded", on_ready) {
        log::error!("{}", e);
    }
}

/// `document.readyState` before `DOMContentLoaded` fires.
fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn bind_submit_feedback<P: Page>(page: &P) -> AppResult<()> {
    let form = page.form()?;
    let controls = page.submit_controls()?;

    // Default submission continues after the handler returns.
    page.on_submit(&form, Box::new(move || apply_loading_state(&controls)))
}

fn bind_file_validation<P: Page>(page: &P) -> AppResult<()> {
    let input = page.file_input()?;
    let notifier = page.notifier()?;
    let handle = input.clone();

    page.on_change(
        &input,
        Box::new(move || {
            validate_file_input(&handle, &notifier);
        }),
    )
}

fn report(behavior: &str, result: AppResult<()>) -> bool {
    match result {
        Ok(()) => {
            log::info!("✅ {} attached", behavior);
            true
        }
        Err(AppError::MissingElement(id)) => {
            log::debug!("Skipping {}: no #{} on this page", behavior, id);
            false
        }
        Err(e) => {
            log::error!("❌ Could not attach {}: {}", behavior, e);
            false
        }
    }
}
