//! Resume Analyzer - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for the resume upload page. It renders the
//! upload form, then attaches two independent behaviors to it:
//!
//! - a submit handler that switches the button to its loading state
//!   before the browser posts the form to the analysis server;
//! - a change handler that checks the picked file's extension and size.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  UploadPage                                                  │
//! │  ├── Hero (title, description)                              │
//! │  ├── ResumeForm (#resumeForm, #resume, #analyzeBtn)         │
//! │  └── Footer                                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  wiring::run_when_ready                                      │
//! │  ├── submit  → feedback::apply_loading_state                │
//! │  └── change  → validation::validate_file_input              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (SelectedFile, ValidationError, AppError)
//! - [`validation`] - File extension and size checks
//! - [`feedback`] - Submit-time loading state
//! - [`components`] - UI components (Hero, ResumeForm, Footer)
//! - [`services`] - DOM adapters and page-load wiring

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod validation;
pub mod feedback;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    SelectedFile,
    // Validation
    ValidationError,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Start the application: logging, rendering, then handler wiring.
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("📄 Resume Analyzer - Starting Leptos App");

    mount_to_body(|| view! { <App/> });

    run_when_ready(gloo_utils::document());
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn UploadPage() -> impl IntoView {
    view! {
        <div class="container" style="max-width: 720px;">
            <Hero/>
            <ResumeForm/>
        </div>

        <Footer/>
    }
}
