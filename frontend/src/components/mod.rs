//! UI Components for the resume upload page.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`ResumeForm`] - Resume upload form posting to the analysis server
//!
//! Components only render markup. Behavior is attached afterwards by
//! [`crate::services::wiring`], using the element IDs from [`crate::config`].

mod hero;
mod resume_form;
mod footer;

pub use hero::*;
pub use resume_form::*;
pub use footer::*;
