//! Browser services.
//!
//! This module connects the validation and feedback logic to the page:
//!
//! # Services
//!
//! - [`dom`] - `web_sys` adapters for the file input, alerts and submit button
//! - [`wiring`] - page-load listener registration by element ID

pub mod dom;
pub mod wiring;

pub use dom::*;
pub use wiring::*;
