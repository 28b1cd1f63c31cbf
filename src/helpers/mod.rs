//! Helper functions for the presentation layer
//!
//! Escaping, date formatting and link building shared by the HTML
//! templates and the terminal output.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
