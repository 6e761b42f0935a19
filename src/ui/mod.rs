//! Terminal output helpers.
//!
//! - [`theme`] - Visual styling for help screens and error markers
//! - [`text`] - Whitespace normalization for multi-line templates

pub mod text;
pub mod theme;

pub use text::dedent;
pub use theme::Theme;
