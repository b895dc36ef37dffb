//! Design-token source for the quartz design system.
//!
//! Tokens are named OKLCH colors grouped into theme variants (dark and
//! light modes). Components consume token *names*; the actual values only
//! surface again when a theme is emitted as CSS custom properties.

mod color;
pub use color::*;

mod deserializers;

mod schema;
pub use schema::*;

mod css;
pub use css::*;

use thiserror::Error;

/// Errors produced when loading a theme definition.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme JSON was malformed or failed schema validation.
    #[error("failed to parse theme: {0}")]
    Parse(#[from] serde_json::Error),
}
