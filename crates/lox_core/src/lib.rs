//! lox_core: Core position types shared by the Lox front end.
//!
//! Tokens and diagnostics both point back into the source through
//! [`TextSpan`], so it lives below every other crate in the workspace.

pub mod text;

pub use text::{TextPos, TextSpan};
