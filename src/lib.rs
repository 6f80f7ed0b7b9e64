//! Modeline detection for text editors.
//!
//! Finds `vim:`/`geany:` style settings embedded in the first lines of a
//! document and applies them through the [`EditorDocument`] trait.

pub mod config;
pub mod document_model;
pub mod logging;
pub mod modeline;

pub use document_model::{Document, DocumentError, EditorDocument, IndentType, WrapMode};
pub use modeline::{LifecycleEvent, apply_modelines, apply_modelines_within};
