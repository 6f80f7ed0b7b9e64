/// Document model subsystem - The host side of modeline handling
///
/// This module contains the editor-document abstraction the scanner talks to,
/// and an in-memory document implementing it (line access, indent settings,
/// wrap mode, encoding and reload).

pub mod document;
pub mod editor_document;
pub mod encoding;

// Re-export main types for convenience
pub use document::{Document, DocumentError, LineEnding};
pub use editor_document::{EditorDocument, IndentType, WrapMode};
