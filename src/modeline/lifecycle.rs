use super::apply_modelines_within;
use super::scanner::MAX_SCAN_LINES;
use crate::document_model::{DocumentError, EditorDocument};

/// Host events that trigger a modeline pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    DocumentOpen,
    DocumentSave,
}

impl LifecycleEvent {
    /// The encoding has to be known before the content is decoded, so an
    /// opened document is reloaded once its modeline has been applied.
    pub fn needs_reload(self) -> bool {
        matches!(self, LifecycleEvent::DocumentOpen)
    }

    pub fn dispatch<D: EditorDocument + ?Sized>(self, doc: &mut D) -> Result<usize, DocumentError> {
        self.dispatch_within(doc, MAX_SCAN_LINES)
    }

    pub fn dispatch_within<D: EditorDocument + ?Sized>(
        self,
        doc: &mut D,
        limit: usize,
    ) -> Result<usize, DocumentError> {
        tracing::debug!(event = ?self, "modeline pass");
        apply_modelines_within(doc, self.needs_reload(), limit)
    }
}

pub fn on_document_open<D: EditorDocument + ?Sized>(doc: &mut D) -> Result<usize, DocumentError> {
    LifecycleEvent::DocumentOpen.dispatch(doc)
}

pub fn on_document_save<D: EditorDocument + ?Sized>(doc: &mut D) -> Result<usize, DocumentError> {
    LifecycleEvent::DocumentSave.dispatch(doc)
}
