/// Modeline subsystem - Detects and applies embedded editor settings
///
/// The pipeline is scanner -> tokenizer -> interpreter: the scanner finds the
/// first modeline in the head of a document, the tokenizer splits it into
/// `key[=value]` tokens and the interpreter applies each one through the
/// option table.

pub mod interpreter;
pub mod lifecycle;
pub mod options;
pub mod scanner;
pub mod tokenizer;

#[cfg(test)]
pub(crate) mod recording;

use crate::document_model::{DocumentError, EditorDocument};

// Re-export public interface
pub use interpreter::interpret;
pub use lifecycle::{LifecycleEvent, on_document_open, on_document_save};
pub use options::{ArgKind, Argument, Handler, OPTIONS, OptionSpec};
pub use scanner::{MAX_SCAN_LINES, MODELINE_PREFIXES, scan, scan_within};
pub use tokenizer::tokenize;

/// Scan the document for a modeline and apply its options, then reload the
/// document with its current encoding when `reload` is set.
///
/// Returns how many options were applied. Only the reload can fail.
pub fn apply_modelines<D: EditorDocument + ?Sized>(
    doc: &mut D,
    reload: bool,
) -> Result<usize, DocumentError> {
    apply_modelines_within(doc, reload, MAX_SCAN_LINES)
}

pub fn apply_modelines_within<D: EditorDocument + ?Sized>(
    doc: &mut D,
    reload: bool,
    limit: usize,
) -> Result<usize, DocumentError> {
    if !doc.is_valid() {
        return Ok(0);
    }

    let mut applied = 0;
    if let Some(line) = scan_within(&*doc, limit) {
        for token in tokenize(&line) {
            if interpret(doc, token) {
                applied += 1;
            }
        }
    }

    if reload {
        let encoding = doc.encoding().to_string();
        doc.reload_with_encoding(&encoding).inspect_err(|err| {
            tracing::warn!(%encoding, %err, "reload failed");
        })?;
    }

    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_model::{Document, IndentType, WrapMode};
    use crate::modeline::recording::{Mutation, RecordingDocument};

    #[test]
    fn test_no_modeline_no_mutations() {
        let mut doc = RecordingDocument::new("fn main() {}\n// et ts=2\n");
        assert_eq!(apply_modelines(&mut doc, false).unwrap(), 0);
        assert!(doc.mutations.is_empty());
    }

    #[test]
    fn test_end_to_end_vim_line() {
        let mut doc = Document::from_str("// vim: et ts=2 sw=2\nfn main() {}");
        assert_eq!(apply_modelines(&mut doc, false).unwrap(), 3);
        assert_eq!(doc.indent_type, IndentType::Spaces);
        assert_eq!(doc.indent_width, 2);
    }

    #[test]
    fn test_last_token_wins_per_handler() {
        let mut doc = Document::from_str("# vim: ts=8 sw=3 nowrap wrap");
        apply_modelines(&mut doc, false).unwrap();
        assert_eq!(doc.indent_width, 3);
        assert_eq!(doc.wrap_mode, WrapMode::Word);
    }

    #[test]
    fn test_bad_tokens_do_not_stop_the_rest() {
        let mut doc = RecordingDocument::new("# vim: =4 bogus ts= ts=x et");
        assert_eq!(apply_modelines(&mut doc, false).unwrap(), 1);
        assert_eq!(doc.mutations, vec![Mutation::IndentType(IndentType::Spaces)]);
    }

    #[test]
    fn test_only_first_modeline_used() {
        let mut doc = Document::from_str("# vim: ts=2\n# vim: ts=8 et");
        apply_modelines(&mut doc, false).unwrap();
        assert_eq!(doc.indent_width, 2);
        assert_eq!(doc.indent_type, IndentType::Tabs);
    }

    #[test]
    fn test_idempotent() {
        let content = "/* geany: noexpandtab tabstop=6 wrap encoding=UTF-8 */";
        let mut once = Document::from_str(content);
        apply_modelines(&mut once, false).unwrap();

        let mut twice = Document::from_str(content);
        apply_modelines(&mut twice, false).unwrap();
        apply_modelines(&mut twice, false).unwrap();

        assert_eq!(once.indent_type, twice.indent_type);
        assert_eq!(once.indent_width, twice.indent_width);
        assert_eq!(once.wrap_mode, twice.wrap_mode);
        assert_eq!(once.encoding, twice.encoding);
    }

    #[test]
    fn test_invalid_document_untouched() {
        let mut doc = RecordingDocument::new("# vim: et");
        doc.valid = false;
        assert_eq!(apply_modelines(&mut doc, true).unwrap(), 0);
        assert!(doc.mutations.is_empty());
    }

    #[test]
    fn test_reload_error_is_returned() {
        let mut doc = Document::from_str("# vim: encoding=EBCDIC et");
        let err = apply_modelines(&mut doc, true).unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedEncoding(ref name) if name == "EBCDIC"));
        // Options are applied before the reload is attempted
        assert_eq!(doc.indent_type, IndentType::Spaces);
        assert_eq!(doc.encoding, "EBCDIC");
    }
}
