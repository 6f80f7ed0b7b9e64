use super::options::{self, ArgKind, Argument};
use crate::document_model::EditorDocument;

/// Interpret one `key` or `key=value` token and apply it to the document.
///
/// Returns whether a handler ran. Malformed tokens, unknown keys and
/// unparseable integers are skipped.
pub fn interpret<D: EditorDocument + ?Sized>(doc: &mut D, token: &str) -> bool {
    tracing::debug!("interpret [{token}]");

    let (key, value) = match token.split_once('=') {
        Some((key, value)) if key.is_empty() || value.is_empty() => {
            tracing::debug!(token, "malformed option");
            return false;
        }
        Some((key, value)) => (key, Some(value)),
        None => (token, None),
    };

    let Some(spec) = options::lookup(key) else {
        tracing::debug!(key, "unknown option");
        return false;
    };

    let Some(argument) = decode_argument(spec.kind, value) else {
        return false;
    };

    spec.handler.apply(doc, argument);
    true
}

fn decode_argument(kind: ArgKind, value: Option<&str>) -> Option<Argument<'_>> {
    match kind {
        // Any supplied value is ignored for flags
        ArgKind::True => Some(Argument::Flag(true)),
        ArgKind::False => Some(Argument::Flag(false)),
        ArgKind::Integer => {
            let value = value?;
            match value.trim().parse::<usize>() {
                Ok(number) => Some(Argument::Integer(number)),
                Err(err) => {
                    tracing::debug!(value, %err, "skipping non-integer value");
                    None
                }
            }
        }
        ArgKind::Text => value.map(Argument::Text),
    }
}
