use crate::document_model::EditorDocument;

/// Markers that make a line a modeline. The leading space is part of the marker.
pub const MODELINE_PREFIXES: &[&str] = &[" geany:", " vi:", " vim:", " ex:"];

/// Only the head of a document is searched, however large it is
pub const MAX_SCAN_LINES: usize = 50;

/// Find the first modeline in the first `MAX_SCAN_LINES` lines
pub fn scan<D: EditorDocument + ?Sized>(doc: &D) -> Option<String> {
    scan_within(doc, MAX_SCAN_LINES)
}

/// Like `scan`, but searching at most `limit` lines (still capped at `MAX_SCAN_LINES`)
pub fn scan_within<D: EditorDocument + ?Sized>(doc: &D, limit: usize) -> Option<String> {
    if !doc.is_valid() {
        tracing::debug!("skipping invalid document");
        return None;
    }

    let lines = doc.line_count().min(limit.min(MAX_SCAN_LINES));
    for line_number in 0..lines {
        let Some(line) = doc.get_line(line_number) else {
            continue;
        };
        let stripped = line.trim_ascii();

        if let Some(prefix) = MODELINE_PREFIXES.iter().find(|p| stripped.contains(**p)) {
            tracing::debug!(line = line_number, prefix, "modeline [{stripped}]");
            return Some(stripped.to_string());
        }
        tracing::trace!(line = line_number, "no modeline");
    }

    None
}

/// Earliest prefix occurrence in `line`, as (byte offset, prefix)
pub fn find_prefix(line: &str) -> Option<(usize, &'static str)> {
    MODELINE_PREFIXES
        .iter()
        .filter_map(|prefix| line.find(prefix).map(|pos| (pos, *prefix)))
        .min_by_key(|(pos, _)| *pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document_model::Document;

    #[test]
    fn test_finds_each_prefix() {
        for line in [
            "# geany: et",
            "// vi: ts=2",
            "/* vim: sw=4 */",
            "-- ex: nowrap",
        ] {
            let doc = Document::from_str(line);
            assert_eq!(scan(&doc).as_deref(), Some(line), "{line}");
        }
    }

    #[test]
    fn test_no_modeline() {
        let doc = Document::from_str("fn main() {}\n// nothing here\nvim:et");
        assert_eq!(scan(&doc), None);
    }

    #[test]
    fn test_prefix_needs_leading_space() {
        // After stripping, "vim:" at the very start has no space before it
        let doc = Document::from_str("   vim: et");
        assert_eq!(scan(&doc), None);

        let doc = Document::from_str("#vim: et");
        assert_eq!(scan(&doc), None);
    }

    #[test]
    fn test_strips_whitespace_and_matches_anywhere() {
        let doc = Document::from_str("first\n\t  some text then vim: et   \nlast");
        assert_eq!(scan(&doc).as_deref(), Some("some text then vim: et"));
    }

    #[test]
    fn test_first_matching_line_wins() {
        let doc = Document::from_str("x\n# vim: ts=2\n# vim: ts=8");
        assert_eq!(scan(&doc).as_deref(), Some("# vim: ts=2"));
    }

    #[test]
    fn test_scan_stops_after_fifty_lines() {
        let mut content = "text\n".repeat(49);
        content.push_str("# vim: et\n");
        let doc = Document::from_str(&content);
        assert_eq!(scan(&doc).as_deref(), Some("# vim: et"));

        let mut content = "text\n".repeat(50);
        content.push_str("# vim: et\n");
        let doc = Document::from_str(&content);
        assert_eq!(scan(&doc), None);
    }

    #[test]
    fn test_scan_within_lower_limit() {
        let doc = Document::from_str("a\nb\n# vim: et");
        assert_eq!(scan_within(&doc, 2), None);
        assert_eq!(scan_within(&doc, 3).as_deref(), Some("# vim: et"));
        assert_eq!(scan_within(&doc, 0), None);
    }

    #[test]
    fn test_scan_within_cannot_exceed_cap() {
        let mut content = "text\n".repeat(60);
        content.push_str("# vim: et\n");
        let doc = Document::from_str(&content);
        assert_eq!(scan_within(&doc, 1000), None);
    }

    #[test]
    fn test_invalid_document_not_scanned() {
        let doc = Document::invalid();
        assert_eq!(scan(&doc), None);
    }

    #[test]
    fn test_find_prefix_earliest() {
        assert_eq!(find_prefix("# vim: a vi: b"), Some((1, " vim:")));
        assert_eq!(find_prefix("# ex: a geany: b"), Some((1, " ex:")));
        assert_eq!(find_prefix("nothing"), None);
    }
}
