use super::document::DocumentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentType {
    Tabs,
    Spaces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    None,
    Word,
}

impl WrapMode {
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled { WrapMode::Word } else { WrapMode::None }
    }

    pub fn is_enabled(self) -> bool {
        self == WrapMode::Word
    }
}

/// The EditorDocument trait is everything the modeline scanner needs from the
/// host editor. The scanner never owns a document, it only reads lines and
/// calls the setters below.
pub trait EditorDocument {
    /// Documents that are closing or failed to load report false and are skipped
    fn is_valid(&self) -> bool {
        true
    }

    /// Get total line count
    fn line_count(&self) -> usize;

    /// Get a specific line by number, without its line terminator
    fn get_line(&self, line_number: usize) -> Option<String>;

    fn indent_type(&self) -> IndentType;

    fn set_indent_type(&mut self, indent_type: IndentType);

    fn set_indent_width(&mut self, width: usize);

    fn set_wrap_mode(&mut self, wrap_mode: WrapMode);

    fn encoding(&self) -> &str;

    fn set_encoding(&mut self, encoding: &str);

    /// Re-decode the document content with the given encoding
    fn reload_with_encoding(&mut self, encoding: &str) -> Result<(), DocumentError>;
}
