//! Test double recording every call the modeline code makes on a document.

use crate::document_model::{DocumentError, EditorDocument, IndentType, WrapMode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    IndentType(IndentType),
    IndentWidth(usize),
    WrapMode(WrapMode),
    Encoding(String),
    Reload(String),
}

pub struct RecordingDocument {
    pub lines: Vec<String>,
    pub indent_type: IndentType,
    pub encoding: String,
    pub valid: bool,
    pub mutations: Vec<Mutation>,
}

impl RecordingDocument {
    pub fn new(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(str::to_string).collect(),
            indent_type: IndentType::Tabs,
            encoding: "UTF-8".to_string(),
            valid: true,
            mutations: Vec::new(),
        }
    }
}

impl EditorDocument for RecordingDocument {
    fn is_valid(&self) -> bool {
        self.valid
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn get_line(&self, line_number: usize) -> Option<String> {
        self.lines.get(line_number).cloned()
    }

    fn indent_type(&self) -> IndentType {
        self.indent_type
    }

    fn set_indent_type(&mut self, indent_type: IndentType) {
        self.indent_type = indent_type;
        self.mutations.push(Mutation::IndentType(indent_type));
    }

    fn set_indent_width(&mut self, width: usize) {
        self.mutations.push(Mutation::IndentWidth(width));
    }

    fn set_wrap_mode(&mut self, wrap_mode: WrapMode) {
        self.mutations.push(Mutation::WrapMode(wrap_mode));
    }

    fn encoding(&self) -> &str {
        &self.encoding
    }

    fn set_encoding(&mut self, encoding: &str) {
        self.encoding = encoding.to_string();
        self.mutations.push(Mutation::Encoding(encoding.to_string()));
    }

    fn reload_with_encoding(&mut self, encoding: &str) -> Result<(), DocumentError> {
        self.mutations.push(Mutation::Reload(encoding.to_string()));
        Ok(())
    }
}
