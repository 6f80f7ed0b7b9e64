use super::editor_document::{EditorDocument, IndentType, WrapMode};
use super::encoding;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Content is not valid {encoding}")]
    Decode { encoding: String },

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineEnding {
    Unix,    // \n (LF)
    Windows, // \r\n (CRLF)
    Mac,     // \r (CR)
}

impl LineEnding {
    pub fn detect(content: &str) -> Self {
        if content.contains("\r\n") {
            LineEnding::Windows
        } else if content.contains('\r') {
            LineEnding::Mac
        } else {
            LineEnding::Unix
        }
    }
}

/// In-memory host document: the text plus the settings a modeline can change
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: Option<PathBuf>,
    pub line_ending: LineEnding,
    pub indent_type: IndentType,
    pub indent_width: usize,
    pub wrap_mode: WrapMode,
    pub encoding: String,
    lines: Vec<String>,
    // Undecoded content, kept so a reload can re-decode without the file
    raw: Vec<u8>,
    valid: bool,
}

impl Document {
    pub fn new() -> Self {
        Self {
            filename: None,
            line_ending: LineEnding::Unix,
            indent_type: IndentType::Tabs,
            indent_width: 4,
            wrap_mode: WrapMode::None,
            encoding: encoding::UTF8.to_string(),
            lines: vec![String::new()],
            raw: Vec::new(),
            valid: true,
        }
    }

    /// A document the host has closed; modeline scanning leaves it alone
    pub fn invalid() -> Self {
        Self {
            valid: false,
            ..Self::new()
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Self {
        let mut doc = Self::new();
        doc.raw = content.as_bytes().to_vec();
        doc.set_content(content);
        doc
    }

    pub fn from_file(filename: PathBuf) -> Result<Self, DocumentError> {
        let raw = fs::read(&filename).map_err(|source| DocumentError::Io {
            path: filename.clone(),
            source,
        })?;
        let (content, detected) = encoding::detect(&raw);

        let mut doc = Self::new();
        doc.set_content(&content);
        doc.encoding = detected.to_string();
        doc.filename = Some(filename);
        doc.raw = raw;
        Ok(doc)
    }

    fn set_content(&mut self, content: &str) {
        self.line_ending = LineEnding::detect(content);
        let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
        self.lines = normalized.split('\n').map(str::to_string).collect();
    }

    pub fn content(&self) -> String {
        self.lines.join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorDocument for Document {
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
    }

    fn set_indent_width(&mut self, width: usize) {
        self.indent_width = width;
    }

    fn set_wrap_mode(&mut self, wrap_mode: WrapMode) {
        self.wrap_mode = wrap_mode;
    }

    fn encoding(&self) -> &str {
        &self.encoding
    }

    fn set_encoding(&mut self, encoding: &str) {
        self.encoding = encoding.to_string();
    }

    fn reload_with_encoding(&mut self, encoding: &str) -> Result<(), DocumentError> {
        if let Some(filename) = &self.filename {
            self.raw = fs::read(filename).map_err(|source| DocumentError::Io {
                path: filename.clone(),
                source,
            })?;
        }

        let content = encoding::decode(&self.raw, encoding)?;
        self.set_content(&content);
        self.encoding = encoding.to_string();
        Ok(())
    }
}
