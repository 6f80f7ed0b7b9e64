use super::document::DocumentError;

pub const UTF8: &str = "UTF-8";
pub const LATIN1: &str = "ISO-8859-1";

/// Character sets the in-memory host can decode on reload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Utf8,
    Latin1,
    Ascii,
}

impl Charset {
    /// Resolve an encoding name as written in a modeline (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "UTF-8" | "UTF8" => Some(Charset::Utf8),
            "ISO-8859-1" | "ISO8859-1" | "LATIN1" | "LATIN-1" => Some(Charset::Latin1),
            "US-ASCII" | "ASCII" => Some(Charset::Ascii),
            _ => None,
        }
    }

    pub fn decode(self, bytes: &[u8]) -> Option<String> {
        match self {
            Charset::Utf8 => std::str::from_utf8(bytes)
                .ok()
                .map(|content| remove_bom(content).to_string()),
            // Every byte maps to the code point of the same value
            Charset::Latin1 => Some(bytes.iter().map(|&b| b as char).collect()),
            Charset::Ascii => {
                if bytes.is_ascii() {
                    Some(bytes.iter().map(|&b| b as char).collect())
                } else {
                    None
                }
            }
        }
    }
}

pub fn remove_bom(content: &str) -> &str {
    content.strip_prefix('\u{FEFF}').unwrap_or(content)
}

/// Decode raw bytes with a named encoding
pub fn decode(bytes: &[u8], encoding: &str) -> Result<String, DocumentError> {
    let charset = Charset::from_name(encoding)
        .ok_or_else(|| DocumentError::UnsupportedEncoding(encoding.to_string()))?;

    charset.decode(bytes).ok_or_else(|| DocumentError::Decode {
        encoding: encoding.to_string(),
    })
}

/// Guess the encoding of freshly loaded bytes: UTF-8 if valid, otherwise Latin-1
pub fn detect(bytes: &[u8]) -> (String, &'static str) {
    match Charset::Utf8.decode(bytes) {
        Some(content) => (content, UTF8),
        None => (Charset::Latin1.decode(bytes).unwrap_or_default(), LATIN1),
    }
}
