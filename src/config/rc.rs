use crate::document_model::{Document, IndentType, WrapMode};
use crate::modeline::MAX_SCAN_LINES;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const RC_FILE_NAME: &str = ".modelinerc";

#[derive(Debug, Clone, PartialEq)]
pub struct RcConfig {
    pub tab_stop: usize,
    pub expand_tab: bool,
    pub wrap: bool,
    pub encoding: String,
    /// Whether modelines are honoured at all
    pub modeline: bool,
    /// How many leading lines are searched for a modeline
    pub modelines: usize,
}

impl Default for RcConfig {
    fn default() -> Self {
        Self {
            tab_stop: 4,
            expand_tab: false,
            wrap: false,
            encoding: "UTF-8".to_string(),
            modeline: true,
            modelines: MAX_SCAN_LINES,
        }
    }
}

pub struct RcLoader;

impl RcLoader {
    /// Get the path to the RC file
    /// Looks for .modelinerc in:
    /// 1. Current directory
    /// 2. Home directory (~/.modelinerc)
    pub fn get_rc_path() -> Option<PathBuf> {
        let current_rc = Path::new(RC_FILE_NAME);
        if current_rc.exists() {
            return Some(current_rc.to_path_buf());
        }

        if let Ok(home) = env::var("HOME") {
            let home_rc = Path::new(&home).join(RC_FILE_NAME);
            if home_rc.exists() {
                return Some(home_rc);
            }
        }

        None
    }

    /// Load and parse the RC file found by `get_rc_path`
    pub fn load_config() -> RcConfig {
        match Self::get_rc_path() {
            Some(rc_path) => Self::load_config_from(&rc_path),
            None => RcConfig::default(),
        }
    }

    pub fn load_config_from(rc_path: &Path) -> RcConfig {
        let mut config = RcConfig::default();

        match fs::read_to_string(rc_path) {
            Ok(content) => {
                tracing::debug!(path = %rc_path.display(), "loading rc file");
                Self::parse_config_content(&content, &mut config);
            }
            Err(err) => {
                tracing::warn!(path = %rc_path.display(), %err, "cannot read rc file, using defaults");
            }
        }

        config
    }

    /// Parse the content of an RC file
    pub fn parse_config_content(content: &str, config: &mut RcConfig) {
        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('"') {
                continue;
            }

            Self::parse_config_line(line, config);
        }
    }

    /// Parse a single configuration line
    fn parse_config_line(line: &str, config: &mut RcConfig) {
        // Remove inline comments
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();

        // Handle "set" commands (vim-style)
        if let Some(stripped) = line.strip_prefix("set ") {
            match stripped.trim().split_once('=') {
                Some((name, value)) => Self::set_value(name, value, config),
                None => Self::set_flag(stripped.trim(), config),
            }
        }
        // Handle direct key-value pairs
        else if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            let value = value.trim();

            match key {
                "tab_stop" | "tabstop" => Self::set_tab_stop(value, config),
                "expand_tab" | "expandtab" => config.expand_tab = Self::parse_bool(value),
                "wrap" => config.wrap = Self::parse_bool(value),
                "encoding" => Self::set_encoding(value, config),
                "modeline" => config.modeline = Self::parse_bool(value),
                "modelines" => Self::set_modelines(value, config),
                _ => tracing::debug!(key, "unknown rc setting"),
            }
        }
    }

    fn set_flag(setting: &str, config: &mut RcConfig) {
        match setting {
            "et" | "expandtab" => config.expand_tab = true,
            "noet" | "noexpandtab" => config.expand_tab = false,
            "wrap" => config.wrap = true,
            "nowrap" => config.wrap = false,
            "ml" | "modeline" => config.modeline = true,
            "noml" | "nomodeline" => config.modeline = false,
            _ => tracing::debug!(setting, "unknown rc setting"),
        }
    }

    fn set_value(name: &str, value: &str, config: &mut RcConfig) {
        match name.trim() {
            "ts" | "tabstop" => Self::set_tab_stop(value.trim(), config),
            "encoding" | "fileencoding" => Self::set_encoding(value.trim(), config),
            "mls" | "modelines" => Self::set_modelines(value.trim(), config),
            name => tracing::debug!(name, "unknown rc setting"),
        }
    }

    fn set_tab_stop(value: &str, config: &mut RcConfig) {
        if let Ok(tab_stop) = value.parse::<usize>() {
            if tab_stop > 0 && tab_stop <= 16 {
                config.tab_stop = tab_stop;
            }
        }
    }

    fn set_encoding(value: &str, config: &mut RcConfig) {
        if !value.is_empty() {
            config.encoding = value.to_string();
        }
    }

    fn set_modelines(value: &str, config: &mut RcConfig) {
        if let Ok(modelines) = value.parse::<usize>() {
            if modelines <= MAX_SCAN_LINES {
                config.modelines = modelines;
            }
        }
    }

    fn parse_bool(value: &str) -> bool {
        value == "true" || value == "1" || value == "yes"
    }

    /// Apply the host defaults to a freshly loaded document
    pub fn apply_config_to_document(document: &mut Document, config: &RcConfig) {
        document.indent_width = config.tab_stop;
        document.indent_type = if config.expand_tab {
            IndentType::Spaces
        } else {
            IndentType::Tabs
        };
        document.wrap_mode = WrapMode::from_enabled(config.wrap);

        // Loaded files keep the encoding detected from their bytes
        if document.filename.is_none() {
            document.encoding = config.encoding.clone();
        }
    }

    /// Generate a sample RC file content
    pub fn generate_sample_rc() -> String {
        r#"# modeline configuration file (.modelinerc)
# Defaults applied to every document before its modeline is read
# Lines starting with # or " are comments

# Indentation
set tabstop=4          # Tab width (1-16)
set noexpandtab        # Indent with tabs (or set expandtab)

# Display
set nowrap             # Line wrapping (or set wrap)

# Modelines
set modeline           # Honour modelines (or set nomodeline)
set modelines=50       # Lines searched for a modeline (0-50)

# Alternative key=value syntax:
# tab_stop=4
# expand_tab=false
# wrap=false
# modeline=true
# modelines=50
"#
        .to_string()
    }
}
