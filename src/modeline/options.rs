use crate::document_model::{EditorDocument, IndentType, WrapMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// No argument, handler receives true
    True,
    /// No argument, handler receives false
    False,
    Integer,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument<'a> {
    Flag(bool),
    Integer(usize),
    Text(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    ExpandTab,
    TabStop,
    Wrap,
    Encoding,
}

#[derive(Debug)]
pub struct OptionSpec {
    pub name: &'static str,
    pub alias: Option<&'static str>,
    pub kind: ArgKind,
    pub handler: Handler,
}

impl OptionSpec {
    pub fn matches(&self, key: &str) -> bool {
        self.name.eq_ignore_ascii_case(key)
            || self.alias.is_some_and(|alias| alias.eq_ignore_ascii_case(key))
    }
}

pub const OPTIONS: &[OptionSpec] = &[
    OptionSpec { name: "expandtab", alias: Some("et"), kind: ArgKind::True, handler: Handler::ExpandTab },
    OptionSpec { name: "noexpandtab", alias: None, kind: ArgKind::False, handler: Handler::ExpandTab },
    OptionSpec { name: "tabstop", alias: Some("ts"), kind: ArgKind::Integer, handler: Handler::TabStop },
    OptionSpec { name: "softtabstop", alias: Some("sts"), kind: ArgKind::Integer, handler: Handler::TabStop },
    OptionSpec { name: "shiftwidth", alias: Some("sw"), kind: ArgKind::Integer, handler: Handler::TabStop },
    OptionSpec { name: "wrap", alias: None, kind: ArgKind::True, handler: Handler::Wrap },
    OptionSpec { name: "nowrap", alias: None, kind: ArgKind::False, handler: Handler::Wrap },
    OptionSpec { name: "fileencoding", alias: Some("encoding"), kind: ArgKind::Text, handler: Handler::Encoding },
];

/// First table entry whose name or alias matches `key`, ignoring ASCII case
pub fn lookup(key: &str) -> Option<&'static OptionSpec> {
    OPTIONS.iter().find(|spec| spec.matches(key))
}

impl Handler {
    pub fn apply<D: EditorDocument + ?Sized>(self, doc: &mut D, argument: Argument<'_>) {
        match (self, argument) {
            (Handler::ExpandTab, Argument::Flag(expand)) => {
                tracing::debug!(expand, "opt_expand_tab");
                doc.set_indent_type(if expand { IndentType::Spaces } else { IndentType::Tabs });
            }
            (Handler::TabStop, Argument::Integer(width)) => {
                tracing::debug!(width, "opt_tab_stop");
                doc.set_indent_width(width);
                // Re-apply the current type so only the width changes
                let indent_type = doc.indent_type();
                doc.set_indent_type(indent_type);
            }
            (Handler::Wrap, Argument::Flag(wrap)) => {
                tracing::debug!(wrap, "opt_wrap");
                doc.set_wrap_mode(WrapMode::from_enabled(wrap));
            }
            (Handler::Encoding, Argument::Text(encoding)) => {
                tracing::debug!(encoding, "opt_enc");
                doc.set_encoding(encoding);
            }
            (handler, argument) => {
                tracing::warn!(?handler, ?argument, "argument does not fit handler");
            }
        }
    }
}
