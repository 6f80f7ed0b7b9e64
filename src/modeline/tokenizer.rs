use super::scanner::find_prefix;

pub const DELIMITERS: [char; 3] = [':', ' ', ','];

/// Split a modeline into its option tokens.
///
/// Everything up to and including the modeline prefix is the leading field
/// (comment marker and prefix) and is dropped, as are empty fields produced
/// by runs of delimiters. A line without a prefix drops its first field.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    let options = match find_prefix(line) {
        Some((pos, prefix)) => &line[pos + prefix.len()..],
        None => line.split_once(DELIMITERS).map_or("", |(_, rest)| rest),
    };

    options.split(DELIMITERS).filter(|token| !token.is_empty())
}
