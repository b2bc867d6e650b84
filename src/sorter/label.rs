use crate::file_action::interface::validate_directory_name;
use std::fmt::{Display, Formatter};

const QUOTE_PAIRS: [(char, char); 4] = [
    ('"', '"'),
    ('\'', '\''),
    ('\u{201C}', '\u{201D}'),
    ('\u{2018}', '\u{2019}'),
];

/// One classification answer after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Animal(String),
    /// The model said "none".
    Nothing,
    /// The model said "unknown".
    Unknown,
    /// Empty, more than one word, or not usable as a directory name.
    Unusable(String),
}

impl Label {
    pub fn parse(raw: &str) -> Self {
        let normalized = normalize(raw);
        match normalized.as_str() {
            "none" => Self::Nothing,
            "unknown" => Self::Unknown,
            _ if normalized.split_whitespace().count() != 1 => Self::Unusable(normalized),
            _ if validate_directory_name(&normalized).is_err() => Self::Unusable(normalized),
            _ => Self::Animal(normalized),
        }
    }

    pub fn animal(&self) -> Option<&str> {
        match self {
            Self::Animal(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_confident(&self) -> bool {
        self.animal().is_some()
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Animal(text) | Self::Unusable(text) => write!(f, "{}", text),
            Self::Nothing => write!(f, "none"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Trims, peels one layer of matching quotes and one trailing period, lowercases.
///
/// The period may sit inside or outside the quotes.
pub fn normalize(raw: &str) -> String {
    let text = raw.trim();
    let stripped = match strip_quotes(text) {
        Some(inner) => strip_period(inner.trim()),
        None => {
            let without_period = strip_period(text);
            strip_quotes(without_period)
                .map(str::trim)
                .unwrap_or(without_period)
        }
    };
    stripped.to_lowercase()
}

fn strip_period(text: &str) -> &str {
    text.strip_suffix('.').unwrap_or(text).trim()
}

fn strip_quotes(text: &str) -> Option<&str> {
    QUOTE_PAIRS
        .iter()
        .find_map(|&(open, close)| text.strip_prefix(open)?.strip_suffix(close))
}
