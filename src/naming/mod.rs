pub mod tokenizer;

use lazy_static::lazy_static;
use std::collections::HashSet;

pub use tokenizer::{tokenize, CharClass, Tokenizer};

lazy_static! {
    /// Words rendered fully upper-cased in camel-case output.
    pub static ref DEFAULT_INITIALISMS: HashSet<String> = ["url", "http", "https"]
        .iter()
        .map(|w| w.to_string())
        .collect();

    static ref DEFAULT_FORMATTER: CaseFormatter = CaseFormatter::default();
}

/// Recomposes tokenized identifiers into camel-case conventions.
#[derive(Debug, Clone)]
pub struct CaseFormatter {
    initialisms: HashSet<String>,
}

impl Default for CaseFormatter {
    fn default() -> Self {
        Self {
            initialisms: DEFAULT_INITIALISMS.clone(),
        }
    }
}

impl CaseFormatter {
    /// Built-in initialisms plus `extra`; entries are matched lower-case.
    pub fn with_initialisms<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut formatter = Self::default();
        formatter
            .initialisms
            .extend(extra.into_iter().map(|w| w.as_ref().to_lowercase()));
        formatter
    }

    pub fn is_initialism(&self, word: &str) -> bool {
        self.initialisms.contains(word)
    }

    pub fn upper_camel_case(&self, identifier: &str) -> String {
        let mut out = String::with_capacity(identifier.len());
        for word in tokenize(identifier) {
            if self.is_initialism(&word) {
                out.push_str(&word.to_uppercase());
            } else {
                out.push_str(&uppercase_first(&word));
            }
        }
        out
    }

    /// Upper camel case with only the first character of the result lowered,
    /// so a leading initialism keeps the rest of its capitals (`hTTPServer`).
    pub fn lower_camel_case(&self, identifier: &str) -> String {
        lowercase_first(&self.upper_camel_case(identifier))
    }
}

pub fn to_upper_camel_case(identifier: &str) -> String {
    DEFAULT_FORMATTER.upper_camel_case(identifier)
}

pub fn to_lower_camel_case(identifier: &str) -> String {
    DEFAULT_FORMATTER.lower_camel_case(identifier)
}

/// JSON field name as protoc derives it: underscores are dropped and
/// capitalize the following character, and the first emitted character is
/// always lower-cased. Nothing else changes case.
pub fn to_json_field_name(identifier: &str) -> String {
    let mut result = String::with_capacity(identifier.len());
    let mut capitalize_next = false;

    for c in identifier.chars() {
        if c == '_' {
            capitalize_next = true;
        } else if result.is_empty() {
            result.extend(c.to_lowercase());
            capitalize_next = false;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

pub fn periods_to_underscores(s: &str) -> String {
    s.replace('.', "_")
}

fn uppercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
