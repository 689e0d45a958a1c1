// Identifier tokenizer used by the camel-case formatters.
//
// The scan mirrors how protoc-style generators split names: digit runs,
// upper-case runs and lower-case continuations each form one word, and
// underscores only separate.

use std::mem;

/// Separator marker emitted for doubled and trailing underscores.
pub const SEPARATOR: &str = "_";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Upper,
    Lower,
    Other,
}

impl CharClass {
    /// Letters are classed by their case mappings: a char that changes when
    /// lower-cased is upper (titlecase included), one that changes when
    /// upper-cased is lower.
    pub fn of(c: char) -> Self {
        if c.is_ascii_digit() {
            CharClass::Digit
        } else if changes_under(c, c.to_lowercase()) {
            CharClass::Upper
        } else if changes_under(c, c.to_uppercase()) {
            CharClass::Lower
        } else {
            CharClass::Other
        }
    }
}

fn changes_under(c: char, mapped: impl Iterator<Item = char>) -> bool {
    !mapped.eq(std::iter::once(c))
}

/// Incremental tokenizer state.
///
/// `tokens` always starts with the synthetic seed pushed by the first
/// boundary; `finish` drops it.
#[derive(Debug, Default)]
pub struct Tokenizer {
    tokens: Vec<String>,
    current: String,
    last: Option<char>,
    last_class: Option<CharClass>,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one character through the scan.
    pub fn push(&mut self, c: char) {
        let class = CharClass::of(c);

        match class {
            CharClass::Digit => {
                if self.last_class == Some(CharClass::Digit) {
                    self.current.push(c);
                } else {
                    self.start(c.to_string());
                }
            }
            CharClass::Upper => {
                if self.last_class == Some(CharClass::Upper) {
                    self.current.extend(c.to_lowercase());
                } else {
                    self.start(c.to_lowercase().collect());
                }
            }
            CharClass::Lower => {
                if matches!(self.last_class, Some(CharClass::Upper | CharClass::Lower)) {
                    self.current.push(c);
                } else {
                    self.start(c.to_string());
                }
            }
            CharClass::Other => {
                if self.last == Some('_') {
                    self.start(SEPARATOR.to_string());
                }
                if c != '_' {
                    self.start(c.to_string());
                }
            }
        }

        self.last = Some(c);
        self.last_class = Some(class);
    }

    /// Close the scan and return the word list without the seed entry.
    pub fn finish(mut self) -> Vec<String> {
        let current = mem::take(&mut self.current);
        self.tokens.push(current);
        if self.last == Some('_') {
            self.tokens.push(SEPARATOR.to_string());
        }
        self.tokens.into_iter().skip(1).collect()
    }

    fn start(&mut self, seed: String) {
        let closed = mem::replace(&mut self.current, seed);
        self.tokens.push(closed);
    }
}

/// Split an identifier into lower-case word fragments.
pub fn tokenize(identifier: &str) -> Vec<String> {
    let mut tokenizer = Tokenizer::new();
    for c in identifier.chars() {
        tokenizer.push(c);
    }
    tokenizer.finish()
}
