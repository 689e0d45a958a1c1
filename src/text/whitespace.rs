use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref WHITESPACE: HashSet<char> = [' ', '\t', '\n'].into_iter().collect();
}

pub fn is_whitespace(c: char) -> bool {
    WHITESPACE.contains(&c)
}

/// Drop leading and trailing spaces, tabs and newlines. Interior runs are
/// kept verbatim.
pub fn trim_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending = String::new();

    for c in s.chars().skip_while(|&c| is_whitespace(c)) {
        if is_whitespace(c) {
            pending.push(c);
        } else {
            out.push_str(&pending);
            pending.clear();
            out.push(c);
        }
    }

    out
}
