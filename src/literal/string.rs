/// Quote `s` as a string literal for generated source.
///
/// NUL becomes `\0`, other C0 controls become `\u{XX}` with two lower-case
/// hex digits, and `"` and `\` are backslash-escaped. Every other scalar
/// value, ASCII or not, is copied as-is.
pub fn string_to_escaped_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');

    for c in s.chars() {
        match c {
            '\0' => out.push_str("\\0"),
            '\u{1}'..='\u{1f}' => out.push_str(&format!("\\u{{{:02x}}}", c as u32)),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }

    out.push('"');
    out
}
