//! Property tests for the string transforms.

use proptest::prelude::*;
use protonames::{
    decode_escaped_bytes, periods_to_underscores, split_path, string_to_escaped_literal,
    to_json_field_name, to_lower_camel_case, to_upper_camel_case, trim_whitespace,
};

/// Escape raw bytes the way protoc writes `bytes` defaults.
fn protoc_escape(bytes: &[u8]) -> String {
    let mut out = String::new();
    for &b in bytes {
        match b {
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b'\\' => out.push_str("\\\\"),
            b'\'' => out.push_str("\\'"),
            b'"' => out.push_str("\\\""),
            0x20..=0x7e => out.push(b as char),
            _ => out.push_str(&format!("\\{:03o}", b)),
        }
    }
    out
}

proptest! {
    #[test]
    fn split_path_reassembles(path in ".*") {
        let parts = split_path(&path);
        prop_assert_eq!(format!("{}{}{}", parts.dir, parts.base, parts.suffix), path);
    }

    #[test]
    fn split_path_shapes(path in "[a-z./]{0,24}") {
        let parts = split_path(&path);
        prop_assert!(parts.dir.is_empty() || parts.dir.ends_with('/'));
        prop_assert!(!parts.base.contains('/'));
        if !parts.suffix.is_empty() {
            prop_assert!(parts.suffix.starts_with('.'));
            prop_assert!(!parts.suffix[1..].contains('.'));
            prop_assert!(!parts.suffix.contains('/'));
        }
    }

    #[test]
    fn decode_inverts_protoc_escaping(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let escaped = protoc_escape(&bytes);
        prop_assert_eq!(decode_escaped_bytes(&escaped).unwrap(), bytes);
    }

    #[test]
    fn snake_case_words_camel_case(words in proptest::collection::vec("[a-z]{1,8}", 1..5)) {
        let snake = words.join("_");
        let upper = to_upper_camel_case(&snake);
        prop_assert!(!upper.contains('_'));
        prop_assert_eq!(upper.to_lowercase(), words.concat());
        prop_assert_eq!(to_json_field_name(&snake).to_lowercase(), words.concat());
    }

    #[test]
    fn lower_camel_differs_only_in_first_char(s in "[A-Za-z0-9_]{0,24}") {
        let upper = to_upper_camel_case(&s);
        let lower = to_lower_camel_case(&s);
        let mut u = upper.chars();
        let mut l = lower.chars();
        prop_assert_eq!(u.next().map(|c| c.to_ascii_lowercase()), l.next());
        prop_assert_eq!(u.as_str(), l.as_str());
    }

    #[test]
    fn trim_leaves_no_edge_whitespace(s in "[ \t\na-c]{0,24}") {
        let trimmed = trim_whitespace(&s);
        prop_assert_eq!(trimmed.as_str(), s.trim_matches(|c: char| c == ' ' || c == '\t' || c == '\n'));
    }

    #[test]
    fn escaped_literal_has_no_raw_controls(s in r#"\PC*|[\x00-\x1f"\\]{0,8}"#) {
        let literal = string_to_escaped_literal(&s);
        prop_assert!(literal.starts_with('"') && literal.ends_with('"'));
        prop_assert!(!literal.chars().any(|c| (c as u32) < 0x20));
    }

    #[test]
    fn periods_replaced_in_place(s in ".*") {
        let replaced = periods_to_underscores(&s);
        prop_assert!(!replaced.contains('.'));
        prop_assert_eq!(replaced.chars().count(), s.chars().count());
    }
}
