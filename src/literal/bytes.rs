// Decoder for the C-escaped byte strings protoc writes into descriptors
// (default values of `bytes` fields).

use crate::error::{LiteralError, Result};
use tracing::trace;

/// Scanner state between two input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeState {
    Normal,
    /// A backslash was read at `start`.
    Escape { start: usize },
    /// Inside `\NNN`: `remaining` digits still to come.
    Octal { start: usize, remaining: u8, value: u16 },
}

impl DecodeState {
    /// Advance by one input byte at `offset`, returning the decoded byte if
    /// this transition completes one.
    pub fn step(self, offset: usize, byte: u8) -> Result<(Self, Option<u8>)> {
        match self {
            DecodeState::Normal if byte == b'\\' => {
                Ok((DecodeState::Escape { start: offset }, None))
            }
            DecodeState::Normal => Ok((DecodeState::Normal, Some(byte))),
            DecodeState::Escape { start } => match byte {
                b'n' => Ok((DecodeState::Normal, Some(b'\n'))),
                b'r' => Ok((DecodeState::Normal, Some(b'\r'))),
                b't' => Ok((DecodeState::Normal, Some(b'\t'))),
                b'0'..=b'7' => Ok((
                    DecodeState::Octal {
                        start,
                        remaining: 2,
                        value: u16::from(byte - b'0'),
                    },
                    None,
                )),
                other => Ok((DecodeState::Normal, Some(other))),
            },
            DecodeState::Octal {
                start,
                remaining,
                value,
            } => {
                if !(b'0'..=b'7').contains(&byte) {
                    return Err(LiteralError::InvalidOctalDigit { offset, byte });
                }
                let value = (value << 3) | u16::from(byte - b'0');
                if remaining == 1 {
                    // Three octal digits reach 0o777.
                    let byte = u8::try_from(value)
                        .map_err(|_| LiteralError::OctalOutOfRange { offset: start, value })?;
                    Ok((DecodeState::Normal, Some(byte)))
                } else {
                    Ok((
                        DecodeState::Octal {
                            start,
                            remaining: remaining - 1,
                            value,
                        },
                        None,
                    ))
                }
            }
        }
    }

    /// Check that the input may end in this state.
    pub fn finish(self) -> Result<()> {
        match self {
            DecodeState::Normal => Ok(()),
            DecodeState::Escape { start } => Err(LiteralError::UnterminatedEscape { offset: start }),
            DecodeState::Octal {
                start, remaining, ..
            } => Err(LiteralError::IncompleteOctal {
                offset: start,
                missing: remaining,
            }),
        }
    }
}

/// Decode a protoc-escaped byte string into raw bytes.
pub fn decode_escaped_bytes(s: &str) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(s.len());
    let mut state = DecodeState::Normal;

    for (offset, &byte) in s.as_bytes().iter().enumerate() {
        let (next, emitted) = state.step(offset, byte).inspect_err(|e| {
            trace!(error = %e, "rejecting escaped byte literal");
        })?;
        out.extend(emitted);
        state = next;
    }

    state.finish().inspect_err(|e| {
        trace!(error = %e, "rejecting escaped byte literal");
    })?;
    Ok(out)
}

/// Render a protoc-escaped byte string as a bracketed list of decimal byte
/// values, e.g. `[104, 105]`.
pub fn escaped_to_byte_literal(s: &str) -> Result<String> {
    let bytes = decode_escaped_bytes(s)?;
    let values = bytes
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("[{}]", values))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_escaped_bytes() {
        assert_eq!(escaped_to_byte_literal(r"a\n\101").unwrap(), "[97, 10, 65]");
        assert_eq!(escaped_to_byte_literal("hi").unwrap(), "[104, 105]");
        assert_eq!(escaped_to_byte_literal(r"\r\t").unwrap(), "[13, 9]");
        assert_eq!(escaped_to_byte_literal("").unwrap(), "[]");
    }

    #[test]
    fn test_self_escapes_map_to_own_code() {
        assert_eq!(
            decode_escaped_bytes(r#"\\\'\""#).unwrap(),
            vec![b'\\', b'\'', b'"']
        );
        // protoc never emits `\q`, but unknown escapes fall back to the byte.
        assert_eq!(decode_escaped_bytes(r"\q").unwrap(), vec![b'q']);
    }

    #[test]
    fn test_octal_escapes() {
        assert_eq!(decode_escaped_bytes(r"\000\377").unwrap(), vec![0, 255]);
        assert_eq!(decode_escaped_bytes(r"\0011").unwrap(), vec![1, b'1']);
    }

    #[test]
    fn test_octal_above_byte_range() {
        assert_eq!(
            decode_escaped_bytes(r"a\400"),
            Err(LiteralError::OctalOutOfRange { offset: 1, value: 0o400 })
        );
        assert_eq!(
            decode_escaped_bytes(r"\777"),
            Err(LiteralError::OctalOutOfRange { offset: 0, value: 0o777 })
        );
        assert_eq!(decode_escaped_bytes(r"a\377").unwrap(), vec![b'a', 255]);
    }

    #[test]
    fn test_non_ascii_is_utf8_encoded() {
        assert_eq!(escaped_to_byte_literal("é").unwrap(), "[195, 169]");
    }

    #[test]
    fn test_invalid_octal_digit() {
        assert_eq!(
            decode_escaped_bytes(r"\18"),
            Err(LiteralError::InvalidOctalDigit { offset: 2, byte: b'8' })
        );
        assert_eq!(
            escaped_to_byte_literal(r"ab\1x9"),
            Err(LiteralError::InvalidOctalDigit { offset: 4, byte: b'x' })
        );
    }

    #[test]
    fn test_truncated_input() {
        assert_eq!(
            decode_escaped_bytes(r"abc\"),
            Err(LiteralError::UnterminatedEscape { offset: 3 })
        );
        assert_eq!(
            decode_escaped_bytes(r"\12"),
            Err(LiteralError::IncompleteOctal { offset: 0, missing: 1 })
        );
        assert_eq!(
            decode_escaped_bytes(r"x\1"),
            Err(LiteralError::IncompleteOctal { offset: 1, missing: 2 })
        );
    }

    #[test]
    fn test_state_transitions() {
        let (state, out) = DecodeState::Normal.step(0, b'\\').unwrap();
        assert_eq!(state, DecodeState::Escape { start: 0 });
        assert_eq!(out, None);

        let (state, out) = state.step(1, b'1').unwrap();
        assert_eq!(
            state,
            DecodeState::Octal { start: 0, remaining: 2, value: 1 }
        );
        assert_eq!(out, None);

        let (state, _) = state.step(2, b'0').unwrap();
        let (state, out) = state.step(3, b'1').unwrap();
        assert_eq!(state, DecodeState::Normal);
        assert_eq!(out, Some(65));
        assert!(state.finish().is_ok());

        let (state, out) = DecodeState::Escape { start: 0 }.step(1, b'n').unwrap();
        assert_eq!((state, out), (DecodeState::Normal, Some(10)));
    }
}
