use thiserror::Error;

/// Malformed escaped byte literal.
///
/// protoc only emits `\n \r \t \\ \' \"` and three-digit octal escapes, so
/// any of these means the generator was handed input it should not trust.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("invalid octal digit {byte:#04x} at byte {offset}")]
    InvalidOctalDigit { offset: usize, byte: u8 },

    #[error("octal escape at byte {offset} encodes {value}, which does not fit in a byte")]
    OctalOutOfRange { offset: usize, value: u16 },

    #[error("unterminated escape at byte {offset}")]
    UnterminatedEscape { offset: usize },

    #[error("incomplete octal escape at byte {offset}: {missing} digit(s) missing")]
    IncompleteOctal { offset: usize, missing: u8 },
}

pub type Result<T, E = LiteralError> = std::result::Result<T, E>;
