pub mod bytes;
pub mod string;

pub use bytes::{decode_escaped_bytes, escaped_to_byte_literal, DecodeState};
pub use string::string_to_escaped_literal;
