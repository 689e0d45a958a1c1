pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod literal;
pub mod naming;
pub mod text;

pub use config::Config;
pub use error::LiteralError;
pub use literal::{decode_escaped_bytes, escaped_to_byte_literal, string_to_escaped_literal};
pub use naming::{
    periods_to_underscores, to_json_field_name, to_lower_camel_case, to_upper_camel_case,
    CaseFormatter,
};
pub use text::{split_path, trim_whitespace, PathParts};
