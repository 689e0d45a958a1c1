use crate::error::LiteralError;
use crate::literal::{escaped_to_byte_literal, string_to_escaped_literal};
use crate::naming::{periods_to_underscores, to_json_field_name, CaseFormatter};
use crate::text::{split_path, trim_whitespace, PathParts};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    SplitPath,
    UpperCamel,
    LowerCamel,
    JsonName,
    Periods,
    Trim,
    Bytes,
    String,
}

impl Transform {
    pub fn name(&self) -> &'static str {
        match self {
            Transform::SplitPath => "split-path",
            Transform::UpperCamel => "upper-camel",
            Transform::LowerCamel => "lower-camel",
            Transform::JsonName => "json-name",
            Transform::Periods => "periods",
            Transform::Trim => "trim",
            Transform::Bytes => "bytes",
            Transform::String => "string",
        }
    }

    pub fn apply(&self, formatter: &CaseFormatter, input: &str) -> Result<Output, LiteralError> {
        let text = match self {
            Transform::SplitPath => return Ok(Output::Path(split_path(input))),
            Transform::UpperCamel => formatter.upper_camel_case(input),
            Transform::LowerCamel => formatter.lower_camel_case(input),
            Transform::JsonName => to_json_field_name(input),
            Transform::Periods => periods_to_underscores(input),
            Transform::Trim => trim_whitespace(input),
            Transform::Bytes => escaped_to_byte_literal(input)?,
            Transform::String => string_to_escaped_literal(input),
        };
        Ok(Output::Text(text))
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    Text(String),
    Path(PathParts),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Text(text) => f.write_str(text),
            Output::Path(parts) => write!(f, "{}\t{}\t{}", parts.dir, parts.base, parts.suffix),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchItem {
    pub input: String,
    pub result: Result<Output, LiteralError>,
}

#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub failed: usize,
    pub items: Vec<BatchItem>,
}

/// Apply `transform` to every input in parallel. Items come back in input
/// order, and a failure only affects its own item.
pub fn run(transform: Transform, formatter: &CaseFormatter, inputs: &[String]) -> BatchResult {
    let items: Vec<BatchItem> = inputs
        .par_iter()
        .map(|input| BatchItem {
            input: input.clone(),
            result: transform.apply(formatter, input),
        })
        .collect();

    let failed = items.iter().filter(|item| item.result.is_err()).count();
    BatchResult { failed, items }
}
