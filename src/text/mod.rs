pub mod path;
pub mod whitespace;

pub use path::{split_path, PathParts};
pub use whitespace::trim_whitespace;
