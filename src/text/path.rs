use serde::Serialize;

/// A path split into directory, base name and extension.
///
/// `dir + base + suffix` always reproduces the original input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathParts {
    /// Everything up to and including the last `/`.
    pub dir: String,
    pub base: String,
    /// Empty, or `.` followed by no further `.` or `/`.
    pub suffix: String,
}

impl PathParts {
    pub fn into_tuple(self) -> (String, String, String) {
        (self.dir, self.base, self.suffix)
    }
}

/// Split `path` into its directory, base name and final extension.
pub fn split_path(path: &str) -> PathParts {
    let mut parts = PathParts::default();

    for c in path.chars() {
        match c {
            '/' => {
                parts.dir.push_str(&parts.base);
                parts.dir.push_str(&parts.suffix);
                parts.dir.push(c);
                parts.base.clear();
                parts.suffix.clear();
            }
            '.' => {
                parts.base.push_str(&parts.suffix);
                parts.suffix.clear();
                parts.suffix.push(c);
            }
            _ => parts.suffix.push(c),
        }
    }

    // A trailing fragment without a period is part of the base name.
    if !parts.suffix.starts_with('.') {
        let rest = std::mem::take(&mut parts.suffix);
        parts.base.push_str(&rest);
    }

    parts
}
