//! Source-location capture for transaction labels.

use std::fmt;
use std::path::Path;

/// Returns the file-name component of a path, or the path itself if it has
/// none.
pub fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}

/// The source location a report was captured at.
///
/// Usually produced by [`call_site!`](crate::call_site); `CallSite::new`
/// exists for callers that forward a location from somewhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    function: &'static str,
}

impl CallSite {
    /// Creates a call site from explicit location data.
    pub fn new(file: &'static str, line: u32, function: &'static str) -> Self {
        CallSite {
            file,
            line,
            function,
        }
    }

    /// The file the report was captured in.
    pub fn file(&self) -> &'static str {
        self.file
    }

    /// The line the report was captured at.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The name of the enclosing function.
    pub fn function(&self) -> &'static str {
        self.function
    }

    /// The transaction label for this location.
    ///
    /// Only the file name of the path is kept, so a capture in
    /// `/a/b/main.rs` line 42 inside `main` is labeled `main.rs:main:42`.
    pub fn transaction(&self) -> String {
        format!("{}:{}:{}", basename(self.file), self.function, self.line)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.transaction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_uses_file_name_only() {
        let site = CallSite::new("/a/b/main.rs", 42, "main");
        assert_eq!(site.transaction(), "main.rs:main:42");
    }

    #[test]
    fn transaction_keeps_bare_file_names() {
        let site = CallSite::new("main.rs", 7, "handler");
        assert_eq!(site.transaction(), "main.rs:handler:7");
    }

    #[test]
    fn macro_captures_enclosing_function() {
        let site = crate::call_site!();
        assert_eq!(site.function(), "macro_captures_enclosing_function");
        assert!(site.file().ends_with("callsite.rs"));
        assert!(site.line() > 0);
    }

    #[test]
    fn macro_resolves_through_closures() {
        let site = (|| crate::call_site!())();
        assert_eq!(site.function(), "macro_resolves_through_closures");
    }
}
