//! Context types for rule execution.

use crate::typequery::TypeQuery;
use std::path::{Path, PathBuf};

/// Context provided to per-file rules.
///
/// Carries the file metadata rules need to place diagnostics, plus the
/// host's type-query handle the classifier consults.
#[derive(Clone, Copy)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: &'a Path,
    /// Host type information for receiver expressions.
    pub types: &'a dyn TypeQuery,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(
        path: &'a Path,
        content: &'a str,
        relative_path: &'a Path,
        types: &'a dyn TypeQuery,
    ) -> Self {
        Self {
            path,
            content,
            relative_path,
            types,
        }
    }

    /// Returns the relative path as an owned buffer for diagnostic locations.
    #[must_use]
    pub fn relative_path_buf(&self) -> PathBuf {
        self.relative_path.to_path_buf()
    }

    /// Calculates byte offset for a given line and column.
    ///
    /// # Arguments
    ///
    /// * `line` - 1-indexed line number
    /// * `column` - 1-indexed column number
    ///
    /// # Returns
    ///
    /// Byte offset from the start of the file, or 0 if out of bounds.
    #[must_use]
    pub fn offset_for(&self, line: usize, column: usize) -> usize {
        if line == 0 {
            return 0;
        }

        let mut offset = 0;
        for (i, line_content) in self.content.lines().enumerate() {
            if i + 1 == line {
                return offset + column.saturating_sub(1);
            }
            offset += line_content.len() + 1; // +1 for newline
        }

        offset
    }
}

impl std::fmt::Debug for FileContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileContext")
            .field("path", &self.path)
            .field("relative_path", &self.relative_path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typequery::StaticTypeIndex;

    #[test]
    fn offset_calculation() {
        let content = "line1\nline2\nline3";
        let types = StaticTypeIndex::new();
        let ctx = FileContext::new(Path::new("test.rs"), content, Path::new("test.rs"), &types);

        assert_eq!(ctx.offset_for(1, 1), 0); // Start of line 1
        assert_eq!(ctx.offset_for(2, 1), 6); // Start of line 2
        assert_eq!(ctx.offset_for(2, 3), 8); // "ne" in line2
    }

    #[test]
    fn offset_for_line_zero_is_zero() {
        let types = StaticTypeIndex::new();
        let ctx = FileContext::new(Path::new("test.rs"), "abc", Path::new("test.rs"), &types);
        assert_eq!(ctx.offset_for(0, 5), 0);
    }
}
