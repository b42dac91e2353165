use crate::error::{BumpError, Result};
use crate::git::Repository;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    merge_bases: HashMap<(String, String), String>,
    files: HashMap<(String, String), String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            merge_bases: HashMap::new(),
            files: HashMap::new(),
        }
    }

    /// Record the merge-base answered for `left` and `right` (either order)
    pub fn set_merge_base(
        &mut self,
        left: impl Into<String>,
        right: impl Into<String>,
        base: impl Into<String>,
    ) {
        let (left, right, base) = (left.into(), right.into(), base.into());
        self.merge_bases
            .insert((right.clone(), left.clone()), base.clone());
        self.merge_bases.insert((left, right), base);
    }

    /// Add file contents at a revision
    pub fn add_file(
        &mut self,
        rev: impl Into<String>,
        path: impl Into<String>,
        contents: impl Into<String>,
    ) {
        self.files
            .insert((rev.into(), path.into()), contents.into());
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn merge_base(&self, left: &str, right: &str) -> Result<String> {
        self.merge_bases
            .get(&(left.to_string(), right.to_string()))
            .cloned()
            .ok_or_else(|| BumpError::Command {
                command: format!("git merge-base {} {}", left, right),
                code: 1,
                stderr: String::new(),
            })
    }

    fn show_file(&self, rev: &str, path: &str) -> Result<String> {
        self.files
            .get(&(rev.to_string(), path.to_string()))
            .map(|contents| contents.trim().to_string())
            .ok_or_else(|| BumpError::Command {
                command: format!("git show {}:{}", rev, path),
                code: 128,
                stderr: format!("fatal: path '{}' does not exist in '{}'", path, rev),
            })
    }
}
