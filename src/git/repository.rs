use crate::error::{BumpError, Result};
use git2::{Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    fn commit_oid(&self, rev: &str) -> Result<Oid> {
        let commit = self.repo.revparse_single(rev)?.peel_to_commit()?;

        Ok(commit.id())
    }
}

impl super::Repository for Git2Repository {
    fn merge_base(&self, left: &str, right: &str) -> Result<String> {
        let oid = self
            .repo
            .merge_base(self.commit_oid(left)?, self.commit_oid(right)?)?;

        Ok(oid.to_string())
    }

    fn show_file(&self, rev: &str, path: &str) -> Result<String> {
        let tree = self
            .repo
            .find_commit(self.commit_oid(rev)?)?
            .tree()?;

        let entry = tree.get_path(Path::new(path)).map_err(|e| {
            BumpError::descriptor(format!("'{}' does not exist at '{}': {}", path, rev, e))
        })?;

        let blob = entry.to_object(&self.repo)?.peel_to_blob()?;
        let text = std::str::from_utf8(blob.content()).map_err(|e| {
            BumpError::descriptor(format!("'{}' at '{}' is not UTF-8: {}", path, rev, e))
        })?;

        Ok(text.trim().to_string())
    }
}
