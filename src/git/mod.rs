//! Git access for the bump check
//!
//! The check needs two things from version control: the merge-base of two
//! revisions and the contents of a file at a revision. The [Repository]
//! trait covers exactly that, with these implementations:
//!
//! - [command::CommandRepository]: shells out to the `git` executable
//! - [repository::Git2Repository]: reads the object database via `git2`
//! - [mock::MockRepository]: canned answers for tests
//!
//! ```rust
//! # use bump_check::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> bump_check::Result<()> {
//! let base = repo.merge_base("HEAD", "origin/main")?;
//! let pom = repo.show_file(&base, "pom.xml")?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod mock;
pub mod repository;

pub use command::{run, CommandRepository};
pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Read-only view of the history the check compares.
///
/// ## Error Handling
///
/// Implementations map their underlying failures (non-zero `git` exits,
/// `git2::Error`) to [crate::error::BumpError]; every failure is fatal to
/// the check.
pub trait Repository {
    /// Resolve the best common ancestor of two revisions
    ///
    /// # Arguments
    /// * `left` - First revision (e.g. "HEAD")
    /// * `right` - Second revision (e.g. "origin/main")
    ///
    /// # Returns
    /// * `Ok(String)` - Full hex id of the merge-base commit
    /// * `Err` - If either revision is unknown or the histories are unrelated
    fn merge_base(&self, left: &str, right: &str) -> Result<String>;

    /// Read a file as it exists at a revision
    ///
    /// Contents are returned with surrounding whitespace trimmed.
    ///
    /// # Arguments
    /// * `rev` - Any revision expression
    /// * `path` - Path relative to the repository root
    fn show_file(&self, rev: &str, path: &str) -> Result<String>;
}
