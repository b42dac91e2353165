use crate::error::{BumpError, Result};
use std::cmp::Ordering;
use std::fmt;

/// Version declared in a build descriptor (major.minor.patch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Increment the minor segment, leaving major and patch untouched.
    ///
    /// Unlike a conventional semver minor bump, the patch segment is not
    /// reset: `1.2.3` becomes `1.3.3`. Fails when minor is already `u64::MAX`.
    pub fn bump_minor(&self) -> Result<Self> {
        let minor = self.minor.checked_add(1).ok_or_else(|| {
            BumpError::version(format!("Minor segment of {} cannot be incremented", self))
        })?;

        Ok(Version {
            major: self.major,
            minor,
            patch: self.patch,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Splits a dotted version string into its integer segments.
///
/// Segments are `u64`, so values above 18446744073709551615 are rejected
/// as invalid rather than parsed.
///
/// # Arguments
/// * `text` - Version text as found in the descriptor (e.g. "1.2.3")
///
/// # Returns
/// * `Ok(Version)` - All three segments parsed
/// * `Err` - If a segment is not a non-negative integer or the segment count is not three
pub fn split_version(text: &str) -> Result<Version> {
    let segments = text
        .split('.')
        .map(|segment| {
            segment.parse::<u64>().map_err(|_| {
                BumpError::version(format!(
                    "Invalid segment '{}' in version '{}'",
                    segment, text
                ))
            })
        })
        .collect::<Result<Vec<u64>>>()?;

    match segments.as_slice() {
        [major, minor, patch] => Ok(Version::new(*major, *minor, *patch)),
        _ => Err(BumpError::version(format!(
            "Invalid version format: '{}' - expected X.Y.Z",
            text
        ))),
    }
}

/// Joins the segments of a version back into its dotted form.
pub fn fmt_version(version: &Version) -> String {
    version.to_string()
}

/// Whether `head` counts as a bump over `base`.
///
/// The comparison is textual, so "1.10.0" sorts before "1.9.0".
/// [`numeric_ordering`] reports when that disagrees with semver.
pub fn is_bumped(base: &str, head: &str) -> bool {
    base < head
}

/// Semver ordering of two version strings, if both parse.
pub fn numeric_ordering(base: &str, head: &str) -> Option<Ordering> {
    let base = semver::Version::parse(base).ok()?;
    let head = semver::Version::parse(head).ok()?;
    Some(base.cmp(&head))
}
