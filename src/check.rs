//! The bump check itself
//!
//! Resolves the merge-base, compares the declared versions, and rewrites the
//! descriptor with the base version's minor segment incremented. Kept free of
//! terminal output so `main` decides how findings are shown.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::descriptor;
use crate::error::Result;
use crate::git::Repository;
use crate::version::{self, Version};
use crate::warning::BumpWarning;

/// Per-run switches layered over the configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckArgs {
    /// Compute everything but leave the descriptor file untouched
    pub dry_run: bool,
}

/// Everything a run found and did
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    pub merge_base: String,
    pub base_version: String,
    pub head_version: String,
    pub new_version: Version,
    /// Head sorts after base (textually)
    pub bumped: bool,
    /// The base version tag was found and replaced
    pub replaced: bool,
    pub written: bool,
    pub warnings: Vec<BumpWarning>,
    /// Descriptor text as written (or as it would be written)
    pub contents: String,
}

/// Run the bump check against `repo`, writing the descriptor under `workdir`.
///
/// Warnings are only collected into the outcome; use [`run_check_with`] to
/// see them as they arise.
pub fn run_check<R: Repository + ?Sized>(
    repo: &R,
    config: &Config,
    args: &CheckArgs,
    workdir: &Path,
) -> Result<CheckOutcome> {
    run_check_with(repo, config, args, workdir, |_| {})
}

/// Run the bump check, handing each warning to `on_warning` as soon as it
/// is found, before any later step can fail.
///
/// # Returns
/// * `Ok(CheckOutcome)` - The check completed; a missing bump is only a warning
/// * `Err` - Git access failed, the descriptor has no single version
///   declaration, the base version is not X.Y.Z, or the write failed
pub fn run_check_with<R, F>(
    repo: &R,
    config: &Config,
    args: &CheckArgs,
    workdir: &Path,
    mut on_warning: F,
) -> Result<CheckOutcome>
where
    R: Repository + ?Sized,
    F: FnMut(&BumpWarning),
{
    let path = config.descriptor.path.as_str();
    let suffix = config.descriptor.element_suffix.as_str();

    let merge_base = repo.merge_base(&config.git.head_ref, &config.git.base_ref)?;
    let base_text = repo.show_file(&merge_base, path)?;
    let head_text = repo.show_file(&config.git.head_ref, path)?;

    let base_version = descriptor::extract_version(&base_text, suffix)?;
    let head_version = descriptor::extract_version(&head_text, suffix)?;

    let mut warnings = Vec::new();
    let mut warn = |warning: BumpWarning| {
        on_warning(&warning);
        warnings.push(warning);
    };

    let bumped = version::is_bumped(&base_version, &head_version);
    if !bumped {
        warn(BumpWarning::NotBumped {
            base: base_version.clone(),
            head: head_version.clone(),
        });
    }

    let numerically_bumped =
        version::numeric_ordering(&base_version, &head_version).map(|o| o == Ordering::Less);
    if numerically_bumped.is_some_and(|numeric| numeric != bumped) {
        warn(BumpWarning::OrderingMismatch {
            base: base_version.clone(),
            head: head_version.clone(),
        });
    }

    let new_version = version::split_version(&base_version)?.bump_minor()?;

    let (contents, replaced) = descriptor::replace_version(
        &head_text,
        &base_version,
        &version::fmt_version(&new_version),
    );
    if !replaced {
        warn(BumpWarning::SubstitutionMissed {
            path: path.to_string(),
            base: base_version.clone(),
        });
    }

    let written = if args.dry_run {
        false
    } else {
        fs::write(workdir.join(path), &contents)?;
        true
    };

    Ok(CheckOutcome {
        merge_base,
        base_version,
        head_version,
        new_version,
        bumped,
        replaced,
        written,
        warnings,
        contents,
    })
}
