use crate::error::{BumpError, Result};
use crate::git::Repository;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Runs a command to completion and returns its trimmed standard output.
///
/// # Arguments
/// * `dir` - Working directory for the child process
/// * `program` - Executable to run
/// * `args` - Arguments, passed through without shell interpretation
///
/// # Returns
/// * `Ok(String)` - Standard output with surrounding whitespace removed
/// * `Err` - If the process cannot be spawned or exits with a non-zero status
pub fn run(dir: &Path, program: &str, args: &[&str]) -> Result<String> {
    let command_line = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");

    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| BumpError::Command {
            command: command_line.clone(),
            code: -1,
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(BumpError::Command {
            command: command_line,
            code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Repository backed by the `git` executable on `PATH`
pub struct CommandRepository {
    dir: PathBuf,
}

impl CommandRepository {
    /// Run git commands inside `dir`
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        CommandRepository {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        run(&self.dir, "git", args)
    }
}

impl Repository for CommandRepository {
    fn merge_base(&self, left: &str, right: &str) -> Result<String> {
        self.git(&["merge-base", left, right])
    }

    fn show_file(&self, rev: &str, path: &str) -> Result<String> {
        self.git(&["show", &format!("{}:{}", rev, path)])
    }
}
