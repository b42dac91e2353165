// tests/integration_test.rs
use std::fs;
use std::path::Path;
use std::process::Command;

use bump_check::check::{run_check, CheckArgs};
use bump_check::config::Config;
use bump_check::git::{CommandRepository, Git2Repository, Repository};
use bump_check::version::Version;
use git2::{Oid, Repository as Git2Repo};
use tempfile::TempDir;

fn pom(version: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>org.example</groupId>
  <artifactId>demo</artifactId>
  <version>{}</version>
</project>
"#,
        version
    )
}

fn commit_file(repo: &Git2Repo, dir: &Path, name: &str, contents: &str, message: &str) -> Oid {
    fs::write(dir.join(name), contents).expect("Could not write file");

    let mut index = repo.index().expect("Could not get index");
    index
        .add_path(Path::new(name))
        .expect("Could not add file to index");
    index.write().expect("Could not write index");

    let tree_id = index.write_tree().expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");
    let sig = repo.signature().expect("Could not get sig");

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("Could not create commit")
}

/// Repository whose `origin/main` carries `base`, with one commit on top
/// changing the declared version to `head`.
fn setup_test_repo(base: &str, head: &str) -> (TempDir, Oid) {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Git2Repo::init(temp_dir.path()).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    let base_oid = commit_file(&repo, temp_dir.path(), "pom.xml", &pom(base), "Initial pom");
    repo.reference("refs/remotes/origin/main", base_oid, true, "fake remote")
        .expect("Could not create origin/main");

    commit_file(
        &repo,
        temp_dir.path(),
        "pom.xml",
        &pom(head),
        "feat: branch work",
    );

    (temp_dir, base_oid)
}

#[test]
fn test_bump_check_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_bump-check"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("bump-check"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_bump_check_version_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_bump-check"))
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("bump-check "));
}

#[test]
fn test_git2_backend_reads_history() {
    let (temp_dir, base_oid) = setup_test_repo("1.2.3", "1.2.3");
    let repo = Git2Repository::open(temp_dir.path()).unwrap();

    let merge_base = repo.merge_base("HEAD", "origin/main").unwrap();
    assert_eq!(merge_base, base_oid.to_string());

    let text = repo.show_file(&merge_base, "pom.xml").unwrap();
    assert!(text.contains("<version>1.2.3</version>"));
    assert!(!text.ends_with('\n'));

    assert!(repo.show_file("HEAD", "missing.xml").is_err());
}

#[test]
fn test_git2_backend_not_bumped() {
    let (temp_dir, _) = setup_test_repo("1.2.3", "1.2.3");
    let repo = Git2Repository::open(temp_dir.path()).unwrap();

    let outcome = run_check(
        &repo,
        &Config::default(),
        &CheckArgs::default(),
        temp_dir.path(),
    )
    .unwrap();

    assert!(!outcome.bumped);
    assert_eq!(outcome.new_version, Version::new(1, 3, 3));

    let written = fs::read_to_string(temp_dir.path().join("pom.xml")).unwrap();
    assert!(written.contains("<version>1.3.3</version>"));
}

#[test]
fn test_git2_backend_bumped_leaves_version_alone() {
    let (temp_dir, _) = setup_test_repo("1.2.3", "1.3.0");
    let repo = Git2Repository::open(temp_dir.path()).unwrap();

    let outcome = run_check(
        &repo,
        &Config::default(),
        &CheckArgs::default(),
        temp_dir.path(),
    )
    .unwrap();

    assert!(outcome.bumped);
    assert!(!outcome.replaced);

    let written = fs::read_to_string(temp_dir.path().join("pom.xml")).unwrap();
    assert_eq!(written, pom("1.3.0").trim());
}

#[test]
fn test_git2_backend_missing_base_ref() {
    let (temp_dir, _) = setup_test_repo("1.2.3", "1.2.3");
    let repo = Git2Repository::open(temp_dir.path()).unwrap();

    assert!(repo.merge_base("HEAD", "origin/release").is_err());
}

#[test]
fn test_command_backend_matches_git2() {
    let (temp_dir, base_oid) = setup_test_repo("0.4.1", "0.4.1");
    let repo = CommandRepository::new(temp_dir.path());

    let merge_base = repo.merge_base("HEAD", "origin/main").unwrap();
    assert_eq!(merge_base, base_oid.to_string());

    let cli_text = repo.show_file("HEAD", "pom.xml").unwrap();
    let git2_text = Git2Repository::open(temp_dir.path())
        .unwrap()
        .show_file("HEAD", "pom.xml")
        .unwrap();
    assert_eq!(cli_text, git2_text);
}

#[test]
fn test_binary_rewrites_pom() {
    let (temp_dir, _) = setup_test_repo("1.2.3", "1.2.3");

    let output = Command::new(env!("CARGO_BIN_EXE_bump-check"))
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Version should be bumped"));

    let written = fs::read_to_string(temp_dir.path().join("pom.xml")).unwrap();
    assert!(written.contains("<version>1.3.3</version>"));
}

#[test]
fn test_binary_warns_before_base_parse_error() {
    let (temp_dir, _) = setup_test_repo("1.a.3", "1.2.3");

    let output = Command::new(env!("CARGO_BIN_EXE_bump-check"))
        .args(["--backend", "libgit2"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    let warning_at = stderr
        .find("Version should be bumped: base is 1.a.3, head is 1.2.3")
        .expect("warning missing from stderr");
    let error_at = stderr
        .find("Invalid segment 'a' in version '1.a.3'")
        .expect("error missing from stderr");
    assert!(warning_at < error_at);

    let on_disk = fs::read_to_string(temp_dir.path().join("pom.xml")).unwrap();
    assert_eq!(on_disk, pom("1.2.3"));
}

#[test]
fn test_binary_strict_fails_after_writing() {
    let (temp_dir, _) = setup_test_repo("2.0.0", "2.0.0");

    let output = Command::new(env!("CARGO_BIN_EXE_bump-check"))
        .args(["--strict", "--backend", "libgit2"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let written = fs::read_to_string(temp_dir.path().join("pom.xml")).unwrap();
    assert!(written.contains("<version>2.1.0</version>"));
}

#[test]
fn test_binary_dry_run_keeps_file() {
    let (temp_dir, _) = setup_test_repo("1.2.3", "1.2.3");

    let output = Command::new(env!("CARGO_BIN_EXE_bump-check"))
        .args(["--dry-run", "--backend", "libgit2"])
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let on_disk = fs::read_to_string(temp_dir.path().join("pom.xml")).unwrap();
    assert_eq!(on_disk, pom("1.2.3"));
}

#[test]
fn test_binary_fails_outside_repository() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("bumpcheck.toml"),
        "[git]\nbase_ref = \"does/not-exist\"\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_bump-check"))
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ERROR"));
}
