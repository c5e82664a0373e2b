//! Integration tests for the push preflight path
//!
//! These build a real repository on disk and exercise discovery, remote
//! and branch queries, staging, and commit-message generation the way
//! the gitcommit/gitpush tools do, without touching the network.

use std::path::Path;

use flotool::models::GitHubRemote;
use flotool::services::git::GitRepo;
use git2::Repository;
use tempfile::TempDir;

/// Create a test repository with user config and an origin remote
fn setup_repo(remote_url: &str) -> (TempDir, Repository) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let repo = Repository::init(dir.path()).expect("Failed to init repo");

    let mut config = repo.config().expect("Failed to get config");
    config
        .set_str("user.name", "Test User")
        .expect("Failed to set user.name");
    config
        .set_str("user.email", "test@example.com")
        .expect("Failed to set user.email");

    repo.remote("origin", remote_url)
        .expect("Failed to add remote");

    (dir, repo)
}

fn write_file(root: &Path, name: &str, content: &str) {
    std::fs::write(root.join(name), content).expect("Failed to write file");
}

#[test]
fn test_discover_from_subdirectory() {
    let (dir, _repo) = setup_repo("https://github.com/acme/widgets.git");
    let nested = dir.path().join("a").join("b");
    std::fs::create_dir_all(&nested).expect("Failed to create subdir");

    let repo = GitRepo::discover(&nested).expect("Discovery failed");
    assert_eq!(
        repo.workdir().canonicalize().unwrap(),
        dir.path().canonicalize().unwrap()
    );
}

#[test]
fn test_remote_url_and_identity_derivation() {
    let (dir, _repo) = setup_repo("git@github.com:acme/widgets.git");

    let repo = GitRepo::discover(dir.path()).expect("Discovery failed");
    let url = repo.remote_url("origin").expect("Remote lookup failed");
    assert_eq!(url, "git@github.com:acme/widgets.git");

    let remote = GitHubRemote::from_remote_url(&url).expect("Identity derivation failed");
    assert_eq!(remote.identity(), "acme");
    assert_eq!(remote.slug(), "acme/widgets");
}

#[test]
fn test_missing_remote_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    Repository::init(dir.path()).expect("Failed to init repo");

    let repo = GitRepo::discover(dir.path()).expect("Discovery failed");
    assert!(repo.remote_url("origin").is_err());
}

#[test]
fn test_stage_commit_and_message_generation() {
    let (dir, _repo) = setup_repo("https://github.com/acme/widgets");
    let repo = GitRepo::discover(dir.path()).expect("Discovery failed");

    write_file(dir.path(), "alpha.txt", "one");
    write_file(dir.path(), "beta.txt", "two");

    repo.stage_all().expect("Staging failed");
    let changes = repo.staged_changes().expect("Status failed");
    assert!(!changes.is_empty());
    assert_eq!(changes.added.len(), 2);
    assert_eq!(changes.commit_message(), "Add alpha.txt, beta.txt");

    repo.commit(&changes.commit_message()).expect("Commit failed");

    // The working tree is clean again after the commit
    let after = repo.staged_changes().expect("Status failed");
    assert!(after.is_empty());
}

#[test]
fn test_modified_files_reported_as_updates() {
    let (dir, _repo) = setup_repo("https://github.com/acme/widgets");
    let repo = GitRepo::discover(dir.path()).expect("Discovery failed");

    write_file(dir.path(), "alpha.txt", "one");
    repo.stage_all().expect("Staging failed");
    repo.commit("initial").expect("Commit failed");

    write_file(dir.path(), "alpha.txt", "changed");
    repo.stage_all().expect("Staging failed");

    let changes = repo.staged_changes().expect("Status failed");
    assert_eq!(changes.modified, vec!["alpha.txt"]);
    assert_eq!(changes.commit_message(), "Update alpha.txt");
}

#[test]
fn test_current_branch_after_first_commit() {
    let (dir, _repo) = setup_repo("https://github.com/acme/widgets");
    let repo = GitRepo::discover(dir.path()).expect("Discovery failed");

    write_file(dir.path(), "alpha.txt", "one");
    repo.stage_all().expect("Staging failed");
    repo.commit("initial").expect("Commit failed");

    let branch = repo.current_branch().expect("Branch lookup failed");
    assert!(branch == "main" || branch == "master");
}

#[test]
fn test_detached_head_is_an_error() {
    let (dir, raw) = setup_repo("https://github.com/acme/widgets");
    let repo = GitRepo::discover(dir.path()).expect("Discovery failed");

    write_file(dir.path(), "alpha.txt", "one");
    repo.stage_all().expect("Staging failed");
    let oid = repo.commit("initial").expect("Commit failed");

    raw.set_head_detached(oid).expect("Failed to detach HEAD");
    assert!(repo.current_branch().is_err());
}
