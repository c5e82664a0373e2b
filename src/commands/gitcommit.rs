//! `gitcommit` tool — stage everything, commit, push
//!
//! The commit message is generated from the staged changes; the push
//! reuses the same credential flow as `gitpush`.

use std::path::Path;

use crate::error::Result;
use crate::services::git::GitRepo;
use crate::services::push;

pub async fn commit_and_push(root: &Path) -> Result<()> {
    println!("\nGit Commit and Push\n");

    let repo = GitRepo::discover(root)?;
    let branch = repo.current_branch()?;
    println!("Branch: {branch}");

    println!("Staging changes...");
    repo.stage_all()?;

    let changes = repo.staged_changes()?;
    if changes.is_empty() {
        println!("No changes to commit");
        return Ok(());
    }

    let message = changes.commit_message();
    println!("\nCreating commit...");
    let oid = repo.commit(&message)?;
    tracing::debug!("Created commit {oid}");
    println!("Commit created: {message}");

    println!("\nPushing to remote...");
    push::push_head(root).await?;

    println!("\nCommit and push completed!\n");
    Ok(())
}
