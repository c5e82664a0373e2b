//! Git repository access
//!
//! Read-side and commit-side operations go through libgit2; only the
//! push itself shells out (see `services::push`) so the remote's stderr
//! can be surfaced to the caller.

use std::path::{Path, PathBuf};

use git2::{IndexAddOption, Repository, Status, StatusOptions};

use crate::error::{FlotoolError, Result};

/// Working-tree changes grouped for commit-message generation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSummary {
    pub added: Vec<String>,
    pub modified: Vec<String>,
}

impl ChangeSummary {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.modified.is_empty()
    }

    /// Build a one-line commit message: "Add a, b, c and N more; Update x"
    pub fn commit_message(&self) -> String {
        fn clause(verb: &str, files: &[String]) -> Option<String> {
            if files.is_empty() {
                return None;
            }
            let mut text = format!("{} {}", verb, files[..files.len().min(3)].join(", "));
            if files.len() > 3 {
                text.push_str(&format!(" and {} more", files.len() - 3));
            }
            Some(text)
        }

        let parts: Vec<String> = [
            clause("Add", &self.added),
            clause("Update", &self.modified),
        ]
        .into_iter()
        .flatten()
        .collect();

        if parts.is_empty() {
            "Update files".to_string()
        } else {
            parts.join("; ")
        }
    }
}

/// A discovered git repository rooted at the working directory
pub struct GitRepo {
    repo: Repository,
    workdir: PathBuf,
}

impl GitRepo {
    /// Discover the repository containing `path`
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = Repository::discover(path)
            .map_err(|_| FlotoolError::NotARepository(path.display().to_string()))?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| FlotoolError::NotARepository(path.display().to_string()))?
            .to_path_buf();
        Ok(Self { repo, workdir })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// URL of the named remote
    pub fn remote_url(&self, name: &str) -> Result<String> {
        let remote = self
            .repo
            .find_remote(name)
            .map_err(|_| FlotoolError::RemoteNotFound(name.to_string()))?;
        remote
            .url()
            .map(|s| s.to_string())
            .ok_or_else(|| FlotoolError::RemoteNotFound(name.to_string()))
    }

    /// Short name of the current branch; detached HEAD is an error
    pub fn current_branch(&self) -> Result<String> {
        let head = self.repo.head().map_err(|_| FlotoolError::DetachedHead)?;
        if !head.is_branch() {
            return Err(FlotoolError::DetachedHead);
        }
        head.shorthand()
            .map(|s| s.to_string())
            .ok_or(FlotoolError::DetachedHead)
    }

    /// Stage every change in the working tree (the `git add -A` analogue)
    pub fn stage_all(&self) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_all(["*"], IndexAddOption::DEFAULT, None)?;
        // add_all does not record deletions; update_all does
        index.update_all(["*"], None)?;
        index.write()?;
        Ok(())
    }

    /// Summarize staged changes for commit-message generation
    pub fn staged_changes(&self) -> Result<ChangeSummary> {
        let mut options = StatusOptions::new();
        options.include_untracked(true);

        let statuses = self.repo.statuses(Some(&mut options))?;
        let mut summary = ChangeSummary::default();

        for entry in statuses.iter() {
            let Some(path) = entry.path() else { continue };
            let status = entry.status();

            if status.intersects(Status::INDEX_NEW) {
                summary.added.push(path.to_string());
            } else if status.intersects(
                Status::INDEX_MODIFIED | Status::INDEX_RENAMED | Status::INDEX_TYPECHANGE | Status::INDEX_DELETED,
            ) {
                summary.modified.push(path.to_string());
            }
        }

        Ok(summary)
    }

    /// Create a commit of the current index on HEAD
    pub fn commit(&self, message: &str) -> Result<git2::Oid> {
        let signature = self.repo.signature()?;
        let mut index = self.repo.index()?;
        let tree_oid = index.write_tree()?;
        let tree = self.repo.find_tree(tree_oid)?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            // Unborn branch: first commit has no parent
            Err(_) => None,
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;
        Ok(oid)
    }
}
