//! Tool registry and dispatch
//!
//! The registry is an immutable mapping built at startup; dispatch is a
//! match over an enumerated tool identifier, so a registered name that
//! does not resolve to a function cannot exist. Name-based lookup only
//! happens once, at the CLI boundary.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::commands;
use crate::error::{FlotoolError, Result};

/// Statically registered tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Repomap,
    MobileFix,
    GitPush,
    GitCommit,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Repomap, Tool::MobileFix, Tool::GitPush, Tool::GitCommit];

    /// One-line summary shown by the tool listing
    pub fn summary(&self) -> &'static str {
        match self {
            Tool::Repomap => {
                "Generate/update AIDER_REPOMAP.md with components, functions, hooks, CSS classes"
            }
            Tool::MobileFix => {
                "Apply mobile UX fixes (viewport, 100dvh, safe-area, header blur)"
            }
            Tool::GitPush => "Push changes to remote via auth proxy with GitHub PAT",
            Tool::GitCommit => "Stage all changes, commit, and push to remote using gitpush",
        }
    }

    /// Source file path, relative to the crate root
    pub fn source_path(&self) -> &'static str {
        match self {
            Tool::Repomap => "src/commands/repomap.rs",
            Tool::MobileFix => "src/commands/mobile_fix.rs",
            Tool::GitPush => "src/commands/gitpush.rs",
            Tool::GitCommit => "src/commands/gitcommit.rs",
        }
    }

    /// Implementation source, embedded so `read` works from any binary
    pub fn source(&self) -> &'static str {
        match self {
            Tool::Repomap => include_str!("commands/repomap.rs"),
            Tool::MobileFix => include_str!("commands/mobile_fix.rs"),
            Tool::GitPush => include_str!("commands/gitpush.rs"),
            Tool::GitCommit => include_str!("commands/gitcommit.rs"),
        }
    }

    /// Execute the tool against a repo root
    pub async fn run(&self, root: &Path) -> Result<()> {
        match self {
            Tool::Repomap => commands::repomap::generate_repomap(root),
            Tool::MobileFix => commands::mobile_fix::apply_mobile_fixes(root),
            Tool::GitPush => commands::gitpush::push_to_remote(root).await,
            Tool::GitCommit => commands::gitcommit::commit_and_push(root).await,
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tool::Repomap => write!(f, "repomap"),
            Tool::MobileFix => write!(f, "mobile-fix"),
            Tool::GitPush => write!(f, "gitpush"),
            Tool::GitCommit => write!(f, "gitcommit"),
        }
    }
}

impl FromStr for Tool {
    type Err = FlotoolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "repomap" => Ok(Tool::Repomap),
            "mobile-fix" => Ok(Tool::MobileFix),
            "gitpush" => Ok(Tool::GitPush),
            "gitcommit" => Ok(Tool::GitCommit),
            other => Err(FlotoolError::UnknownTool(other.to_string())),
        }
    }
}

/// Print the tool listing with summaries
pub fn list_tools() {
    println!("\nAvailable tools:\n");
    for tool in Tool::ALL {
        println!("  {:<15} {}", tool.to_string(), tool.summary());
    }
    println!("\nUsage:");
    println!("  flotool read <tool>");
    println!("  flotool use <tool> [--root PATH]\n");
}

/// Print a tool's summary and embedded source
pub fn read_tool(tool: Tool) {
    println!("\nTool: {tool}");
    println!("Summary: {}", tool.summary());
    println!("\nSource ({}):\n", tool.source_path());
    println!("{}", tool.source());
}
