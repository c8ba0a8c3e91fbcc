//! Recent-commit lookups used to hint answer composition.
//!
//! Strictly best-effort: any failure (no git, not a repository, empty
//! history) degrades to an empty suggestion list.

use std::path::Path;
use std::process::Command;

use tracing::debug;

const LOG_FORMAT: &str = "%H|%s";

#[derive(Debug, Clone)]
pub struct CommitSummary {
    pub hash: String,
    pub subject: String,
}

impl CommitSummary {
    /// Abbreviated hash for display
    pub fn short_hash(&self) -> &str {
        &self.hash[..self.hash.len().min(7)]
    }
}

/// The `max_count` most recent commits of the repository at `repo`
pub fn recent_commits(repo: &Path, max_count: usize) -> Vec<CommitSummary> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .arg("log")
        .arg(format!("--pretty=format:{}", LOG_FORMAT))
        .arg(format!("-{}", max_count))
        .output();

    let output = match output {
        Ok(output) => output,
        Err(e) => {
            debug!("git not runnable: {}", e);
            return Vec::new();
        }
    };

    if !output.status.success() {
        debug!(
            "git log failed in {}: {}",
            repo.display(),
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return Vec::new();
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter_map(|line| {
            let (hash, subject) = line.split_once('|')?;
            Some(CommitSummary {
                hash: hash.to_string(),
                subject: subject.to_string(),
            })
        })
        .collect()
}
