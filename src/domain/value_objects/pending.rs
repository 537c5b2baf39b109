//! Pending changes parsed from `status --porcelain` (format v1)

/// Summary of a porcelain status listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingChanges {
    /// Paths with a change recorded in the index
    pub staged: Vec<String>,
    /// Paths modified or untracked in the working tree only
    pub unstaged: Vec<String>,
}

impl PendingChanges {
    pub fn parse(porcelain: &str) -> Self {
        let mut changes = Self::default();
        for line in porcelain.lines() {
            if line.len() < 3 {
                continue;
            }
            let mut chars = line.chars();
            let (Some(index), Some(worktree)) = (chars.next(), chars.next()) else {
                continue;
            };
            let path = line.get(3..).unwrap_or_default().to_string();
            if !matches!(index, ' ' | '?' | '!') {
                changes.staged.push(path);
            } else if worktree != ' ' && index != '!' {
                changes.unstaged.push(path);
            }
        }
        changes
    }

    /// True when a commit would record something
    pub fn has_staged(&self) -> bool {
        !self.staged.is_empty()
    }
}
