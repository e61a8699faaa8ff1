//! Rollback target selection

use crate::domain::entities::VersionHistory;

/// Outcome of choosing a rollback version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollbackSelection {
    /// Version to roll back to
    Target(String),
    /// Fewer than two known versions; nothing earlier to return to
    InsufficientHistory { available: usize },
}

/// Pick the rollback version from `history`
///
/// The current version is at index 0, so the target is index 1. There is no
/// fallback to the current version.
pub fn select_rollback_target(history: &VersionHistory) -> RollbackSelection {
    match history.previous() {
        Some(version) => RollbackSelection::Target(version.to_string()),
        None => RollbackSelection::InsufficientHistory {
            available: history.len(),
        },
    }
}
