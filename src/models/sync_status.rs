use std::fmt;

/// Client-side synchronization state, reported by `sync --status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    /// Account configured, nothing pushed yet this session.
    Idle,
    /// A push/pull is in progress.
    Syncing,
    /// Local and remote mirrors match as of `last_sync`.
    Synced,
    /// The last remote operation failed; local data is authoritative.
    Error,
    /// Guest mode: no account configured, local-only operation.
    Local,
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SyncStatus::Idle => "idle",
            SyncStatus::Syncing => "syncing",
            SyncStatus::Synced => "synced",
            SyncStatus::Error => "error",
            SyncStatus::Local => "local",
        };
        write!(f, "{}", s)
    }
}
