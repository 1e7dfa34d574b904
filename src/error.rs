use thiserror::Error;

use crate::types::FarmId;

/// Everything that can go wrong inside the boundary subsystem.
/// No variant is fatal to the host; all recover by user retry or session reset.
#[derive(Debug, Error)]
pub enum BoundaryError {
    /// Raw coordinate input could not be parsed into numeric pairs.
    /// The farm still shows in lists, just without a shape.
    #[error("malformed coordinate input: {detail}")]
    MalformedCoordinate { detail: String },

    /// Commit attempted with fewer than 3 points; the session stays open.
    #[error("boundary needs at least 3 points, got {got}")]
    InsufficientPoints { got: usize },

    /// A second edit session was requested while one is active.
    #[error("already editing the boundary of farm {farm_id}")]
    AlreadyEditing { farm_id: FarmId },

    /// An editor operation was issued with no active session.
    #[error("no active editor session")]
    NotEditing,

    /// The write to the farm-record store failed; the working ring is preserved.
    #[error("failed to persist boundary")]
    PersistenceFailure(#[source] anyhow::Error),

    /// Listing farms from the store failed; present empty, never stale.
    #[error("failed to load boundaries")]
    LoadFailure(#[source] anyhow::Error),
}
