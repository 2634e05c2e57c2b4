//! History store port (append-only audit sink).

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::lecture::{HistoryEntry, NewHistoryEntry};

/// Port for appending immutable audit entries.
///
/// Entries are never overwritten or deleted. Persistence failure is an
/// external-collaborator concern; the history logger logs and swallows it.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Append an entry, returning the materialized record.
    async fn append(&self, entry: NewHistoryEntry) -> Result<HistoryEntry, DomainError>;
}
