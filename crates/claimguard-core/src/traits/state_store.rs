use crate::errors::StorageError;
use crate::models::CoordinatorSnapshot;

/// Durable snapshot storage for coordinator state.
///
/// Writers must replace the whole snapshot; a reader never observes a
/// partially written one.
pub trait IStateStore: Send + Sync {
    /// `Ok(None)` means nothing has been stored yet (cold start).
    fn load(&self) -> Result<Option<CoordinatorSnapshot>, StorageError>;

    fn save(&self, snapshot: &CoordinatorSnapshot) -> Result<(), StorageError>;

    /// Backend name for logs.
    fn name(&self) -> &str;
}
