//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing business logic. Methods
//! return explicitly `Send` futures so callers can be driven from any
//! executor thread.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Id, List, ListItem},
};

/// Repository for List operations.
pub trait ListRepository: Send + Sync {
    /// Insert a new list. No duplicate check is performed; two lists with
    /// the same (channel, name) can coexist as distinct rows.
    fn create(&self, channel_id: &str, name: &str) -> impl Future<Output = DbResult<List>> + Send;

    /// Look up a list by (channel, name). Returns the first row by id when
    /// duplicates exist.
    fn find_by_name(
        &self,
        channel_id: &str,
        name: &str,
    ) -> impl Future<Output = DbResult<Option<List>>> + Send;

    /// Get lists, scoped to a channel when one is given.
    fn list(
        &self,
        channel_id: Option<&str>,
    ) -> impl Future<Output = DbResult<Vec<List>>> + Send;
}

/// Repository for ListItem operations.
pub trait ItemRepository: Send + Sync {
    /// Insert a new item under a list, with default status active and no
    /// completion timestamp.
    fn create(&self, list_id: Id, name: &str) -> impl Future<Output = DbResult<ListItem>> + Send;

    /// Get the items of a list ordered by creation time ascending,
    /// excluding completed items unless `include_completed` is set.
    fn list_for_list(
        &self,
        list_id: Id,
        include_completed: bool,
    ) -> impl Future<Output = DbResult<Vec<ListItem>>> + Send;

    /// Look up an active item by (list, name). A completed item of the same
    /// name is invisible to this lookup.
    fn find_active(
        &self,
        list_id: Id,
        name: &str,
    ) -> impl Future<Output = DbResult<Option<ListItem>>> + Send;

    /// Mark an item completed, setting status and completion timestamp in a
    /// single update. Fails with `DbError::NotFound` if the item is no
    /// longer active.
    fn complete(
        &self,
        item_id: Id,
        completed_at: &str,
    ) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
///
/// The handle is constructed once at startup and threaded by reference into
/// every operation; repositories borrow from it per call.
pub trait Database: Send + Sync {
    type Lists<'a>: ListRepository
    where
        Self: 'a;
    type Items<'a>: ItemRepository
    where
        Self: 'a;

    /// Ensure the schema matches the expected table/column set, upgrading
    /// older stores in place. Idempotent.
    fn migrate(&self) -> impl Future<Output = DbResult<()>> + Send;

    /// Get the list repository.
    fn lists(&self) -> Self::Lists<'_>;

    /// Get the item repository.
    fn items(&self) -> Self::Items<'_>;
}
