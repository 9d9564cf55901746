use async_trait::async_trait;

use crate::entity::location_code;
use crate::error::Result;
use crate::params::{LocationCodeChanges, NewLocationCode};

/// The location tree as seen by an API layer.
///
/// Every mutation runs the full validation of the node and re-derives all of
/// its descendants before anything is committed. Reads never validate.
#[async_trait]
pub trait LocationCodeRepository {
    /// Validates and inserts a new node.
    async fn create(&self, code: NewLocationCode) -> Result<location_code::Model>;

    /// Validates and applies `changes` to node `id`, then re-derives its
    /// subtree. Either the whole subtree is saved or nothing is.
    async fn update(&self, id: i32, changes: LocationCodeChanges) -> Result<location_code::Model>;

    /// Ancestors of `code`, root first, excluding `code` itself.
    async fn get_parents(&self, code: &location_code::Model) -> Result<Vec<location_code::Model>>;

    /// For every node whose segment equals `segment`, its ancestor chain.
    async fn get_all_root_trees(&self, segment: &str) -> Result<Vec<Vec<location_code::Model>>>;
}
