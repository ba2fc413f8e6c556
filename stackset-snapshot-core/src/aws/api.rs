//! The read-only slice of the CloudFormation API the snapshot consumes.

use async_trait::async_trait;

use crate::error::SnapshotResult;
use crate::types::{
    StackInstanceSummary, StackSetDetail, StackSetOperationSummary, StackSetSummary,
};

/// One page of a paginated listing call.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Continuation token for the next page, `None` on the last page.
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// A single terminal page.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_token: None,
        }
    }
}

/// The four read calls the snapshot issues.
///
/// Listing calls are page-granular; the snapshot pipeline owns the token
/// loop that collates pages into full result sets.
#[async_trait]
pub trait CloudFormationApi: Send + Sync {
    async fn list_stack_sets(
        &self,
        next_token: Option<String>,
    ) -> SnapshotResult<Page<StackSetSummary>>;

    async fn list_stack_instances(
        &self,
        stack_set_id: &str,
        next_token: Option<String>,
    ) -> SnapshotResult<Page<StackInstanceSummary>>;

    async fn list_stack_set_operations(
        &self,
        stack_set_id: &str,
        next_token: Option<String>,
    ) -> SnapshotResult<Page<StackSetOperationSummary>>;

    async fn describe_stack_set(&self, stack_set_id: &str) -> SnapshotResult<StackSetDetail>;
}
