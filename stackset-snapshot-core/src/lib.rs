//! This crate provides the core logic for the stack set snapshot tool:
//! - paginated CloudFormation listing calls, collated into full result sets
//! - a bounded concurrent fetch of per-stack-set detail (instances,
//!   operations, full description)
//! - merging those results into one record per stack set
//! - JSON serialization with ISO-8601 timestamps
//!

mod aws;
mod commands;
mod error;
mod serialize;
mod types;

// Re-exports for a small, focused public API
pub use aws::{CfnStackSetClient, CloudFormationApi, Page};
pub use commands::{collect_snapshot, StackSetSnapshotService};
pub use error::{SnapshotError, SnapshotResult};
pub use serialize::write_snapshot;
pub use types::{
    AutoDeployment, ManagedExecution, Parameter, StackInstanceComprehensiveStatus,
    StackInstanceSummary, StackSetDetail, StackSetDriftDetectionDetails,
    StackSetOperationPreferences, StackSetOperationStatusDetails, StackSetOperationSummary,
    StackSetRecord, StackSetSummary, StackSetSupplement, Tag,
};
