//! Commands module - service layer for snapshot collection

mod service;
mod snapshot;

pub use service::StackSetSnapshotService;
pub use snapshot::collect_snapshot;
