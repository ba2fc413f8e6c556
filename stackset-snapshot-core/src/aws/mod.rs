//! CloudFormation integration: the read-only API surface the snapshot
//! needs and its SDK-backed implementation.

mod api;
mod client;
mod convert;

pub use api::{CloudFormationApi, Page};
pub use client::CfnStackSetClient;
