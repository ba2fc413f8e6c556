//! Snapshot service construction.

use aws_config::meta::region::RegionProviderChain;
use aws_config::retry::RetryConfig;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_cloudformation::Client as CfnClient;

use crate::aws::CfnStackSetClient;
use crate::error::SnapshotResult;

/// Region used when neither the environment nor the profile names one.
const FALLBACK_REGION: &str = "eu-west-1";

/// Attempts per API call, initial try included. Retries and their backoff
/// are delegated entirely to the SDK; the program adds no retry logic of
/// its own.
const MAX_ATTEMPTS: u32 = 10;

/// Service struct that holds the CloudFormation client and provides the
/// snapshot operation.
pub struct StackSetSnapshotService {
    pub(crate) client: CfnStackSetClient,
}

impl StackSetSnapshotService {
    /// Create a new service instance backed by the standard credential
    /// provider chain.
    ///
    /// # Errors
    ///
    /// Returns an error if AWS SDK configuration fails to load.
    pub async fn new() -> SnapshotResult<Self> {
        let region = RegionProviderChain::default_provider().or_else(Region::new(FALLBACK_REGION));
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .retry_config(RetryConfig::standard().with_max_attempts(MAX_ATTEMPTS))
            .load()
            .await;

        Ok(Self {
            client: CfnStackSetClient::new(CfnClient::new(&config)),
        })
    }

    // snapshot() method implementation is in snapshot.rs
}
