//! CloudFormation client wrapper for the snapshot's read calls.

use async_trait::async_trait;
use aws_sdk_cloudformation::Client as CfnClient;

use crate::aws::api::{CloudFormationApi, Page};
use crate::error::{SnapshotError, SnapshotResult};
use crate::types::{
    StackInstanceSummary, StackSetDetail, StackSetOperationSummary, StackSetSummary,
};

/// SDK-backed implementation of [`CloudFormationApi`].
///
/// Every per-stack-set call passes the StackSetId as the `StackSetName`
/// parameter, which the service accepts for both names and ids.
pub struct CfnStackSetClient {
    client: CfnClient,
}

impl CfnStackSetClient {
    pub fn new(client: CfnClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CloudFormationApi for CfnStackSetClient {
    async fn list_stack_sets(
        &self,
        next_token: Option<String>,
    ) -> SnapshotResult<Page<StackSetSummary>> {
        let response = self
            .client
            .list_stack_sets()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| SnapshotError::Api(format!("failed to list stack sets: {e}")))?;

        Ok(Page {
            items: response
                .summaries
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            next_token: response.next_token,
        })
    }

    async fn list_stack_instances(
        &self,
        stack_set_id: &str,
        next_token: Option<String>,
    ) -> SnapshotResult<Page<StackInstanceSummary>> {
        let response = self
            .client
            .list_stack_instances()
            .stack_set_name(stack_set_id)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| {
                SnapshotError::Api(format!(
                    "failed to list stack instances for '{stack_set_id}': {e}"
                ))
            })?;

        Ok(Page {
            items: response
                .summaries
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            next_token: response.next_token,
        })
    }

    async fn list_stack_set_operations(
        &self,
        stack_set_id: &str,
        next_token: Option<String>,
    ) -> SnapshotResult<Page<StackSetOperationSummary>> {
        let response = self
            .client
            .list_stack_set_operations()
            .stack_set_name(stack_set_id)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| {
                SnapshotError::Api(format!(
                    "failed to list operations for '{stack_set_id}': {e}"
                ))
            })?;

        Ok(Page {
            items: response
                .summaries
                .unwrap_or_default()
                .into_iter()
                .map(Into::into)
                .collect(),
            next_token: response.next_token,
        })
    }

    async fn describe_stack_set(&self, stack_set_id: &str) -> SnapshotResult<StackSetDetail> {
        let response = self
            .client
            .describe_stack_set()
            .stack_set_name(stack_set_id)
            .send()
            .await
            .map_err(|e| {
                SnapshotError::Api(format!(
                    "failed to describe stack set '{stack_set_id}': {e}"
                ))
            })?;

        let stack_set = response.stack_set.ok_or_else(|| {
            SnapshotError::Response(format!(
                "DescribeStackSet returned no stack set for '{stack_set_id}'"
            ))
        })?;

        Ok(stack_set.into())
    }
}
