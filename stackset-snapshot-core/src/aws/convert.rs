//! Conversions from SDK response types into the snapshot data model.
//!
//! SDK enums become their wire strings and SDK epoch timestamps become
//! `chrono` UTC timestamps, so the model serializes exactly like the
//! service's own JSON shapes.

use aws_sdk_cloudformation::primitives::DateTime as SdkDateTime;
use aws_sdk_cloudformation::types as sdk;
use chrono::{DateTime, Utc};

use crate::types::{
    AutoDeployment, ManagedExecution, Parameter, StackInstanceComprehensiveStatus,
    StackInstanceSummary, StackSetDetail, StackSetDriftDetectionDetails,
    StackSetOperationPreferences, StackSetOperationStatusDetails, StackSetOperationSummary,
    StackSetSummary, Tag,
};

/// Epoch seconds/nanos to UTC. Values outside chrono's representable range
/// convert to `None`.
fn timestamp(value: Option<SdkDateTime>) -> Option<DateTime<Utc>> {
    value.and_then(|ts| DateTime::from_timestamp(ts.secs(), ts.subsec_nanos()))
}

impl From<sdk::StackSetSummary> for StackSetSummary {
    fn from(summary: sdk::StackSetSummary) -> Self {
        Self {
            stack_set_name: summary.stack_set_name,
            stack_set_id: summary.stack_set_id,
            description: summary.description,
            status: summary.status.map(|s| s.as_str().to_string()),
            auto_deployment: summary.auto_deployment.map(Into::into),
            permission_model: summary.permission_model.map(|m| m.as_str().to_string()),
            drift_status: summary.drift_status.map(|s| s.as_str().to_string()),
            last_drift_check_timestamp: timestamp(summary.last_drift_check_timestamp),
            managed_execution: summary.managed_execution.map(Into::into),
        }
    }
}

impl From<sdk::StackInstanceSummary> for StackInstanceSummary {
    fn from(summary: sdk::StackInstanceSummary) -> Self {
        Self {
            stack_set_id: summary.stack_set_id,
            region: summary.region,
            account: summary.account,
            stack_id: summary.stack_id,
            status: summary.status.map(|s| s.as_str().to_string()),
            status_reason: summary.status_reason,
            stack_instance_status: summary.stack_instance_status.map(Into::into),
            organizational_unit_id: summary.organizational_unit_id,
            drift_status: summary.drift_status.map(|s| s.as_str().to_string()),
            last_drift_check_timestamp: timestamp(summary.last_drift_check_timestamp),
            last_operation_id: summary.last_operation_id,
        }
    }
}

impl From<sdk::StackInstanceComprehensiveStatus> for StackInstanceComprehensiveStatus {
    fn from(status: sdk::StackInstanceComprehensiveStatus) -> Self {
        Self {
            detailed_status: status.detailed_status.map(|s| s.as_str().to_string()),
        }
    }
}

impl From<sdk::StackSetOperationSummary> for StackSetOperationSummary {
    fn from(summary: sdk::StackSetOperationSummary) -> Self {
        Self {
            operation_id: summary.operation_id,
            action: summary.action.map(|a| a.as_str().to_string()),
            status: summary.status.map(|s| s.as_str().to_string()),
            creation_timestamp: timestamp(summary.creation_timestamp),
            end_timestamp: timestamp(summary.end_timestamp),
            status_reason: summary.status_reason,
            status_details: summary.status_details.map(Into::into),
            operation_preferences: summary.operation_preferences.map(Into::into),
        }
    }
}

impl From<sdk::StackSetOperationStatusDetails> for StackSetOperationStatusDetails {
    fn from(details: sdk::StackSetOperationStatusDetails) -> Self {
        Self {
            failed_stack_instances_count: details.failed_stack_instances_count,
        }
    }
}

impl From<sdk::StackSetOperationPreferences> for StackSetOperationPreferences {
    fn from(preferences: sdk::StackSetOperationPreferences) -> Self {
        Self {
            region_concurrency_type: preferences
                .region_concurrency_type
                .map(|t| t.as_str().to_string()),
            region_order: preferences.region_order,
            failure_tolerance_count: preferences.failure_tolerance_count,
            failure_tolerance_percentage: preferences.failure_tolerance_percentage,
            max_concurrent_count: preferences.max_concurrent_count,
            max_concurrent_percentage: preferences.max_concurrent_percentage,
            concurrency_mode: preferences.concurrency_mode.map(|m| m.as_str().to_string()),
        }
    }
}

impl From<sdk::StackSet> for StackSetDetail {
    fn from(stack_set: sdk::StackSet) -> Self {
        Self {
            stack_set_name: stack_set.stack_set_name,
            stack_set_id: stack_set.stack_set_id,
            description: stack_set.description,
            status: stack_set.status.map(|s| s.as_str().to_string()),
            template_body: stack_set.template_body,
            parameters: stack_set
                .parameters
                .map(|parameters| parameters.into_iter().map(Into::into).collect()),
            capabilities: stack_set
                .capabilities
                .map(|capabilities| {
                    capabilities
                        .into_iter()
                        .map(|c| c.as_str().to_string())
                        .collect()
                }),
            tags: stack_set
                .tags
                .map(|tags| tags.into_iter().map(Into::into).collect()),
            stack_set_arn: stack_set.stack_set_arn,
            administration_role_arn: stack_set.administration_role_arn,
            execution_role_name: stack_set.execution_role_name,
            stack_set_drift_detection_details: stack_set
                .stack_set_drift_detection_details
                .map(Into::into),
            auto_deployment: stack_set.auto_deployment.map(Into::into),
            permission_model: stack_set.permission_model.map(|m| m.as_str().to_string()),
            organizational_unit_ids: stack_set.organizational_unit_ids,
            managed_execution: stack_set.managed_execution.map(Into::into),
        }
    }
}

impl From<sdk::Parameter> for Parameter {
    fn from(parameter: sdk::Parameter) -> Self {
        Self {
            parameter_key: parameter.parameter_key,
            parameter_value: parameter.parameter_value,
            use_previous_value: parameter.use_previous_value,
            resolved_value: parameter.resolved_value,
        }
    }
}

impl From<sdk::Tag> for Tag {
    fn from(tag: sdk::Tag) -> Self {
        Self {
            key: tag.key,
            value: tag.value,
        }
    }
}

impl From<sdk::AutoDeployment> for AutoDeployment {
    fn from(auto_deployment: sdk::AutoDeployment) -> Self {
        Self {
            enabled: auto_deployment.enabled,
            retain_stacks_on_account_removal: auto_deployment.retain_stacks_on_account_removal,
        }
    }
}

impl From<sdk::ManagedExecution> for ManagedExecution {
    fn from(managed_execution: sdk::ManagedExecution) -> Self {
        Self {
            active: managed_execution.active,
        }
    }
}

impl From<sdk::StackSetDriftDetectionDetails> for StackSetDriftDetectionDetails {
    fn from(details: sdk::StackSetDriftDetectionDetails) -> Self {
        Self {
            drift_status: details.drift_status.map(|s| s.as_str().to_string()),
            drift_detection_status: details
                .drift_detection_status
                .map(|s| s.as_str().to_string()),
            last_drift_check_timestamp: timestamp(details.last_drift_check_timestamp),
            total_stack_instances_count: details.total_stack_instances_count,
            drifted_stack_instances_count: details.drifted_stack_instances_count,
            in_sync_stack_instances_count: details.in_sync_stack_instances_count,
            in_progress_stack_instances_count: details.in_progress_stack_instances_count,
            failed_stack_instances_count: details.failed_stack_instances_count,
        }
    }
}
