//! Data model for the stack set snapshot.
//!
//! Field names serialize in the PascalCase form the CloudFormation API
//! uses on the wire (`StackSetId`, `DriftStatus`, ...), so the emitted
//! JSON matches the shape of the underlying list/describe responses.
//! Absent optional fields are omitted rather than serialized as null.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::serialize::iso8601;

/// One entry of a ListStackSets page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackSetSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_deployment: Option<AutoDeployment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift_status: Option<String>,
    #[serde(
        serialize_with = "iso8601::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_drift_check_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_execution: Option<ManagedExecution>,
}

/// One entry of a ListStackInstances page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackInstanceSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_instance_status: Option<StackInstanceComprehensiveStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizational_unit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift_status: Option<String>,
    #[serde(
        serialize_with = "iso8601::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_drift_check_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_operation_id: Option<String>,
}

/// Detailed status of a stack instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackInstanceComprehensiveStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_status: Option<String>,
}

/// One entry of a ListStackSetOperations page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackSetOperationSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(
        serialize_with = "iso8601::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_timestamp: Option<DateTime<Utc>>,
    #[serde(
        serialize_with = "iso8601::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_details: Option<StackSetOperationStatusDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_preferences: Option<StackSetOperationPreferences>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackSetOperationStatusDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_stack_instances_count: Option<i32>,
}

/// How an operation was rolled out across regions and accounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackSetOperationPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_concurrency_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_order: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_tolerance_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_tolerance_percentage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_percentage: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub concurrency_mode: Option<String>,
}

/// The DescribeStackSet payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackSetDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "StackSetARN", skip_serializing_if = "Option::is_none")]
    pub stack_set_arn: Option<String>,
    #[serde(rename = "AdministrationRoleARN", skip_serializing_if = "Option::is_none")]
    pub administration_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_drift_detection_details: Option<StackSetDriftDetectionDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_deployment: Option<AutoDeployment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizational_unit_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_execution: Option<ManagedExecution>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Parameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_previous_value: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoDeployment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retain_stacks_on_account_removal: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManagedExecution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Drift detection state reported by DescribeStackSet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackSetDriftDetectionDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift_detection_status: Option<String>,
    #[serde(
        serialize_with = "iso8601::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_drift_check_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_stack_instances_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drifted_stack_instances_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_sync_stack_instances_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_progress_stack_instances_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_stack_instances_count: Option<i32>,
}

/// Result of one supplementary fetch for a single stack set.
#[derive(Debug, Clone)]
pub enum StackSetSupplement {
    Instances(Vec<StackInstanceSummary>),
    Operations(Vec<StackSetOperationSummary>),
    Description(StackSetDetail),
}

/// One merged stack set entry in the final snapshot: the listing summary,
/// the fields only DescribeStackSet reports, and the collated instance
/// and operation listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StackSetRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_deployment: Option<AutoDeployment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drift_status: Option<String>,
    #[serde(
        serialize_with = "iso8601::serialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_drift_check_timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_execution: Option<ManagedExecution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(rename = "StackSetARN", skip_serializing_if = "Option::is_none")]
    pub stack_set_arn: Option<String>,
    #[serde(rename = "AdministrationRoleARN", skip_serializing_if = "Option::is_none")]
    pub administration_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack_set_drift_detection_details: Option<StackSetDriftDetectionDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizational_unit_ids: Option<Vec<String>>,
    /// Every stack instance deployed from this stack set.
    pub instances: Vec<StackInstanceSummary>,
    /// Operation history in the order the service returns it.
    pub operations: Vec<StackSetOperationSummary>,
}

impl From<StackSetSummary> for StackSetRecord {
    fn from(summary: StackSetSummary) -> Self {
        Self {
            stack_set_name: summary.stack_set_name,
            stack_set_id: summary.stack_set_id,
            description: summary.description,
            status: summary.status,
            auto_deployment: summary.auto_deployment,
            permission_model: summary.permission_model,
            drift_status: summary.drift_status,
            last_drift_check_timestamp: summary.last_drift_check_timestamp,
            managed_execution: summary.managed_execution,
            template_body: None,
            parameters: None,
            capabilities: None,
            tags: None,
            stack_set_arn: None,
            administration_role_arn: None,
            execution_role_name: None,
            stack_set_drift_detection_details: None,
            organizational_unit_ids: None,
            instances: Vec::new(),
            operations: Vec::new(),
        }
    }
}

impl StackSetRecord {
    /// Fold one supplementary fetch result into the record.
    ///
    /// The three supplements touch disjoint parts of the record, so merging
    /// is idempotent with respect to the order in which fetches complete.
    pub fn merge(&mut self, supplement: StackSetSupplement) {
        match supplement {
            StackSetSupplement::Instances(instances) => self.instances = instances,
            StackSetSupplement::Operations(operations) => self.operations = operations,
            StackSetSupplement::Description(detail) => self.apply_description(detail),
        }
    }

    /// Fold the full description into the record. Fields shared with the
    /// listing summary are superseded where the description carries a
    /// value; description-only fields are taken as-is.
    fn apply_description(&mut self, detail: StackSetDetail) {
        let StackSetDetail {
            stack_set_name,
            stack_set_id,
            description,
            status,
            template_body,
            parameters,
            capabilities,
            tags,
            stack_set_arn,
            administration_role_arn,
            execution_role_name,
            stack_set_drift_detection_details,
            auto_deployment,
            permission_model,
            organizational_unit_ids,
            managed_execution,
        } = detail;

        if let Some(name) = stack_set_name {
            self.stack_set_name = Some(name);
        }
        if let Some(id) = stack_set_id {
            self.stack_set_id = Some(id);
        }
        if let Some(description) = description {
            self.description = Some(description);
        }
        if let Some(status) = status {
            self.status = Some(status);
        }
        if let Some(auto_deployment) = auto_deployment {
            self.auto_deployment = Some(auto_deployment);
        }
        if let Some(permission_model) = permission_model {
            self.permission_model = Some(permission_model);
        }
        if let Some(managed_execution) = managed_execution {
            self.managed_execution = Some(managed_execution);
        }

        self.template_body = template_body;
        self.parameters = parameters;
        self.capabilities = capabilities;
        self.tags = tags;
        self.stack_set_arn = stack_set_arn;
        self.administration_role_arn = administration_role_arn;
        self.execution_role_name = execution_role_name;
        self.stack_set_drift_detection_details = stack_set_drift_detection_details;
        self.organizational_unit_ids = organizational_unit_ids;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> StackSetSummary {
        StackSetSummary {
            stack_set_name: Some("networking".to_string()),
            stack_set_id: Some("networking:11111111-2222-3333-4444-555555555555".to_string()),
            description: Some("summary description".to_string()),
            status: Some("ACTIVE".to_string()),
            auto_deployment: None,
            permission_model: Some("SELF_MANAGED".to_string()),
            drift_status: Some("IN_SYNC".to_string()),
            last_drift_check_timestamp: None,
            managed_execution: None,
        }
    }

    fn sample_supplements() -> Vec<StackSetSupplement> {
        let instance = StackInstanceSummary {
            stack_set_id: Some("networking:11111111-2222-3333-4444-555555555555".to_string()),
            region: Some("eu-west-1".to_string()),
            account: Some("123456789012".to_string()),
            stack_id: None,
            status: Some("CURRENT".to_string()),
            status_reason: None,
            stack_instance_status: Some(StackInstanceComprehensiveStatus {
                detailed_status: Some("SUCCEEDED".to_string()),
            }),
            organizational_unit_id: None,
            drift_status: None,
            last_drift_check_timestamp: None,
            last_operation_id: None,
        };
        let operation = StackSetOperationSummary {
            operation_id: Some("op-1".to_string()),
            action: Some("CREATE".to_string()),
            status: Some("SUCCEEDED".to_string()),
            creation_timestamp: None,
            end_timestamp: None,
            status_reason: None,
            status_details: None,
            operation_preferences: None,
        };
        let detail = StackSetDetail {
            stack_set_name: Some("networking".to_string()),
            stack_set_id: Some("networking:11111111-2222-3333-4444-555555555555".to_string()),
            description: Some("full description".to_string()),
            status: Some("ACTIVE".to_string()),
            template_body: Some("{}".to_string()),
            parameters: None,
            capabilities: Some(vec!["CAPABILITY_IAM".to_string()]),
            tags: Some(vec![Tag {
                key: Some("team".to_string()),
                value: Some("platform".to_string()),
            }]),
            stack_set_arn: Some(
                "arn:aws:cloudformation:eu-west-1:123456789012:stackset/networking".to_string(),
            ),
            administration_role_arn: None,
            execution_role_name: Some("AWSCloudFormationStackSetExecutionRole".to_string()),
            stack_set_drift_detection_details: None,
            auto_deployment: None,
            permission_model: Some("SELF_MANAGED".to_string()),
            organizational_unit_ids: None,
            managed_execution: Some(ManagedExecution {
                active: Some(false),
            }),
        };
        vec![
            StackSetSupplement::Instances(vec![instance]),
            StackSetSupplement::Operations(vec![operation]),
            StackSetSupplement::Description(detail),
        ]
    }

    #[test]
    fn test_merge_is_order_independent() {
        let permutations: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];

        let reference = {
            let mut record = StackSetRecord::from(sample_summary());
            for supplement in sample_supplements() {
                record.merge(supplement);
            }
            record
        };

        for order in permutations {
            let supplements = sample_supplements();
            let mut record = StackSetRecord::from(sample_summary());
            for index in order {
                record.merge(supplements[index].clone());
            }
            assert_eq!(record, reference, "merge order {order:?} diverged");
        }
    }

    #[test]
    fn test_description_supersedes_summary_fields() {
        let mut record = StackSetRecord::from(sample_summary());
        assert_eq!(record.description.as_deref(), Some("summary description"));

        let supplements = sample_supplements();
        record.merge(supplements[2].clone());

        assert_eq!(record.description.as_deref(), Some("full description"));
        assert_eq!(record.template_body.as_deref(), Some("{}"));
        // Fields the description does not carry keep the summary value.
        assert_eq!(record.drift_status.as_deref(), Some("IN_SYNC"));
    }

    #[test]
    fn test_record_serializes_with_wire_field_names() {
        let mut record = StackSetRecord::from(sample_summary());
        for supplement in sample_supplements() {
            record.merge(supplement);
        }

        let value = serde_json::to_value(&record).expect("should serialize");
        let object = value.as_object().expect("record is a JSON object");

        assert_eq!(
            object["StackSetId"],
            "networking:11111111-2222-3333-4444-555555555555"
        );
        assert_eq!(object["Instances"].as_array().map(Vec::len), Some(1));
        assert_eq!(object["Operations"].as_array().map(Vec::len), Some(1));
        assert_eq!(object["Instances"][0]["Account"], "123456789012");
        assert_eq!(object["Operations"][0]["Action"], "CREATE");
        assert!(object.contains_key("StackSetARN"));
        // Absent optional fields are omitted, not null.
        assert!(!object.contains_key("AdministrationRoleARN"));
        assert!(!object.contains_key("LastDriftCheckTimestamp"));
    }

    #[test]
    fn test_bare_record_always_carries_instance_and_operation_arrays() {
        let record = StackSetRecord::from(sample_summary());
        let value = serde_json::to_value(&record).expect("should serialize");
        assert_eq!(value["Instances"], serde_json::json!([]));
        assert_eq!(value["Operations"], serde_json::json!([]));
    }
}
