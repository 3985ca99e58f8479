//! Raw CloudFormation records
//!
//! Thin owned copies of the SDK shapes, limited to the fields the report
//! consumes. Everything the provider may omit stays `Option`.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Stack status after deletion has fully completed
pub const DELETE_COMPLETE: &str = "DELETE_COMPLETE";

/// One response page of a paginated operation
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// A page with no continuation token
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_token: None,
        }
    }

    /// Continuation token, treating an empty string as absent
    pub fn continuation(&self) -> Option<&str> {
        self.next_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// Entry returned by `ListStacks`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackSummary {
    pub name: Option<String>,
    pub id: Option<String>,
    pub status: Option<String>,
    pub creation_time: Option<DateTime<Utc>>,
    pub template_description: Option<String>,
    pub parent_id: Option<String>,
}

impl StackSummary {
    /// Nested stacks carry the id of their parent
    pub fn is_nested(&self) -> bool {
        self.parent_id.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Describe calls fail for stacks in this state
    pub fn is_deleted(&self) -> bool {
        self.status.as_deref() == Some(DELETE_COMPLETE)
    }
}

/// Entry returned by `DescribeStacks`
///
/// `parameters` is `None` when the response carries no `Parameters` element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackDetail {
    pub parameters: Option<Vec<StackParameter>>,
}

/// Input parameter of a stack
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackParameter {
    #[serde(rename = "ParameterKey")]
    pub key: Option<String>,
    #[serde(rename = "ParameterValue")]
    pub value: Option<String>,
    #[serde(rename = "ResolvedValue", skip_serializing_if = "Option::is_none")]
    pub resolved_value: Option<String>,
}

#[cfg(test)]
impl StackParameter {
    pub(crate) fn new(key: &str, value: &str) -> Self {
        Self {
            key: Some(key.to_string()),
            value: Some(value.to_string()),
            resolved_value: None,
        }
    }
}

/// Entry returned by `DescribeStackResources`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackResource {
    pub resource_type: Option<String>,
}

#[cfg(test)]
impl StackResource {
    pub(crate) fn new(resource_type: &str) -> Self {
        Self {
            resource_type: Some(resource_type.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_not_a_continuation() {
        let page: Page<u8> = Page {
            items: vec![],
            next_token: Some(String::new()),
        };
        assert_eq!(page.continuation(), None);
    }

    #[test]
    fn test_nested_requires_non_empty_parent() {
        let mut summary = StackSummary::default();
        assert!(!summary.is_nested());

        summary.parent_id = Some(String::new());
        assert!(!summary.is_nested());

        summary.parent_id = Some("arn:aws:cloudformation:us-east-1:123:stack/root/1".into());
        assert!(summary.is_nested());
    }

    #[test]
    fn test_deleted_only_for_delete_complete() {
        let mut summary = StackSummary {
            status: Some("DELETE_IN_PROGRESS".into()),
            ..Default::default()
        };
        assert!(!summary.is_deleted());

        summary.status = Some(DELETE_COMPLETE.into());
        assert!(summary.is_deleted());
    }

    #[test]
    fn test_parameter_omits_missing_resolved_value() {
        let json = serde_json::to_value(StackParameter::new("Env", "prod")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"ParameterKey": "Env", "ParameterValue": "prod"})
        );
    }
}
