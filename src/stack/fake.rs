//! In-memory `StackApi` used by unit tests

use crate::aws::types::{Page, StackDetail, StackParameter, StackResource, StackSummary};
use crate::aws::StackApi;
use crate::error::{PullError, Result};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakeApi {
    /// `ListStacks` pages, linked by `page-N` tokens
    pub list_pages: Vec<Vec<StackSummary>>,
    /// `DescribeStacks` answers per stack name, one page each, linked by `detail-N` tokens
    pub details: HashMap<String, Vec<Vec<StackDetail>>>,
    pub resource_types: HashMap<String, Vec<String>>,
    pub list_status: Option<u16>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_pages(list_pages: Vec<Vec<StackSummary>>) -> Self {
        Self {
            list_pages,
            ..Default::default()
        }
    }

    pub fn with_stack(self, name: &str, parameters: Vec<StackParameter>, types: &[&str]) -> Self {
        let detail = StackDetail {
            parameters: Some(parameters),
        };
        self.with_detail_pages(name, vec![vec![detail]], types)
    }

    /// A live stack whose describe response has no `Parameters` element
    pub fn with_bare_stack(self, name: &str, types: &[&str]) -> Self {
        self.with_detail_pages(name, vec![vec![StackDetail::default()]], types)
    }

    pub fn with_detail_pages(
        mut self,
        name: &str,
        pages: Vec<Vec<StackDetail>>,
        types: &[&str],
    ) -> Self {
        self.details.insert(name.to_string(), pages);
        self.resource_types.insert(
            name.to_string(),
            types.iter().map(|t| t.to_string()).collect(),
        );
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

/// A complete summary for a live stack
pub fn summary(name: &str, status: &str) -> StackSummary {
    StackSummary {
        name: Some(name.to_string()),
        id: Some(format!(
            "arn:aws:cloudformation:us-east-1:123456789012:stack/{name}/1"
        )),
        status: Some(status.to_string()),
        creation_time: Utc.with_ymd_and_hms(2023, 1, 15, 13, 5, 0).single(),
        template_description: Some(format!("{name} template")),
        parent_id: None,
    }
}

fn missing_stack(operation: &'static str) -> PullError {
    // CloudFormation answers 400 ValidationError for unknown stacks
    PullError::Status {
        operation,
        status: 400,
    }
}

#[async_trait]
impl StackApi for FakeApi {
    async fn list_stacks(&self, next_token: Option<String>) -> Result<Page<StackSummary>> {
        self.record(format!("ListStacks:{}", next_token.as_deref().unwrap_or("-")));

        if let Some(status) = self.list_status {
            return Err(PullError::Status {
                operation: "ListStacks",
                status,
            });
        }

        let index = next_token
            .as_deref()
            .and_then(|t| t.strip_prefix("page-"))
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(0);
        let items = self.list_pages.get(index).cloned().unwrap_or_default();
        let next_token = (index + 1 < self.list_pages.len()).then(|| format!("page-{}", index + 1));

        Ok(Page { items, next_token })
    }

    async fn describe_stack(
        &self,
        name: &str,
        next_token: Option<String>,
    ) -> Result<Page<StackDetail>> {
        self.record(format!(
            "DescribeStacks:{name}:{}",
            next_token.as_deref().unwrap_or("-")
        ));

        let pages = self
            .details
            .get(name)
            .ok_or_else(|| missing_stack("DescribeStacks"))?;
        let index = next_token
            .as_deref()
            .and_then(|t| t.strip_prefix("detail-"))
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(0);
        let items = pages.get(index).cloned().unwrap_or_default();
        let next_token = (index + 1 < pages.len()).then(|| format!("detail-{}", index + 1));

        Ok(Page { items, next_token })
    }

    async fn describe_stack_resources(
        &self,
        name: &str,
        _next_token: Option<String>,
    ) -> Result<Page<StackResource>> {
        self.record(format!("DescribeStackResources:{name}"));

        let types = self
            .resource_types
            .get(name)
            .ok_or_else(|| missing_stack("DescribeStackResources"))?;
        Ok(Page::last(
            types.iter().map(|t| StackResource::new(t)).collect(),
        ))
    }
}
