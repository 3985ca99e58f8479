//! Record Mapper
//!
//! Projects one `ListStacks` summary onto the eight report fields, fetching
//! parameters and resource types for stacks that still exist.

use super::loader::load_items;
use super::record::{Detail, MappedStack, ParameterList, FIELD_KEYS};
use crate::aws::types::StackSummary;
use crate::aws::StackApi;
use crate::error::{PullError, Result};
use chrono::{DateTime, Utc};

/// Format a creation time as `MM/DD/YYYY -- HH:MM UTC`
pub fn format_creation_time(time: &DateTime<Utc>) -> String {
    time.format("%m/%d/%Y -- %H:%M %Z").to_string()
}

/// Map a summary, issuing two describe calls unless the stack is deleted
pub async fn map_summary<A>(api: &A, summary: &StackSummary) -> Result<MappedStack>
where
    A: StackApi + ?Sized,
{
    let (parameters, resource_types) = if summary.is_deleted() {
        tracing::debug!("Skipping details of deleted stack {:?}", summary.name);
        (Detail::Deleted, Detail::Deleted)
    } else {
        let name = summary.name.as_deref().ok_or(PullError::MissingField {
            field: FIELD_KEYS[0],
        })?;
        (
            Detail::Fetched(fetch_parameters(api, name).await?),
            Detail::Fetched(fetch_resource_types(api, name).await?),
        )
    };

    Ok(MappedStack {
        name: summary.name.clone(),
        id: summary.id.clone(),
        status: summary.status.clone(),
        creation_timestamp: summary.creation_time.as_ref().map(format_creation_time),
        template: summary.template_description.clone(),
        nested: summary.is_nested(),
        parameters,
        resource_types,
    })
}

/// One parameter list per stack `DescribeStacks` returns for `name`
async fn fetch_parameters<A>(api: &A, name: &str) -> Result<Vec<ParameterList>>
where
    A: StackApi + ?Sized,
{
    let stacks = load_items(move |token| api.describe_stack(name, token)).await?;
    Ok(stacks.into_iter().map(|s| s.parameters).collect())
}

async fn fetch_resource_types<A>(api: &A, name: &str) -> Result<Vec<String>>
where
    A: StackApi + ?Sized,
{
    let resources = load_items(move |token| api.describe_stack_resources(name, token)).await?;
    Ok(resources
        .into_iter()
        .filter_map(|r| r.resource_type)
        .collect())
}
