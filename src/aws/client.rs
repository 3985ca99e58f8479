//! CloudFormation Client
//!
//! `StackApi` implementation backed by `aws-sdk-cloudformation`. Credentials
//! and region come from the standard AWS provider chain unless overridden.

use super::types::{Page, StackDetail, StackParameter, StackResource, StackSummary};
use super::StackApi;
use crate::error::{PullError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_cloudformation::config::http::HttpResponse;
use aws_sdk_cloudformation::config::retry::RetryConfig;
use aws_sdk_cloudformation::config::Region;
use aws_sdk_cloudformation::error::{DisplayErrorContext, SdkError};
use aws_sdk_cloudformation::primitives::DateTime as SdkDateTime;
use aws_sdk_cloudformation::types as cfn;
use aws_sdk_cloudformation::Client;
use chrono::{DateTime, Utc};

/// Overrides applied on top of the default AWS configuration chain
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientOptions {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
}

/// CloudFormation client
#[derive(Clone)]
pub struct CfnClient {
    client: Client,
}

impl CfnClient {
    /// Create a client from the environment plus `options`
    ///
    /// SDK retries are disabled: a failed call ends the pull.
    pub async fn new(options: &ClientOptions) -> Self {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).retry_config(RetryConfig::disabled());

        if let Some(profile) = &options.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = &options.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &options.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;
        tracing::info!(
            "CloudFormation client ready (region: {:?})",
            sdk_config.region().map(ToString::to_string)
        );

        Self {
            client: Client::new(&sdk_config),
        }
    }

    /// Wrap a fully built service config
    pub fn from_conf(conf: aws_sdk_cloudformation::Config) -> Self {
        Self {
            client: Client::from_conf(conf),
        }
    }
}

#[async_trait]
impl StackApi for CfnClient {
    async fn list_stacks(&self, next_token: Option<String>) -> Result<Page<StackSummary>> {
        tracing::debug!("ListStacks (token: {})", next_token.is_some());

        let output = self
            .client
            .list_stacks()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| sdk_error("ListStacks", e))?;

        Ok(Page {
            items: output
                .stack_summaries()
                .iter()
                .map(StackSummary::from)
                .collect(),
            next_token: output.next_token().map(str::to_string),
        })
    }

    async fn describe_stack(
        &self,
        name: &str,
        next_token: Option<String>,
    ) -> Result<Page<StackDetail>> {
        tracing::debug!("DescribeStacks {}", name);

        let output = self
            .client
            .describe_stacks()
            .stack_name(name)
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| sdk_error("DescribeStacks", e))?;

        Ok(Page {
            items: output.stacks().iter().map(StackDetail::from).collect(),
            next_token: output.next_token().map(str::to_string),
        })
    }

    async fn describe_stack_resources(
        &self,
        name: &str,
        _next_token: Option<String>,
    ) -> Result<Page<StackResource>> {
        // DescribeStackResources has no continuation token; it is always a single page
        tracing::debug!("DescribeStackResources {}", name);

        let output = self
            .client
            .describe_stack_resources()
            .stack_name(name)
            .send()
            .await
            .map_err(|e| sdk_error("DescribeStackResources", e))?;

        Ok(Page::last(
            output
                .stack_resources()
                .iter()
                .map(StackResource::from)
                .collect(),
        ))
    }
}

/// Classify an SDK failure by whether the service answered at all
fn sdk_error<E>(operation: &'static str, err: SdkError<E, HttpResponse>) -> PullError
where
    E: std::error::Error + Send + Sync + 'static,
{
    let status = err
        .raw_response()
        .map(|raw| raw.status())
        .filter(|status| !status.is_success())
        .map(|status| status.as_u16());

    match status {
        Some(status) => {
            tracing::error!(
                "{} failed with HTTP {}: {}",
                operation,
                status,
                DisplayErrorContext(&err)
            );
            PullError::Status { operation, status }
        }
        None => PullError::Transport {
            operation,
            message: DisplayErrorContext(&err).to_string(),
        },
    }
}

fn to_chrono(time: &SdkDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(time.secs(), time.subsec_nanos())
}

impl From<&cfn::StackSummary> for StackSummary {
    fn from(summary: &cfn::StackSummary) -> Self {
        Self {
            name: summary.stack_name().map(str::to_string),
            id: summary.stack_id().map(str::to_string),
            status: summary.stack_status().map(|s| s.as_str().to_string()),
            creation_time: summary.creation_time().and_then(to_chrono),
            template_description: summary.template_description().map(str::to_string),
            parent_id: summary.parent_id().map(str::to_string),
        }
    }
}

impl From<&cfn::Stack> for StackDetail {
    fn from(stack: &cfn::Stack) -> Self {
        Self {
            // the slice accessor hides a missing element, the field does not
            parameters: stack.parameters.as_ref().map(|parameters| {
                parameters
                    .iter()
                    .map(|p| StackParameter {
                        key: p.parameter_key().map(str::to_string),
                        value: p.parameter_value().map(str::to_string),
                        resolved_value: p.resolved_value().map(str::to_string),
                    })
                    .collect()
            }),
        }
    }
}

impl From<&cfn::StackResource> for StackResource {
    fn from(resource: &cfn::StackResource) -> Self {
        Self {
            resource_type: resource.resource_type().map(str::to_string),
        }
    }
}
