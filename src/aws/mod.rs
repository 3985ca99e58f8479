//! AWS CloudFormation interaction module
//!
//! # Module Structure
//!
//! - [`client`] - `CfnClient`, the SDK-backed implementation of [`StackApi`]
//! - [`types`] - owned copies of the raw records the report consumes
//!
//! # Example
//!
//! ```ignore
//! use cfn_pull::aws::{client::CfnClient, StackApi};
//!
//! async fn example() -> cfn_pull::error::Result<()> {
//!     let client = CfnClient::new(&Default::default()).await;
//!     let first = client.list_stacks(None).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod types;

use crate::error::Result;
use async_trait::async_trait;
use types::{Page, StackDetail, StackResource, StackSummary};

/// The three CloudFormation operations a pull needs
///
/// Every call returns a single page; `next_token` is the continuation token
/// of the previous page, or `None` for the first call.
#[async_trait]
pub trait StackApi: Send + Sync {
    /// `ListStacks`
    async fn list_stacks(&self, next_token: Option<String>) -> Result<Page<StackSummary>>;

    /// `DescribeStacks` for one stack name
    async fn describe_stack(
        &self,
        name: &str,
        next_token: Option<String>,
    ) -> Result<Page<StackDetail>>;

    /// `DescribeStackResources` for one stack name
    async fn describe_stack_resources(
        &self,
        name: &str,
        next_token: Option<String>,
    ) -> Result<Page<StackResource>>;
}
