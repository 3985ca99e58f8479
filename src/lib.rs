//! cfn-pull
//!
//! Lists AWS CloudFormation stacks, fetches their parameters and resource
//! types, and writes one flat JSON record per stack.

pub mod aws;
pub mod config;
pub mod error;
pub mod pull;
pub mod stack;

pub use error::{PullError, Result};
