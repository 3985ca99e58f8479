//! Output records and their validation

use crate::aws::types::StackParameter;
use crate::error::{PullError, Result};
use serde::{Serialize, Serializer};

/// Sentinel written instead of details for deleted stacks
pub const DELETED: &str = "DELETED";

/// Output keys, in the order they are written
pub const FIELD_KEYS: [&str; 8] = [
    "Stack Name",
    "Stack ID",
    "Stack Status",
    "Stack Creation Timestamp",
    "Stack Template",
    "Nested",
    "Stack Parameters",
    "Resource Types",
];

/// Parameters of one described stack; `None` when the stack declares none
pub type ParameterList = Option<Vec<StackParameter>>;

/// Per-stack details that cannot be fetched once a stack is deleted
#[derive(Debug, Clone, PartialEq)]
pub enum Detail<T> {
    Fetched(Vec<T>),
    Deleted,
}

impl<T: Serialize> Serialize for Detail<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Detail::Fetched(items) => items.serialize(serializer),
            Detail::Deleted => serializer.serialize_str(DELETED),
        }
    }
}

/// A mapped stack whose copied fields have not been checked yet
#[derive(Debug, Clone, PartialEq)]
pub struct MappedStack {
    pub name: Option<String>,
    pub id: Option<String>,
    pub status: Option<String>,
    pub creation_timestamp: Option<String>,
    pub template: Option<String>,
    pub nested: bool,
    pub parameters: Detail<ParameterList>,
    pub resource_types: Detail<String>,
}

/// One entry of the JSON report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackRecord {
    #[serde(rename = "Stack Name")]
    pub name: String,
    #[serde(rename = "Stack ID")]
    pub id: String,
    #[serde(rename = "Stack Status")]
    pub status: String,
    #[serde(rename = "Stack Creation Timestamp")]
    pub creation_timestamp: String,
    #[serde(rename = "Stack Template")]
    pub template: String,
    #[serde(rename = "Nested")]
    pub nested: bool,
    #[serde(rename = "Stack Parameters")]
    pub parameters: Detail<ParameterList>,
    #[serde(rename = "Resource Types")]
    pub resource_types: Detail<String>,
}

fn require(value: Option<String>, field: &'static str) -> Result<String> {
    value.ok_or(PullError::MissingField { field })
}

impl MappedStack {
    /// Check every required key, in output order
    ///
    /// Fails on the first absent field; there is no partial record.
    pub fn validate(self) -> Result<StackRecord> {
        Ok(StackRecord {
            name: require(self.name, FIELD_KEYS[0])?,
            id: require(self.id, FIELD_KEYS[1])?,
            status: require(self.status, FIELD_KEYS[2])?,
            creation_timestamp: require(self.creation_timestamp, FIELD_KEYS[3])?,
            template: require(self.template, FIELD_KEYS[4])?,
            nested: self.nested,
            parameters: self.parameters,
            resource_types: self.resource_types,
        })
    }
}
