//! The remote parameter store capability.

use async_trait::async_trait;

use crate::error::Result;
use crate::parameter::{ParameterDescriptor, ParameterType, ParameterValue};

/// One page of a describe call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribePage {
    /// Descriptors in store order
    pub descriptors: Vec<ParameterDescriptor>,
    /// Opaque cursor for the next page
    pub next_token: Option<String>,
}

/// Arguments of a put call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutRequest {
    /// Parameter name
    pub name: String,
    /// New value
    pub value: String,
    /// Value type
    pub kind: ParameterType,
    /// Replace an existing parameter instead of failing
    pub overwrite: bool,
    /// Free-form description stored with the parameter
    pub description: Option<String>,
}

impl PutRequest {
    /// Build a request whose description is the parameter name.
    pub fn new(name: impl Into<String>, value: impl Into<String>, kind: ParameterType) -> Self {
        let name = name.into();
        Self {
            description: Some(name.clone()),
            name,
            value: value.into(),
            kind,
            overwrite: false,
        }
    }

    /// Set the overwrite flag.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Operations the tool needs from a parameter store.
///
/// Every call maps to exactly one remote request. Implementations must not
/// retry on their own.
#[async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch one page of descriptors starting at `next_token`.
    async fn describe_page(&self, next_token: Option<String>) -> Result<DescribePage>;

    /// Fetch the current value of `name`, decrypting secure values.
    async fn get_value(&self, name: &str) -> Result<ParameterValue>;

    /// Create or replace a parameter.
    async fn put(&self, request: &PutRequest) -> Result<()>;

    /// Delete a parameter.
    async fn delete(&self, name: &str) -> Result<()>;
}
