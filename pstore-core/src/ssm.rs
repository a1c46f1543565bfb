//! [`ParameterStore`] backed by AWS Systems Manager.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::primitives::DateTime as SmithyDateTime;
use aws_sdk_ssm::types::{ParameterMetadata, ParameterType as SsmParameterType};
use aws_sdk_ssm::Client;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::credentials::CredentialSource;
use crate::error::{Error, Operation, Result};
use crate::parameter::{ParameterDescriptor, ParameterType, ParameterValue};
use crate::store::{DescribePage, ParameterStore, PutRequest};

/// SSM client bound to one region, endpoint and credential source.
#[derive(Debug, Clone)]
pub struct SsmStore {
    client: Client,
}

impl SsmStore {
    /// Build a client for `config`.
    ///
    /// The explicit region and endpoint override anything found in the
    /// environment or shared config files.
    pub async fn connect(config: &ClientConfig) -> Self {
        let source = CredentialSource::resolve(config).await;
        debug!(
            region = %config.region,
            endpoint = config.endpoint.as_deref().unwrap_or("-"),
            credentials = source.label(),
            "building SSM client"
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));
        if let Some(endpoint) = config.endpoint.as_deref().filter(|e| !e.is_empty()) {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = source.apply(loader).load().await;

        Self::from_client(Client::new(&sdk_config))
    }

    /// Wrap an already configured client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

fn parse_type(operation: Operation, kind: Option<&SsmParameterType>) -> Result<ParameterType> {
    kind.ok_or(Error::MalformedResponse {
        operation,
        field: "Type",
    })?
    .as_str()
    .parse()
}

fn to_utc(timestamp: &SmithyDateTime) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp.secs(), timestamp.subsec_nanos())
}

fn to_descriptor(metadata: &ParameterMetadata) -> Result<ParameterDescriptor> {
    let name = metadata.name().ok_or(Error::MalformedResponse {
        operation: Operation::Describe,
        field: "Name",
    })?;

    Ok(ParameterDescriptor {
        name: name.to_string(),
        kind: parse_type(Operation::Describe, metadata.r#type())?,
        last_modified: metadata.last_modified_date().and_then(to_utc),
    })
}

#[async_trait]
impl ParameterStore for SsmStore {
    async fn describe_page(&self, next_token: Option<String>) -> Result<DescribePage> {
        let output = self
            .client
            .describe_parameters()
            .set_next_token(next_token)
            .send()
            .await
            .map_err(|e| Error::remote(Operation::Describe, DisplayErrorContext(&e)))?;

        let descriptors = output
            .parameters()
            .iter()
            .map(to_descriptor)
            .collect::<Result<Vec<_>>>()?;

        Ok(DescribePage {
            descriptors,
            next_token: output.next_token().map(str::to_string),
        })
    }

    async fn get_value(&self, name: &str) -> Result<ParameterValue> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| Error::remote(Operation::Get, DisplayErrorContext(&e)))?;

        let parameter = output.parameter().ok_or(Error::MalformedResponse {
            operation: Operation::Get,
            field: "Parameter",
        })?;

        Ok(ParameterValue {
            value: parameter.value().unwrap_or_default().to_string(),
            kind: parse_type(Operation::Get, parameter.r#type())?,
        })
    }

    async fn put(&self, request: &PutRequest) -> Result<()> {
        debug!(
            name = %request.name,
            kind = %request.kind,
            overwrite = request.overwrite,
            "putting parameter"
        );

        self.client
            .put_parameter()
            .name(&request.name)
            .value(&request.value)
            .set_description(request.description.clone())
            .r#type(SsmParameterType::from(request.kind.as_str()))
            .set_overwrite(request.overwrite.then_some(true))
            .send()
            .await
            .map_err(|e| Error::remote(Operation::Put, DisplayErrorContext(&e)))?;

        info!(name = %request.name, "parameter stored");
        Ok(())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.client
            .delete_parameter()
            .name(name)
            .send()
            .await
            .map_err(|e| Error::remote(Operation::Delete, DisplayErrorContext(&e)))?;

        info!(%name, "parameter deleted");
        Ok(())
    }
}
