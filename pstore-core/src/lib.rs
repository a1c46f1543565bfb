//! # pstore-core
//!
//! Listing, redaction and rendering pipeline for AWS Systems Manager
//! Parameter Store.
//!
//! The remote store is reached through the [`ParameterStore`] trait.
//! [`SsmStore`] talks to AWS. With the `test-util` feature, `MemoryStore`
//! keeps everything in process for test suites.
//!
//! A listing walks every describe page lazily ([`pagination`]), fetches each
//! value with decryption, redacts `SecureString` values while the records are
//! assembled ([`list_all`]), and hands the result to [`render`].
//!
//! ```no_run
//! use pstore_core::{list_all, render, ClientConfig, OutputFormat, SsmStore};
//!
//! # async fn example() -> pstore_core::Result<()> {
//! let store = SsmStore::connect(&ClientConfig::default()).await;
//! let parameters = list_all(&store).await?;
//! render(&parameters, OutputFormat::Json, &mut std::io::stdout().lock())?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod credentials;
pub mod error;
pub mod lister;
#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod pagination;
pub mod parameter;
pub mod render;
pub mod ssm;
pub mod store;

pub use config::{ClientConfig, CredentialMode, DEFAULT_REGION};
pub use credentials::CredentialSource;
pub use error::{Error, Operation, Result};
pub use lister::list_all;
#[cfg(any(test, feature = "test-util"))]
pub use memory::MemoryStore;
pub use parameter::{
    ParameterCollection, ParameterDescriptor, ParameterRecord, ParameterType, ParameterValue,
    REDACTED_VALUE,
};
pub use render::{render, OutputFormat, TABLE_HEADER};
pub use ssm::SsmStore;
pub use store::{DescribePage, ParameterStore, PutRequest};
