//! Credential strategy resolution.
//!
//! Turns a [`CredentialMode`] into the provider handed to the SDK config
//! loader. Token refresh for assumed roles is left to the provider itself.

use aws_config::profile::ProfileFileCredentialsProvider;
use aws_config::sts::AssumeRoleProvider;
use aws_config::{ConfigLoader, Region};
use tracing::debug;

use crate::config::{ClientConfig, CredentialMode};

/// Session name used for assume-role requests.
pub const ROLE_SESSION_NAME: &str = "pstore";

/// Credential provider selected for one invocation.
pub enum CredentialSource {
    /// Let the SDK walk its default chain
    DefaultChain,
    /// Shared credentials file, named profile
    Profile(ProfileFileCredentialsProvider),
    /// Temporary credentials for an assumed role
    AssumeRole(AssumeRoleProvider),
}

impl CredentialSource {
    /// Build the provider for `config`.
    ///
    /// No credentials are fetched here; providers load lazily on the first
    /// signed request.
    pub async fn resolve(config: &ClientConfig) -> Self {
        match &config.credentials {
            CredentialMode::Default => {
                debug!("using default credential chain");
                CredentialSource::DefaultChain
            }
            CredentialMode::Profile(profile) => {
                debug!(%profile, "using shared credentials profile");
                CredentialSource::Profile(
                    ProfileFileCredentialsProvider::builder()
                        .profile_name(profile)
                        .build(),
                )
            }
            CredentialMode::Role(role) => {
                debug!(%role, "using assume-role credentials");
                CredentialSource::AssumeRole(
                    AssumeRoleProvider::builder(role)
                        .session_name(ROLE_SESSION_NAME)
                        .region(Region::new(config.region.clone()))
                        .build()
                        .await,
                )
            }
        }
    }

    /// Short label for log output.
    pub fn label(&self) -> &'static str {
        match self {
            CredentialSource::DefaultChain => "default",
            CredentialSource::Profile(_) => "profile",
            CredentialSource::AssumeRole(_) => "assume-role",
        }
    }

    /// Install this provider on an SDK config loader.
    pub fn apply(self, loader: ConfigLoader) -> ConfigLoader {
        match self {
            CredentialSource::DefaultChain => loader,
            CredentialSource::Profile(provider) => loader.credentials_provider(provider),
            CredentialSource::AssumeRole(provider) => loader.credentials_provider(provider),
        }
    }
}
