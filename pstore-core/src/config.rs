//! Client configuration shared by the credential resolver and the store client.

/// Region used when none is given on the command line.
pub const DEFAULT_REGION: &str = "ap-northeast-1";

/// How credentials for the remote store are obtained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CredentialMode {
    /// Ambient default chain (environment, shared config, instance metadata)
    #[default]
    Default,
    /// Named profile from the shared credentials file
    Profile(String),
    /// Role to assume on top of the default chain
    Role(String),
}

impl CredentialMode {
    /// Pick a mode from the optional profile and role inputs.
    ///
    /// Empty strings count as unset. A profile takes precedence over a role,
    /// and with neither the default chain is used.
    pub fn from_inputs(profile: Option<&str>, role: Option<&str>) -> Self {
        match (
            profile.filter(|p| !p.is_empty()),
            role.filter(|r| !r.is_empty()),
        ) {
            (Some(profile), _) => CredentialMode::Profile(profile.to_string()),
            (None, Some(role)) => CredentialMode::Role(role.to_string()),
            (None, None) => CredentialMode::Default,
        }
    }
}

/// Connection settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Target region
    pub region: String,
    /// Custom API endpoint, if any
    pub endpoint: Option<String>,
    /// Credential strategy
    pub credentials: CredentialMode,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            endpoint: None,
            credentials: CredentialMode::Default,
        }
    }
}
