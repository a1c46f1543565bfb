//! Command line argument parsing for the pstore utility

use std::ffi::OsString;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, CommandFactory, Parser};

use pstore_cli::utils::args::{long_flags, normalize_long_flags};
use pstore_cli::{Action, CliConfig, ValidationError};
use pstore_core::{
    ClientConfig, CredentialMode, OutputFormat, ParameterType, PutRequest, DEFAULT_REGION,
};

/// AWS Systems Manager Parameter Store client
///
/// Lists every parameter with its current value (secure values are masked),
/// or creates, updates and deletes a single parameter.
///
/// Boolean flags may be given bare (`-csv`) or with an attached value
/// (`-csv=false`).
#[derive(Parser, Debug)]
#[command(
    name = "pstore",
    about = "List, create and delete AWS SSM parameters",
    disable_version_flag = true,
    args_override_self = true
)]
#[allow(clippy::struct_excessive_bools)]
pub struct PstoreOpts {
    /// Credential profile name
    #[arg(long = "profile", value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Role ARN to assume
    #[arg(long = "role", value_name = "ROLE_ARN")]
    pub role: Option<String>,

    /// Region name
    #[arg(long = "region", value_name = "REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Custom AWS API endpoint
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoint: Option<String>,

    /// Print the version and exit
    #[arg(
        long = "version",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub version: bool,

    /// Output as CSV
    #[arg(
        long = "csv",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub csv: bool,

    /// Output as JSON
    #[arg(
        long = "json",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub json: bool,

    /// Create or update a parameter
    #[arg(
        long = "put",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub put: bool,

    /// Parameter name
    #[arg(long = "name", value_name = "NAME", allow_hyphen_values = true)]
    pub name: Option<String>,

    /// Parameter value
    #[arg(long = "value", value_name = "VALUE", allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Overwrite an existing parameter
    #[arg(
        long = "overwrite",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub overwrite: bool,

    /// Store the parameter as a SecureString
    #[arg(
        long = "secure",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub secure: bool,

    /// Store the parameter as a StringList
    #[arg(
        long = "list",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub list: bool,

    /// Delete a parameter
    #[arg(
        long = "del",
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        default_value_t = false,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub del: bool,
}

impl PstoreOpts {
    /// Parse arguments, accepting single-dash long flags.
    pub fn try_parse_args<I>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut command = Self::command();
        command.build();
        let args = normalize_long_flags(args, &long_flags(&command));
        Self::try_parse_from(args)
    }

    fn required_name(&self, action: &'static str) -> Result<&str, ValidationError> {
        self.name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(ValidationError::MissingName { action })
    }

    /// Determine the action. Put wins over delete, list is the default.
    pub fn action(&self) -> Result<Action, ValidationError> {
        if self.put {
            let name = self.required_name("put")?;
            let kind = ParameterType::select(name, self.secure, self.list);
            let value = self.value.clone().unwrap_or_default();
            Ok(Action::Put(
                PutRequest::new(name, value, kind).with_overwrite(self.overwrite),
            ))
        } else if self.del {
            Ok(Action::Delete {
                name: self.required_name("delete")?.to_string(),
            })
        } else {
            Ok(Action::List)
        }
    }

    /// Build connection settings from the credential and endpoint flags
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            region: self.region.clone(),
            endpoint: self.endpoint.clone().filter(|e| !e.is_empty()),
            credentials: CredentialMode::from_inputs(self.profile.as_deref(), self.role.as_deref()),
        }
    }

    /// Build CLI configuration from the parsed options
    pub fn config(&self) -> Result<CliConfig, ValidationError> {
        Ok(CliConfig {
            client: self.client_config(),
            action: self.action()?,
            format: OutputFormat::from_flags(self.csv, self.json),
        })
    }
}
