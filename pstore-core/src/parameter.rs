//! Parameter data model shared by the store, lister and renderer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use crate::error::Error;

/// Placeholder shown instead of the decrypted value of a `SecureString`.
pub const REDACTED_VALUE: &str = "******************";

/// Offset of the display time zone (UTC+9) in seconds.
pub const DISPLAY_UTC_OFFSET_SECS: i32 = 9 * 60 * 60;

/// Layout used for the `LastModifiedDate` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Path separator that marks a hierarchical parameter name.
pub const PATH_SEPARATOR: char = '/';

/// Value type of a stored parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ParameterType {
    /// Plain text value
    String,
    /// Comma-separated list of values
    StringList,
    /// Value encrypted at rest
    SecureString,
}

impl ParameterType {
    /// Wire name of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterType::String => "String",
            ParameterType::StringList => "StringList",
            ParameterType::SecureString => "SecureString",
        }
    }

    /// Returns `true` for values that must never be displayed.
    pub fn is_secure(self) -> bool {
        self == ParameterType::SecureString
    }

    /// Choose the type of a new parameter.
    ///
    /// `secure` wins. Otherwise the `list` flag, or a name containing
    /// [`PATH_SEPARATOR`], selects `StringList`. Everything else is a `String`.
    pub fn select(name: &str, secure: bool, list: bool) -> Self {
        if secure {
            ParameterType::SecureString
        } else if list || name.contains(PATH_SEPARATOR) {
            ParameterType::StringList
        } else {
            ParameterType::String
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParameterType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "String" => Ok(ParameterType::String),
            "StringList" => Ok(ParameterType::StringList),
            "SecureString" => Ok(ParameterType::SecureString),
            other => Err(Error::UnknownParameterType(other.to_string())),
        }
    }
}

/// One entry of a describe page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    /// Parameter name
    pub name: String,
    /// Declared type
    pub kind: ParameterType,
    /// Last modification time, if the store reported one
    pub last_modified: Option<DateTime<Utc>>,
}

/// Current value of a parameter as returned by a get call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterValue {
    /// Decrypted value
    pub value: String,
    /// Type reported alongside the value
    pub kind: ParameterType,
}

/// A parameter ready for display.
///
/// Records are only built through [`ParameterRecord::from_parts`], which
/// applies secure-value redaction, so no renderer ever sees a secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterRecord {
    name: String,
    value: String,
    #[serde(rename = "type")]
    kind: ParameterType,
    #[serde(rename = "last_modified_date")]
    last_modified: String,
}

impl ParameterRecord {
    /// Assemble a record from a descriptor and its fetched value.
    ///
    /// The value is replaced with [`REDACTED_VALUE`] when either the
    /// descriptor or the fetched value is a `SecureString`.
    pub fn from_parts(descriptor: ParameterDescriptor, fetched: ParameterValue) -> Self {
        let value = if descriptor.kind.is_secure() || fetched.kind.is_secure() {
            REDACTED_VALUE.to_string()
        } else {
            fetched.value
        };

        Self {
            name: descriptor.name,
            value,
            kind: descriptor.kind,
            last_modified: descriptor
                .last_modified
                .map(format_timestamp)
                .unwrap_or_default(),
        }
    }

    /// Parameter name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display value (redacted for secure parameters).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parameter type.
    pub fn kind(&self) -> ParameterType {
        self.kind
    }

    /// Last modification time formatted in the display time zone.
    pub fn last_modified(&self) -> &str {
        &self.last_modified
    }

    /// Column values in display order.
    pub fn fields(&self) -> [&str; 4] {
        [
            &self.name,
            &self.value,
            self.kind.as_str(),
            &self.last_modified,
        ]
    }
}

/// Ordered list of records in store enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParameterCollection {
    parameters: Vec<ParameterRecord>,
}

impl ParameterCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, keeping encounter order.
    pub fn push(&mut self, record: ParameterRecord) {
        self.parameters.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns `true` if there are no records.
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Iterate over the records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ParameterRecord> {
        self.parameters.iter()
    }
}

impl FromIterator<ParameterRecord> for ParameterCollection {
    fn from_iter<I: IntoIterator<Item = ParameterRecord>>(iter: I) -> Self {
        Self {
            parameters: iter.into_iter().collect(),
        }
    }
}

impl Extend<ParameterRecord> for ParameterCollection {
    fn extend<I: IntoIterator<Item = ParameterRecord>>(&mut self, iter: I) {
        self.parameters.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ParameterCollection {
    type Item = &'a ParameterRecord;
    type IntoIter = std::slice::Iter<'a, ParameterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Format a UTC timestamp in the display time zone.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    match FixedOffset::east_opt(DISPLAY_UTC_OFFSET_SECS) {
        Some(offset) => timestamp
            .with_timezone(&offset)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
        None => timestamp.format(TIMESTAMP_FORMAT).to_string(),
    }
}
