//! In-process parameter store.
//!
//! [`MemoryStore`] keeps parameters in insertion order and pages through them
//! with opaque `T<n>` continuation tokens, reporting the same "already exists"
//! and "not found" failures as the remote service. Only built for this
//! crate's tests and with the `test-util` feature.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::{Error, Operation, Result};
use crate::parameter::{ParameterDescriptor, ParameterType, ParameterValue};
use crate::store::{DescribePage, ParameterStore, PutRequest};

/// Page size used by [`MemoryStore::new`], matching the service default.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    value: String,
    kind: ParameterType,
    description: Option<String>,
    last_modified: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct State {
    entries: Vec<Entry>,
    failing_gets: HashSet<String>,
    describe_calls: usize,
    get_calls: usize,
}

/// Parameter store held entirely in memory.
#[derive(Debug)]
pub struct MemoryStore {
    page_size: usize,
    state: Mutex<State>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store with [`DEFAULT_PAGE_SIZE`].
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Create an empty store returning at most `page_size` descriptors per page.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            state: Mutex::new(State::default()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Insert or replace a parameter with an explicit modification time.
    pub fn insert_at(
        &self,
        name: &str,
        value: &str,
        kind: ParameterType,
        last_modified: DateTime<Utc>,
    ) {
        let entry = Entry {
            name: name.to_string(),
            value: value.to_string(),
            kind,
            description: None,
            last_modified,
        };

        let mut state = self.lock();
        match state.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => *existing = entry,
            None => state.entries.push(entry),
        }
    }

    /// Make every later get of `name` fail.
    pub fn fail_get_of(&self, name: &str) {
        self.lock().failing_gets.insert(name.to_string());
    }

    /// Stored value of `name`, without redaction.
    pub fn value_of(&self, name: &str) -> Option<(String, ParameterType)> {
        self.lock()
            .entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| (e.value.clone(), e.kind))
    }

    /// Stored description of `name`.
    pub fn description_of(&self, name: &str) -> Option<String> {
        self.lock()
            .entries
            .iter()
            .find(|e| e.name == name)
            .and_then(|e| e.description.clone())
    }

    /// Number of stored parameters.
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    /// Returns `true` if no parameters are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of describe requests served so far.
    pub fn describe_calls(&self) -> usize {
        self.lock().describe_calls
    }

    /// Number of get requests served so far.
    pub fn get_calls(&self) -> usize {
        self.lock().get_calls
    }
}

fn parse_token(token: &str) -> Result<usize> {
    token
        .strip_prefix('T')
        .and_then(|index| index.parse().ok())
        .ok_or_else(|| {
            Error::remote(
                Operation::Describe,
                format!("InvalidNextToken: the token '{token}' is not valid"),
            )
        })
}

#[async_trait]
impl ParameterStore for MemoryStore {
    async fn describe_page(&self, next_token: Option<String>) -> Result<DescribePage> {
        let page = match next_token.as_deref() {
            Some(token) => parse_token(token)?,
            None => 0,
        };

        let mut state = self.lock();
        state.describe_calls += 1;

        let total = state.entries.len();
        let start = page.saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);

        let descriptors = state.entries[start..end]
            .iter()
            .map(|e| ParameterDescriptor {
                name: e.name.clone(),
                kind: e.kind,
                last_modified: Some(e.last_modified),
            })
            .collect();

        Ok(DescribePage {
            descriptors,
            next_token: (end < total).then(|| format!("T{}", page + 1)),
        })
    }

    async fn get_value(&self, name: &str) -> Result<ParameterValue> {
        let mut state = self.lock();
        state.get_calls += 1;

        if state.failing_gets.contains(name) {
            return Err(Error::remote(
                Operation::Get,
                format!("InternalServerError: failed to read {name}"),
            ));
        }

        state
            .entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| ParameterValue {
                value: e.value.clone(),
                kind: e.kind,
            })
            .ok_or_else(|| Error::remote(Operation::Get, format!("ParameterNotFound: {name}")))
    }

    async fn put(&self, request: &PutRequest) -> Result<()> {
        let entry = Entry {
            name: request.name.clone(),
            value: request.value.clone(),
            kind: request.kind,
            description: request.description.clone(),
            last_modified: Utc::now(),
        };

        let mut state = self.lock();
        match state.entries.iter_mut().find(|e| e.name == request.name) {
            Some(_) if !request.overwrite => Err(Error::remote(
                Operation::Put,
                format!(
                    "ParameterAlreadyExists: the parameter {} already exists; \
                     set overwrite to replace it",
                    request.name
                ),
            )),
            Some(existing) => {
                *existing = entry;
                Ok(())
            }
            None => {
                state.entries.push(entry);
                Ok(())
            }
        }
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let mut state = self.lock();
        let before = state.entries.len();
        state.entries.retain(|e| e.name != name);

        if state.entries.len() == before {
            return Err(Error::remote(
                Operation::Delete,
                format!("ParameterNotFound: {name}"),
            ));
        }
        Ok(())
    }
}
