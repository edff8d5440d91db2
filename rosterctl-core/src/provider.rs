//! Member sources and the data provider that owns the member list
//!
//! The provider is the single source of truth for the session. It is filled
//! exactly once from a `MemberSource` and afterwards only shrinks through
//! `remove` (bulk delete). Fetch failures are logged and swallowed: consumers
//! only ever see a list, possibly empty.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{debug, error, info, instrument};

use crate::config::SourceConfig;
use crate::error::{Result, RosterError};
use crate::member::{parse_members, Member, MemberId};

/// Anything that can produce the full member list in one read
#[async_trait]
pub trait MemberSource: Send + Sync {
    /// Human-readable description (URL or path) for logs and status lines
    fn describe(&self) -> String;

    /// Read the complete list, in source order
    async fn fetch(&self) -> Result<Vec<Member>>;
}

/// Remote JSON endpoint, read with a single unauthenticated GET
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a source with reqwest defaults (no request timeout)
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Create a source with an optional request timeout
    pub fn with_timeout(url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let url = url.into();
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| RosterError::http(&url, e))?;
        Ok(Self { client, url })
    }

    /// Build from the `[source]` config table
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        Self::with_timeout(
            config.endpoint.clone(),
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl MemberSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<Vec<Member>> {
        debug!(url = %self.url, "GET members");

        let response = self
            .client
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| RosterError::http(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RosterError::status(&self.url, status.as_u16(), body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| RosterError::http(&self.url, e))?;

        parse_members(&bytes, &self.url)
    }
}

/// Local JSON file with the same shape as the endpoint response
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl MemberSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Vec<Member>> {
        debug!(path = %self.path.display(), "reading members");

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| RosterError::io(&self.path, e))?;

        parse_members(&bytes, &self.path.display().to_string())
    }
}

/// Owner of the member list
#[derive(Debug, Default, Clone)]
pub struct DataProvider {
    members: Vec<Member>,
}

impl DataProvider {
    /// Empty provider, before the fetch completes
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider pre-filled with a list
    pub fn with_members(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// Fetch once from `source` and hold the result
    ///
    /// Never fails: on error the list stays empty and the error is logged.
    #[instrument(skip_all, fields(source = %source.describe()))]
    pub async fn initialize(source: &dyn MemberSource) -> Self {
        let mut provider = Self::new();
        provider.receive(source.fetch().await);
        provider
    }

    /// Completion callback for a fetch that ran elsewhere
    ///
    /// A successful result replaces the list verbatim. A failure is logged and
    /// leaves the current list untouched.
    pub fn receive(&mut self, result: Result<Vec<Member>>) {
        match result {
            Ok(members) => {
                info!(count = members.len(), "Loaded members");
                self.members = members;
            }
            Err(err) => {
                error!(error = %err, "Error fetching members");
            }
        }
    }

    /// Current member list, in source order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Drop every member whose id is in `ids`, returning how many were removed
    pub fn remove(&mut self, ids: &[MemberId]) -> usize {
        if ids.is_empty() {
            return 0;
        }
        let before = self.members.len();
        self.members.retain(|member| !ids.contains(&member.id));
        let removed = before - self.members.len();
        info!(removed, remaining = self.members.len(), "Deleted members");
        removed
    }
}
