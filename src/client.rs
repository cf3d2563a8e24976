//! The provisioning client facade.
//!
//! [`Client`] ties the transport to the envelope codec and interpreter.
//! Resource operations live in [`crate::api`] as `impl Client` blocks; this
//! module only provides construction and the two request pipelines every
//! operation funnels through: `fetch` for payload-returning calls and
//! `execute` for boolean-result calls.

use reqwest::Method;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::protocol::{self, FormBody};
use crate::transport::Transport;
use crate::types::Ack;

/// Client for the Nextcloud OCS Provisioning API.
///
/// Construction resolves the base URL and builds the HTTP client once;
/// afterwards the instance is immutable. Cloning is cheap (the underlying
/// HTTP client is reference-counted) and a single instance may be shared
/// across tasks.
#[derive(Debug, Clone)]
pub struct Client {
    transport: Transport,
}

impl Client {
    /// Create a client for `host` with the default 10 second timeout.
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> ClientResult<Self> {
        Self::from_config(ClientConfig::new(host, username, password))
    }

    /// Create a client from a resolved configuration.
    pub fn from_config(config: ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            transport: Transport::new(&config)?,
        })
    }

    /// Resolved OCS base URL, mainly useful in logs and diagnostics.
    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Run one request and extract a typed payload.
    pub(crate) async fn fetch<T>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        form: Option<&FormBody>,
    ) -> ClientResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let body = self.transport.send(method, path, query, form).await?;
        let envelope = protocol::decode::<T>(&body)?;
        protocol::interpret(envelope)
    }

    /// Run one boolean-result request: any status-100 envelope is success.
    pub(crate) async fn execute(
        &self,
        method: Method,
        path: &str,
        form: Option<&FormBody>,
    ) -> ClientResult<()> {
        self.fetch::<Ack>(method, path, &[], form).await.map(|_| ())
    }
}
