//! One authenticated HTTP round-trip against the OCS endpoint.
//!
//! The transport knows nothing about envelopes: it attaches the API-request
//! marker header and Basic credentials, ships an optional form body, and
//! reduces the outcome to the raw response text or an error. Anything other
//! than HTTP 200 is reported as a transport failure carrying the raw status
//! and body; the server may bury a failure envelope in such bodies, which
//! callers can still inspect through the error.

use std::time::Duration;

use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::Method;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::protocol::FormBody;

/// Marker header identifying the request as an API call, not a browser visit.
const OCS_API_REQUEST_HEADER: &str = "OCS-APIRequest";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Shared, stateless HTTP transport for one configured endpoint.
///
/// Holds the resolved base URL, the credentials, and a single
/// `reqwest::Client` built with the configured timeout. Safe to share
/// across tasks; no per-call mutable state.
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl Transport {
    pub(crate) fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;
        Ok(Self {
            http,
            base_url: format!("{}/ocs/v1.php", config.host.trim_end_matches('/')),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// Resolved OCS base URL (`<host>/ocs/v1.php`).
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one request and return the raw response body.
    ///
    /// `path` is relative to the OCS base (`cloud/users/...`). Query
    /// parameters are URL-encoded by the HTTP layer. A present form body
    /// sets the urlencoded content type and an explicit content length.
    pub(crate) async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        form: Option<&FormBody>,
    ) -> ClientResult<String> {
        let url = format!("{}/{}", self.base_url, path);

        let mut request = self
            .http
            .request(method.clone(), url.as_str())
            .header(OCS_API_REQUEST_HEADER, "true")
            .basic_auth(&self.username, Some(&self.password));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(form) = form {
            let encoded = form.encode();
            request = request
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .header(CONTENT_LENGTH, encoded.len())
                .body(encoded);
        }

        debug!(method = %method, url = %url, "sending OCS request");
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != reqwest::StatusCode::OK {
            warn!(status = status.as_u16(), url = %url, "OCS endpoint returned non-OK HTTP status");
            return Err(ClientError::unexpected_status(status.as_u16(), body));
        }
        Ok(body)
    }
}
