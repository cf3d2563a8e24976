//! Shared helpers for wire-level tests.
//!
//! Each test builds its own [`TestCase`] (credentials and expectations are
//! per-case values, never shared mutable fixtures), mounts wiremock
//! responders that assert the OCS marker header and the exact Basic auth
//! header, and drives the public client against the mock server.

#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer};

use nextcloud_provisioning::Client;

pub const USER: &str = "the-user";
pub const PASS: &str = "the-secret-password";

/// Failure envelope the server returns alongside HTTP 401.
pub const BAD_LOGIN_BODY: &str = r#"<?xml version="1.0"?><ocs><meta><status>failure</status><statuscode>997</statuscode><message>Current user is not logged in</message><totalitems></totalitems><itemsperpage></itemsperpage></meta><data/></ocs>"#;

/// Credentials for one test case.
pub struct TestCase {
    pub username: String,
    pub password: String,
}

impl Default for TestCase {
    fn default() -> Self {
        Self {
            username: USER.to_string(),
            password: PASS.to_string(),
        }
    }
}

impl TestCase {
    pub fn bad_credentials() -> Self {
        Self {
            username: "bad-user".to_string(),
            password: "bad-pass".to_string(),
        }
    }

    /// Client pointed at the mock server with this case's credentials.
    pub fn client(&self, server: &MockServer) -> Client {
        Client::new(server.uri(), self.username.as_str(), self.password.as_str())
            .expect("client should construct")
    }

    /// The exact `Authorization` header value the client must send.
    pub fn auth_header(&self) -> String {
        let raw = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

/// Start a responder builder for an OCS endpoint, asserting the marker
/// header and this case's Basic auth header.
pub fn ocs_endpoint(case: &TestCase, http_method: &str, ocs_path: &str) -> MockBuilder {
    Mock::given(method(http_method))
        .and(path(format!("/ocs/v1.php/{ocs_path}")))
        .and(header("OCS-APIRequest", "true"))
        .and(header("authorization", case.auth_header()))
}

/// A status-100 envelope wrapping `data_xml` as the data section.
pub fn ok_envelope(data_xml: &str) -> String {
    format!(
        r#"<?xml version="1.0"?><ocs><meta><status>ok</status><statuscode>100</statuscode><message>OK</message><totalitems></totalitems><itemsperpage></itemsperpage></meta>{data_xml}</ocs>"#
    )
}

/// A failure envelope with the given OCS status code and message.
pub fn failure_envelope(status_code: u16, message: &str) -> String {
    format!(
        r#"<?xml version="1.0"?><ocs><meta><status>failure</status><statuscode>{status_code}</statuscode><message>{message}</message><totalitems></totalitems><itemsperpage></itemsperpage></meta><data/></ocs>"#
    )
}

/// The minimal acknowledgement body of boolean-result operations.
pub fn simple_ok() -> String {
    ok_envelope("<data/>")
}
