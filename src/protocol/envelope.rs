//! The `<ocs>` response envelope: status metadata plus a payload section
//! whose shape varies per endpoint.
//!
//! Every provisioning response, success or failure, is wrapped in this
//! envelope. The `meta > statuscode` value is authoritative: an HTTP 200
//! carrying a non-100 status code is a protocol failure, and payload
//! extraction is only allowed at status 100.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ClientError, ClientResult};
use crate::protocol::de;

/// OCS status codes observed from the provisioning endpoints.
///
/// Success is the single sentinel; everything else is a failure code and is
/// treated uniformly by [`interpret`]. Endpoints add their own small-integer
/// failure codes (101..103, envelope-level 404) on top of these.
pub mod status {
    /// Protocol-level success
    pub const SUCCESS: u16 = 100;
    /// Credentials rejected by the OCS layer
    pub const NOT_AUTHORIZED: u16 = 997;
    /// Addressed resource does not exist
    pub const NOT_FOUND: u16 = 998;
    /// Malformed or unsupported request
    pub const INVALID_REQUEST: u16 = 999;
}

/// The `meta` fragment common to every response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Meta {
    /// OCS-internal status code; 100 means success
    #[serde(rename = "statuscode")]
    pub status_code: u16,
    /// Human-readable status, e.g. `ok` or `failure`
    #[serde(default)]
    pub status: String,
    /// Optional human-readable failure detail
    #[serde(default)]
    pub message: Option<String>,
    /// Paging counter, emitted as an empty element on most endpoints
    #[serde(default, rename = "totalitems", deserialize_with = "de::empty_as_none")]
    pub total_items: Option<u64>,
    /// Paging counter, emitted as an empty element on most endpoints
    #[serde(default, rename = "itemsperpage", deserialize_with = "de::empty_as_none")]
    pub items_per_page: Option<u64>,
}

/// A decoded `<ocs>` envelope with payload shape `T`.
///
/// The payload type parameter is the per-endpoint schema: list wrappers for
/// the id-listing endpoints, [`UserDetails`](crate::types::UserDetails) for
/// the single-user endpoint, or an ignored acknowledgement for the
/// boolean-result operations.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    /// Status metadata, present on every response
    pub meta: Meta,
    /// Endpoint-specific payload; absent or empty on failures
    #[serde(default)]
    pub data: Option<T>,
}

/// Strictly parse a response body into an envelope.
///
/// A malformed document is a [`ClientError::Decode`], distinct from a
/// protocol failure. Absent optional fields decode to empty values.
pub fn decode<T>(body: &str) -> ClientResult<Envelope<T>>
where
    T: DeserializeOwned + Default,
{
    Ok(quick_xml::de::from_str(body)?)
}

/// Reduce a decoded envelope to its payload or an API error.
///
/// Success iff the status code equals [`status::SUCCESS`]; any other value
/// yields [`ClientError::Api`] with that code and the envelope message
/// (falling back to the status text when no message is present). A missing
/// or empty payload section on success yields the payload's default value,
/// so list endpoints return empty sequences rather than errors.
pub fn interpret<T>(envelope: Envelope<T>) -> ClientResult<T>
where
    T: Default,
{
    let meta = envelope.meta;
    if meta.status_code != status::SUCCESS {
        let message = meta
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or(meta.status);
        return Err(ClientError::api(meta.status_code, message));
    }
    Ok(envelope.data.unwrap_or_default())
}
