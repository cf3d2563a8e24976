//! # OCS Protocol Layer
//!
//! The wire-level core of the crate: the `<ocs>` response envelope codec,
//! the success/failure interpreter, and the form-encoded request body
//! builder. Resource operations are thin enumerations over this layer.
//!
//! ```text
//! request:  FormBody ──encode──> application/x-www-form-urlencoded
//! response: bytes ──decode::<T>──> Envelope<T> ──interpret──> T | ClientError
//! ```

pub(crate) mod de;
mod envelope;
mod form;

pub use envelope::{decode, interpret, status, Envelope, Meta};
pub use form::FormBody;
