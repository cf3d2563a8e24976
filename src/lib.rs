//! # nextcloud-provisioning
//!
//! Typed client for the Nextcloud OCS Provisioning API: user and group
//! administration over the XML-over-HTTP `ocs/v1.php` endpoint.
//!
//! ## Design
//!
//! The crate is split into a small protocol core and a thin operation layer:
//!
//! ```text
//! Client
//!   ├── Transport            <- one authenticated HTTP round-trip per call
//!   ├── protocol::Envelope   <- <ocs> response wrapper, decode + interpret
//!   ├── protocol::FormBody   <- url-encoded request bodies, groups[] keys
//!   └── api::{users, groups} <- one method per provisioning operation
//! ```
//!
//! Every response, success or failure, arrives wrapped in the OCS envelope;
//! the envelope status code (100 = success) is authoritative over the HTTP
//! status. Operations either return the typed payload or a [`ClientError`]
//! describing exactly which layer failed.
//!
//! ## Example
//!
//! ```no_run
//! use nextcloud_provisioning::{Client, ClientResult, NewUser};
//!
//! async fn provision() -> ClientResult<()> {
//!     let client = Client::new("https://cloud.example.com", "admin", "secret")?;
//!
//!     let user = NewUser::new("john.doe")
//!         .email("john.doe@example.com")
//!         .groups(["employees"]);
//!     client.create_user(&user).await?;
//!
//!     for group in client.get_groups().await? {
//!         println!("{group}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Thread safety
//!
//! [`Client`] is `Send + Sync` and holds no per-call mutable state; a single
//! instance may be shared across tasks and used concurrently.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod types;

mod transport;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use types::{BackendCapabilities, NewUser, UserDetails, UserQuota, QUOTA_UNLIMITED};
