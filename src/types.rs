//! Domain types for the provisioning API: the new-user value object with its
//! pre-flight validation, the decoded user-detail record, and the
//! crate-private wrappers that describe each endpoint's payload shape.

use serde::Deserialize;

use crate::protocol::{de, FormBody};

/// Quota sentinel for accounts without a storage limit.
pub const QUOTA_UNLIMITED: &str = "none";

/// Input for [`Client::create_user`](crate::Client::create_user).
///
/// `user_id` is required and at least one of `password` / `email` must be
/// set; the server provisions a login password from the email otherwise.
/// Everything else is optional. Validation runs before any request is made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub user_id: String,
    pub password: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub group_ids: Vec<String>,
    pub subadmin_group_ids: Vec<String>,
    pub quota: Option<String>,
    pub language: Option<String>,
}

impl NewUser {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    #[must_use]
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Groups the user is added to on creation.
    #[must_use]
    pub fn groups<I, S>(mut self, group_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_ids = group_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Groups the user becomes a subadmin of on creation.
    #[must_use]
    pub fn subadmin_groups<I, S>(mut self, group_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subadmin_group_ids = group_ids.into_iter().map(Into::into).collect();
        self
    }

    /// Storage quota: a byte count, a human-readable size the server
    /// accepts, or [`QUOTA_UNLIMITED`].
    #[must_use]
    pub fn quota(mut self, quota: impl Into<String>) -> Self {
        self.quota = Some(quota.into());
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Check the value object before serialization.
    ///
    /// Problems accumulate rather than short-circuiting, so a caller sees
    /// every defect at once.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();
        if self.user_id.is_empty() {
            problems.push("UserId must not be empty".to_string());
        }
        let password_blank = self.password.as_deref().unwrap_or("").is_empty();
        let email_blank = self.email.as_deref().unwrap_or("").is_empty();
        if password_blank && email_blank {
            problems.push("Either Password or Email must be set".to_string());
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }

    /// Serialize to the creation form body. Field order is fixed; list
    /// fields use the repeated `groups[]` / `subadmin[]` key convention.
    pub(crate) fn form_body(&self) -> FormBody {
        let mut body = FormBody::new();
        body.set("userid", self.user_id.as_str());
        if let Some(password) = self.password.as_deref().filter(|v| !v.is_empty()) {
            body.set("password", password);
        }
        if let Some(display_name) = self.display_name.as_deref().filter(|v| !v.is_empty()) {
            body.set("displayName", display_name);
        }
        if let Some(email) = self.email.as_deref().filter(|v| !v.is_empty()) {
            body.set("email", email);
        }
        body.set_list("groups", self.group_ids.iter().map(String::as_str));
        body.set_list("subadmin", self.subadmin_group_ids.iter().map(String::as_str));
        if let Some(quota) = self.quota.as_deref().filter(|v| !v.is_empty()) {
            body.set("quota", quota);
        }
        if let Some(language) = self.language.as_deref().filter(|v| !v.is_empty()) {
            body.set("language", language);
        }
        body
    }
}

/// Storage quota fragment of a user-detail payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserQuota {
    #[serde(default)]
    pub free: i64,
    #[serde(default)]
    pub used: i64,
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub relative: f32,
    /// Configured quota: a byte count, `none`, or a backend sentinel like `-3`
    #[serde(default)]
    pub quota: String,
}

/// Capability flags reported by the account's storage backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BackendCapabilities {
    #[serde(default, rename = "setDisplayName", deserialize_with = "de::wire_bool")]
    pub set_display_name: bool,
    #[serde(default, rename = "setPassword", deserialize_with = "de::wire_bool")]
    pub set_password: bool,
}

/// Full detail record for a single user, as returned by
/// [`Client::get_user_details`](crate::Client::get_user_details).
///
/// Fields the server omits decode to their empty values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserDetails {
    #[serde(default, deserialize_with = "de::wire_bool")]
    pub enabled: bool,
    #[serde(default, rename = "storageLocation")]
    pub storage_location: String,
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "lastLogin")]
    pub last_login: String,
    #[serde(default)]
    pub backend: String,
    /// Group ids this user administrates
    #[serde(default, deserialize_with = "de::element_list")]
    pub subadmin: Vec<String>,
    #[serde(default)]
    pub quota: Option<UserQuota>,
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "displayname")]
    pub display_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub twitter: String,
    /// Group ids this user belongs to
    #[serde(default, deserialize_with = "de::element_list")]
    pub groups: Vec<String>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub locale: String,
    #[serde(default, rename = "backendCapabilities")]
    pub backend_capabilities: BackendCapabilities,
}

// Wire payload wrappers, one per data-section shape. These never escape the
// crate; operations unwrap them to plain vectors.

/// `data > users > element*`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct UserList {
    #[serde(default, deserialize_with = "de::element_list")]
    pub(crate) users: Vec<String>,
}

/// `data > groups > element*`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct GroupList {
    #[serde(default, deserialize_with = "de::element_list")]
    pub(crate) groups: Vec<String>,
}

/// `data > element*` (subadmin listings)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct FlatList {
    #[serde(default)]
    pub(crate) element: Vec<String>,
}

/// Ignored payload of boolean-result operations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub(crate) struct Ack {}
