//! User resource operations (`/cloud/users...`).

use reqwest::Method;
use tracing::debug;

use crate::client::Client;
use crate::error::{ClientError, ClientResult};
use crate::protocol::FormBody;
use crate::types::{FlatList, GroupList, NewUser, UserDetails, UserList};

impl Client {
    /// List all user ids.
    pub async fn get_users(&self) -> ClientResult<Vec<String>> {
        let payload: UserList = self.fetch(Method::GET, "cloud/users", &[], None).await?;
        Ok(payload.users)
    }

    /// Create a user from a validated [`NewUser`].
    ///
    /// Validation problems short-circuit before any request is issued and
    /// are reported as one combined [`ClientError::Validation`].
    pub async fn create_user(&self, user: &NewUser) -> ClientResult<()> {
        if let Err(problems) = user.validate() {
            debug!(user_id = %user.user_id, "rejecting create_user before dispatch");
            return Err(ClientError::validation(&problems));
        }
        self.execute(Method::POST, "cloud/users", Some(&user.form_body()))
            .await
    }

    /// Fetch the full detail record for one user.
    pub async fn get_user_details(&self, user_id: &str) -> ClientResult<UserDetails> {
        self.fetch(Method::GET, &format!("cloud/users/{user_id}"), &[], None)
            .await
    }

    /// Update a single attribute of a user (`key` / `value` form).
    pub async fn update_user_detail(
        &self,
        user_id: &str,
        attribute: &str,
        value: &str,
    ) -> ClientResult<()> {
        let mut body = FormBody::new();
        body.set("key", attribute).set("value", value);
        self.execute(Method::PUT, &format!("cloud/users/{user_id}"), Some(&body))
            .await
    }

    /// Enable a previously disabled user.
    pub async fn enable_user(&self, user_id: &str) -> ClientResult<()> {
        self.execute(Method::PUT, &format!("cloud/users/{user_id}/enable"), None)
            .await
    }

    /// Disable a user without deleting the account.
    pub async fn disable_user(&self, user_id: &str) -> ClientResult<()> {
        self.execute(Method::PUT, &format!("cloud/users/{user_id}/disable"), None)
            .await
    }

    /// Delete a user.
    pub async fn delete_user(&self, user_id: &str) -> ClientResult<()> {
        self.execute(Method::DELETE, &format!("cloud/users/{user_id}"), None)
            .await
    }

    /// List the group ids a user belongs to.
    pub async fn get_user_groups(&self, user_id: &str) -> ClientResult<Vec<String>> {
        let payload: GroupList = self
            .fetch(Method::GET, &format!("cloud/users/{user_id}/groups"), &[], None)
            .await?;
        Ok(payload.groups)
    }

    /// Add a user to a group.
    pub async fn add_user_to_group(&self, user_id: &str, group_id: &str) -> ClientResult<()> {
        let mut body = FormBody::new();
        body.set("groupid", group_id);
        self.execute(
            Method::POST,
            &format!("cloud/users/{user_id}/groups"),
            Some(&body),
        )
        .await
    }

    /// Remove a user from a group.
    pub async fn remove_user_from_group(&self, user_id: &str, group_id: &str) -> ClientResult<()> {
        let mut body = FormBody::new();
        body.set("groupid", group_id);
        self.execute(
            Method::DELETE,
            &format!("cloud/users/{user_id}/groups"),
            Some(&body),
        )
        .await
    }

    /// Grant a user subadmin rights over a group.
    pub async fn promote_to_subadmin(&self, user_id: &str, group_id: &str) -> ClientResult<()> {
        let mut body = FormBody::new();
        body.set("groupid", group_id);
        self.execute(
            Method::POST,
            &format!("cloud/users/{user_id}/subadmins"),
            Some(&body),
        )
        .await
    }

    /// Revoke a user's subadmin rights over a group.
    pub async fn demote_from_subadmin(&self, user_id: &str, group_id: &str) -> ClientResult<()> {
        let mut body = FormBody::new();
        body.set("groupid", group_id);
        self.execute(
            Method::DELETE,
            &format!("cloud/users/{user_id}/subadmins"),
            Some(&body),
        )
        .await
    }

    /// List the group ids a user is a subadmin of.
    pub async fn get_subadmin_groups(&self, user_id: &str) -> ClientResult<Vec<String>> {
        let payload: FlatList = self
            .fetch(
                Method::GET,
                &format!("cloud/users/{user_id}/subadmins"),
                &[],
                None,
            )
            .await?;
        Ok(payload.element)
    }

    /// Trigger a new welcome mail for a user.
    pub async fn resend_welcome_mail(&self, user_id: &str) -> ClientResult<()> {
        self.execute(Method::POST, &format!("cloud/users/{user_id}/welcome"), None)
            .await
    }
}
