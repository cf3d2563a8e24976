//! Group resource operations (`/cloud/groups...`).

use reqwest::Method;

use crate::client::Client;
use crate::error::{ClientError, ClientResult};
use crate::protocol::FormBody;
use crate::types::{FlatList, GroupList, UserList};

impl Client {
    /// List all group ids.
    pub async fn get_groups(&self) -> ClientResult<Vec<String>> {
        let payload: GroupList = self.fetch(Method::GET, "cloud/groups", &[], None).await?;
        Ok(payload.groups)
    }

    /// Look up a group by its exact id.
    ///
    /// The server only offers a search-style listing, so this scans the
    /// search result for an exact match and reports
    /// [`ClientError::GroupNotFound`] when no element matches — an empty
    /// search result is not a success.
    pub async fn get_group(&self, group_id: &str) -> ClientResult<String> {
        let payload: GroupList = self
            .fetch(Method::GET, "cloud/groups", &[("search", group_id)], None)
            .await?;
        if payload.groups.iter().any(|name| name == group_id) {
            Ok(group_id.to_string())
        } else {
            Err(ClientError::group_not_found(group_id))
        }
    }

    /// Create a group.
    pub async fn create_group(&self, group_id: &str) -> ClientResult<()> {
        let mut body = FormBody::new();
        body.set("groupid", group_id);
        self.execute(Method::POST, "cloud/groups", Some(&body)).await
    }

    /// Delete a group.
    pub async fn delete_group(&self, group_id: &str) -> ClientResult<()> {
        self.execute(Method::DELETE, &format!("cloud/groups/{group_id}"), None)
            .await
    }

    /// List the user ids belonging to a group.
    pub async fn get_group_members(&self, group_id: &str) -> ClientResult<Vec<String>> {
        let payload: UserList = self
            .fetch(Method::GET, &format!("cloud/groups/{group_id}"), &[], None)
            .await?;
        Ok(payload.users)
    }

    /// List the user ids administrating a group.
    pub async fn get_group_subadmins(&self, group_id: &str) -> ClientResult<Vec<String>> {
        let payload: FlatList = self
            .fetch(
                Method::GET,
                &format!("cloud/groups/{group_id}/subadmins"),
                &[],
                None,
            )
            .await?;
        Ok(payload.element)
    }
}
