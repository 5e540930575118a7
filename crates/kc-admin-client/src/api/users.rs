//! Users of a realm.

use serde_json::Value;

use crate::client::AdminClient;
use crate::dto::{UserRepresentation, UserSearchParams};
use crate::error::AdminResult;
use crate::request::{require, AdminRequest};

/// Handle for user operations.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a AdminClient,
}

fn at(request: AdminRequest, realm: &str) -> AdminRequest {
    request.segments([realm, "users"])
}

impl<'a> Users<'a> {
    pub(crate) const fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Lists users, optionally filtered.
    pub async fn find(
        &self,
        realm: &str,
        params: &UserSearchParams,
    ) -> AdminResult<Vec<UserRepresentation>> {
        require(realm, "realm")?;

        self.client
            .fetch(params.apply(at(AdminRequest::get(), realm)))
            .await
    }

    /// Gets a user by ID.
    pub async fn find_one(&self, realm: &str, user_id: &str) -> AdminResult<UserRepresentation> {
        require(realm, "realm")?;
        require(user_id, "userId")?;

        self.client
            .fetch(at(AdminRequest::get(), realm).segment(user_id))
            .await
    }

    /// Counts the users of a realm.
    pub async fn count(&self, realm: &str) -> AdminResult<u64> {
        require(realm, "realm")?;

        self.client
            .fetch(at(AdminRequest::get(), realm).segment("count"))
            .await
    }

    /// Creates a user and returns it as stored by the server.
    ///
    /// The new ID is read from the `Location` header.
    pub async fn create(
        &self,
        realm: &str,
        user: &UserRepresentation,
    ) -> AdminResult<UserRepresentation> {
        require(realm, "realm")?;
        require(&user.username, "username")?;

        let id = self
            .client
            .send_created_id(at(AdminRequest::post(), realm).body(user)?)
            .await?;

        self.find_one(realm, &id).await
    }

    /// Replaces a user and returns the refreshed document.
    pub async fn update(
        &self,
        realm: &str,
        user: &UserRepresentation,
    ) -> AdminResult<UserRepresentation> {
        require(realm, "realm")?;
        let user_id = user.id.as_deref().unwrap_or_default();
        require(user_id, "user.id")?;

        let request = at(AdminRequest::put(), realm).segment(user_id).body(user)?;
        self.client.send_unit(request).await?;

        self.find_one(realm, user_id).await
    }

    /// Deletes a user.
    pub async fn remove(&self, realm: &str, user_id: &str) -> AdminResult<()> {
        require(realm, "realm")?;
        require(user_id, "userId")?;

        self.client
            .send_unit(at(AdminRequest::delete(), realm).segment(user_id))
            .await
    }

    /// Gets the realm and client role mappings of a user.
    pub async fn role_mappings(&self, realm: &str, user_id: &str) -> AdminResult<Value> {
        require(realm, "realm")?;
        require(user_id, "userId")?;

        let request = at(AdminRequest::get(), realm).segments([user_id, "role-mappings"]);
        Ok(self.client.execute(request).await?.body)
    }
}
