//! Realms.
//!
//! Path: `/admin/realms[/{realm}]`. Realms are addressed by name.

use crate::client::AdminClient;
use crate::dto::RealmRepresentation;
use crate::error::AdminResult;
use crate::request::{require, AdminRequest};

/// Handle for realm operations.
#[derive(Debug, Clone, Copy)]
pub struct Realms<'a> {
    client: &'a AdminClient,
}

impl<'a> Realms<'a> {
    pub(crate) const fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Lists the realms visible to the token.
    pub async fn find(&self) -> AdminResult<Vec<RealmRepresentation>> {
        self.client.fetch(AdminRequest::get()).await
    }

    /// Gets a realm by name.
    pub async fn find_one(&self, realm: &str) -> AdminResult<RealmRepresentation> {
        require(realm, "realm")?;

        self.client.fetch(AdminRequest::get().segment(realm)).await
    }

    /// Creates a realm and returns it as stored by the server.
    pub async fn create(&self, realm: &RealmRepresentation) -> AdminResult<RealmRepresentation> {
        require(&realm.realm, "realm name")?;

        self.client
            .send_unit(AdminRequest::post().body(realm)?)
            .await?;

        self.find_one(&realm.realm).await
    }

    /// Replaces the realm currently named `name`.
    ///
    /// Renaming is allowed; the refreshed document is fetched by the new name.
    pub async fn update(
        &self,
        name: &str,
        realm: &RealmRepresentation,
    ) -> AdminResult<RealmRepresentation> {
        require(name, "realm")?;

        self.client
            .send_unit(AdminRequest::put().segment(name).body(realm)?)
            .await?;

        let current = if realm.realm.trim().is_empty() {
            name
        } else {
            realm.realm.as_str()
        };
        self.find_one(current).await
    }

    /// Deletes a realm.
    pub async fn remove(&self, realm: &str) -> AdminResult<()> {
        require(realm, "realm")?;

        self.client
            .send_unit(AdminRequest::delete().segment(realm))
            .await
    }
}
