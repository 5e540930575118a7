//! Clients of a realm.

use serde_json::Value;

use crate::client::AdminClient;
use crate::dto::{ClientRepresentation, ClientSearchParams, ClientSecretResponse};
use crate::error::AdminResult;
use crate::request::{require, AdminRequest};

/// Handle for client operations.
#[derive(Debug, Clone, Copy)]
pub struct Clients<'a> {
    client: &'a AdminClient,
}

fn at(request: AdminRequest, realm: &str) -> AdminRequest {
    request.segments([realm, "clients"])
}

impl<'a> Clients<'a> {
    pub(crate) const fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Lists clients, optionally filtered.
    pub async fn find(
        &self,
        realm: &str,
        params: &ClientSearchParams,
    ) -> AdminResult<Vec<ClientRepresentation>> {
        require(realm, "realm")?;

        self.client
            .fetch(params.apply(at(AdminRequest::get(), realm)))
            .await
    }

    /// Gets a client by internal ID.
    pub async fn find_one(&self, realm: &str, id: &str) -> AdminResult<ClientRepresentation> {
        require(realm, "realm")?;
        require(id, "id")?;

        self.client
            .fetch(at(AdminRequest::get(), realm).segment(id))
            .await
    }

    /// Creates a client and returns it as stored by the server.
    ///
    /// The new internal ID is read from the `Location` header.
    pub async fn create(
        &self,
        realm: &str,
        client: &ClientRepresentation,
    ) -> AdminResult<ClientRepresentation> {
        require(realm, "realm")?;
        require(&client.client_id, "clientId")?;

        let id = self
            .client
            .send_created_id(at(AdminRequest::post(), realm).body(client)?)
            .await?;

        self.find_one(realm, &id).await
    }

    /// Replaces a client and returns the refreshed document.
    pub async fn update(
        &self,
        realm: &str,
        client: &ClientRepresentation,
    ) -> AdminResult<ClientRepresentation> {
        require(realm, "realm")?;
        let id = client.id.as_deref().unwrap_or_default();
        require(id, "client.id")?;

        let request = at(AdminRequest::put(), realm).segment(id).body(client)?;
        self.client.send_unit(request).await?;

        self.find_one(realm, id).await
    }

    /// Deletes a client.
    pub async fn remove(&self, realm: &str, id: &str) -> AdminResult<()> {
        require(realm, "realm")?;
        require(id, "id")?;

        self.client
            .send_unit(at(AdminRequest::delete(), realm).segment(id))
            .await
    }

    /// Gets the client secret.
    pub async fn client_secret(&self, realm: &str, id: &str) -> AdminResult<ClientSecretResponse> {
        require(realm, "realm")?;
        require(id, "id")?;

        self.client
            .fetch(at(AdminRequest::get(), realm).segments([id, "client-secret"]))
            .await
    }

    /// Generates a new client secret and returns it.
    pub async fn regenerate_secret(
        &self,
        realm: &str,
        id: &str,
    ) -> AdminResult<ClientSecretResponse> {
        require(realm, "realm")?;
        require(id, "id")?;

        self.client
            .fetch(
                at(AdminRequest::post().expect(200), realm).segments([id, "client-secret"]),
            )
            .await
    }

    /// Gets the installation document for a client adapter
    /// (e.g., `keycloak-oidc-keycloak-json`).
    pub async fn installation(&self, realm: &str, id: &str, provider_id: &str) -> AdminResult<Value> {
        require(realm, "realm")?;
        require(id, "id")?;
        require(provider_id, "providerId")?;

        let request = at(AdminRequest::get(), realm).segments([
            id,
            "installation",
            "providers",
            provider_id,
        ]);
        Ok(self.client.execute(request).await?.body)
    }
}
