//! Federated identity links of a user.
//!
//! Path: `/admin/realms/{realm}/users/{userId}/federated-identity[/{providerId}]`.

use crate::client::AdminClient;
use crate::dto::FederatedIdentityRepresentation;
use crate::error::AdminResult;
use crate::request::{require, AdminRequest};

/// Handle for federated identity operations.
#[derive(Debug, Clone, Copy)]
pub struct FederatedIdentities<'a> {
    client: &'a AdminClient,
}

fn at(request: AdminRequest, realm: &str, user_id: &str) -> AdminRequest {
    request.segments([realm, "users", user_id, "federated-identity"])
}

impl<'a> FederatedIdentities<'a> {
    pub(crate) const fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Lists the identity provider links of a user.
    pub async fn find(
        &self,
        realm: &str,
        user_id: &str,
    ) -> AdminResult<Vec<FederatedIdentityRepresentation>> {
        require(realm, "realm")?;
        require(user_id, "userId")?;

        self.client.fetch(at(AdminRequest::get(), realm, user_id)).await
    }

    /// Links a user to an account at `provider_id`.
    ///
    /// The server answers 204 with no body. A link has no identifier of its
    /// own beyond the caller's (realm, user, provider) key, so nothing is
    /// fetched back.
    pub async fn create(
        &self,
        realm: &str,
        user_id: &str,
        provider_id: &str,
        representation: &FederatedIdentityRepresentation,
    ) -> AdminResult<()> {
        require(realm, "realm")?;
        require(user_id, "userId")?;
        require(provider_id, "providerId")?;

        let request = at(AdminRequest::post().expect(204), realm, user_id)
            .segment(provider_id)
            .body(representation)?;
        self.client.send_unit(request).await
    }

    /// Removes the link between a user and `provider_id`.
    ///
    /// Sent without JSON negotiation; the endpoint returns no body.
    pub async fn remove(&self, realm: &str, user_id: &str, provider_id: &str) -> AdminResult<()> {
        require(realm, "realm")?;
        require(user_id, "userId")?;
        require(provider_id, "providerId")?;

        let request = at(AdminRequest::delete().json(false), realm, user_id).segment(provider_id);
        self.client.send_unit(request).await
    }
}
