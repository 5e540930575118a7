//! Authorization resources of a client's resource server.
//!
//! Path: `/admin/realms/{realm}/clients/{id}/authz/resource-server/resource`.
//! `{id}` is the client's internal ID, not its `clientId`.

use crate::client::AdminClient;
use crate::dto::ResourceRepresentation;
use crate::error::AdminResult;
use crate::request::{require, AdminRequest};

/// Handle for authorization resource operations.
#[derive(Debug, Clone, Copy)]
pub struct Resources<'a> {
    client: &'a AdminClient,
}

fn at(request: AdminRequest, realm: &str, id: &str) -> AdminRequest {
    request.segments([realm, "clients", id, "authz", "resource-server", "resource"])
}

impl<'a> Resources<'a> {
    pub(crate) const fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Creates a resource and returns it as stored by the server.
    ///
    /// The create endpoint answers 201 with little more than the new `_id`,
    /// so the full document is fetched again by that identifier.
    pub async fn create(
        &self,
        realm: &str,
        id: &str,
        resource: &ResourceRepresentation,
    ) -> AdminResult<ResourceRepresentation> {
        require(realm, "realm")?;
        require(id, "id")?;
        require(&resource.name, "resource name")?;

        let request = at(AdminRequest::post(), realm, id).body(resource)?;
        let resource_id = self.client.send_created_id(request).await?;

        self.find_one(realm, id, &resource_id).await
    }

    /// Lists all resources of a client, in server order.
    pub async fn find(&self, realm: &str, id: &str) -> AdminResult<Vec<ResourceRepresentation>> {
        require(realm, "realm")?;
        require(id, "id")?;

        self.client.fetch(at(AdminRequest::get(), realm, id)).await
    }

    /// Gets one resource by its `_id`.
    pub async fn find_one(
        &self,
        realm: &str,
        id: &str,
        resource_id: &str,
    ) -> AdminResult<ResourceRepresentation> {
        require(realm, "realm")?;
        require(id, "id")?;
        require(resource_id, "resourceId")?;

        self.client
            .fetch(at(AdminRequest::get(), realm, id).segment(resource_id))
            .await
    }

    /// Replaces a resource and returns the refreshed document.
    ///
    /// `resource` must be the full representation, including its `_id`.
    pub async fn update(
        &self,
        realm: &str,
        id: &str,
        resource: &ResourceRepresentation,
    ) -> AdminResult<ResourceRepresentation> {
        require(realm, "realm")?;
        require(id, "id")?;
        let resource_id = resource.id.as_deref().unwrap_or_default();
        require(resource_id, "resource._id")?;

        let request = at(AdminRequest::put(), realm, id)
            .segment(resource_id)
            .body(resource)?;
        self.client.send_unit(request).await?;

        self.find_one(realm, id, resource_id).await
    }

    /// Deletes a resource.
    pub async fn remove(&self, realm: &str, id: &str, resource_id: &str) -> AdminResult<()> {
        require(realm, "realm")?;
        require(id, "id")?;
        require(resource_id, "resourceId")?;

        self.client
            .send_unit(at(AdminRequest::delete(), realm, id).segment(resource_id))
            .await
    }
}
