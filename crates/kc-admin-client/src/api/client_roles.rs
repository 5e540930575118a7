//! Roles defined on a client.
//!
//! Path: `/admin/realms/{realm}/clients/{id}/roles[/{role-name}]`. Roles are
//! addressed by name.

use crate::client::AdminClient;
use crate::dto::RoleRepresentation;
use crate::error::AdminResult;
use crate::request::{require, AdminRequest};

/// Handle for client role operations.
#[derive(Debug, Clone, Copy)]
pub struct ClientRoles<'a> {
    client: &'a AdminClient,
}

fn at(request: AdminRequest, realm: &str, id: &str) -> AdminRequest {
    request.segments([realm, "clients", id, "roles"])
}

impl<'a> ClientRoles<'a> {
    pub(crate) const fn new(client: &'a AdminClient) -> Self {
        Self { client }
    }

    /// Lists the roles of a client.
    pub async fn find(&self, realm: &str, id: &str) -> AdminResult<Vec<RoleRepresentation>> {
        require(realm, "realm")?;
        require(id, "id")?;

        self.client.fetch(at(AdminRequest::get(), realm, id)).await
    }

    /// Gets a client role by name.
    pub async fn find_one(
        &self,
        realm: &str,
        id: &str,
        role_name: &str,
    ) -> AdminResult<RoleRepresentation> {
        require(realm, "realm")?;
        require(id, "id")?;
        require(role_name, "roleName")?;

        self.client
            .fetch(at(AdminRequest::get(), realm, id).segment(role_name))
            .await
    }

    /// Creates a client role and returns it as stored by the server.
    pub async fn create(
        &self,
        realm: &str,
        id: &str,
        role: &RoleRepresentation,
    ) -> AdminResult<RoleRepresentation> {
        require(realm, "realm")?;
        require(id, "id")?;
        require(&role.name, "role name")?;

        let request = at(AdminRequest::post(), realm, id).body(role)?;
        self.client.send_unit(request).await?;

        self.find_one(realm, id, &role.name).await
    }

    /// Replaces the role currently named `role_name`.
    ///
    /// Renaming is allowed; the refreshed document is fetched by the new name.
    pub async fn update(
        &self,
        realm: &str,
        id: &str,
        role_name: &str,
        role: &RoleRepresentation,
    ) -> AdminResult<RoleRepresentation> {
        require(realm, "realm")?;
        require(id, "id")?;
        require(role_name, "roleName")?;

        let request = at(AdminRequest::put(), realm, id)
            .segment(role_name)
            .body(role)?;
        self.client.send_unit(request).await?;

        let current = if role.name.trim().is_empty() {
            role_name
        } else {
            role.name.as_str()
        };
        self.find_one(realm, id, current).await
    }

    /// Deletes a client role.
    pub async fn remove(&self, realm: &str, id: &str, role_name: &str) -> AdminResult<()> {
        require(realm, "realm")?;
        require(id, "id")?;
        require(role_name, "roleName")?;

        self.client
            .send_unit(at(AdminRequest::delete(), realm, id).segment(role_name))
            .await
    }
}
