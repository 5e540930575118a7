//! Client DTOs for the Admin API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::request::AdminRequest;

/// An OIDC/SAML client registered in a realm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRepresentation {
    /// Internal ID (server-assigned UUID, not the `clientId`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Client ID used in protocol flows.
    #[serde(default)]
    pub client_id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the client is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Whether it's a public client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_client: Option<bool>,
    /// Whether the client only accepts bearer tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_only: Option<bool>,
    /// Protocol (`openid-connect` or `saml`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Allowed redirect URIs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uris: Option<Vec<String>>,
    /// Allowed web origins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_origins: Option<Vec<String>>,
    /// Whether fine-grained authorization is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_services_enabled: Option<bool>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClientRepresentation {
    /// Creates a client with the given `clientId`.
    #[must_use]
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            ..Self::default()
        }
    }
}

/// Query parameters for listing clients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientSearchParams {
    /// Filter by `clientId`.
    pub client_id: Option<String>,
    /// Treat `client_id` as a substring search instead of an exact match.
    pub search: Option<bool>,
    /// Starting offset for pagination.
    pub first: Option<u32>,
    /// Maximum results to return.
    pub max: Option<u32>,
}

impl ClientSearchParams {
    /// Matches clients with exactly this `clientId`.
    #[must_use]
    pub fn by_client_id(client_id: impl Into<String>) -> Self {
        Self {
            client_id: Some(client_id.into()),
            ..Self::default()
        }
    }

    /// Sets the pagination window.
    #[must_use]
    pub fn page(mut self, first: u32, max: u32) -> Self {
        self.first = Some(first);
        self.max = Some(max);
        self
    }

    pub(crate) fn apply(&self, request: AdminRequest) -> AdminRequest {
        request
            .query_opt("clientId", self.client_id.as_deref())
            .query_opt("search", self.search)
            .query_opt("first", self.first)
            .query_opt("max", self.max)
    }
}

/// Response for client secret operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSecretResponse {
    /// Credential type, `secret` for client secrets.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub credential_type: Option<String>,
    /// The client secret value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}
