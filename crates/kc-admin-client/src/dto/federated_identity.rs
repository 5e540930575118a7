//! Federated identity representations.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A link between a local user and an account at an identity provider.
///
/// Links have no identifier of their own; they are addressed by
/// (realm, local user id, provider alias).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedIdentityRepresentation {
    /// Identity provider alias (e.g., "google", "test-oidc").
    #[serde(default)]
    pub identity_provider: String,
    /// User ID at the identity provider.
    #[serde(default)]
    pub user_id: String,
    /// Username at the identity provider.
    #[serde(default)]
    pub user_name: String,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FederatedIdentityRepresentation {
    /// Creates a link representation.
    #[must_use]
    pub fn new(
        identity_provider: impl Into<String>,
        user_id: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Self {
        Self {
            identity_provider: identity_provider.into(),
            user_id: user_id.into(),
            user_name: user_name.into(),
            extra: Map::new(),
        }
    }
}
