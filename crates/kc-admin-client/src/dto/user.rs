//! User DTOs for the Admin API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::request::AdminRequest;

/// A user account in a realm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRepresentation {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Username (unique within realm).
    #[serde(default)]
    pub username: String,
    /// Whether the user is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// User's email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether the email has been verified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    /// User's first name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// User's last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Custom user attributes.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, Vec<String>>,
    /// Required actions for the user.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required_actions: Vec<String>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRepresentation {
    /// Creates an enabled user with the given username.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            enabled: Some(true),
            ..Self::default()
        }
    }

    /// Sets the email address.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Query parameters for listing users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearchParams {
    /// Free-text search over username, email, first and last name.
    pub search: Option<String>,
    /// Filter by username.
    pub username: Option<String>,
    /// Filter by email.
    pub email: Option<String>,
    /// Filter by first name.
    pub first_name: Option<String>,
    /// Filter by last name.
    pub last_name: Option<String>,
    /// Require exact matches for the field filters.
    pub exact: Option<bool>,
    /// Starting offset for pagination.
    pub first: Option<u32>,
    /// Maximum results to return.
    pub max: Option<u32>,
}

impl UserSearchParams {
    /// Free-text search.
    #[must_use]
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            ..Self::default()
        }
    }

    /// Exact username match.
    #[must_use]
    pub fn by_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            exact: Some(true),
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
            .query_opt("search", self.search.as_deref())
            .query_opt("username", self.username.as_deref())
            .query_opt("email", self.email.as_deref())
            .query_opt("firstName", self.first_name.as_deref())
            .query_opt("lastName", self.last_name.as_deref())
            .query_opt("exact", self.exact)
            .query_opt("first", self.first)
            .query_opt("max", self.max)
    }
}
