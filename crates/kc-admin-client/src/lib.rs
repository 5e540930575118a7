//! # kc-admin-client
//!
//! Async client for the Keycloak Admin REST API.
//!
//! Every operation maps to one HTTP call below `{base}/admin/realms` (two for
//! create and update, which read the entity back), carries a bearer token,
//! and succeeds only on the single status code the endpoint documents.
//!
//! ## Modules
//!
//! - [`api`] - Resource family handles (resources, federated identities, clients, roles, users, realms)
//! - [`client`] - The [`AdminClient`] facade
//! - [`config`] - Configuration loading
//! - [`dto`] - Representations exchanged with the server
//! - [`error`] - Error taxonomy
//! - [`request`] - Authenticated request building and status policy
//! - [`token`] - Bearer token sources
//! - [`transport`] - HTTP transport abstraction
//!
//! ## Quick Start
//!
//! ```ignore
//! use kc_admin_client::{AdminClient, AccessToken, ResourceRepresentation};
//!
//! let client = AdminClient::with_reqwest("http://127.0.0.1:8080/auth", AccessToken::new(token))?;
//!
//! let created = client
//!     .resources()
//!     .create("master", client_uuid, &ResourceRepresentation::new("test:2"))
//!     .await?;
//! client.resources().remove("master", client_uuid, created.id.as_deref().unwrap_or_default()).await?;
//! ```
//!
//! ## Errors
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`AdminError::Validation`] | A required argument is empty; nothing was sent |
//! | [`AdminError::Transport`] | The request failed or the response was unreadable |
//! | [`AdminError::Server`] | The status differs from the expected one; carries the server body |

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod api;
pub mod client;
pub mod config;
pub mod dto;
pub mod error;
pub mod request;
pub mod token;
pub mod transport;

#[cfg(test)]
mod testing;

pub use client::{AdminClient, AdminResponse};
pub use config::ClientConfig;
pub use dto::{
    ClientRepresentation, ClientSearchParams, ClientSecretResponse,
    FederatedIdentityRepresentation, RealmRepresentation, ResourceRepresentation,
    RoleRepresentation, ScopeRepresentation, UserRepresentation, UserSearchParams,
};
pub use error::{AdminError, AdminResult, TransportError};
pub use request::AdminRequest;
pub use token::{AccessToken, SharedToken, TokenSource};
pub use transport::{HttpTransport, RequestDescriptor, TransportResponse};
