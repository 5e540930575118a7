//! Representations exchanged with the Admin API.
//!
//! Keycloak owns these documents. Each struct names the fields this crate
//! routes on or that callers commonly set; every other field the server sends
//! is kept in `extra` and written back unchanged, so a fetched document can be
//! modified and passed to an `update` without losing data.

pub mod client;
pub mod federated_identity;
pub mod realm;
pub mod resource;
pub mod role;
pub mod user;

pub use client::{ClientRepresentation, ClientSearchParams, ClientSecretResponse};
pub use federated_identity::FederatedIdentityRepresentation;
pub use realm::RealmRepresentation;
pub use resource::{ResourceRepresentation, ScopeRepresentation};
pub use role::RoleRepresentation;
pub use user::{UserRepresentation, UserSearchParams};
