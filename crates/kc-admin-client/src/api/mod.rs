//! Resource family handles.
//!
//! Each handle borrows the [`crate::AdminClient`] and maps its operations onto
//! one REST sub-path. Every operation validates its path arguments before
//! sending anything, so an empty realm or identifier fails with
//! [`crate::AdminError::Validation`] and no request is made.

pub mod client_roles;
pub mod clients;
pub mod federated_identity;
pub mod realms;
pub mod resources;
pub mod users;

pub use client_roles::ClientRoles;
pub use clients::Clients;
pub use federated_identity::FederatedIdentities;
pub use realms::Realms;
pub use resources::Resources;
pub use users::Users;
