//! End-to-end tests for the admin client.
//!
//! Each test starts a wiremock server that stands in for the Keycloak admin
//! API and drives it through the public client surface over real HTTP.

mod federated_identity;
mod resources;
