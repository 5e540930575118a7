//! The admin client facade.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::api::{ClientRoles, Clients, FederatedIdentities, Realms, Resources, Users};
use crate::config::ClientConfig;
use crate::error::{AdminError, AdminResult, TransportError};
use crate::request::{id_from_location, AdminRequest};
use crate::transport::{HttpTransport, RequestDescriptor};
use crate::token::TokenSource;

/// Interpreted response of a successful admin call.
#[derive(Debug, Clone)]
pub struct AdminResponse {
    /// HTTP status code (always the expected one).
    pub status: u16,
    /// `Location` header, set by create endpoints.
    pub location: Option<String>,
    /// Parsed body, `null` when empty.
    pub body: Value,
}

/// Client for the Keycloak Admin REST API.
///
/// Cheap to clone; clones share the transport and token source. Resource
/// families are reached through borrowed handles:
///
/// ```ignore
/// let client = AdminClient::with_reqwest("http://localhost:8080", AccessToken::new(token))?;
/// let resources = client.resources().find("master", client_uuid).await?;
/// ```
#[derive(Clone)]
pub struct AdminClient {
    base_url: Url,
    transport: Arc<dyn HttpTransport>,
    token: Arc<dyn TokenSource>,
}

impl fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl AdminClient {
    /// Creates a client over an arbitrary transport.
    pub fn new<T, S>(base_url: &str, transport: T, token: S) -> AdminResult<Self>
    where
        T: HttpTransport + 'static,
        S: TokenSource + 'static,
    {
        let base_url = Url::parse(base_url)
            .map_err(|e| AdminError::Config(format!("invalid base URL '{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AdminError::Config(format!(
                "base URL cannot carry a path: {base_url}"
            )));
        }
        Ok(Self {
            base_url,
            transport: Arc::new(transport),
            token: Arc::new(token),
        })
    }

    /// Creates a client over a default `reqwest` transport.
    pub fn with_reqwest<S>(base_url: &str, token: S) -> AdminResult<Self>
    where
        S: TokenSource + 'static,
    {
        Self::from_config(&ClientConfig::new(base_url), token)
    }

    /// Creates a client from configuration.
    pub fn from_config<S>(config: &ClientConfig, token: S) -> AdminResult<Self>
    where
        S: TokenSource + 'static,
    {
        let http = config.build_http_client()?;
        Self::new(&config.base_url, http, token)
    }

    /// Gets the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends one request and applies its status policy.
    ///
    /// Binds a fresh token snapshot, performs exactly one transport call,
    /// and never retries.
    pub async fn execute(&self, mut request: AdminRequest) -> AdminResult<AdminResponse> {
        let url = request.url(&self.base_url)?;
        let descriptor = RequestDescriptor {
            method: request.method().clone(),
            url: url.clone(),
            bearer: self.token.access_token(),
            body: request.take_body(),
            json: request.is_json(),
        };

        tracing::debug!(method = %descriptor.method, url = %url, "sending admin request");

        let response = self.transport.send(descriptor).await.map_err(|e| {
            tracing::debug!("admin request to {} failed: {}", url, e);
            AdminError::Transport(e)
        })?;

        if response.status == request.expected_status() {
            tracing::debug!(status = response.status, url = %url, "admin request succeeded");
        } else {
            tracing::warn!(
                status = response.status,
                expected = request.expected_status(),
                method = %request.method(),
                url = %url,
                "unexpected admin response status"
            );
        }

        let body = request.interpret(&response)?;
        Ok(AdminResponse {
            status: response.status,
            location: response.location().map(str::to_string),
            body,
        })
    }

    /// Sends a request and deserializes the response body.
    pub async fn fetch<T: DeserializeOwned>(&self, request: AdminRequest) -> AdminResult<T> {
        let response = self.execute(request).await?;
        decode(response.body)
    }

    /// Sends a request whose response body is not needed.
    pub async fn send_unit(&self, request: AdminRequest) -> AdminResult<()> {
        self.execute(request).await.map(|_| ())
    }

    /// Sends a create request and returns the identifier the server assigned.
    ///
    /// The identifier is taken from an `_id` field in the response body when
    /// present, otherwise from the last segment of the `Location` header.
    pub async fn send_created_id(&self, request: AdminRequest) -> AdminResult<String> {
        let response = self.execute(request).await?;
        match response
            .body
            .get("_id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
        {
            Some(id) => Ok(id.to_string()),
            None => id_from_location(response.location.as_deref()),
        }
    }

    /// Authorization resources of a client.
    #[must_use]
    pub const fn resources(&self) -> Resources<'_> {
        Resources::new(self)
    }

    /// Federated identity links of users.
    #[must_use]
    pub const fn federated_identity(&self) -> FederatedIdentities<'_> {
        FederatedIdentities::new(self)
    }

    /// Clients of a realm.
    #[must_use]
    pub const fn clients(&self) -> Clients<'_> {
        Clients::new(self)
    }

    /// Roles of a client.
    #[must_use]
    pub const fn client_roles(&self) -> ClientRoles<'_> {
        ClientRoles::new(self)
    }

    /// Users of a realm.
    #[must_use]
    pub const fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// Realms.
    #[must_use]
    pub const fn realms(&self) -> Realms<'_> {
        Realms::new(self)
    }
}

/// Deserializes a response body into a representation.
pub(crate) fn decode<T: DeserializeOwned>(body: Value) -> AdminResult<T> {
    serde_json::from_value(body).map_err(|e| AdminError::Transport(TransportError::Json(e)))
}
