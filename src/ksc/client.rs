//! KSC HTTP client: configuration, session login and RPC calls

use log::{debug, info};
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

use crate::config::api;
use crate::error::{KscError, Result};
use crate::ksc::credentials::Credentials;

/// Connection settings for [`KscClient::connect`]
///
/// `server`, `user` and `password` are mandatory; the client refuses to
/// connect without them. `url` overrides the `{server}:{port}/api/v1.0`
/// base URL entirely, but `server` is still required.
#[derive(Clone, Default)]
pub struct ClientConfig {
    pub server: Option<String>,
    pub port: Option<u16>,
    pub url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Skip TLS certificate verification for this client only
    pub accept_invalid_certs: bool,
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Full base URL override; trailing `/` characters are trimmed
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Resolve the API base URL, validating that a server was given
    pub fn base_url(&self) -> Result<String> {
        let server = required(&self.server, "server")?;
        let url = match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "{}:{}{}",
                server,
                self.port.unwrap_or(api::DEFAULT_PORT),
                api::API_PATH
            ),
        };
        Ok(url.trim_end_matches('/').to_string())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("server", &self.server)
            .field("port", &self.port)
            .field("url", &self.url)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .finish()
    }
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str> {
    value
        .as_deref()
        .ok_or(KscError::MissingConfiguration(field))
}

/// Authenticated KSC Open API client
///
/// Owns the HTTP session (cookie store) established by the login call.
/// Every operation issues its requests one after another.
pub struct KscClient {
    client: Client,
    base_url: String,
    authorization: String,
}

impl KscClient {
    /// Validate configuration, build the session and log in
    ///
    /// Performs exactly one network round trip (`login`). A non-200 answer
    /// is fatal and is not retried.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        let user = required(&config.user, "user")?;
        let password = required(&config.password, "password")?;
        let credentials = Credentials::new(user, password);

        if config.accept_invalid_certs {
            debug!("TLS certificate verification disabled for this client");
        }

        let client = Client::builder()
            .cookie_store(true)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;

        let ksc = Self {
            client,
            base_url,
            authorization: credentials.authorization_header(),
        };
        ksc.authenticate().await?;

        info!("Authenticated against {}", ksc.base_url);
        Ok(ksc)
    }

    /// Base URL every endpoint is resolved against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Create a POST request builder with standard headers
    fn post(&self, endpoint: &str) -> reqwest::RequestBuilder {
        self.client
            .post(self.endpoint_url(endpoint))
            .header("Authorization", &self.authorization)
            .header("Content-Type", "application/json")
    }

    async fn authenticate(&self) -> Result<()> {
        debug!("Logging in at {}", self.endpoint_url(api::LOGIN));

        let response = self
            .post(api::LOGIN)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => Ok(()),
            status => Err(KscError::AuthenticationFailed {
                status: status.as_u16(),
            }),
        }
    }

    /// Call an Open API method and parse its JSON answer
    pub(crate) async fn call<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {}", self.endpoint_url(endpoint));

        let response = self.post(endpoint).json(body).send().await?;

        if !response.status().is_success() {
            return Err(KscError::Api {
                status: response.status().as_u16(),
                message: format!("Failed to call {}", endpoint),
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
