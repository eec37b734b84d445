// src/core/net.rs

// Blocking HTTPS GET with basic auth (match results API)

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{ENV_KEY, ENV_USERNAME, REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

/// API user name + key, sent as an HTTP basic-auth header.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// Read `API_USERNAME` / `API_KEY`, loading `.env` first when present.
    pub fn from_env() -> Result<Self, FetchError> {
        dotenvy::dotenv().ok();
        let username = std::env::var(ENV_USERNAME).map_err(|_| FetchError::MissingCredentials(ENV_USERNAME))?;
        let key = std::env::var(ENV_KEY).map_err(|_| FetchError::MissingCredentials(ENV_KEY))?;
        Ok(Self { username, key })
    }
}

fn client() -> Result<Client, FetchError> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?)
}

/// GET `url` and return the body. Non-2xx statuses are errors.
pub fn http_get(url: &str, creds: &Credentials) -> Result<String, FetchError> {
    let body = client()?
        .get(url)
        .basic_auth(&creds.username, Some(&creds.key))
        .header(reqwest::header::ACCEPT, "application/json")
        .send()?
        .error_for_status()?
        .text()?;
    Ok(body)
}
