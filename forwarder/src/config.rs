use crate::Error;
use reqwest::Url;
use std::{env, fmt};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client credentials exchanged for a bearer token. Any field may be
/// missing from the environment; acquisition rejects it before any call.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub account_id: Option<String>,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Credentials {
            client_id: Some(client_id.into()),
            client_secret: Some(client_secret.into()),
            account_id: Some(account_id.into()),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "***"))
            .field("account_id", &self.account_id)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: Url,
    pub credentials: Credentials,
}

impl Config {
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)
            .map_err(|err| Error::Config(format!("BASE_URL {:?}: {}", base_url, err)))?;
        Ok(Config {
            base_url,
            credentials,
        })
    }

    /// Reads `BASE_URL`, `CLIENT_ID`, `CLIENT_SECRET` and `ACCOUNT_ID`.
    pub fn from_env() -> Result<Self, Error> {
        let base_url = env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Config::new(
            &base_url,
            Credentials {
                client_id: env::var("CLIENT_ID").ok(),
                client_secret: env::var("CLIENT_SECRET").ok(),
                account_id: env::var("ACCOUNT_ID").ok(),
            },
        )
    }
}

/// Appends one percent-encoded path segment to `base_url`.
pub(crate) fn endpoint(base_url: &Url, segment: &str) -> Result<Url, Error> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| Error::Endpoint(base_url.to_string()))?
        .pop_if_empty()
        .push(segment);
    Ok(url)
}
