use crate::action::{Action, Body};
use crate::config::endpoint;
use crate::{guard, token, Config, Error, Response, Token};
use reqwest::{header::CONTENT_TYPE, Client};
use serde_json::Value;

/// Downstream API access: the configuration read at cold start plus the
/// HTTP client shared by every invocation.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: Client,
    config: Config,
}

impl Gateway {
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Client)?;
        Ok(Gateway::with_client(config, client))
    }

    pub fn with_client(config: Config, client: Client) -> Self {
        Gateway { client, config }
    }

    pub async fn acquire_token(&self) -> Result<Token, Response> {
        token::acquire_token(&self.client, &self.config.base_url, &self.config.credentials).await
    }

    /// Validates `payload` with `action` and issues its downstream call
    /// bearing `token`. Rejections and downstream failures come back as
    /// `Ok` responses; `Err` is reserved for failures of the gateway itself.
    pub async fn forward<A>(&self, action: &A, payload: Value, token: &str) -> Result<Response, Error>
    where
        A: Action + ?Sized,
    {
        let outbound = match action.prepare(payload) {
            Ok(outbound) => outbound,
            Err(rejected) => {
                log::warn!("{} rejected payload: {}", action.name(), rejected.message);
                return Ok(rejected);
            }
        };
        let url = match outbound.resource.as_deref() {
            Some(resource) => endpoint(&self.config.base_url, resource)?,
            None => self.config.base_url.clone(),
        };
        log::info!("{}: {} {}", action.name(), outbound.method, url);

        let request = self
            .client
            .request(outbound.method.clone(), url)
            .bearer_auth(token);
        let request = match outbound.body {
            Some(Body::Json(body)) => request.json(&body),
            Some(Body::Raw(body)) => request.header(CONTENT_TYPE, "application/json").body(body),
            None => request,
        };

        match guard(async { request.send().await?.error_for_status() }).await {
            Ok(_) => Ok(outbound.success),
            Err(failure) => Ok(failure),
        }
    }
}
