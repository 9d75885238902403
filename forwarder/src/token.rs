use crate::{config::endpoint, guard, Credentials, Response};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    client_id: &'a str,
    client_secret: &'a str,
    account_id: &'a str,
}

fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, Response> {
    match value.as_deref() {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Response::bad_request(format!(
            "{} must not be null or empty",
            field
        ))),
    }
}

/// Exchanges client credentials for a bearer token with one
/// `POST {base_url}/token`.
pub async fn acquire_token(
    client: &Client,
    base_url: &Url,
    credentials: &Credentials,
) -> Result<Token, Response> {
    let request = TokenRequest {
        grant_type: "client_credentials",
        client_id: required(&credentials.client_id, "client_id")?,
        client_secret: required(&credentials.client_secret, "client_secret")?,
        account_id: required(&credentials.account_id, "account_id")?,
    };
    let url = endpoint(base_url, "token").map_err(|err| {
        log::error!("failed to build token url: {}", err);
        Response::new(500, "unexpected error")
    })?;

    guard(async {
        client
            .post(url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<Token>()
            .await
    })
    .await
}
