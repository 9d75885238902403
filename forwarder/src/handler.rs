use crate::action::Action;
use crate::{Error, Gateway, Response};
use lambda_runtime::LambdaEvent;
use serde_json::Value;

pub const TOKEN_MISSING: &str = "token must not be null or empty";
pub const SEND_FAILED: &str = "there was a problem sending the request";
pub const GENERIC_FAILURE: &str = "a generic error occurred while processing the request";

async fn process<A>(gateway: &Gateway, action: &A, event: Value) -> Result<Response, Error>
where
    A: Action + ?Sized,
{
    let token = match gateway.acquire_token().await {
        Ok(token) if !token.access_token.is_empty() => token,
        Ok(_) => return Err(Error::Validation(TOKEN_MISSING.into())),
        Err(rejected) => {
            log::warn!(
                "token acquisition failed ({}): {}",
                rejected.status_code,
                rejected.message
            );
            return Err(Error::Validation(TOKEN_MISSING.into()));
        }
    };

    let response = gateway.forward(action, event, &token.access_token).await?;
    if response.is_empty() {
        return Err(Error::Validation(SEND_FAILED.into()));
    }
    Ok(response)
}

fn settle(action: &str, result: Result<Response, Error>) -> Response {
    match result {
        Ok(response) => response,
        Err(Error::Validation(message)) => {
            log::error!("{} validation error: {}", action, message);
            Response::bad_request(message)
        }
        Err(err) => {
            log::error!("{} failed to process request: {}", action, err);
            Response::new(500, GENERIC_FAILURE)
        }
    }
}

/// Runs one invocation: acquire a token, then forward `event` through
/// `action`. Every outcome is a [`Response`].
pub async fn handle<A>(gateway: &Gateway, action: &A, event: Value) -> Response
where
    A: Action + ?Sized,
{
    settle(action.name(), process(gateway, action, event).await)
}

/// Lambda entry point shared by the function binaries. The context is unused.
pub async fn function_handler<A>(
    gateway: &Gateway,
    action: &A,
    event: LambdaEvent<Value>,
) -> Result<Response, lambda_runtime::Error>
where
    A: Action + ?Sized,
{
    let (payload, _context) = event.into_parts();
    Ok(handle(gateway, action, payload).await)
}
