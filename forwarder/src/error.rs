use crate::Response;
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Client-caused rejection, surfaced to the caller as a 400.
    #[error("{0}")]
    Validation(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),
    #[error("base url {0} cannot take a resource path")]
    Endpoint(String),
}

/// Categorized failure of a single downstream call.
#[derive(Debug, Error)]
pub enum Failure {
    #[error("HTTP error")]
    Http(#[source] reqwest::Error),
    #[error("timeout error")]
    Timeout(#[source] reqwest::Error),
    #[error("connection error")]
    Connection(#[source] reqwest::Error),
    #[error("unexpected error")]
    Unexpected(#[source] reqwest::Error),
}

impl Failure {
    fn inner(&self) -> &reqwest::Error {
        match self {
            Failure::Http(err)
            | Failure::Timeout(err)
            | Failure::Connection(err)
            | Failure::Unexpected(err) => err,
        }
    }

    /// The downstream status when one is attached, otherwise 500.
    ///
    /// Transport failures (refused connections, timeouts) usually never saw
    /// a response, so they land on 500.
    pub fn status_code(&self) -> u16 {
        self.inner()
            .status()
            .map(|status| status.as_u16())
            .unwrap_or(500)
    }
}

impl From<reqwest::Error> for Failure {
    fn from(err: reqwest::Error) -> Self {
        // reqwest flags connect timeouts as both timeout and connect
        if err.is_status() {
            Failure::Http(err)
        } else if err.is_timeout() {
            Failure::Timeout(err)
        } else if err.is_connect() {
            Failure::Connection(err)
        } else {
            Failure::Unexpected(err)
        }
    }
}

impl From<Failure> for Response {
    fn from(failure: Failure) -> Self {
        Response::new(failure.status_code(), failure.to_string())
    }
}

/// Awaits a downstream call, turning any failure into a categorized
/// [`Response`]. The underlying error is logged, never returned.
pub async fn guard<T, F>(call: F) -> Result<T, Response>
where
    F: Future<Output = Result<T, reqwest::Error>>,
{
    call.await.map_err(|err| {
        let failure = Failure::from(err);
        log::error!(
            "{} (status {}): {}",
            failure,
            failure.status_code(),
            failure.inner()
        );
        Response::from(failure)
    })
}
