//! Shared plumbing for the record-forwarding Lambda functions.
//!
//! Each invocation exchanges client credentials for a bearer token,
//! validates its payload with an [`Action`](action::Action) and issues one
//! call against the downstream API. Every path ends in a [`Response`].

pub mod action;
mod config;
mod error;
mod gateway;
mod handler;
mod response;
mod token;

pub use config::{Config, Credentials, DEFAULT_BASE_URL};
pub use error::{guard, Error, Failure};
pub use gateway::Gateway;
pub use handler::{function_handler, handle, GENERIC_FAILURE, SEND_FAILED, TOKEN_MISSING};
pub use response::Response;
pub use token::{acquire_token, Token};
