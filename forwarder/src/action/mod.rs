//! Payload validation strategies, one per Lambda function.
//!
//! An [`Action`] inspects the raw event and, when it is acceptable,
//! describes the single downstream call the gateway should issue.

use crate::Response;
use reqwest::Method;
use serde_json::Value;

mod content;
mod delete;
mod send;

pub use content::SendContent;
pub use delete::DeleteObject;
pub use send::SendObject;

/// Outbound request body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Serialized as JSON.
    Json(Value),
    /// Sent verbatim as an `application/json` body.
    Raw(String),
}

/// A validated downstream call.
#[derive(Debug, Clone, PartialEq)]
pub struct Outbound {
    pub method: Method,
    /// Path segment appended to the base url, if any.
    pub resource: Option<String>,
    pub body: Option<Body>,
    /// What the invocation returns once the call succeeds.
    pub success: Response,
}

pub trait Action: Sync {
    fn name(&self) -> &'static str;

    /// Validates `payload`, returning a 400 [`Response`] on rejection.
    fn prepare(&self, payload: Value) -> Result<Outbound, Response>;
}

/// JSON truthiness: null, false, zero and empty strings, arrays or
/// objects are all empty.
pub(crate) fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}
