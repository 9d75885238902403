use super::{Action, Body, Outbound};
use crate::Response;
use reqwest::Method;
use serde_json::Value;

/// Creates a record from any non-empty string, sequence or mapping.
#[derive(Debug, Clone, Copy, Default)]
pub struct SendObject;

impl Action for SendObject {
    fn name(&self) -> &'static str {
        "send_object"
    }

    fn prepare(&self, payload: Value) -> Result<Outbound, Response> {
        let body = match payload {
            Value::Null => return Err(Response::bad_request("payload must not be null")),
            Value::String(text) if text.trim().is_empty() => {
                return Err(Response::bad_request(
                    "string payload must not be empty or whitespace-only",
                ))
            }
            Value::String(text) => Body::Raw(text),
            Value::Array(ref items) if items.is_empty() => {
                return Err(Response::bad_request("payload must not be empty"))
            }
            Value::Object(ref fields) if fields.is_empty() => {
                return Err(Response::bad_request("payload must not be empty"))
            }
            payload @ (Value::Array(_) | Value::Object(_)) => Body::Json(payload),
            Value::Bool(_) | Value::Number(_) => {
                return Err(Response::bad_request(
                    "invalid payload type: must be string, sequence, or mapping",
                ))
            }
        };

        Ok(Outbound {
            method: Method::POST,
            resource: None,
            body: Some(body),
            success: Response::new(202, "record created successfully"),
        })
    }
}
