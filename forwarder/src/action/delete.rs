use super::{is_empty, Action, Outbound};
use crate::Response;
use reqwest::Method;
use serde_json::Value;

/// Deletes the record named by the payload's `id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteObject;

impl Action for DeleteObject {
    fn name(&self) -> &'static str {
        "delete_object"
    }

    fn prepare(&self, payload: Value) -> Result<Outbound, Response> {
        if is_empty(&payload) {
            return Err(Response::bad_request("resource identifier must not be null"));
        }
        let Value::Object(fields) = payload else {
            return Err(Response::bad_request("invalid type: must be a mapping"));
        };
        let id = match fields.get("id") {
            Some(Value::String(id)) if !id.is_empty() => id.clone(),
            Some(id) if !is_empty(id) => id.to_string(),
            _ => {
                return Err(Response::bad_request(
                    "resource identifier is required for deletion",
                ))
            }
        };

        Ok(Outbound {
            method: Method::DELETE,
            success: Response::new(200, format!("record {} deleted successfully", id)),
            resource: Some(id),
            body: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_unusable_payloads() {
        let cases = [
            (json!(null), "resource identifier must not be null"),
            (json!(""), "resource identifier must not be null"),
            (json!({}), "resource identifier must not be null"),
            (json!([]), "resource identifier must not be null"),
            (json!("   "), "invalid type: must be a mapping"),
            (json!(123), "invalid type: must be a mapping"),
            (json!([{"id": "a"}]), "invalid type: must be a mapping"),
            (json!({"test": "test"}), "resource identifier is required for deletion"),
            (json!({"id": ""}), "resource identifier is required for deletion"),
            (json!({"id": null}), "resource identifier is required for deletion"),
        ];
        for (payload, message) in cases {
            assert_eq!(
                DeleteObject.prepare(payload.clone()),
                Err(Response::bad_request(message)),
                "payload {}",
                payload
            );
        }
    }

    #[test]
    fn deletes_by_id() {
        let payload: Value = serde_json::from_str(include_str!("../../tests/data/delete.json"))
            .expect("failed to deserialize delete fixture");
        let outbound = DeleteObject
            .prepare(payload)
            .expect("identified payload should be accepted");

        assert_eq!(outbound.method, Method::DELETE);
        assert_eq!(outbound.resource.as_deref(), Some("a1b2c3"));
        assert_eq!(outbound.body, None);
        assert_eq!(
            outbound.success,
            Response::new(200, "record a1b2c3 deleted successfully")
        );
    }

    #[test]
    fn renders_numeric_ids() {
        let outbound = DeleteObject
            .prepare(json!({"id": 42}))
            .expect("numeric id should be accepted");
        assert_eq!(outbound.resource.as_deref(), Some("42"));
        assert_eq!(outbound.success.message, "record 42 deleted successfully");
    }
}
