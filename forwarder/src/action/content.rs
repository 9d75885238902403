use super::{is_empty, Action, Body, Outbound};
use crate::Response;
use reqwest::Method;
use serde_json::{Map, Value};

/// Uploads named content. The payload is a mapping, or a string holding
/// one, with non-empty `name` and `file` fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct SendContent;

fn decode(payload: Value) -> Result<Map<String, Value>, Response> {
    match payload {
        Value::Null => Err(Response::bad_request("payload must not be null")),
        // an empty string fails to decode too
        Value::String(text) => serde_json::from_str(&text).map_err(|err| {
            log::debug!("content payload is not a json mapping: {}", err);
            Response::bad_request("string payload must not be empty or invalid")
        }),
        Value::Object(fields) if fields.is_empty() => {
            Err(Response::bad_request("payload must not be empty"))
        }
        Value::Object(fields) => Ok(fields),
        _ => Err(Response::bad_request(
            "invalid payload type: must be string or mapping",
        )),
    }
}

fn require(fields: &Map<String, Value>, field: &str) -> Result<(), Response> {
    match fields.get(field) {
        Some(value) if !is_empty(value) => Ok(()),
        _ => Err(Response::bad_request(format!(
            "'{}' field is required and must not be empty",
            field
        ))),
    }
}

impl Action for SendContent {
    fn name(&self) -> &'static str {
        "send_content"
    }

    fn prepare(&self, payload: Value) -> Result<Outbound, Response> {
        let fields = decode(payload)?;
        require(&fields, "name")?;
        require(&fields, "file")?;

        Ok(Outbound {
            method: Method::POST,
            resource: None,
            body: Some(Body::Json(Value::Object(fields))),
            success: Response::new(200, "record created successfully"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const NAME: &str = "'name' field is required and must not be empty";
    const FILE: &str = "'file' field is required and must not be empty";

    #[test]
    fn rejects_unusable_payloads() {
        let cases = [
            (json!(null), "payload must not be null"),
            (json!(""), "string payload must not be empty or invalid"),
            (json!("   "), "string payload must not be empty or invalid"),
            (json!("teste"), "string payload must not be empty or invalid"),
            (json!("[1, 2]"), "string payload must not be empty or invalid"),
            (json!({}), "payload must not be empty"),
            (json!([]), "invalid payload type: must be string or mapping"),
            (json!([{"name": "a", "file": "b"}]), "invalid payload type: must be string or mapping"),
            (json!(123), "invalid payload type: must be string or mapping"),
            (json!({"test": "test"}), NAME),
            (json!("{\"test\":\"test\"}"), NAME),
            (json!("{}"), NAME),
            (json!({"name": ""}), NAME),
            (json!({"name": null, "file": "x"}), NAME),
            (json!({"name": "correct"}), FILE),
            (json!({"name": "correct", "file": ""}), FILE),
            (json!("{\"name\":\"correct\",\"file\":\"\"}"), FILE),
        ];
        for (payload, message) in cases {
            assert_eq!(
                SendContent.prepare(payload.clone()),
                Err(Response::bad_request(message)),
                "payload {}",
                payload
            );
        }
    }

    #[test]
    fn accepts_mappings() {
        let payload: Value = serde_json::from_str(include_str!("../../tests/data/content.json"))
            .expect("failed to deserialize content fixture");
        let outbound = SendContent
            .prepare(payload.clone())
            .expect("well-formed content should be accepted");

        assert_eq!(outbound.method, Method::POST);
        assert_eq!(outbound.body, Some(Body::Json(payload)));
        assert_eq!(outbound.success, Response::new(200, "record created successfully"));
    }

    #[test]
    fn decodes_json_strings() {
        let outbound = SendContent
            .prepare(json!("{\"name\": \"report\", \"file\": \"aGVsbG8=\"}"))
            .expect("encoded content should be accepted");
        assert_eq!(
            outbound.body,
            Some(Body::Json(json!({"name": "report", "file": "aGVsbG8="})))
        );
    }
}
