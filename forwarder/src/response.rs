use serde::{Deserialize, Serialize};

/// The normalized result every invocation returns, success or failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub message: String,
}

impl Response {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Response {
            status_code,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Response::new(400, message)
    }

    /// A response carrying no outcome at all.
    pub fn is_empty(&self) -> bool {
        self.status_code == 0 || self.message.trim().is_empty()
    }
}
