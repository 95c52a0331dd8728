use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The decoded body of the token endpoint.
///
/// No shape is enforced: an error response decodes just as well, and
/// [`TokenResponse::access_token`] is simply `None` then.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct TokenResponse(Value);

impl TokenResponse {
    /// The issued bearer token, if the exchange succeeded.
    pub fn access_token(&self) -> Option<&str> {
        self.0.get("access_token").and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for TokenResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
