//! Body codec for service calls.
//!
//! The host only guarantees an object; every key inside it is the handler's
//! business.

use serde_json::{Map, Value};

use hassbridge_core::error::{BridgeError, Result};
use hassbridge_core::protocol::call::ServiceCall;

pub fn decode(domain: &str, service: &str, body: &[u8]) -> Result<ServiceCall> {
    let data = if body.iter().all(u8::is_ascii_whitespace) {
        Map::new()
    } else {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(m)) => m,
            Ok(other) => {
                return Err(BridgeError::BadRequest(format!(
                    "service data must be a JSON object, got {other}"
                )))
            }
            Err(e) => return Err(BridgeError::BadRequest(format!("invalid service data json: {e}"))),
        }
    };
    Ok(ServiceCall::new(domain, service, data))
}
