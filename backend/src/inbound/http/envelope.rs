//! The uniform response envelope.
//!
//! Every endpoint, success or failure, returns
//! `{ success, message, data, errors }`. `data` and `errors` are always
//! present as keys and null when absent.

use actix_web::http::header;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};

/// Uniform wrapper returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
    /// Operation payload; null on failure.
    pub data: Option<T>,
    /// Itemised failure details; null on success.
    pub errors: Option<Vec<String>>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope wrapping `data`.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
        }
    }

    /// Failed envelope with an itemised error list (null when empty).
    pub fn failure(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: if errors.is_empty() { None } else { Some(errors) },
        }
    }
}

/// 201 response reporting the new record's location.
pub fn created<T: Serialize>(
    location: String,
    message: impl Into<String>,
    data: T,
) -> HttpResponse {
    HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(ApiResponse::ok(message, data))
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    #[test]
    fn success_envelope_serialises_null_errors() {
        let envelope = ApiResponse::ok("done", json!({"x": 1}));
        let value = serde_json::to_value(&envelope).expect("serialise");

        assert_eq!(
            value,
            json!({
                "success": true,
                "message": "done",
                "data": {"x": 1},
                "errors": Value::Null,
            })
        );
    }

    #[test]
    fn failure_envelope_serialises_null_data() {
        let envelope = ApiResponse::<Value>::failure("bad", vec!["userId is required".into()]);
        let value = serde_json::to_value(&envelope).expect("serialise");

        assert_eq!(
            value,
            json!({
                "success": false,
                "message": "bad",
                "data": Value::Null,
                "errors": ["userId is required"],
            })
        );
    }

    #[test]
    fn empty_error_list_collapses_to_null() {
        let envelope = ApiResponse::<Value>::failure("bad", Vec::new());
        let value = serde_json::to_value(&envelope).expect("serialise");

        assert_eq!(value.get("errors"), Some(&Value::Null));
    }
}
