//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn domain failures into envelope responses and status codes.
//! Internal failure detail is logged here and never reaches clients.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use super::envelope::ApiResponse;
use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::Forbidden => StatusCode::FORBIDDEN,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    match error.code() {
        ErrorCode::InternalError => Error::internal("An unexpected error occurred"),
        ErrorCode::ServiceUnavailable => {
            Error::service_unavailable("The service is temporarily unavailable")
        }
        _ => error.clone(),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(
            self.code(),
            ErrorCode::InternalError | ErrorCode::ServiceUnavailable
        ) {
            error!(code = ?self.code(), detail = %self, "request failed");
        }

        let visible = redact_if_internal(self);
        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::failure(
            visible.message(),
            visible.errors().to_vec(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use serde_json::Value;

    use super::*;

    #[rstest]
    #[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(Error::forbidden("no"), StatusCode::FORBIDDEN)]
    #[case(Error::not_found("gone"), StatusCode::NOT_FOUND)]
    #[case(Error::conflict("dupe"), StatusCode::CONFLICT)]
    #[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
    #[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn codes_map_to_the_expected_status(#[case] error: Error, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[actix_web::test]
    async fn validation_errors_keep_their_itemised_list() {
        let error =
            Error::invalid_request("Validation failed").with_errors(vec!["userId is required".into()]);

        let response = error.error_response();
        let body = to_bytes(response.into_body()).await.expect("body");
        let value: Value = serde_json::from_slice(&body).expect("json");

        assert_eq!(value["success"], Value::Bool(false));
        assert_eq!(value["message"], "Validation failed");
        assert_eq!(value["errors"][0], "userId is required");
        assert_eq!(value["data"], Value::Null);
    }

    #[actix_web::test]
    async fn internal_detail_is_redacted_from_the_body() {
        let error = Error::internal("connection to 10.0.0.5:27017 refused");

        let response = error.error_response();
        let body = to_bytes(response.into_body()).await.expect("body");
        let text = String::from_utf8(body.to_vec()).expect("utf8");

        assert!(!text.contains("27017"));
        assert!(text.contains("An unexpected error occurred"));
    }

    #[actix_web::test]
    async fn store_outage_detail_is_redacted_from_the_body() {
        let error = Error::service_unavailable("document store unavailable: dns failure");

        let response = error.error_response();
        let body = to_bytes(response.into_body()).await.expect("body");
        let text = String::from_utf8(body.to_vec()).expect("utf8");

        assert!(!text.contains("dns failure"));
        assert!(text.contains("temporarily unavailable"));
    }
}
