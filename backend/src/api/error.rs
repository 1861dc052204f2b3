//! HTTP error envelope.
//!
//! Every failure leaves the API as `{code, message, traceId?, details?}`.
//! Internal errors are redacted before serialisation so repository messages
//! never reach clients; the full message is logged against the trace id.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::JobPostingRepositoryError;
use crate::domain::posting::FieldErrors;
use crate::middleware::trace::{TRACE_ID_HEADER, TraceId};

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed.
    InvalidRequest,
    /// The submitted form failed field validation.
    ValidationFailed,
    /// Authentication failed or is missing.
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    Forbidden,
    /// The requested resource does not exist.
    NotFound,
    /// An unexpected error occurred.
    InternalError,
}

impl ErrorCode {
    const fn status(self) -> StatusCode {
        match self {
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Standard error envelope returned by HTTP handlers.
///
/// The ambient [`TraceId`] is captured at construction so clients can quote
/// it back when reporting a failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    #[schema(example = "validation_failed")]
    code: ErrorCode,
    #[schema(example = "Something went wrong")]
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Attach structured details to the error.
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Forbidden, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Build a 422 response carrying the per-field error map as details.
    #[must_use]
    pub fn validation(errors: &FieldErrors) -> Self {
        let details = serde_json::to_value(errors).unwrap_or(Value::Null);
        Self::new(ErrorCode::ValidationFailed, "Job posting failed validation")
            .with_details(details)
    }

    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    #[must_use]
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

impl From<JobPostingRepositoryError> for ApiError {
    fn from(value: JobPostingRepositoryError) -> Self {
        match value {
            JobPostingRepositoryError::NotFound { id } => {
                Self::not_found(format!("job posting {id} not found"))
            }
            other => Self::internal(other.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.code.status()
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = &self.trace_id {
            builder.insert_header((TRACE_ID_HEADER, id.clone()));
        }
        if matches!(self.code, ErrorCode::InternalError) {
            error!(
                trace_id = self.trace_id.as_deref().unwrap_or("-"),
                message = %self.message,
                "internal error"
            );
            let redacted = Self {
                code: self.code,
                message: "Internal server error".to_owned(),
                trace_id: self.trace_id.clone(),
                details: None,
            };
            return builder.json(redacted);
        }
        builder.json(self)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;
    use rstest::rstest;
    use uuid::Uuid;

    use super::*;

    async fn body_json(error: &ApiError) -> Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.expect("body bytes");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[rstest]
    #[case(ApiError::invalid_request("bad"), StatusCode::BAD_REQUEST)]
    #[case(ApiError::unauthorized("who"), StatusCode::UNAUTHORIZED)]
    #[case(ApiError::forbidden("no"), StatusCode::FORBIDDEN)]
    #[case(ApiError::not_found("gone"), StatusCode::NOT_FOUND)]
    #[case(ApiError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
    fn codes_map_to_statuses(#[case] error: ApiError, #[case] expected: StatusCode) {
        assert_eq!(error.status_code(), expected);
    }

    #[actix_rt::test]
    async fn internal_errors_are_redacted() {
        let error = ApiError::internal("pool exhausted on host db-3");

        let body = body_json(&error).await;
        assert_eq!(body["message"], "Internal server error");
        assert_eq!(body["code"], "internal_error");
        assert!(body.get("details").is_none());
    }

    #[actix_rt::test]
    async fn validation_error_carries_field_map() {
        let errors = FieldErrors {
            job_title: Some("Job Title is required"),
            ..FieldErrors::default()
        };
        let error = ApiError::validation(&errors);

        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(&error).await;
        assert_eq!(body["details"]["jobTitle"], "Job Title is required");
    }

    #[rstest]
    fn repository_not_found_maps_to_404() {
        let id = Uuid::new_v4();
        let error = ApiError::from(JobPostingRepositoryError::not_found(id));
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
        assert!(error.message().contains(&id.to_string()));
    }

    #[rstest]
    fn repository_connection_maps_to_500() {
        let error = ApiError::from(JobPostingRepositoryError::connection("refused"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
