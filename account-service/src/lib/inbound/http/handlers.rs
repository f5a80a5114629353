use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::identity::errors::IdentityError;
use crate::identity::errors::ValidationError;

pub mod delete_account;
pub mod get_account;
pub mod list_accounts;
pub mod login;
pub mod refresh;
pub mod signup;
pub mod update_account;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    BadRequest(String),
    Validation(ValidationError),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InternalServerError(msg) => {
                // Detail goes to the log, never into the payload
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiResponseBody::new_error(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    ),
                )
            }
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiResponseBody::new_error(StatusCode::BAD_REQUEST, msg),
            ),
            ApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ApiResponseBody::new_field_error(
                    StatusCode::BAD_REQUEST,
                    err.field.to_string(),
                    err.message,
                ),
            ),
            ApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ApiResponseBody::new_error(StatusCode::NOT_FOUND, msg),
            ),
            ApiError::Conflict(msg) => (
                StatusCode::CONFLICT,
                ApiResponseBody::new_error(StatusCode::CONFLICT, msg),
            ),
            ApiError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                ApiResponseBody::new_error(StatusCode::UNAUTHORIZED, msg),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<IdentityError> for ApiError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Validation(v) => ApiError::Validation(v),
            IdentityError::InvalidAccountId(_) => ApiError::BadRequest(err.to_string()),
            IdentityError::InvalidCredentials => ApiError::BadRequest(err.to_string()),
            IdentityError::Conflict => ApiError::Conflict(err.to_string()),
            IdentityError::NotFound(_) => ApiError::NotFound(err.to_string()),
            IdentityError::Password(_) | IdentityError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
            IdentityError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData {
                message,
                field: None,
            },
        }
    }

    pub fn new_field_error(status_code: StatusCode, field: String, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData {
                message,
                field: Some(field),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}
