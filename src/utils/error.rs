use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::post::post_store::StoreError;

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum CustomError {
    /// A required field is absent from a create request. Answered as plain text.
    #[error("Missing `{0}` in request body")]
    MissingField(&'static str),

    #[error("{0}")]
    BadRequestError(String),

    #[error("{0}")]
    NotFoundError(String),

    /// The detail is logged, never sent to the client.
    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match *self {
            CustomError::MissingField(..) => StatusCode::BAD_REQUEST,
            CustomError::BadRequestError(..) => StatusCode::BAD_REQUEST,
            CustomError::NotFoundError(..) => StatusCode::NOT_FOUND,
            CustomError::InternalServerError(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            CustomError::MissingField(..) => {
                log::warn!("Rejected request: {}", self);
                HttpResponse::build(self.status_code())
                    .content_type("text/plain; charset=utf-8")
                    .body(self.to_string())
            }
            CustomError::BadRequestError(message) => {
                log::warn!("Rejected request: {}", message);
                HttpResponse::build(self.status_code()).json(json!({ "message": message }))
            }
            CustomError::NotFoundError(message) => {
                HttpResponse::build(self.status_code()).json(json!({ "message": message }))
            }
            CustomError::InternalServerError(detail) => {
                log::error!("{}", detail);
                HttpResponse::build(self.status_code())
                    .json(json!({ "message": INTERNAL_SERVER_ERROR_MESSAGE }))
            }
        }
    }
}

// Every store failure, misses included, collapses to the same opaque 500.
impl From<StoreError> for CustomError {
    fn from(err: StoreError) -> Self {
        CustomError::InternalServerError(err.to_string())
    }
}
