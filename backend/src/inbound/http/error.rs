//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type HTTP-agnostic while letting Actix
//! handlers turn domain failures into the `{"msg": …}` envelope with the
//! right status code. This impl is the single point that writes error
//! responses; no controller builds one by hand.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Wire shape of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[schema(example = "Invalid article_id")]
    pub msg: String,
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidIdentifier
        | ErrorCode::InvalidPatchBody
        | ErrorCode::InvalidPostBody
        | ErrorCode::InvalidSortColumn
        | ErrorCode::InvalidOrder
        | ErrorCode::InvalidPagination => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::StoreFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Store failures keep their diagnostic message out of responses.
fn client_message(err: &Error) -> String {
    if matches!(err.code(), ErrorCode::StoreFailure) {
        error!(detail = %err.msg(), "store failure surfaced to client");
        "Internal server error".to_owned()
    } else {
        err.msg().to_owned()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            msg: client_message(self),
        })
    }
}
