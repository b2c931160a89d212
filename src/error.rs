use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::io;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("location permission denied")]
    PermissionDenied,

    #[error("location unavailable: {0}")]
    LocationUnavailable(String),

    #[error("current location is not known yet")]
    NoCurrentLocation,

    #[error("delivery point not found: {0}")]
    DeliveryPointNotFound(String),

    #[error("invalid delivery data: {0}")]
    InvalidDeliveryData(String),

    #[error("environment variable error: {0}")]
    Environment(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("server error: {0}")]
    Server(String),
}

impl Error {
    // 1..=99 are internal failures, 100 and above are the caller's to fix
    pub fn code(&self) -> i32 {
        match self {
            Self::Environment(_) => 1,
            Self::Io(_) => 2,
            Self::LocationUnavailable(_) => 4,
            Self::Server(_) => 5,
            Self::InvalidCoordinate(_) => 101,
            Self::InvalidConfiguration(_) => 102,
            Self::PermissionDenied => 103,
            Self::DeliveryPointNotFound(_) => 104,
            Self::NoCurrentLocation => 105,
            Self::InvalidDeliveryData(_) => 106,
        }
    }

    pub fn is_internal(&self) -> bool {
        (1..=99).contains(&self.code())
    }

    fn status(&self) -> StatusCode {
        match self {
            _ if self.is_internal() => StatusCode::INTERNAL_SERVER_ERROR,
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::DeliveryPointNotFound(_) => StatusCode::NOT_FOUND,
            Self::NoCurrentLocation => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        Self::Environment(err.to_string())
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidDeliveryData(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = if self.is_internal() {
            tracing::error!(code = self.code(), "{}", self);
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "code": self.code(),
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
