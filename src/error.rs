//! Error taxonomy for the service.
//!
//! Two layers:
//!
//! - [`StoreError`] - a closed enumeration of store-fault categories produced
//!   by a single adapter over [`sqlx::Error`]. Handlers branch on the enum,
//!   never on driver strings.
//! - [`AppError`] - the handler-boundary error. Its [`IntoResponse`] impl
//!   owns every failure body on the wire; raw driver detail is logged
//!   server-side and only the contract's `message`/`error` fields leave the
//!   process.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Body text for the list failure response.
pub const FETCH_POSTS_FAILED: &str = "Failed to fetch posts";

/// Body text for a creation request with absent or empty required fields.
pub const MISSING_POST_DATA: &str =
    "Server could not create post because there are missing data from client";

/// Body text for a creation attempt against an unreachable store.
pub const CREATE_POST_DB_DOWN: &str = "Server could not create post because database connection";

/// Body text for any other creation failure.
pub const CREATE_POST_FAILED: &str = "Server could not create post";

/// Fault code reported when the driver gives nothing more specific.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

/// A store-side fault, classified into the categories the external contract
/// distinguishes.
///
/// Produced by the [`From<sqlx::Error>`] adapter below; nothing else in the
/// crate inspects driver errors.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store's host could not be resolved or reached.
    #[error("{message}")]
    HostNotFound { message: String },

    /// The store actively refused the connection.
    #[error("{message}")]
    ConnectionRefused { message: String },

    /// The operation or connection acquisition timed out.
    #[error("{message}")]
    Timeout { message: String },

    /// Any other store fault. `code` carries the SQLSTATE when the driver
    /// reported one.
    #[error("{message}")]
    Other {
        code: Option<String>,
        message: String,
    },
}

impl StoreError {
    /// Stable identifier for the `code` field of the list failure body.
    pub fn code(&self) -> &str {
        match self {
            StoreError::HostNotFound { .. } => "HOST_NOT_FOUND",
            StoreError::ConnectionRefused { .. } => "CONNECTION_REFUSED",
            StoreError::Timeout { .. } => "TIMEOUT",
            StoreError::Other {
                code: Some(code), ..
            } => code,
            StoreError::Other { code: None, .. } => UNKNOWN_ERROR_CODE,
        }
    }

    /// True for faults that mean the store could not be reached at all.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            StoreError::HostNotFound { .. }
                | StoreError::ConnectionRefused { .. }
                | StoreError::Timeout { .. }
        )
    }

    /// User-facing message for the list failure body.
    ///
    /// Host-resolution and connection-refused faults are rewritten into
    /// configuration guidance; every other fault passes the driver message
    /// through for diagnosability.
    pub fn guidance(&self) -> String {
        match self {
            StoreError::HostNotFound { .. } => {
                "Cannot connect to database. Please check your DATABASE_URL in .env file."
                    .to_string()
            }
            StoreError::ConnectionRefused { .. } => {
                "Database connection refused. Please check your connection settings.".to_string()
            }
            StoreError::Timeout { message } | StoreError::Other { message, .. } => message.clone(),
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Io(io) => classify_io(&io),
            e @ sqlx::Error::PoolTimedOut => StoreError::Timeout {
                message: e.to_string(),
            },
            sqlx::Error::Database(db) => StoreError::Other {
                code: db.code().map(|c| c.to_string()),
                message: db.message().to_string(),
            },
            other => StoreError::Other {
                code: None,
                message: other.to_string(),
            },
        }
    }
}

/// Classifies a transport-level I/O error.
///
/// DNS failures surface from the standard library as an uncategorized kind
/// with a "failed to lookup address" message, so that one case falls back to
/// message inspection.
fn classify_io(io: &std::io::Error) -> StoreError {
    let message = io.to_string();

    match io.kind() {
        std::io::ErrorKind::ConnectionRefused => StoreError::ConnectionRefused { message },
        std::io::ErrorKind::TimedOut => StoreError::Timeout { message },
        std::io::ErrorKind::HostUnreachable | std::io::ErrorKind::NetworkUnreachable => {
            StoreError::HostNotFound { message }
        }
        _ if message.contains("failed to lookup address") => StoreError::HostNotFound { message },
        _ => StoreError::Other {
            code: None,
            message,
        },
    }
}

/// Handler-boundary error carrying the operation that failed.
#[derive(Debug, Error)]
pub enum AppError {
    /// A creation request with required fields absent or empty. Rejected
    /// before any store access.
    #[error("missing required post fields")]
    MissingPostData,

    /// The list operation failed against the store.
    #[error("failed to fetch posts: {0}")]
    FetchPosts(StoreError),

    /// The create operation failed against the store.
    #[error("failed to create post: {0}")]
    CreatePost(StoreError),
}

#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

#[derive(Serialize)]
struct FetchErrorBody {
    success: bool,
    error: &'static str,
    message: String,
    code: String,
}

#[derive(Serialize)]
struct CreateErrorBody {
    message: &'static str,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingPostData => (
                StatusCode::BAD_REQUEST,
                Json(MessageBody {
                    message: MISSING_POST_DATA,
                }),
            )
                .into_response(),

            AppError::FetchPosts(fault) => {
                tracing::error!(code = fault.code(), "Error fetching posts: {fault}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(FetchErrorBody {
                        success: false,
                        error: FETCH_POSTS_FAILED,
                        message: fault.guidance(),
                        code: fault.code().to_string(),
                    }),
                )
                    .into_response()
            }

            AppError::CreatePost(fault) if fault.is_connectivity() => {
                tracing::error!(code = fault.code(), "Error creating post: {fault}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody {
                        message: CREATE_POST_DB_DOWN,
                    }),
                )
                    .into_response()
            }

            AppError::CreatePost(fault) => {
                tracing::error!(code = fault.code(), "Error creating post: {fault}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(CreateErrorBody {
                        message: CREATE_POST_FAILED,
                        error: fault.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
