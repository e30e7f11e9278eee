use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tandem_core::ConnectionId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// The handshake carried no usable display name.
    #[error("invalid identity: a non-empty username is required")]
    InvalidIdentity,

    /// A directed message named a connection that is not online.
    #[error("unknown target: {0}")]
    UnknownTarget(ConnectionId),

    #[error("hub is no longer running")]
    HubClosed,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match self {
            Error::InvalidIdentity => StatusCode::BAD_REQUEST,
            // Only the handshake rejection ever reaches an HTTP response.
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
