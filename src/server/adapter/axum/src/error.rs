/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use brickyard_core::BrickError;

/// Newtype wrapper to implement `IntoResponse` for `BrickError`.
/// Required because Rust's orphan rule prevents `impl IntoResponse for BrickError`
/// when both types are foreign to this crate.
pub(crate) struct AxumError(pub BrickError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
      tracing::error!(code = %err.code(), "{}", err.message());
    }
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": err.code(),
        "message": err.message(),
      }
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<BrickError> for AxumError {
  fn from(err: BrickError) -> Self {
    Self(err)
  }
}
