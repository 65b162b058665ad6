/* src/server/adapter/axum/src/handler/catalog.rs */

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use brickyard_core::BrickError;

use super::AppState;
use crate::error::AxumError;

/// Add-menu palette: category -> visible bricks.
pub(super) async fn handle_catalog(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(state.registry.palette())
}

pub(super) async fn handle_schema(
  State(state): State<Arc<AppState>>,
  Path(name): Path<String>,
) -> Result<impl IntoResponse, AxumError> {
  let brick = state
    .registry
    .get(&name)
    .ok_or_else(|| BrickError::not_found(format!("unknown brick \"{name}\"")))?;
  Ok(Json(brick.descriptor().clone()))
}
