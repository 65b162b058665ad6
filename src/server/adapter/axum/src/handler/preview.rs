/* src/server/adapter/axum/src/handler/preview.rs */

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE};
use axum::response::Html;
use brickyard_core::{BrickError, PageOptions, ResolveData, render_html, render_page, resolve_chain};
use serde::Deserialize;
use serde_json::Value;

use super::AppState;
use crate::error::AxumError;

#[derive(Deserialize)]
pub(super) struct PreviewQuery {
  story: Option<String>,
}

/// An explicit path prefix always decides the locale; an unsupported one
/// falls back to the default. Without a prefix the strategy chain runs.
fn resolve_locale(state: &AppState, prefix: Option<&str>, headers: &HeaderMap) -> String {
  if let Some(prefix) = prefix {
    let locale = state.locales.resolve_locale(prefix);
    if locale != prefix {
      tracing::debug!(prefix, fallback = locale, "unsupported locale prefix");
    }
    return locale.to_string();
  }
  let data = ResolveData {
    path_locale: None,
    cookie_header: headers.get(COOKIE).and_then(|v| v.to_str().ok()),
    accept_language: headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok()),
    config: &state.locales,
  };
  resolve_chain(&state.strategies, &data)
}

pub(super) async fn handle_preview(
  State(state): State<Arc<AppState>>,
  Path(mut params): Path<HashMap<String, String>>,
  Query(query): Query<PreviewQuery>,
  headers: HeaderMap,
) -> Result<Html<String>, AxumError> {
  let name = params
    .remove("name")
    .ok_or_else(|| BrickError::internal("preview route is missing the brick name"))?;
  let prefix = params.remove("locale");
  let locale = resolve_locale(&state, prefix.as_deref(), &headers);

  let brick = state
    .registry
    .get(&name)
    .ok_or_else(|| BrickError::not_found(format!("unknown brick \"{name}\"")))?;
  let (props, title) = match query.story.as_deref() {
    Some(id) => {
      let props = state.registry.story_props(&name, id)?;
      let story_name = brick
        .descriptor()
        .stories
        .iter()
        .find(|s| s.id == id)
        .map_or(id, |s| s.name.as_str())
        .to_string();
      (props, story_name)
    }
    None => (brick.default_props()?, brick.descriptor().label.clone()),
  };

  let body = brick.render(&props)?;
  let path = format!("/_bricks/preview/{name}");
  let opts = PageOptions {
    locale: &locale,
    title: &title,
    path: &path,
    locales: &state.locales,
    stylesheets: &state.stylesheets,
  };
  Ok(Html(render_page(&opts, &body)))
}

/// Render host-supplied props to an HTML fragment.
pub(super) async fn handle_render(
  State(state): State<Arc<AppState>>,
  Path(name): Path<String>,
  body: axum::body::Bytes,
) -> Result<Html<String>, AxumError> {
  let props: Value = serde_json::from_slice(&body)
    .map_err(|e| BrickError::invalid_props(format!("request body: {e}")))?;
  let node = state.registry.render_json(&name, &props)?;
  Ok(Html(render_html(&node)))
}
