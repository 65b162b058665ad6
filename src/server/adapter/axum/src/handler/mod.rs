/* src/server/adapter/axum/src/handler/mod.rs */

mod catalog;
mod preview;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use brickyard_core::{BrickRegistry, LocaleConfig, ResolveStrategy};
use tower_http::services::ServeDir;

/// Mount point for preview images, matching `preview_image_url`.
pub(crate) const PREVIEW_IMAGES_ROUTE: &str = "/bricks-preview-images";

pub(crate) struct AppState {
  pub registry: BrickRegistry,
  pub locales: LocaleConfig,
  pub strategies: Vec<Box<dyn ResolveStrategy>>,
  pub stylesheets: Vec<String>,
}

pub(crate) fn build_router(
  registry: BrickRegistry,
  locales: LocaleConfig,
  strategies: Vec<Box<dyn ResolveStrategy>>,
  stylesheets: Vec<String>,
  images_dir: Option<PathBuf>,
) -> Router {
  // Use default strategies when none provided
  let strategies =
    if strategies.is_empty() { brickyard_core::default_strategies() } else { strategies };

  let state = Arc::new(AppState { registry, locales, strategies, stylesheets });

  let mut router = Router::new()
    .route("/_bricks/catalog.json", get(catalog::handle_catalog))
    .route("/_bricks/schema/{name}", get(catalog::handle_schema))
    .route("/_bricks/preview/{name}", get(preview::handle_preview))
    .route("/{locale}/_bricks/preview/{name}", get(preview::handle_preview))
    .route("/_bricks/render/{name}", post(preview::handle_render))
    .with_state(state);

  if let Some(dir) = images_dir {
    router = router.nest_service(PREVIEW_IMAGES_ROUTE, ServeDir::new(dir));
  }
  router
}
