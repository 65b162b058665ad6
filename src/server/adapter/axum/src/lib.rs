/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;

use std::path::PathBuf;

use brickyard_core::{BrickRegistry, LocaleConfig, ResolveStrategy};

/// Re-export brickyard-core for convenience
pub use brickyard_core;

/// Preview server configuration: the registry to serve, the locale registry
/// and optional static assets.
pub struct PreviewServer {
  registry: BrickRegistry,
  locales: LocaleConfig,
  strategies: Vec<Box<dyn ResolveStrategy>>,
  stylesheets: Vec<String>,
  images_dir: Option<PathBuf>,
}

impl PreviewServer {
  pub fn new(registry: BrickRegistry, locales: LocaleConfig) -> Self {
    Self { registry, locales, strategies: Vec::new(), stylesheets: Vec::new(), images_dir: None }
  }

  /// Replace the default locale chain (url prefix, cookie, Accept-Language).
  pub fn resolve_strategies(mut self, strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
    self.strategies = strategies;
    self
  }

  /// Stylesheet linked from every preview page.
  pub fn stylesheet(mut self, href: impl Into<String>) -> Self {
    self.stylesheets.push(href.into());
    self
  }

  /// Serve `dir` under `/bricks-preview-images`.
  pub fn preview_images(mut self, dir: impl Into<PathBuf>) -> Self {
    self.images_dir = Some(dir.into());
    self
  }
}

/// Extension trait that converts a `PreviewServer` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for PreviewServer {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(
      self.registry,
      self.locales,
      self.strategies,
      self.stylesheets,
      self.images_dir,
    )
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests;
