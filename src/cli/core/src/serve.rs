/* src/cli/core/src/serve.rs */

use std::path::Path;

use anyhow::{Result, anyhow};
use brickyard_core::{BrickRegistry, LocaleConfig};
use brickyard_server_axum::{IntoAxumRouter, PreviewServer};

use crate::ui;

pub async fn run_serve(
  registry: BrickRegistry,
  locales: LocaleConfig,
  port: u16,
  images_dir: Option<&Path>,
  stylesheets: &[String],
) -> Result<()> {
  ui::banner("serve");
  let mut server = PreviewServer::new(registry, locales);
  if let Some(dir) = images_dir {
    if dir.is_dir() {
      ui::arrow(&format!("preview images from {}", dir.display()));
      server = server.preview_images(dir);
    } else {
      ui::warn(&format!("images dir {} not found, skipping", dir.display()));
    }
  }
  for href in stylesheets {
    server = server.stylesheet(href.clone());
  }
  ui::arrow(&format!("http://localhost:{port}/_bricks/catalog.json"));
  server.serve(&format!("0.0.0.0:{port}")).await.map_err(|e| anyhow!("preview server failed: {e}"))
}
