/* src/cli/core/src/main.rs */

mod catalog;
mod check;
mod config;
mod logger;
mod render;
mod resolve;
mod serve;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use brickyard_core::{LocaleConfig, site_url_from_env};
use clap::{Parser, Subcommand};

use config::{BrickyardConfig, find_brickyard_config, load_brickyard_config};

#[derive(Parser)]
#[command(name = "brickyard", about = "Brickyard brick library CLI", version)]
struct Cli {
  /// Path to brickyard.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  /// Log debug diagnostics to stderr (RUST_LOG overrides)
  #[arg(short, long, global = true)]
  verbose: bool,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Register every brick and validate schemas, defaults and stories
  Check,
  /// Print the add-menu palette
  Catalog {
    /// Only bricks carrying this tag (hidden item bricks included)
    #[arg(short, long)]
    tag: Option<String>,
    /// Print JSON instead of a listing
    #[arg(long)]
    json: bool,
  },
  /// Render a brick preview page
  Render {
    /// Registered brick name (e.g. hero-unit-2)
    brick: String,
    /// Story id; default props when omitted
    #[arg(short, long)]
    story: Option<String>,
    /// Page locale; unsupported values fall back to the default
    #[arg(short, long)]
    locale: Option<String>,
    /// Output file; stdout when omitted
    #[arg(short, long)]
    out: Option<PathBuf>,
  },
  /// Resolve a request path to its locale, remaining path and public URL
  Resolve {
    /// Request path (e.g. /it/about)
    path: String,
  },
  /// Start the preview server
  Serve {
    /// Listen port (default from [preview] port)
    #[arg(short, long)]
    port: Option<u16>,
    /// Directory served under /bricks-preview-images
    #[arg(long)]
    images: Option<PathBuf>,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it.
/// Without a config file the built-in defaults apply.
fn resolve_config(explicit: Option<PathBuf>) -> Result<(Option<PathBuf>, BrickyardConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      match find_brickyard_config(&cwd) {
        Ok(p) => p,
        Err(e) => {
          tracing::debug!("{e:#}, using defaults");
          return Ok((None, BrickyardConfig::default()));
        }
      }
    }
  };
  let config = load_brickyard_config(&path)?;
  Ok((Some(path), config))
}

fn locale_config(config: &BrickyardConfig) -> Result<LocaleConfig> {
  config.locale_config(site_url_from_env()).context("invalid locale configuration")
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  logger::init(cli.verbose)?;

  let (config_path, config) = resolve_config(cli.config)?;
  if let Some(path) = &config_path {
    tracing::debug!(path = %path.display(), "loaded config");
  }
  let base_dir = config_path
    .as_deref()
    .and_then(std::path::Path::parent)
    .map_or_else(|| PathBuf::from("."), std::path::Path::to_path_buf);

  match cli.command {
    Command::Check => {
      check::run_check()?;
    }
    Command::Catalog { tag, json } => {
      let registry = brickyard_ui::website_registry()?;
      catalog::run_catalog(&registry, tag.as_deref(), json)?;
    }
    Command::Render { brick, story, locale, out } => {
      let registry = brickyard_ui::website_registry()?;
      let locales = locale_config(&config)?;
      let args = render::RenderArgs {
        brick: &brick,
        story: story.as_deref(),
        locale: locale.as_deref(),
        out: out.as_deref(),
        stylesheets: &config.preview.stylesheets,
      };
      render::run_render(&registry, &locales, &args)?;
    }
    Command::Resolve { path } => {
      let locales = locale_config(&config)?;
      resolve::run_resolve(&locales, &path);
    }
    Command::Serve { port, images } => {
      let registry = brickyard_ui::website_registry()?;
      let locales = locale_config(&config)?;
      let port = port.unwrap_or(config.preview.port);
      let images =
        images.or_else(|| config.preview.images_dir.as_ref().map(|dir| base_dir.join(dir)));
      serve::run_serve(registry, locales, port, images.as_deref(), &config.preview.stylesheets)
        .await?;
    }
  }

  Ok(())
}
