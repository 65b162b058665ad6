/* src/cli/core/src/render.rs */

use std::path::Path;

use anyhow::{Context, Result};
use brickyard_core::{BrickRegistry, LocaleConfig, PageOptions, render_page};

use crate::ui;

pub struct RenderArgs<'a> {
  pub brick: &'a str,
  pub story: Option<&'a str>,
  pub locale: Option<&'a str>,
  pub out: Option<&'a Path>,
  pub stylesheets: &'a [String],
}

/// Render one brick (defaults or a story) to a full HTML document.
pub fn render_preview(
  registry: &BrickRegistry,
  locales: &LocaleConfig,
  args: &RenderArgs<'_>,
) -> Result<String> {
  let brick =
    registry.get(args.brick).with_context(|| format!("unknown brick \"{}\"", args.brick))?;
  let (props, title) = match args.story {
    Some(id) => (registry.story_props(args.brick, id)?, format!("{} / {id}", brick.descriptor().label)),
    None => (brick.default_props()?, brick.descriptor().label.clone()),
  };
  let locale = match args.locale {
    Some(requested) => locales.resolve_locale(requested),
    None => locales.default_locale(),
  };
  if args.locale.is_some_and(|l| l != locale) {
    ui::warn(&format!("locale not supported, using \"{locale}\""));
  }

  let body = brick.render(&props)?;
  let path = format!("/_bricks/preview/{}", args.brick);
  let opts = PageOptions { locale, title: &title, path: &path, locales, stylesheets: args.stylesheets };
  Ok(render_page(&opts, &body))
}

pub fn run_render(registry: &BrickRegistry, locales: &LocaleConfig, args: &RenderArgs<'_>) -> Result<()> {
  let html = render_preview(registry, locales, args)?;
  match args.out {
    Some(out) => {
      if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      std::fs::write(out, &html).with_context(|| format!("failed to write {}", out.display()))?;
      ui::ok(&format!("{}  {} bytes", out.display(), html.len()));
    }
    None => println!("{html}"),
  }
  Ok(())
}
