/* src/cli/core/src/resolve.rs */

use brickyard_core::LocaleConfig;

use crate::ui;

pub struct Resolved {
  pub locale: String,
  pub path: String,
  pub url: Option<String>,
}

/// Split a request path into locale and remainder, and build its public URL.
pub fn resolve_path(locales: &LocaleConfig, path: &str) -> Resolved {
  let (locale, rest) = locales.split_path(path);
  Resolved {
    locale: locale.to_string(),
    path: rest.to_string(),
    url: locales.absolute_url(locale, rest),
  }
}

pub fn run_resolve(locales: &LocaleConfig, path: &str) {
  let resolved = resolve_path(locales, path);
  ui::ok(&format!("locale  {}", resolved.locale));
  ui::detail(&format!("path  {}", resolved.path));
  match resolved.url {
    Some(url) => ui::detail(&format!("url   {url}")),
    None => ui::detail("url   (no site url configured)"),
  }
}
