/* src/core/rust/src/locale.rs */

//! Process-wide locale registry: supported locales, default locale and the
//! public site origin. Consumed by routing code to resolve locale-prefixed URLs.

use std::collections::HashSet;
use std::sync::OnceLock;

use crate::errors::BrickError;

/// Environment variable holding the public site origin.
pub const SITE_URL_ENV: &str = "SITE_URL";

const SITE_DEFAULT_LOCALE: &str = "en";
const SITE_LOCALES: &[&str] = &["en", "it"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
  site_url: Option<String>,
  default_locale: String,
  locales: Vec<String>,
}

impl LocaleConfig {
  /// Build a config, rejecting an empty locale list, duplicate locales and a
  /// default locale that is not listed.
  pub fn new(
    site_url: Option<String>,
    default_locale: impl Into<String>,
    locales: Vec<String>,
  ) -> Result<Self, BrickError> {
    let config =
      Self { site_url: normalize_site_url(site_url), default_locale: default_locale.into(), locales };
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), BrickError> {
    if self.locales.is_empty() {
      return Err(BrickError::config("locales must not be empty"));
    }
    let mut seen = HashSet::new();
    for locale in &self.locales {
      if locale.is_empty() {
        return Err(BrickError::config("locale tags must not be empty"));
      }
      if !seen.insert(locale.as_str()) {
        return Err(BrickError::config(format!("duplicate locale \"{locale}\"")));
      }
    }
    if !self.locales.contains(&self.default_locale) {
      return Err(BrickError::config(format!(
        "default locale \"{}\" is not in locales {:?}",
        self.default_locale, self.locales
      )));
    }
    Ok(())
  }

  pub fn site_url(&self) -> Option<&str> {
    self.site_url.as_deref()
  }

  pub fn default_locale(&self) -> &str {
    &self.default_locale
  }

  pub fn locales(&self) -> &[String] {
    &self.locales
  }

  pub fn is_supported(&self, locale: &str) -> bool {
    self.locales.iter().any(|l| l == locale)
  }

  /// Replace the site origin, e.g. when an environment override is present.
  pub fn with_site_url(mut self, site_url: Option<String>) -> Self {
    self.site_url = normalize_site_url(site_url);
    self
  }

  /// Matching locale for a path prefix, or the default locale.
  pub fn resolve_locale<'a>(&'a self, prefix: &'a str) -> &'a str {
    if self.is_supported(prefix) { prefix } else { &self.default_locale }
  }

  /// Split a locale-prefixed URL path into `(locale, rest)`.
  /// `/it/about` -> `("it", "/about")`, `/about` -> `(default, "/about")`.
  pub fn split_path<'a>(&'a self, path: &'a str) -> (&'a str, &'a str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (head, tail) = match trimmed.find('/') {
      Some(pos) => (&trimmed[..pos], &trimmed[pos..]),
      None => (trimmed, ""),
    };
    if self.is_supported(head) {
      let rest = if tail.is_empty() { "/" } else { tail };
      (head, rest)
    } else {
      (&self.default_locale, path)
    }
  }

  /// Path as served for `locale`: the default locale stays unprefixed.
  pub fn localized_path(&self, locale: &str, path: &str) -> String {
    let path = if path.starts_with('/') { path.to_string() } else { format!("/{path}") };
    let locale = self.resolve_locale(locale);
    if locale == self.default_locale {
      path
    } else if path == "/" {
      format!("/{locale}")
    } else {
      format!("/{locale}{path}")
    }
  }

  /// Absolute URL on the public origin. None when no origin is configured.
  pub fn absolute_url(&self, locale: &str, path: &str) -> Option<String> {
    let origin = self.site_url.as_deref()?;
    Some(format!("{origin}{}", self.localized_path(locale, path)))
  }

  /// One `(locale, absolute url)` pair per supported locale, in declaration order.
  pub fn alternates(&self, path: &str) -> Vec<(String, String)> {
    self
      .locales
      .iter()
      .filter_map(|locale| self.absolute_url(locale, path).map(|url| (locale.clone(), url)))
      .collect()
  }
}

fn normalize_site_url(site_url: Option<String>) -> Option<String> {
  let url = site_url?;
  let url = url.trim().trim_end_matches('/');
  if url.is_empty() { None } else { Some(url.to_string()) }
}

/// Read the site origin from `SITE_URL`. Unset or blank means no origin.
pub fn site_url_from_env() -> Option<String> {
  site_url_from_var(SITE_URL_ENV)
}

fn site_url_from_var(name: &str) -> Option<String> {
  normalize_site_url(std::env::var(name).ok())
}

static SITE_I18N: OnceLock<LocaleConfig> = OnceLock::new();

/// The site's locale registry, fixed at first access.
pub fn site_i18n() -> &'static LocaleConfig {
  SITE_I18N.get_or_init(|| LocaleConfig {
    site_url: site_url_from_env(),
    default_locale: SITE_DEFAULT_LOCALE.to_string(),
    locales: SITE_LOCALES.iter().map(|l| (*l).to_string()).collect(),
  })
}
