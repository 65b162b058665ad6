/* src/cli/core/src/config/types.rs */

use anyhow::{Result, bail};
use brickyard_core::LocaleConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrickyardConfig {
  #[serde(default)]
  pub site: SiteSection,
  #[serde(default)]
  pub i18n: I18nSection,
  #[serde(default)]
  pub preview: PreviewSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteSection {
  /// Public origin for canonical and hreflang links. `SITE_URL` overrides it.
  pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSection {
  #[serde(default = "default_locales")]
  pub locales: Vec<String>,
  #[serde(default = "default_i18n_default")]
  pub default: String,
}

impl Default for I18nSection {
  fn default() -> Self {
    Self { locales: default_locales(), default: default_i18n_default() }
  }
}

impl I18nSection {
  pub fn validate(&self) -> Result<()> {
    if self.locales.is_empty() {
      bail!("i18n.locales must not be empty");
    }
    if !self.locales.contains(&self.default) {
      bail!("i18n.default \"{}\" is not in i18n.locales {:?}", self.default, self.locales);
    }
    Ok(())
  }
}

fn default_locales() -> Vec<String> {
  vec!["en".to_string(), "it".to_string()]
}

fn default_i18n_default() -> String {
  "en".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreviewSection {
  #[serde(default = "default_port")]
  pub port: u16,
  #[serde(default)]
  pub images_dir: Option<String>,
  #[serde(default)]
  pub stylesheets: Vec<String>,
}

impl Default for PreviewSection {
  fn default() -> Self {
    Self { port: default_port(), images_dir: None, stylesheets: Vec::new() }
  }
}

fn default_port() -> u16 {
  3000
}

impl BrickyardConfig {
  /// Locale registry for this site. `env_site_url` (from `SITE_URL`) takes
  /// precedence over `[site] url`.
  pub fn locale_config(&self, env_site_url: Option<String>) -> Result<LocaleConfig> {
    let site_url = env_site_url.or_else(|| self.site.url.clone());
    Ok(LocaleConfig::new(site_url, self.i18n.default.clone(), self.i18n.locales.clone())?)
  }
}
