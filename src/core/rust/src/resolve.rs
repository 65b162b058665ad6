/* src/core/rust/src/resolve.rs */

//! Request-level locale negotiation. Each strategy inspects one source
//! (path prefix, cookie, Accept-Language); the first supported hit wins and
//! the registry default closes the chain.

use std::collections::HashSet;

use crate::locale::LocaleConfig;

/// Cookie read by `from_cookie` in the default chain.
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// Request facts a strategy may look at.
pub struct ResolveData<'a> {
  pub path_locale: Option<&'a str>,
  pub cookie_header: Option<&'a str>,
  pub accept_language: Option<&'a str>,
  pub config: &'a LocaleConfig,
}

pub trait ResolveStrategy: Send + Sync {
  fn kind(&self) -> &'static str;
  fn resolve(&self, data: &ResolveData<'_>) -> Option<String>;
}

struct UrlPrefix;

impl ResolveStrategy for UrlPrefix {
  fn kind(&self) -> &'static str {
    "url_prefix"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<String> {
    let loc = data.path_locale?;
    data.config.is_supported(loc).then(|| loc.to_string())
  }
}

struct Cookie {
  name: String,
}

impl ResolveStrategy for Cookie {
  fn kind(&self) -> &'static str {
    "cookie"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<String> {
    let header = data.cookie_header?;
    let set: HashSet<&str> = data.config.locales().iter().map(String::as_str).collect();
    parse_cookie_locale(header, &self.name, &set)
  }
}

struct AcceptLanguage;

impl ResolveStrategy for AcceptLanguage {
  fn kind(&self) -> &'static str {
    "accept_language"
  }

  fn resolve(&self, data: &ResolveData<'_>) -> Option<String> {
    let header = data.accept_language?;
    let set: HashSet<&str> = data.config.locales().iter().map(String::as_str).collect();
    parse_accept_language(header, &set)
  }
}

pub fn from_url_prefix() -> Box<dyn ResolveStrategy> {
  Box::new(UrlPrefix)
}

pub fn from_cookie(name: impl Into<String>) -> Box<dyn ResolveStrategy> {
  Box::new(Cookie { name: name.into() })
}

pub fn from_accept_language() -> Box<dyn ResolveStrategy> {
  Box::new(AcceptLanguage)
}

/// url_prefix -> cookie(`NEXT_LOCALE`) -> Accept-Language
pub fn default_strategies() -> Vec<Box<dyn ResolveStrategy>> {
  vec![from_url_prefix(), from_cookie(LOCALE_COOKIE), from_accept_language()]
}

/// Run strategies in order; fall back to the registry default.
pub fn resolve_chain(strategies: &[Box<dyn ResolveStrategy>], data: &ResolveData<'_>) -> String {
  for strategy in strategies {
    if let Some(loc) = strategy.resolve(data) {
      tracing::trace!(strategy = strategy.kind(), locale = %loc, "locale resolved");
      return loc;
    }
  }
  data.config.default_locale().to_string()
}

fn parse_cookie_locale(header: &str, name: &str, locale_set: &HashSet<&str>) -> Option<String> {
  for pair in header.split(';') {
    let Some((k, v)) = pair.trim().split_once('=') else { continue };
    if k.trim() == name {
      let v = v.trim();
      if locale_set.contains(v) {
        return Some(v.to_string());
      }
    }
  }
  None
}

fn parse_accept_language(header: &str, locale_set: &HashSet<&str>) -> Option<String> {
  let mut entries: Vec<(&str, f64)> = Vec::new();
  for part in header.split(',') {
    let part = part.trim();
    if part.is_empty() {
      continue;
    }
    let mut segments = part.split(';');
    let lang = segments.next().unwrap_or("").trim();
    let mut q = 1.0_f64;
    for s in segments {
      if let Some(val) = s.trim().strip_prefix("q=") {
        if let Ok(v) = val.parse::<f64>() {
          q = v;
        }
      }
    }
    if q > 0.0 {
      entries.push((lang, q));
    }
  }

  // Stable sort keeps header order among equal weights
  entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

  for (lang, _) in &entries {
    if locale_set.contains(lang) {
      return Some((*lang).to_string());
    }
    // Primary subtag: it-CH -> it
    if let Some((primary, _)) = lang.split_once('-') {
      if locale_set.contains(primary) {
        return Some(primary.to_string());
      }
    }
  }

  None
}
