/* src/core/rust/src/page.rs */

use crate::html::{escape_html, render_html};
use crate::locale::LocaleConfig;
use crate::node::Node;

/// Document-level settings for a rendered page.
pub struct PageOptions<'a> {
  pub locale: &'a str,
  pub title: &'a str,
  /// Unprefixed site path the page is served at, used for canonical/alternate links.
  pub path: &'a str,
  pub locales: &'a LocaleConfig,
  pub stylesheets: &'a [String],
}

/// Build head metadata: canonical link plus one hreflang alternate per locale.
/// Empty when the registry has no public origin.
pub fn head_meta(opts: &PageOptions<'_>) -> String {
  let mut meta = String::new();
  if let Some(canonical) = opts.locales.absolute_url(opts.locale, opts.path) {
    meta.push_str(&format!(r#"<link rel="canonical" href="{}">"#, escape_html(&canonical)));
  }
  for (locale, url) in opts.locales.alternates(opts.path) {
    meta.push_str(&format!(
      r#"<link rel="alternate" hreflang="{}" href="{}">"#,
      escape_html(&locale),
      escape_html(&url)
    ));
  }
  if let Some(url) = opts.locales.absolute_url(opts.locales.default_locale(), opts.path) {
    meta.push_str(&format!(
      r#"<link rel="alternate" hreflang="x-default" href="{}">"#,
      escape_html(&url)
    ));
  }
  meta
}

/// Wrap rendered body markup in a complete HTML document.
pub fn render_page(opts: &PageOptions<'_>, body: &Node) -> String {
  let mut html = String::from("<!DOCTYPE html>");
  html.push_str(&format!(r#"<html lang="{}"><head><meta charset="utf-8">"#, escape_html(opts.locale)));
  html.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
  html.push_str(&head_meta(opts));
  html.push_str(&format!("<title>{}</title>", escape_html(opts.title)));
  for href in opts.stylesheets {
    html.push_str(&format!(r#"<link rel="stylesheet" href="{}">"#, escape_html(href)));
  }
  html.push_str("</head><body>");
  html.push_str(&render_html(body));
  html.push_str("</body></html>");
  html
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::node::Element;

  fn locales(site: Option<&str>) -> LocaleConfig {
    LocaleConfig::new(site.map(String::from), "en", vec!["en".into(), "it".into()]).unwrap()
  }

  #[test]
  fn page_sets_lang_and_title() {
    let cfg = locales(None);
    let opts = PageOptions { locale: "it", title: "A & B", path: "/", locales: &cfg, stylesheets: &[] };
    let html = render_page(&opts, &Element::new("main").into());
    assert!(html.starts_with(r#"<!DOCTYPE html><html lang="it"><head><meta charset="utf-8">"#));
    assert!(html.contains("<title>A &amp; B</title>"));
    assert!(html.ends_with("<body><main></main></body></html>"));
    assert!(!html.contains("canonical"));
  }

  #[test]
  fn head_meta_with_origin() {
    let cfg = locales(Some("https://example.com"));
    let opts = PageOptions { locale: "it", title: "", path: "/pricing", locales: &cfg, stylesheets: &[] };
    let meta = head_meta(&opts);
    assert!(meta.starts_with(r#"<link rel="canonical" href="https://example.com/it/pricing">"#));
    assert!(meta.contains(r#"hreflang="en" href="https://example.com/pricing""#));
    assert!(meta.contains(r#"hreflang="it" href="https://example.com/it/pricing""#));
    assert!(meta.ends_with(r#"<link rel="alternate" hreflang="x-default" href="https://example.com/pricing">"#));
  }

  #[test]
  fn stylesheets_are_linked() {
    let cfg = locales(None);
    let sheets = vec!["/styles.css".to_string()];
    let opts = PageOptions { locale: "en", title: "t", path: "/", locales: &cfg, stylesheets: &sheets };
    assert!(render_page(&opts, &Node::text("x")).contains(r#"<link rel="stylesheet" href="/styles.css">"#));
  }
}
