/* src/core/rust/src/html.rs */

use crate::node::{Element, Node};

const VOID_ELEMENTS: &[&str] = &[
  "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
  "wbr",
];

/// Serialize a node tree to HTML markup.
pub fn render_html(node: &Node) -> String {
  let mut out = String::new();
  write_node(node, &mut out);
  out
}

fn write_node(node: &Node, out: &mut String) {
  match node {
    Node::Text { value } => out.push_str(&escape_html(value)),
    Node::Fragment { children } => {
      for c in children {
        write_node(c, out);
      }
    }
    Node::Element(el) => write_element(el, out),
  }
}

fn write_element(el: &Element, out: &mut String) {
  out.push('<');
  out.push_str(&el.tag);

  if !el.classes.is_empty() {
    out.push_str(" class=\"");
    out.push_str(&escape_html(&el.classes.join(" ")));
    out.push('"');
  }

  for (name, value) in &el.attrs {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
  }

  let style = style_attr(el);
  if !style.is_empty() {
    out.push_str(" style=\"");
    out.push_str(&escape_html(&style));
    out.push('"');
  }

  out.push('>');
  if VOID_ELEMENTS.contains(&el.tag.as_str()) {
    return;
  }
  for c in &el.children {
    write_node(c, out);
  }
  out.push_str("</");
  out.push_str(&el.tag);
  out.push('>');
}

fn style_attr(el: &Element) -> String {
  el.style
    .iter()
    .filter(|(_, v)| !v.is_empty())
    .map(|(k, v)| format!("{}:{v}", css_property_name(k)))
    .collect::<Vec<_>>()
    .join(";")
}

/// JS style name to CSS property: `WebkitTextFillColor` -> `-webkit-text-fill-color`,
/// `backgroundImage` -> `background-image`. Already-kebab names pass through.
pub fn css_property_name(js_name: &str) -> String {
  if js_name.starts_with("--") || js_name.contains('-') {
    return js_name.to_string();
  }
  let mut out = String::with_capacity(js_name.len() + 4);
  for (i, ch) in js_name.chars().enumerate() {
    if ch.is_ascii_uppercase() {
      out.push('-');
      out.push(ch.to_ascii_lowercase());
    } else {
      if i == 0 && js_name.starts_with("ms") {
        // React convention: msTransform -> -ms-transform
        out.push('-');
      }
      out.push(ch);
    }
  }
  out
}

pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn escape_html_special_chars() {
    assert_eq!(escape_html("<>&\"'"), "&lt;&gt;&amp;&quot;&#x27;");
    assert_eq!(escape_html("hello world"), "hello world");
    assert_eq!(escape_html(""), "");
  }

  #[test]
  fn css_names() {
    assert_eq!(css_property_name("WebkitTextFillColor"), "-webkit-text-fill-color");
    assert_eq!(css_property_name("backgroundImage"), "background-image");
    assert_eq!(css_property_name("msTransform"), "-ms-transform");
    assert_eq!(css_property_name("color"), "color");
    assert_eq!(css_property_name("--brand"), "--brand");
    assert_eq!(css_property_name("text-align"), "text-align");
  }

  #[test]
  fn renders_element_with_class_attrs_style() {
    let node: Node = Element::new("a")
      .class("btn  primary")
      .attr("href", "/x?a=1&b=2")
      .attr("data-prop", "cta")
      .style("WebkitTextFillColor", "transparent")
      .style("color", "")
      .child(Node::text("Go <now>"))
      .into();
    assert_eq!(
      render_html(&node),
      r#"<a class="btn primary" data-prop="cta" href="/x?a=1&amp;b=2" style="-webkit-text-fill-color:transparent">Go &lt;now&gt;</a>"#
    );
  }

  #[test]
  fn void_elements_have_no_close_tag() {
    let node: Node = Element::new("img").attr("src", "/a.png").attr("alt", "").into();
    assert_eq!(render_html(&node), r#"<img alt="" src="/a.png">"#);
  }

  #[test]
  fn fragments_flatten() {
    let node = Node::fragment(vec![Node::text("a"), Element::new("br").into(), Node::text("b")]);
    assert_eq!(render_html(&node), "a<br>b");
  }

  #[test]
  fn multiple_styles_are_ordered() {
    let node: Node =
      Element::new("div").style("backgroundImage", "url(/a.png)").style("WebkitTextFillColor", "transparent").into();
    assert_eq!(
      render_html(&node),
      r#"<div style="-webkit-text-fill-color:transparent;background-image:url(/a.png)"></div>"#
    );
  }
}
