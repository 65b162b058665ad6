/* src/bricks/rust/src/components.rs */

use brickyard_core::{Element, Node};

use crate::layout::{Border, LayoutProps, padding_class};

const BORDER_COLOR: &str = "border-black/10 dark:border-white/10";

fn border_class(side: &str, border: Border) -> Option<String> {
  match border {
    Border::Full => Some(format!("border-{side} {BORDER_COLOR}")),
    Border::None | Border::Boxed => None,
  }
}

/// Full-width `<section>` carrying background and full-width borders.
/// Boxed borders are drawn by an inner, width-constrained rule.
pub fn section(layout: &LayoutProps, children: Vec<Node>) -> Node {
  let mut el = Element::new("section")
    .class(&layout.background_color.class_name)
    .class_opt(border_class("t", layout.border_top).as_deref())
    .class_opt(border_class("b", layout.border_bottom).as_deref());

  if let Some(image) = &layout.background_image {
    el = el
      .class("bg-no-repeat bg-cover")
      .style("backgroundImage", css_url(&image.src))
      .style("backgroundPosition", "center");
  }

  if layout.border_top == Border::Boxed {
    el = el.child(boxed_rule("t"));
  }
  el = el.children(children);
  if layout.border_bottom == Border::Boxed {
    el = el.child(boxed_rule("b"));
  }
  el.into()
}

/// Quoted CSS `url()` value. The source cannot close the string or the call.
fn css_url(src: &str) -> String {
  let mut out = String::with_capacity(src.len() + 7);
  out.push_str("url(\"");
  for ch in src.chars() {
    match ch {
      '\\' | '"' => {
        out.push('\\');
        out.push(ch);
      }
      '\n' | '\r' | '\x0c' => out.push_str(&format!("\\{:x} ", ch as u32)),
      _ => out.push(ch),
    }
  }
  out.push_str("\")");
  out
}

fn boxed_rule(side: &str) -> Element {
  Element::new("div").class("max-w-5xl mx-auto").class(&format!("border-{side} {BORDER_COLOR}"))
}

/// Centered content column with vertical padding.
pub fn container(padding_top: &str, padding_bottom: &str, children: Vec<Node>) -> Node {
  Element::new("div")
    .class("max-w-5xl mx-auto px-6 sm:px-12")
    .class(&padding_class("pt", padding_top))
    .class(&padding_class("pb", padding_bottom))
    .children(children)
    .into()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::layout::{Image, section_defaults};
  use brickyard_core::render_html;

  #[test]
  fn section_applies_background_class() {
    let node = section(&section_defaults(), vec![Node::text("x")]);
    assert_eq!(render_html(&node), r#"<section class="bg-white dark:bg-gray-900">x</section>"#);
  }

  #[test]
  fn full_and_boxed_borders() {
    let mut layout = section_defaults();
    layout.border_top = Border::Full;
    layout.border_bottom = Border::Boxed;
    let node = section(&layout, vec![]);
    let el = node.as_element().unwrap();
    assert!(el.has_class("border-t"));
    assert!(!el.has_class("border-b"));
    assert_eq!(el.children.len(), 1);
    assert!(el.children[0].as_element().unwrap().has_class("border-b"));
  }

  #[test]
  fn background_image_sets_style() {
    let mut layout = section_defaults();
    layout.background_image = Some(Image { src: "/bg.jpg".into(), alt: String::new() });
    let node = section(&layout, vec![]);
    assert_eq!(node.as_element().unwrap().get_style("backgroundImage"), Some(r#"url("/bg.jpg")"#));
  }

  #[test]
  fn background_image_src_stays_inside_url() {
    let mut layout = section_defaults();
    layout.background_image =
      Some(Image { src: r#"/a.png);color:red;x:url(b"#.into(), alt: String::new() });
    let node = section(&layout, vec![]);
    let el = node.as_element().unwrap();
    assert_eq!(el.get_style("backgroundImage"), Some(r#"url("/a.png);color:red;x:url(b")"#));

    layout.background_image = Some(Image { src: "/a\\\");color:red;\n".into(), alt: String::new() });
    let node = section(&layout, vec![]);
    let style = node.as_element().unwrap().get_style("backgroundImage").unwrap().to_string();
    assert_eq!(style, r#"url("/a\\\");color:red;\a ")"#);
    let html = render_html(&node);
    assert!(html.contains("background-position:center"));
    assert!(!html.contains("\n"));
  }

  #[test]
  fn container_padding() {
    let node = container("20", "16", vec![]);
    let el = node.as_element().unwrap();
    assert!(el.has_class("lg:pt-20"));
    assert!(el.has_class("pb-10"));
  }
}
