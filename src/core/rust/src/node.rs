/* src/core/rust/src/node.rs */

//! UI tree produced by brick render functions.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
  Element(Element),
  Text { value: String },
  Fragment { children: Vec<Node> },
}

/// An element with classes, attributes and inline style.
/// Style keys use JS style names (`WebkitTextFillColor`); the HTML
/// serializer kebab-cases them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
  pub tag: String,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub classes: Vec<String>,
  #[serde(skip_serializing_if = "BTreeMap::is_empty")]
  pub attrs: BTreeMap<String, String>,
  #[serde(skip_serializing_if = "BTreeMap::is_empty")]
  pub style: BTreeMap<String, String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub children: Vec<Node>,
}

impl Element {
  pub fn new(tag: impl Into<String>) -> Self {
    Self {
      tag: tag.into(),
      classes: Vec::new(),
      attrs: BTreeMap::new(),
      style: BTreeMap::new(),
      children: Vec::new(),
    }
  }

  /// Append whitespace-separated class names; empty input is ignored.
  pub fn class(mut self, classes: &str) -> Self {
    self.classes.extend(classes.split_whitespace().map(String::from));
    self
  }

  pub fn class_opt(self, classes: Option<&str>) -> Self {
    match classes {
      Some(c) => self.class(c),
      None => self,
    }
  }

  pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.attrs.insert(name.into(), value.into());
    self
  }

  pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
    self.style.insert(property.into(), value.into());
    self
  }

  pub fn child(mut self, node: impl Into<Node>) -> Self {
    self.children.push(node.into());
    self
  }

  pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
    self.children.extend(nodes);
    self
  }

  pub fn has_class(&self, class: &str) -> bool {
    self.classes.iter().any(|c| c == class)
  }

  pub fn get_attr(&self, name: &str) -> Option<&str> {
    self.attrs.get(name).map(String::as_str)
  }

  pub fn get_style(&self, property: &str) -> Option<&str> {
    self.style.get(property).map(String::as_str)
  }
}

impl From<Element> for Node {
  fn from(el: Element) -> Self {
    Node::Element(el)
  }
}

impl Node {
  pub fn text(value: impl Into<String>) -> Self {
    Node::Text { value: value.into() }
  }

  pub fn fragment(children: Vec<Node>) -> Self {
    Node::Fragment { children }
  }

  pub fn as_element(&self) -> Option<&Element> {
    match self {
      Node::Element(el) => Some(el),
      _ => None,
    }
  }

  fn child_nodes(&self) -> &[Node] {
    match self {
      Node::Element(el) => &el.children,
      Node::Fragment { children } => children,
      Node::Text { .. } => &[],
    }
  }

  /// Depth-first, pre-order search for the first matching element.
  pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
    if let Node::Element(el) = self {
      if pred(el) {
        return Some(el);
      }
    }
    self.child_nodes().iter().find_map(|c| c.find(pred))
  }

  pub fn find_all<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
    if let Node::Element(el) = self {
      if pred(el) {
        out.push(el);
      }
    }
    for c in self.child_nodes() {
      c.find_all(pred, out);
    }
  }

  /// Element carrying `data-prop="{name}"`, i.e. the editable region for a prop.
  pub fn find_prop(&self, name: &str) -> Option<&Element> {
    self.find(&|el| el.get_attr("data-prop") == Some(name))
  }

  /// Concatenated text content.
  pub fn text_content(&self) -> String {
    match self {
      Node::Text { value } => value.clone(),
      _ => self.child_nodes().iter().map(Node::text_content).collect(),
    }
  }
}

/// Repeater slot: items wrapped by `wrapper`, tagged with the slot's prop name.
/// An empty slot renders nothing.
pub fn repeater(prop_name: &str, items: Vec<Node>, wrapper: impl FnOnce(Vec<Node>) -> Element) -> Node {
  if items.is_empty() {
    return Node::fragment(Vec::new());
  }
  wrapper(items).attr("data-prop", prop_name).into()
}
