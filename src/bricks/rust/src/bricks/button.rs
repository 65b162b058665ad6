/* src/bricks/rust/src/bricks/button.rs */

use brickyard_core::{
  Brick, BrickSchema, EditKind, Element, Node, OptionsDisplay, SelectOption, SideEditProp,
  SideGroup,
};
use serde::{Deserialize, Serialize};

use crate::block_names;
use crate::colors::{ButtonColorDef, ButtonColorValue, button_colors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
  Button,
  Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlButtonType {
  #[default]
  Submit,
  Button,
  Reset,
}

impl HtmlButtonType {
  fn as_str(self) -> &'static str {
    match self {
      Self::Submit => "submit",
      Self::Button => "button",
      Self::Reset => "reset",
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
  Solid,
  Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonPadding {
  #[default]
  Normal,
  Small,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProps {
  #[serde(rename = "type")]
  pub kind: ButtonKind,
  pub text: String,
  #[serde(default)]
  pub href: String,
  #[serde(default)]
  pub is_target_blank: bool,
  #[serde(default)]
  pub button_type: HtmlButtonType,
  pub button_color: ButtonColorValue,
  pub variant: Variant,
  #[serde(default)]
  pub padding: ButtonPadding,
  /// Hosts with client-side routing render a plain `<a>` when set. Static
  /// HTML output is a plain anchor either way.
  #[serde(default)]
  pub simple_anchor_link: bool,
}

impl ButtonProps {
  pub fn link(text: &str, href: &str, variant: Variant, color: ButtonColorDef) -> Self {
    Self {
      kind: ButtonKind::Link,
      text: text.to_string(),
      href: href.to_string(),
      is_target_blank: false,
      button_type: HtmlButtonType::Submit,
      button_color: color.value(),
      variant,
      padding: ButtonPadding::Normal,
      simple_anchor_link: false,
    }
  }

  pub fn target_blank(mut self) -> Self {
    self.is_target_blank = true;
    self
  }

  fn classes(&self) -> Vec<&str> {
    let padding = match self.padding {
      ButtonPadding::Normal => "py-3 px-5",
      ButtonPadding::Small => "py-2 px-4 text-sm",
    };
    let color = match self.variant {
      Variant::Solid => self.button_color.class_name_solid.as_str(),
      Variant::Outline => self.button_color.class_name_outline.as_str(),
    };
    vec![
      "inline-block whitespace-nowrap text-center font-semibold leading-6 rounded-full",
      "hover:-translate-y-0.5 transition-all ease-out duration-150",
      padding,
      color,
    ]
  }
}

pub struct Button;

impl Brick for Button {
  type Props = ButtonProps;

  fn schema() -> BrickSchema<ButtonProps> {
    BrickSchema::new(block_names::BUTTON, "Button", || {
      ButtonProps::link("Click me", "", Variant::Solid, button_colors::SKY)
    })
    .category("shared")
    .hide_from_add_menu()
    .side_group(SideGroup::new(
      "Button functionality",
      true,
      vec![
        SideEditProp::select(
          "type",
          "Type",
          OptionsDisplay::Radio,
          vec![
            SelectOption::new(ButtonKind::Button, "Form Button"),
            SelectOption::new(ButtonKind::Link, "Link (a)"),
          ],
        ),
        SideEditProp::new("href", "Link (external or path)", EditKind::Text),
        SideEditProp::new("isTargetBlank", "Open in new window", EditKind::Boolean),
        SideEditProp::new("simpleAnchorLink", "Simple anchor (no SPA link)", EditKind::Boolean),
        SideEditProp::select(
          "buttonType",
          "Button type",
          OptionsDisplay::Radio,
          vec![
            SelectOption::new(HtmlButtonType::Submit, "Form submit"),
            SelectOption::new(HtmlButtonType::Reset, "Form reset"),
            SelectOption::new(HtmlButtonType::Button, "Button"),
          ],
        ),
      ],
    ))
    .side_group(SideGroup::new(
      "Visual",
      true,
      vec![
        SideEditProp::select(
          "buttonColor",
          "Color",
          OptionsDisplay::Color,
          button_colors::ALL.iter().map(ButtonColorDef::option).collect(),
        ),
        SideEditProp::select(
          "variant",
          "Variant",
          OptionsDisplay::Radio,
          vec![
            SelectOption::new(Variant::Solid, "Solid"),
            SelectOption::new(Variant::Outline, "Outline"),
          ],
        ),
        SideEditProp::select(
          "padding",
          "Size",
          OptionsDisplay::Radio,
          vec![
            SelectOption::new(ButtonPadding::Normal, "Normal"),
            SelectOption::new(ButtonPadding::Small, "Small"),
          ],
        ),
      ],
    ))
  }

  fn render(props: &ButtonProps) -> Node {
    let mut el = match props.kind {
      ButtonKind::Link => {
        let mut a = Element::new("a").attr("href", &props.href);
        if props.is_target_blank {
          a = a.attr("target", "_blank").attr("rel", "noopener noreferrer");
        }
        a
      }
      ButtonKind::Button => Element::new("button").attr("type", props.button_type.as_str()),
    };
    for class in props.classes() {
      el = el.class(class);
    }
    el.child(Node::text(&props.text)).into()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn outline_link_uses_outline_classes() {
    let props = ButtonProps::link("Docs", "/docs", Variant::Outline, button_colors::SKY);
    let node = Button::render(&props);
    let el = node.as_element().unwrap();
    assert_eq!(el.tag, "a");
    assert_eq!(el.get_attr("href"), Some("/docs"));
    assert!(el.has_class("border-sky-600"));
    assert!(!el.has_class("bg-sky-500"));
    assert!(el.get_attr("target").is_none());
  }

  #[test]
  fn target_blank_sets_rel() {
    let props = ButtonProps::link("Go", "https://x.dev", Variant::Solid, button_colors::PINK).target_blank();
    let node = Button::render(&props);
    let el = node.as_element().unwrap();
    assert_eq!(el.get_attr("target"), Some("_blank"));
    assert_eq!(el.get_attr("rel"), Some("noopener noreferrer"));
  }

  #[test]
  fn form_button_renders_type() {
    let mut props = ButtonProps::link("Send", "", Variant::Solid, button_colors::SKY);
    props.kind = ButtonKind::Button;
    props.button_type = HtmlButtonType::Reset;
    props.padding = ButtonPadding::Small;
    let node = Button::render(&props);
    let el = node.as_element().unwrap();
    assert_eq!(el.tag, "button");
    assert_eq!(el.get_attr("type"), Some("reset"));
    assert!(el.has_class("text-sm"));
  }

  #[test]
  fn deserializes_stored_item() {
    let props: ButtonProps = serde_json::from_value(json!({
      "type": "link",
      "text": "Get Started now",
      "href": "",
      "isTargetBlank": false,
      "buttonType": "submit",
      "buttonColor": {
        "color": "#0ea5e9",
        "classNameSolid": "text-white bg-sky-500 hover:bg-sky-600",
        "classNameOutline": "border"
      },
      "variant": "solid",
      "padding": "normal",
      "simpleAnchorLink": false
    }))
    .unwrap();
    assert_eq!(props.kind, ButtonKind::Link);
    assert_eq!(props.variant, Variant::Solid);
  }
}
