/* src/bricks/rust/src/bricks/badge.rs */

use brickyard_core::{Brick, BrickSchema, Element, Node, OptionsDisplay, SideEditProp, SideGroup};
use serde::{Deserialize, Serialize};

use crate::block_names;
use crate::colors::{self, ColorValue, badge_colors};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeProps {
  pub text: String,
  pub badge_color: ColorValue,
}

/// Horizontal placement requested by the parent repeater.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
  Left,
  Center,
}

pub struct Badge;

impl Badge {
  pub fn render_aligned(props: &BadgeProps, align: TextAlign) -> Node {
    let justify = match align {
      TextAlign::Left => "justify-center lg:justify-start",
      TextAlign::Center => "justify-center",
    };
    Element::new("div")
      .class("flex")
      .class(justify)
      .child(
        Element::new("span")
          .class("inline-block text-sm font-bold py-1.5 px-2.5 leading-none rounded-sm")
          .class(&props.badge_color.class_name)
          .child(Node::text(&props.text)),
      )
      .into()
  }
}

impl Brick for Badge {
  type Props = BadgeProps;

  fn schema() -> BrickSchema<BadgeProps> {
    BrickSchema::new(block_names::BADGE, "Badge", || BadgeProps {
      text: "Special event".to_string(),
      badge_color: badge_colors::SKY.value(),
    })
    .category("shared")
    .hide_from_add_menu()
    .side_group(SideGroup::new(
      "Badge",
      true,
      vec![SideEditProp::select(
        "badgeColor",
        "Badge Color",
        OptionsDisplay::Color,
        colors::options(badge_colors::ALL),
      )],
    ))
  }

  fn render(props: &BadgeProps) -> Node {
    Self::render_aligned(props, TextAlign::Center)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn props() -> BadgeProps {
    (Badge::schema().default_props)()
  }

  #[test]
  fn renders_text_with_color() {
    let node = Badge::render(&props());
    let span = node.find(&|el| el.tag == "span").unwrap();
    assert!(span.has_class("bg-sky-100"));
    assert_eq!(node.text_content(), "Special event");
  }

  #[test]
  fn alignment_controls_justify() {
    let left = Badge::render_aligned(&props(), TextAlign::Left);
    assert!(left.as_element().unwrap().has_class("lg:justify-start"));
    let center = Badge::render(&props());
    assert!(!center.as_element().unwrap().has_class("lg:justify-start"));
  }
}
