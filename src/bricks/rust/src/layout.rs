/* src/bricks/rust/src/layout.rs */

//! Section-level props shared by every full-width brick, and the side-panel
//! groups that edit them.

use brickyard_core::{EditKind, OptionsDisplay, SelectOption, SideEditProp, SideGroup};
use serde::{Deserialize, Serialize};

use crate::colors::{self, ColorValue, TextGradient, bg_colors, highlight_text_colors};

/// Uploaded image as stored by the editing host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
  pub src: String,
  #[serde(default)]
  pub alt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Border {
  #[default]
  None,
  Full,
  Boxed,
}

impl Border {
  fn options() -> Vec<SelectOption> {
    vec![
      SelectOption::new(Border::None, "None"),
      SelectOption::new(Border::Full, "Full-width"),
      SelectOption::new(Border::Boxed, "Boxed"),
    ]
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutProps {
  pub background_color: ColorValue,
  #[serde(default)]
  pub background_image: Option<Image>,
  #[serde(default)]
  pub border_top: Border,
  #[serde(default)]
  pub border_bottom: Border,
  pub padding_top: String,
  pub padding_bottom: String,
}

impl Default for LayoutProps {
  fn default() -> Self {
    section_defaults()
  }
}

/// Tailwind spacing steps offered for section padding, largest first.
pub const PADDINGS: &[&str] = &["20", "16", "12", "10", "8", "6", "0"];

/// `padding_class("pt", "20")` is `"pt-12 lg:pt-20"`. Large paddings shrink on
/// small screens.
pub fn padding_class(side: &str, value: &str) -> String {
  let small = match value {
    "20" => "12",
    "16" => "10",
    "12" => "8",
    "10" => "8",
    other => other,
  };
  if small == value {
    format!("{side}-{value}")
  } else {
    format!("{side}-{small} lg:{side}-{value}")
  }
}

pub fn section_defaults() -> LayoutProps {
  LayoutProps {
    background_color: bg_colors::WHITE.value(),
    background_image: None,
    border_top: Border::None,
    border_bottom: Border::None,
    padding_top: "12".to_string(),
    padding_bottom: "12".to_string(),
  }
}

pub fn background_with_image_bg_side_group() -> SideGroup {
  SideGroup::new(
    "Background",
    false,
    vec![
      SideEditProp::select(
        "backgroundColor",
        "Background",
        OptionsDisplay::Color,
        colors::options(bg_colors::ALL),
      ),
      SideEditProp::new("backgroundImage", "Background Image", EditKind::Image),
    ],
  )
}

fn padding_options() -> Vec<SelectOption> {
  PADDINGS.iter().map(|p| SelectOption::new(p, *p)).collect()
}

pub fn padding_borders_side_group() -> SideGroup {
  SideGroup::new(
    "Padding & Borders",
    false,
    vec![
      SideEditProp::select("paddingTop", "Padding Top", OptionsDisplay::Select, padding_options()),
      SideEditProp::select("paddingBottom", "Padding Bottom", OptionsDisplay::Select, padding_options()),
      SideEditProp::select("borderTop", "Border Top", OptionsDisplay::Select, Border::options()),
      SideEditProp::select("borderBottom", "Border Bottom", OptionsDisplay::Select, Border::options()),
    ],
  )
}

pub fn text_gradient_edit_props() -> SideEditProp {
  SideEditProp::select("textGradient", "Text gradient", OptionsDisplay::Select, TextGradient::options())
}

pub fn highlight_text_edit_props() -> SideEditProp {
  SideEditProp::select(
    "highlightTextColor",
    "Highlight Color",
    OptionsDisplay::Color,
    colors::options(highlight_text_colors::ALL),
  )
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn defaults_serialize_every_key() {
    let value = serde_json::to_value(section_defaults()).unwrap();
    assert_eq!(
      value,
      json!({
        "backgroundColor": {"color": "#ffffff", "className": "bg-white dark:bg-gray-900"},
        "backgroundImage": null,
        "borderTop": "none",
        "borderBottom": "none",
        "paddingTop": "12",
        "paddingBottom": "12"
      })
    );
  }

  #[test]
  fn missing_optional_layout_keys_default() {
    let props: LayoutProps = serde_json::from_value(json!({
      "backgroundColor": {"color": "#1f2937", "className": "bg-gray-800 dark"},
      "paddingTop": "20",
      "paddingBottom": "16"
    }))
    .unwrap();
    assert_eq!(props.border_top, Border::None);
    assert!(props.background_image.is_none());
  }

  #[test]
  fn padding_classes_shrink_on_mobile() {
    assert_eq!(padding_class("pt", "20"), "pt-12 lg:pt-20");
    assert_eq!(padding_class("pb", "6"), "pb-6");
    assert_eq!(padding_class("pb", "0"), "pb-0");
  }

  #[test]
  fn side_groups_name_layout_keys() {
    let names: Vec<String> = background_with_image_bg_side_group()
      .props
      .into_iter()
      .chain(padding_borders_side_group().props)
      .map(|p| p.name)
      .collect();
    let defaults = serde_json::to_value(section_defaults()).unwrap();
    for name in &names {
      assert!(defaults.get(name).is_some(), "{name}");
    }
    assert_eq!(names.len(), 6);
  }
}
