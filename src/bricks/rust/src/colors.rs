/* src/bricks/rust/src/colors.rs */

//! Color and gradient palettes offered by the side-panel pickers.

use brickyard_core::SelectOption;
use serde::{Deserialize, Serialize};

/// Stored value of a color pick: swatch color plus the classes it applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorValue {
  pub color: String,
  pub class_name: String,
}

/// Palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDef {
  pub label: &'static str,
  pub color: &'static str,
  pub class_name: &'static str,
}

impl ColorDef {
  pub fn value(&self) -> ColorValue {
    ColorValue { color: self.color.to_string(), class_name: self.class_name.to_string() }
  }

  pub fn option(&self) -> SelectOption {
    SelectOption::new(self.value(), self.label)
  }
}

pub fn options(palette: &[ColorDef]) -> Vec<SelectOption> {
  palette.iter().map(ColorDef::option).collect()
}

pub mod bg_colors {
  use super::ColorDef;

  pub const WHITE: ColorDef =
    ColorDef { label: "White", color: "#ffffff", class_name: "bg-white dark:bg-gray-900" };
  pub const LIGHT_GRAY: ColorDef =
    ColorDef { label: "Light Gray", color: "#f9fafb", class_name: "bg-gray-50 dark:bg-gray-900" };
  pub const GRAY: ColorDef =
    ColorDef { label: "Gray", color: "#f3f4f6", class_name: "bg-gray-100 dark:bg-gray-900" };
  pub const DARK_GRAY: ColorDef =
    ColorDef { label: "Dark Gray", color: "#1f2937", class_name: "bg-gray-800 dark" };
  pub const SKY: ColorDef =
    ColorDef { label: "Sky", color: "#f0f9ff", class_name: "bg-sky-50 dark:bg-gray-900" };

  pub const ALL: &[ColorDef] = &[WHITE, LIGHT_GRAY, GRAY, DARK_GRAY, SKY];
}

/// Plain text color classes; not user-selectable.
pub mod text_colors {
  pub const GRAY_700: &str = "text-gray-700 dark:text-gray-200";
  pub const GRAY_800: &str = "text-gray-800 dark:text-white";
}

pub mod highlight_text_colors {
  use super::ColorDef;

  pub const PINK: ColorDef =
    ColorDef { label: "Pink", color: "#ec4899", class_name: "text-pink-500 dark:text-pink-400" };
  pub const LIME: ColorDef =
    ColorDef { label: "Lime", color: "#84cc16", class_name: "text-lime-500 dark:text-lime-400" };
  pub const SKY: ColorDef =
    ColorDef { label: "Sky", color: "#0ea5e9", class_name: "text-sky-500 dark:text-sky-400" };
  pub const VIOLET: ColorDef = ColorDef {
    label: "Violet",
    color: "#8b5cf6",
    class_name: "text-violet-500 dark:text-violet-400",
  };

  pub const ALL: &[ColorDef] = &[PINK, LIME, SKY, VIOLET];
}

pub mod badge_colors {
  use super::ColorDef;

  pub const SKY: ColorDef = ColorDef {
    label: "Sky",
    color: "#0ea5e9",
    class_name: "text-sky-800 bg-sky-100 dark:text-sky-100 dark:bg-sky-800",
  };
  pub const PINK: ColorDef = ColorDef {
    label: "Pink",
    color: "#ec4899",
    class_name: "text-pink-800 bg-pink-100 dark:text-pink-100 dark:bg-pink-800",
  };
  pub const GREEN: ColorDef = ColorDef {
    label: "Green",
    color: "#22c55e",
    class_name: "text-green-800 bg-green-100 dark:text-green-100 dark:bg-green-800",
  };

  pub const ALL: &[ColorDef] = &[SKY, PINK, GREEN];
}

/// Button colors carry separate classes for the solid and outline variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonColorValue {
  pub color: String,
  pub class_name_solid: String,
  pub class_name_outline: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonColorDef {
  pub label: &'static str,
  pub color: &'static str,
  pub class_name_solid: &'static str,
  pub class_name_outline: &'static str,
}

impl ButtonColorDef {
  pub fn value(&self) -> ButtonColorValue {
    ButtonColorValue {
      color: self.color.to_string(),
      class_name_solid: self.class_name_solid.to_string(),
      class_name_outline: self.class_name_outline.to_string(),
    }
  }

  pub fn option(&self) -> SelectOption {
    SelectOption::new(self.value(), self.label)
  }
}

pub mod button_colors {
  use super::ButtonColorDef;

  pub const SKY: ButtonColorDef = ButtonColorDef {
    label: "Sky",
    color: "#0ea5e9",
    class_name_solid: "text-white bg-sky-500 hover:bg-sky-600",
    class_name_outline: "border text-sky-600 border-sky-600 hover:text-sky-500 hover:border-sky-500 dark:border-sky-500 dark:text-sky-500",
  };
  pub const VIOLET: ButtonColorDef = ButtonColorDef {
    label: "Violet",
    color: "#8b5cf6",
    class_name_solid: "text-white bg-violet-500 hover:bg-violet-600",
    class_name_outline: "border text-violet-600 border-violet-600 hover:text-violet-500 hover:border-violet-500",
  };
  pub const PINK: ButtonColorDef = ButtonColorDef {
    label: "Pink",
    color: "#ec4899",
    class_name_solid: "text-white bg-pink-500 hover:bg-pink-600",
    class_name_outline: "border text-pink-600 border-pink-600 hover:text-pink-500 hover:border-pink-500",
  };

  pub const ALL: &[ButtonColorDef] = &[SKY, VIOLET, PINK];
}

/// Title gradient. `None` is the sentinel for "no gradient".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TextGradient {
  #[default]
  None,
  Ocean,
  Violet,
  Sun,
}

impl TextGradient {
  pub const ALL: [TextGradient; 4] = [Self::None, Self::Ocean, Self::Violet, Self::Sun];

  pub fn label(self) -> &'static str {
    match self {
      Self::None => "None",
      Self::Ocean => "Ocean",
      Self::Violet => "Violet",
      Self::Sun => "Sun",
    }
  }

  /// Background gradient classes, clipped to the text by the title block.
  pub fn class_name(self) -> Option<&'static str> {
    match self {
      Self::None => None,
      Self::Ocean => Some("from-sky-600 to-teal-500 dark:from-sky-400 dark:to-teal-300"),
      Self::Violet => Some("from-violet-700 to-sky-500 dark:from-violet-400 dark:to-sky-300"),
      Self::Sun => Some("from-red-600 to-amber-400 dark:from-red-500 dark:to-amber-300"),
    }
  }

  pub fn is_none(self) -> bool {
    self == Self::None
  }

  pub fn options() -> Vec<SelectOption> {
    Self::ALL.iter().map(|g| SelectOption::new(g, g.label())).collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn color_value_camel_case() {
    assert_eq!(
      serde_json::to_value(highlight_text_colors::PINK.value()).unwrap(),
      json!({"color": "#ec4899", "className": "text-pink-500 dark:text-pink-400"})
    );
  }

  #[test]
  fn gradient_sentinel_serializes_as_none() {
    assert_eq!(serde_json::to_value(TextGradient::None).unwrap(), json!("NONE"));
    assert_eq!(serde_json::from_value::<TextGradient>(json!("OCEAN")).unwrap(), TextGradient::Ocean);
    assert!(serde_json::from_value::<TextGradient>(json!("RAINBOW")).is_err());
  }

  #[test]
  fn only_none_gradient_has_no_class() {
    for g in TextGradient::ALL {
      assert_eq!(g.class_name().is_none(), g.is_none(), "{g:?}");
    }
  }

  #[test]
  fn gradient_options_cover_all() {
    let opts = TextGradient::options();
    assert_eq!(opts.len(), 4);
    assert_eq!(opts[0].value, json!("NONE"));
    assert_eq!(opts[3].label, "Sun");
  }

  #[test]
  fn button_color_option_value() {
    let opt = button_colors::SKY.option();
    assert_eq!(opt.label, "Sky");
    assert_eq!(opt.value["classNameSolid"], "text-white bg-sky-500 hover:bg-sky-600");
  }

  #[test]
  fn palettes_have_unique_labels() {
    let labels: std::collections::HashSet<_> = bg_colors::ALL.iter().map(|c| c.label).collect();
    assert_eq!(labels.len(), bg_colors::ALL.len());
  }
}
