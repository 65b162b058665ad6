/* src/bricks/rust/src/bricks/hero_unit2.rs */

//! Horizontal hero: badge and title on the left, text and call-to-action
//! buttons on the right. Stacks vertically below the `lg` breakpoint.

use brickyard_core::{
  BlockNode, Brick, BrickSchema, Element, FeatureSet, Node, RepeaterSlot, RichText,
  RichTextFeature, RichTextField, RichTextOptions, SideGroup, Story, TextRun, render_rich_text,
  repeater,
};
use serde::{Deserialize, Serialize};

use super::badge::{Badge, BadgeProps, TextAlign};
use super::button::{Button, ButtonProps, Variant};
use crate::block_names;
use crate::colors::{
  ColorValue, TextGradient, bg_colors, button_colors, highlight_text_colors, text_colors,
};
use crate::components::{container, section};
use crate::layout::{
  LayoutProps, background_with_image_bg_side_group, highlight_text_edit_props,
  padding_borders_side_group, section_defaults, text_gradient_edit_props,
};

const TITLE_FEATURES: FeatureSet = FeatureSet::of(&[RichTextFeature::Highlight]);
const TEXT_FEATURES: FeatureSet = FeatureSet::of(&[RichTextFeature::Bold]);

const TITLE_CLASS: &str = "text-[28px] leading-8 sm:text-[40px] sm:leading-tight lg:text-[44px] lg:leading-snug text-center lg:text-left font-extrabold mb-4 bg-clip-text bg-linear-to-r";
const TEXT_CLASS: &str = "text-center lg:text-left text-base leading-6 sm:text-xl sm:leading-8";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroUnitProps {
  #[serde(flatten)]
  pub layout: LayoutProps,
  #[serde(default)]
  pub text_gradient: TextGradient,
  pub highlight_text_color: ColorValue,
  pub title: RichText,
  pub text: RichText,
  #[serde(default)]
  pub buttons: Vec<ButtonProps>,
  #[serde(default)]
  pub badge: Vec<BadgeProps>,
}

fn hero_layout() -> LayoutProps {
  LayoutProps { padding_top: "20".to_string(), padding_bottom: "16".to_string(), ..section_defaults() }
}

fn default_props() -> HeroUnitProps {
  HeroUnitProps {
    layout: hero_layout(),
    text_gradient: TextGradient::None,
    highlight_text_color: highlight_text_colors::PINK.value(),
    title: RichText::paragraph(vec![
      TextRun::plain("We develop "),
      TextRun::highlight("beautiful"),
      TextRun::plain(" web applications"),
    ]),
    text: RichText::plain(
      "We are a hi-tech web development company committed to deliver great products on time. We love to understand our customers' needs and exceed expectations.",
    ),
    buttons: vec![
      ButtonProps::link("Get Started now", "", Variant::Solid, button_colors::SKY),
      ButtonProps::link("Watch demo", "", Variant::Outline, button_colors::SKY),
    ],
    badge: Vec::new(),
  }
}

fn dark_story() -> Story<HeroUnitProps> {
  let props = HeroUnitProps {
    layout: LayoutProps { background_color: bg_colors::DARK_GRAY.value(), ..hero_layout() },
    text_gradient: TextGradient::None,
    highlight_text_color: highlight_text_colors::LIME.value(),
    title: RichText::paragraph(vec![
      TextRun::plain("Great "),
      TextRun::highlight("DX"),
      TextRun::plain(" for Developers, great "),
      TextRun::highlight("UX"),
      TextRun::plain(" for Content editors."),
    ]),
    text: RichText::plain(
      "Forget grey fields, welcome visual editing. Forget going back and forth between the CMS and your editor: it's just React. Enterprise-ready.",
    ),
    buttons: vec![
      ButtonProps::link("Tutorial", "https://reactbricks.com/learn", Variant::Solid, button_colors::SKY)
        .target_blank(),
      ButtonProps::link(
        "View the Docs",
        "https://docs.reactbricks.com/",
        Variant::Outline,
        button_colors::SKY,
      )
      .target_blank(),
    ],
    badge: Vec::new(),
  };
  Story::new("horizontal-hero-dark", "Horizontal Hero Dark", props).show_as_brick()
}

pub struct HeroUnit2;

impl HeroUnit2 {
  fn title(props: &HeroUnitProps) -> Node {
    let gradient = props.text_gradient;
    let highlight_class = props.highlight_text_color.class_name.as_str();

    let render_block = |_: &BlockNode, children: Vec<Node>| -> Node {
      Element::new("h1")
        .class(TITLE_CLASS)
        .class(text_colors::GRAY_800)
        .class_opt(gradient.class_name())
        .children(children)
        .into()
    };
    let render_highlight =
      |children: Vec<Node>| -> Node { Element::new("span").class(highlight_class).children(children).into() };
    let opts = RichTextOptions {
      allowed: TITLE_FEATURES,
      render_block: &render_block,
      render_highlight: Some(&render_highlight),
    };

    let mut wrapper = Element::new("div").class(text_colors::GRAY_800).attr("data-prop", "title");
    if !gradient.is_none() {
      wrapper = wrapper.style("WebkitTextFillColor", "transparent");
    }
    wrapper.children(render_rich_text(&props.title, &opts)).into()
  }

  fn text(props: &HeroUnitProps) -> Vec<Node> {
    let render_block = |_: &BlockNode, children: Vec<Node>| -> Node {
      Element::new("p")
        .class(TEXT_CLASS)
        .class(text_colors::GRAY_700)
        .attr("data-prop", "text")
        .children(children)
        .into()
    };
    let opts = RichTextOptions { allowed: TEXT_FEATURES, render_block: &render_block, render_highlight: None };
    render_rich_text(&props.text, &opts)
  }
}

impl Brick for HeroUnit2 {
  type Props = HeroUnitProps;

  fn schema() -> BrickSchema<HeroUnitProps> {
    BrickSchema::new(block_names::HERO_UNIT_2, "Horizontal Hero", default_props)
      .category("hero sections")
      .tags(&["hero unit", "horizontal hero", "title"])
      .playground(
        "View source code on Github",
        "https://github.com/ReactBricks/react-bricks-ui/blob/master/src/website/Hero%20Unit/HeroUnit.tsx",
      )
      .with_preview_image()
      .repeater(RepeaterSlot::new("badge", block_names::BADGE, "Badge").bounds(0, 1))
      .repeater(RepeaterSlot::new("buttons", block_names::BUTTON, "Button").bounds(0, 2))
      .rich_text(RichTextField::new("title", TITLE_FEATURES).placeholder("Type a title..."))
      .rich_text(RichTextField::new("text", TEXT_FEATURES).placeholder("Type a text..."))
      .side_group(SideGroup::new(
        "Title",
        true,
        vec![text_gradient_edit_props(), highlight_text_edit_props()],
      ))
      .side_group(background_with_image_bg_side_group())
      .side_group(padding_borders_side_group())
      .story(dark_story())
  }

  fn render(props: &HeroUnitProps) -> Node {
    let badge = repeater(
      "badge",
      props.badge.iter().map(|b| Badge::render_aligned(b, TextAlign::Left)).collect(),
      |items| Element::new("div").class("mb-4").children(items),
    );
    let buttons = repeater("buttons", props.buttons.iter().map(Button::render).collect(), |items| {
      Element::new("div")
        .class("flex flex-row space-x-5 items-center justify-center lg:justify-start mt-6")
        .children(items)
    });

    let left = Element::new("div")
      .class("flex-1")
      .child(Element::new("div").class("lg:flex").child(badge))
      .child(Self::title(props));
    let right = Element::new("div").class("flex-1").children(Self::text(props)).child(buttons);

    let row = Element::new("div")
      .class("flex flex-col lg:flex-row items-start space-y-2 lg:space-x-14 lg:space-y-0")
      .child(left)
      .child(right);

    section(
      &props.layout,
      vec![container(&props.layout.padding_top, &props.layout.padding_bottom, vec![row.into()])],
    )
  }
}
