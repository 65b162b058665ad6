/* src/core/rust/src/schema.rs */

//! Brick schemas: identity, default props, repeater slots, side-panel
//! editors and catalog stories. A schema is a static descriptor read by the
//! editing host; it never runs as logic itself.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::BrickError;
use crate::node::Node;
use crate::richtext::FeatureSet;

/// A page-building unit: a pure render function plus its schema.
pub trait Brick: 'static {
  type Props: Serialize + DeserializeOwned + Clone + 'static;

  fn schema() -> BrickSchema<Self::Props>;

  fn render(props: &Self::Props) -> Node;
}

/// Preview image path for a registered brick or story name.
pub fn preview_image_url(name: &str) -> String {
  format!("/bricks-preview-images/{name}.png")
}

/// Bounded list of sub-items of one item type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeaterSlot {
  pub name: String,
  pub item_type: String,
  pub item_label: String,
  pub min: usize,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub max: Option<usize>,
}

impl RepeaterSlot {
  pub fn new(
    name: impl Into<String>,
    item_type: impl Into<String>,
    item_label: impl Into<String>,
  ) -> Self {
    Self {
      name: name.into(),
      item_type: item_type.into(),
      item_label: item_label.into(),
      min: 0,
      max: None,
    }
  }

  pub fn bounds(mut self, min: usize, max: usize) -> Self {
    self.min = min;
    self.max = Some(max);
    self
  }

  pub fn accepts(&self, count: usize) -> bool {
    count >= self.min && self.max.is_none_or(|max| count <= max)
  }
}

/// Rich text prop and the inline features its editor permits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextField {
  pub name: String,
  pub allowed_features: FeatureSet,
  pub placeholder: String,
}

impl RichTextField {
  pub fn new(name: impl Into<String>, allowed_features: FeatureSet) -> Self {
    Self { name: name.into(), allowed_features, placeholder: String::new() }
  }

  pub fn placeholder(mut self, text: impl Into<String>) -> Self {
    self.placeholder = text.into();
    self
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionsDisplay {
  Select,
  Radio,
  Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectOption {
  pub value: serde_json::Value,
  pub label: String,
}

impl SelectOption {
  pub fn new(value: impl Serialize, label: impl Into<String>) -> Self {
    Self { value: serde_json::to_value(value).unwrap_or_default(), label: label.into() }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EditKind {
  Text,
  Textarea,
  Number,
  Boolean,
  Image,
  Select {
    display: OptionsDisplay,
    options: Vec<SelectOption>,
  },
}

/// One editor control in a side-panel group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideEditProp {
  pub name: String,
  pub label: String,
  #[serde(flatten)]
  pub kind: EditKind,
}

impl SideEditProp {
  pub fn new(name: impl Into<String>, label: impl Into<String>, kind: EditKind) -> Self {
    Self { name: name.into(), label: label.into(), kind }
  }

  pub fn select(
    name: impl Into<String>,
    label: impl Into<String>,
    display: OptionsDisplay,
    options: Vec<SelectOption>,
  ) -> Self {
    Self::new(name, label, EditKind::Select { display, options })
  }
}

/// Labeled, collapsible cluster of editors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideGroup {
  pub group_name: String,
  pub default_open: bool,
  pub props: Vec<SideEditProp>,
}

impl SideGroup {
  pub fn new(group_name: impl Into<String>, default_open: bool, props: Vec<SideEditProp>) -> Self {
    Self { group_name: group_name.into(), default_open, props }
  }
}

/// Named, complete example prop set for the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Story<P> {
  pub id: String,
  pub name: String,
  pub show_as_brick: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub preview_image_url: Option<String>,
  pub props: P,
}

impl<P> Story<P> {
  pub fn new(id: impl Into<String>, name: impl Into<String>, props: P) -> Self {
    Self { id: id.into(), name: name.into(), show_as_brick: false, preview_image_url: None, props }
  }

  /// Offer the story in the add menu, with its own preview image.
  pub fn show_as_brick(mut self) -> Self {
    self.show_as_brick = true;
    self.preview_image_url = Some(preview_image_url(&self.id));
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaygroundLink {
  pub label: String,
  pub url: String,
}

pub struct BrickSchema<P> {
  pub name: String,
  pub label: String,
  pub category: String,
  pub tags: Vec<String>,
  pub hide_from_add_menu: bool,
  pub playground_link: Option<PlaygroundLink>,
  pub preview_image_url: Option<String>,
  pub default_props: fn() -> P,
  pub repeater_items: Vec<RepeaterSlot>,
  pub rich_text: Vec<RichTextField>,
  pub side_edit_props: Vec<SideGroup>,
  pub stories: Vec<Story<P>>,
}

impl<P> BrickSchema<P> {
  pub fn new(name: impl Into<String>, label: impl Into<String>, default_props: fn() -> P) -> Self {
    Self {
      name: name.into(),
      label: label.into(),
      category: String::new(),
      tags: Vec::new(),
      hide_from_add_menu: false,
      playground_link: None,
      preview_image_url: None,
      default_props,
      repeater_items: Vec::new(),
      rich_text: Vec::new(),
      side_edit_props: Vec::new(),
      stories: Vec::new(),
    }
  }

  pub fn category(mut self, category: impl Into<String>) -> Self {
    self.category = category.into();
    self
  }

  pub fn tags(mut self, tags: &[&str]) -> Self {
    self.tags = tags.iter().map(|t| (*t).to_string()).collect();
    self
  }

  /// Item bricks are only reachable through a parent's repeater.
  pub fn hide_from_add_menu(mut self) -> Self {
    self.hide_from_add_menu = true;
    self
  }

  pub fn playground(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
    self.playground_link = Some(PlaygroundLink { label: label.into(), url: url.into() });
    self
  }

  /// Use the conventional preview image path for this brick's name.
  pub fn with_preview_image(mut self) -> Self {
    self.preview_image_url = Some(preview_image_url(&self.name));
    self
  }

  pub fn repeater(mut self, slot: RepeaterSlot) -> Self {
    self.repeater_items.push(slot);
    self
  }

  pub fn rich_text(mut self, field: RichTextField) -> Self {
    self.rich_text.push(field);
    self
  }

  pub fn side_group(mut self, group: SideGroup) -> Self {
    self.side_edit_props.push(group);
    self
  }

  pub fn story(mut self, story: Story<P>) -> Self {
    self.stories.push(story);
    self
  }

  pub fn slot(&self, name: &str) -> Option<&RepeaterSlot> {
    self.repeater_items.iter().find(|s| s.name == name)
  }
}

impl<P: Serialize> BrickSchema<P> {
  /// JSON-ready view of the schema for the editing host.
  pub fn descriptor(&self) -> Result<SchemaDescriptor, BrickError> {
    let stories = self
      .stories
      .iter()
      .map(|s| -> Result<StoryDescriptor, BrickError> {
        Ok(StoryDescriptor {
          id: s.id.clone(),
          name: s.name.clone(),
          show_as_brick: s.show_as_brick,
          preview_image_url: s.preview_image_url.clone(),
          props: to_props_value(&self.name, &s.props)?,
        })
      })
      .collect::<Result<Vec<_>, _>>()?;

    Ok(SchemaDescriptor {
      name: self.name.clone(),
      label: self.label.clone(),
      category: self.category.clone(),
      tags: self.tags.clone(),
      hide_from_add_menu: self.hide_from_add_menu,
      playground_link: self.playground_link.clone(),
      preview_image_url: self.preview_image_url.clone(),
      default_props: to_props_value(&self.name, &(self.default_props)())?,
      repeater_items: self.repeater_items.clone(),
      rich_text: self.rich_text.clone(),
      side_edit_props: self.side_edit_props.clone(),
      stories,
    })
  }
}

pub(crate) fn to_props_value<P: Serialize>(
  brick: &str,
  props: &P,
) -> Result<serde_json::Value, BrickError> {
  serde_json::to_value(props)
    .map_err(|e| BrickError::internal(format!("brick \"{brick}\": serialize props: {e}")))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryDescriptor {
  pub id: String,
  pub name: String,
  pub show_as_brick: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub preview_image_url: Option<String>,
  pub props: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDescriptor {
  pub name: String,
  pub label: String,
  pub category: String,
  pub tags: Vec<String>,
  #[serde(skip_serializing_if = "std::ops::Not::not")]
  pub hide_from_add_menu: bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub playground_link: Option<PlaygroundLink>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub preview_image_url: Option<String>,
  pub default_props: serde_json::Value,
  pub repeater_items: Vec<RepeaterSlot>,
  pub rich_text: Vec<RichTextField>,
  pub side_edit_props: Vec<SideGroup>,
  pub stories: Vec<StoryDescriptor>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::richtext::RichTextFeature;
  use serde_json::json;

  #[derive(Clone, Serialize)]
  struct Props {
    title: String,
    items: Vec<u8>,
  }

  fn defaults() -> Props {
    Props { title: "Hello".into(), items: vec![1] }
  }

  fn schema() -> BrickSchema<Props> {
    BrickSchema::new("demo", "Demo", defaults)
      .category("misc")
      .tags(&["a", "b"])
      .with_preview_image()
      .repeater(RepeaterSlot::new("items", "item", "Item").bounds(0, 2))
      .rich_text(
        RichTextField::new("title", FeatureSet::of(&[RichTextFeature::Bold])).placeholder("Type..."),
      )
      .side_group(SideGroup::new(
        "Look",
        true,
        vec![SideEditProp::select(
          "tone",
          "Tone",
          OptionsDisplay::Radio,
          vec![SelectOption::new("light", "Light"), SelectOption::new("dark", "Dark")],
        )],
      ))
      .story(Story::new("demo-empty", "Empty", Props { title: String::new(), items: vec![] }).show_as_brick())
  }

  #[test]
  fn slot_bounds() {
    let slot = RepeaterSlot::new("buttons", "button", "Button").bounds(0, 2);
    assert!(slot.accepts(0));
    assert!(slot.accepts(2));
    assert!(!slot.accepts(3));
    let unbounded = RepeaterSlot::new("x", "y", "z");
    assert!(unbounded.accepts(1_000));
  }

  #[test]
  fn preview_path_convention() {
    assert_eq!(preview_image_url("hero-unit-2"), "/bricks-preview-images/hero-unit-2.png");
  }

  #[test]
  fn descriptor_serializes_camel_case() {
    let desc = serde_json::to_value(schema().descriptor().unwrap()).unwrap();
    assert_eq!(desc["name"], "demo");
    assert_eq!(desc["previewImageUrl"], "/bricks-preview-images/demo.png");
    assert_eq!(desc["defaultProps"], json!({"title": "Hello", "items": [1]}));
    assert_eq!(
      desc["repeaterItems"][0],
      json!({"name": "items", "itemType": "item", "itemLabel": "Item", "min": 0, "max": 2})
    );
    assert_eq!(desc["richText"][0]["allowedFeatures"], json!(["bold"]));
    assert!(desc.get("hideFromAddMenu").is_none());
  }

  #[test]
  fn descriptor_side_props_flatten_kind() {
    let desc = serde_json::to_value(schema().descriptor().unwrap()).unwrap();
    let group = &desc["sideEditProps"][0];
    assert_eq!(group["groupName"], "Look");
    assert_eq!(group["defaultOpen"], true);
    assert_eq!(
      group["props"][0],
      json!({
        "name": "tone",
        "label": "Tone",
        "type": "select",
        "display": "radio",
        "options": [{"value": "light", "label": "Light"}, {"value": "dark", "label": "Dark"}]
      })
    );
  }

  #[test]
  fn descriptor_stories_carry_props() {
    let desc = schema().descriptor().unwrap();
    assert_eq!(desc.stories.len(), 1);
    let story = &desc.stories[0];
    assert!(story.show_as_brick);
    assert_eq!(story.preview_image_url.as_deref(), Some("/bricks-preview-images/demo-empty.png"));
    assert_eq!(story.props, json!({"title": "", "items": []}));
  }

  #[test]
  fn default_factory_returns_fresh_values() {
    let s = schema();
    let mut a = (s.default_props)();
    a.items.push(9);
    assert_eq!((s.default_props)().items, vec![1]);
  }
}
