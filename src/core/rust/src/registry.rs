/* src/core/rust/src/registry.rs */

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::errors::BrickError;
use crate::node::Node;
use crate::schema::{Brick, SchemaDescriptor, to_props_value};
use crate::validate::{check_props, validate_schema};

pub type DefaultPropsFn = Arc<dyn Fn() -> Result<Value, BrickError> + Send + Sync>;
pub type RenderFn = Arc<dyn Fn(&Value) -> Result<Node, BrickError> + Send + Sync>;

/// Type-erased brick as seen by the host: schema snapshot plus closures over
/// the typed default factory and render function.
#[derive(Clone)]
pub struct RegisteredBrick {
  descriptor: SchemaDescriptor,
  default_props: DefaultPropsFn,
  render: RenderFn,
}

impl RegisteredBrick {
  fn of<B: Brick>() -> Result<Self, BrickError> {
    let schema = B::schema();
    validate_schema(&schema)?;
    let descriptor = schema.descriptor()?;

    let name = schema.name.clone();
    let factory = schema.default_props;
    let default_props: DefaultPropsFn = Arc::new(move || to_props_value(&name, &factory()));

    let name = schema.name.clone();
    let render: RenderFn = Arc::new(move |value: &Value| {
      let props: B::Props = serde_json::from_value(value.clone())
        .map_err(|e| BrickError::invalid_props(format!("brick \"{name}\": {e}")))?;
      Ok(B::render(&props))
    });

    Ok(Self { descriptor, default_props, render })
  }

  pub fn name(&self) -> &str {
    &self.descriptor.name
  }

  pub fn descriptor(&self) -> &SchemaDescriptor {
    &self.descriptor
  }

  /// Fresh default props from the schema factory.
  pub fn default_props(&self) -> Result<Value, BrickError> {
    (self.default_props)()
  }

  pub fn story_props(&self, story_id: &str) -> Option<&Value> {
    self.descriptor.stories.iter().find(|s| s.id == story_id).map(|s| &s.props)
  }

  pub fn check(&self, props: &Value) -> Vec<String> {
    check_props(&self.descriptor.repeater_items, &self.descriptor.rich_text, props)
  }

  /// Render stored props. Constraint violations are logged, not corrected;
  /// only props that do not fit the brick's type are rejected.
  pub fn render(&self, props: &Value) -> Result<Node, BrickError> {
    let violations = self.check(props);
    if !violations.is_empty() {
      tracing::warn!(brick = %self.name(), violations = %violations.join("; "), "rendering props outside schema constraints");
    }
    (self.render)(props)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteEntry {
  pub name: String,
  pub label: String,
  pub tags: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub preview_image_url: Option<String>,
}

impl PaletteEntry {
  fn from_descriptor(d: &SchemaDescriptor) -> Self {
    Self {
      name: d.name.clone(),
      label: d.label.clone(),
      tags: d.tags.clone(),
      preview_image_url: d.preview_image_url.clone(),
    }
  }
}

/// All bricks known to the host, keyed by registered name.
#[derive(Clone, Default)]
pub struct BrickRegistry {
  bricks: BTreeMap<String, RegisteredBrick>,
}

impl BrickRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Validate and add a brick. Rejects duplicate names and schemas whose
  /// defaults or stories break their own constraints.
  pub fn register<B: Brick>(mut self) -> Result<Self, BrickError> {
    let brick = RegisteredBrick::of::<B>()?;
    let name = brick.name().to_string();
    if self.bricks.contains_key(&name) {
      return Err(BrickError::schema(format!("brick \"{name}\" is already registered")));
    }
    tracing::debug!(brick = %name, "registered");
    self.bricks.insert(name, brick);
    Ok(self)
  }

  /// Every repeater item type must name a registered brick.
  pub fn check_item_types(&self) -> Result<(), BrickError> {
    for brick in self.bricks.values() {
      for slot in &brick.descriptor.repeater_items {
        if !self.bricks.contains_key(&slot.item_type) {
          return Err(BrickError::schema(format!(
            "brick \"{}\": repeater \"{}\" uses unregistered item type \"{}\"",
            brick.name(),
            slot.name,
            slot.item_type
          )));
        }
      }
    }
    Ok(())
  }

  pub fn get(&self, name: &str) -> Option<&RegisteredBrick> {
    self.bricks.get(name)
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.bricks.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = &RegisteredBrick> {
    self.bricks.values()
  }

  pub fn len(&self) -> usize {
    self.bricks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bricks.is_empty()
  }

  /// Add-menu entries grouped by category; hidden item bricks are left out.
  pub fn palette(&self) -> BTreeMap<String, Vec<PaletteEntry>> {
    let mut palette: BTreeMap<String, Vec<PaletteEntry>> = BTreeMap::new();
    for brick in self.bricks.values().filter(|b| !b.descriptor.hide_from_add_menu) {
      palette
        .entry(brick.descriptor.category.clone())
        .or_default()
        .push(PaletteEntry::from_descriptor(&brick.descriptor));
    }
    palette
  }

  /// Bricks carrying `tag` (case-insensitive), hidden ones included.
  pub fn with_tag(&self, tag: &str) -> Vec<&RegisteredBrick> {
    self
      .bricks
      .values()
      .filter(|b| b.descriptor.tags.iter().any(|t| t.eq_ignore_ascii_case(tag)))
      .collect()
  }

  fn lookup(&self, name: &str) -> Result<&RegisteredBrick, BrickError> {
    self.get(name).ok_or_else(|| BrickError::not_found(format!("unknown brick \"{name}\"")))
  }

  pub fn default_props(&self, name: &str) -> Result<Value, BrickError> {
    self.lookup(name)?.default_props()
  }

  pub fn story_props(&self, name: &str, story_id: &str) -> Result<Value, BrickError> {
    self
      .lookup(name)?
      .story_props(story_id)
      .cloned()
      .ok_or_else(|| BrickError::not_found(format!("brick \"{name}\" has no story \"{story_id}\"")))
  }

  pub fn render_json(&self, name: &str, props: &Value) -> Result<Node, BrickError> {
    self.lookup(name)?.render(props)
  }
}
