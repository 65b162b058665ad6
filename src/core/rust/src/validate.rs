/* src/core/rust/src/validate.rs */

//! Schema checks run once at registration, and prop checks shared by
//! registration (defaults, stories) and the host-facing render path.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use crate::errors::BrickError;
use crate::richtext::{RichText, RichTextFeature};
use crate::schema::{BrickSchema, RepeaterSlot, RichTextField, to_props_value};

/// Collect every constraint violation in a props value. Empty means valid.
/// A missing or null repeater slot counts as zero items.
pub fn check_props(slots: &[RepeaterSlot], rich_text: &[RichTextField], props: &Value) -> Vec<String> {
  let Some(obj) = props.as_object() else {
    return vec!["props must be a JSON object".to_string()];
  };
  let mut violations = Vec::new();

  for slot in slots {
    let count = match obj.get(&slot.name) {
      None | Some(Value::Null) => 0,
      Some(Value::Array(items)) => items.len(),
      Some(_) => {
        violations.push(format!("repeater \"{}\" must be a list", slot.name));
        continue;
      }
    };
    if !slot.accepts(count) {
      let max = slot.max.map(|m| m.to_string()).unwrap_or_default();
      violations.push(format!(
        "repeater \"{}\" has {count} items, allowed {}..={max}",
        slot.name, slot.min
      ));
    }
  }

  for field in rich_text {
    let Some(value) = obj.get(&field.name).filter(|v| !v.is_null()) else { continue };
    match RichText::deserialize_value(value) {
      Ok(text) => {
        let used = text.features_used();
        if !used.is_subset_of(field.allowed_features) {
          let extra: Vec<&str> = used
            .iter()
            .filter(|f| !field.allowed_features.contains(*f))
            .map(RichTextFeature::as_str)
            .collect();
          violations.push(format!(
            "rich text \"{}\" uses disallowed features [{}]",
            field.name,
            extra.join(", ")
          ));
        }
      }
      Err(e) => violations.push(format!("rich text \"{}\": {e}", field.name)),
    }
  }

  violations
}

/// `check_props` as a Result, for callers that reject invalid input.
pub fn validate_props(
  brick: &str,
  slots: &[RepeaterSlot],
  rich_text: &[RichTextField],
  props: &Value,
) -> Result<(), BrickError> {
  let violations = check_props(slots, rich_text, props);
  if violations.is_empty() {
    Ok(())
  } else {
    Err(BrickError::invalid_props(format!("brick \"{brick}\": {}", violations.join("; "))))
  }
}

/// Registration-time check of a schema, its default props and every story.
pub fn validate_schema<P: Serialize>(schema: &BrickSchema<P>) -> Result<(), BrickError> {
  let name = &schema.name;
  let fail = |msg: String| Err(BrickError::schema(format!("brick \"{name}\": {msg}")));

  if name.trim().is_empty() {
    return Err(BrickError::schema("brick name must not be empty"));
  }
  if schema.label.trim().is_empty() {
    return fail("label must not be empty".into());
  }

  let mut slot_names = HashSet::new();
  for slot in &schema.repeater_items {
    if !slot_names.insert(slot.name.as_str()) {
      return fail(format!("duplicate repeater slot \"{}\"", slot.name));
    }
    if slot.item_type.is_empty() {
      return fail(format!("repeater slot \"{}\" has no item type", slot.name));
    }
    if let Some(max) = slot.max {
      if slot.min > max {
        return fail(format!("repeater slot \"{}\" has min {} > max {max}", slot.name, slot.min));
      }
    }
  }

  let defaults = to_props_value(name, &(schema.default_props)())?;
  let Some(default_keys) = defaults.as_object() else {
    return fail("default props must serialize to an object".into());
  };

  let mut prop_names = HashSet::new();
  let side_props = schema.side_edit_props.iter().flat_map(|g| g.props.iter());
  for prop in side_props {
    if !prop_names.insert(prop.name.as_str()) {
      return fail(format!("duplicate side edit prop \"{}\"", prop.name));
    }
  }

  let referenced = schema
    .repeater_items
    .iter()
    .map(|s| s.name.as_str())
    .chain(schema.rich_text.iter().map(|f| f.name.as_str()))
    .chain(prop_names.iter().copied());
  for key in referenced {
    if !default_keys.contains_key(key) {
      return fail(format!("prop \"{key}\" has no default value"));
    }
  }

  let violations = check_props(&schema.repeater_items, &schema.rich_text, &defaults);
  if !violations.is_empty() {
    return fail(format!("default props: {}", violations.join("; ")));
  }

  let mut story_ids = HashSet::new();
  for story in &schema.stories {
    if story.id.trim().is_empty() {
      return fail("story id must not be empty".into());
    }
    if !story_ids.insert(story.id.as_str()) {
      return fail(format!("duplicate story id \"{}\"", story.id));
    }
    let props = to_props_value(name, &story.props)?;
    let violations = check_props(&schema.repeater_items, &schema.rich_text, &props);
    if !violations.is_empty() {
      return fail(format!("story \"{}\": {}", story.id, violations.join("; ")));
    }
  }

  tracing::debug!(brick = %name, stories = schema.stories.len(), "schema validated");
  Ok(())
}
