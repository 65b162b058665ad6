/* src/cli/core/src/catalog.rs */

use anyhow::{Context, Result};
use brickyard_core::{BrickRegistry, SchemaDescriptor};
use serde_json::json;

use crate::ui;

fn summary(desc: &SchemaDescriptor) -> serde_json::Value {
  json!({
    "name": desc.name,
    "label": desc.label,
    "category": desc.category,
    "tags": desc.tags,
    "hidden": desc.hide_from_add_menu,
  })
}

/// Print the add-menu palette, or every brick carrying `tag` (hidden ones included).
pub fn run_catalog(registry: &BrickRegistry, tag: Option<&str>, as_json: bool) -> Result<()> {
  if let Some(tag) = tag {
    let matches = registry.with_tag(tag);
    if as_json {
      let list: Vec<_> = matches.iter().map(|b| summary(b.descriptor())).collect();
      println!("{}", serde_json::to_string_pretty(&list).context("failed to serialize catalog")?);
      return Ok(());
    }
    if matches.is_empty() {
      ui::warn(&format!("no brick tagged \"{tag}\""));
    }
    for brick in matches {
      let desc = brick.descriptor();
      ui::arrow(&format!("{}  {}  [{}]", desc.name, desc.label, desc.category));
    }
    return Ok(());
  }

  let palette = registry.palette();
  if as_json {
    println!("{}", serde_json::to_string_pretty(&palette).context("failed to serialize catalog")?);
    return Ok(());
  }
  for (category, entries) in &palette {
    ui::arrow(category);
    for entry in entries {
      ui::detail(&format!("{}  {}  ({})", entry.name, entry.label, entry.tags.join(", ")));
    }
  }
  Ok(())
}
