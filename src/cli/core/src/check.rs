/* src/cli/core/src/check.rs */

use anyhow::Result;
use brickyard_core::BrickRegistry;

use crate::ui;

/// Report every registered brick. A schema error aborts before anything is listed.
pub fn run_check() -> Result<BrickRegistry> {
  ui::banner("check");
  let registry = match brickyard_ui::website_registry() {
    Ok(registry) => registry,
    Err(e) => {
      ui::fail(e.message());
      return Err(e.into());
    }
  };

  for brick in registry.iter() {
    let desc = brick.descriptor();
    let stories = desc.stories.len();
    let hidden = if desc.hide_from_add_menu { ", item only" } else { "" };
    ui::ok(&format!("{}  {stories} stories{hidden}", desc.name));
    for slot in &desc.repeater_items {
      let max = slot.max.map(|m| m.to_string()).unwrap_or_default();
      ui::detail(&format!("{} -> {} ({}..={max})", slot.name, slot.item_type, slot.min));
    }
  }
  ui::blank();
  ui::ok(&format!("{} bricks registered", registry.len()));
  Ok(registry)
}
