/* src/bricks/rust/src/lib.rs */

pub mod block_names;
pub mod bricks;
pub mod colors;
pub mod components;
pub mod layout;

use brickyard_core::{BrickError, BrickRegistry};

pub use bricks::{Badge, Button, HeroUnit2};

/// Registry holding every brick of the website library.
pub fn website_registry() -> Result<BrickRegistry, BrickError> {
  let registry =
    BrickRegistry::new().register::<HeroUnit2>()?.register::<Badge>()?.register::<Button>()?;
  registry.check_item_types()?;
  Ok(registry)
}
