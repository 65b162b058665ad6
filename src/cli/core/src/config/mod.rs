/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_brickyard_config, load_brickyard_config};
pub use types::BrickyardConfig;
