/* src/bricks/rust/src/block_names.rs */

//! Registered brick names. Repeater item types refer to these.

pub const HERO_UNIT_2: &str = "hero-unit-2";
pub const BADGE: &str = "badge";
pub const BUTTON: &str = "button";
