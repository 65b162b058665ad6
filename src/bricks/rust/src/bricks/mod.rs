/* src/bricks/rust/src/bricks/mod.rs */

pub mod badge;
pub mod button;
pub mod hero_unit2;

pub use badge::{Badge, BadgeProps, TextAlign};
pub use button::{Button, ButtonKind, ButtonPadding, ButtonProps, HtmlButtonType, Variant};
pub use hero_unit2::{HeroUnit2, HeroUnitProps};
