/* src/core/rust/src/lib.rs */

pub mod errors;
pub mod html;
pub mod locale;
pub mod node;
pub mod page;
pub mod registry;
pub mod resolve;
pub mod richtext;
pub mod schema;
pub mod validate;

// Re-exports for ergonomic use
pub use errors::BrickError;
pub use html::{escape_html, render_html};
pub use locale::{LocaleConfig, SITE_URL_ENV, site_i18n, site_url_from_env};
pub use node::{Element, Node, repeater};
pub use page::{PageOptions, head_meta, render_page};
pub use registry::{BrickRegistry, PaletteEntry, RegisteredBrick};
pub use resolve::{
  LOCALE_COOKIE, ResolveData, ResolveStrategy, default_strategies, from_accept_language,
  from_cookie, from_url_prefix, resolve_chain,
};
pub use richtext::{
  BlockNode, FeatureSet, RichText, RichTextFeature, RichTextOptions, TextRun, render_rich_text,
};
pub use schema::{
  Brick, BrickSchema, EditKind, OptionsDisplay, RepeaterSlot, RichTextField, SchemaDescriptor,
  SelectOption, SideEditProp, SideGroup, Story, preview_image_url,
};
pub use validate::{check_props, validate_props, validate_schema};
