/* src/core/rust/src/richtext.rs */

//! Rich text values: ordered block nodes holding styled text runs, plus the
//! finite set of inline features a field may allow.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::node::{Element, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RichTextFeature {
  Bold,
  Italic,
  Code,
  Highlight,
}

impl RichTextFeature {
  pub const ALL: [RichTextFeature; 4] = [Self::Bold, Self::Italic, Self::Code, Self::Highlight];

  const fn bit(self) -> u8 {
    match self {
      Self::Bold => 1,
      Self::Italic => 1 << 1,
      Self::Code => 1 << 2,
      Self::Highlight => 1 << 3,
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      Self::Bold => "bold",
      Self::Italic => "italic",
      Self::Code => "code",
      Self::Highlight => "highlight",
    }
  }
}

/// Set of allowed inline features for one rich text field.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureSet(u8);

impl FeatureSet {
  pub const NONE: FeatureSet = FeatureSet(0);

  pub const fn of(features: &[RichTextFeature]) -> Self {
    let mut bits = 0;
    let mut i = 0;
    while i < features.len() {
      bits |= features[i].bit();
      i += 1;
    }
    Self(bits)
  }

  pub const fn contains(self, feature: RichTextFeature) -> bool {
    self.0 & feature.bit() != 0
  }

  pub const fn with(self, feature: RichTextFeature) -> Self {
    Self(self.0 | feature.bit())
  }

  pub const fn is_subset_of(self, other: FeatureSet) -> bool {
    self.0 & !other.0 == 0
  }

  pub fn iter(self) -> impl Iterator<Item = RichTextFeature> {
    RichTextFeature::ALL.into_iter().filter(move |f| self.contains(*f))
  }
}

impl fmt::Debug for FeatureSet {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_set().entries(self.iter().map(RichTextFeature::as_str)).finish()
  }
}

impl Serialize for FeatureSet {
  fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(self.iter())
  }
}

fn is_false(b: &bool) -> bool {
  !*b
}

/// A run of text sharing one set of inline marks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextRun {
  pub text: String,
  #[serde(default, skip_serializing_if = "is_false")]
  pub bold: bool,
  #[serde(default, skip_serializing_if = "is_false")]
  pub italic: bool,
  #[serde(default, skip_serializing_if = "is_false")]
  pub code: bool,
  #[serde(default, skip_serializing_if = "is_false")]
  pub highlight: bool,
}

impl TextRun {
  pub fn plain(text: impl Into<String>) -> Self {
    Self { text: text.into(), ..Self::default() }
  }

  pub fn bold(text: impl Into<String>) -> Self {
    Self { text: text.into(), bold: true, ..Self::default() }
  }

  pub fn highlight(text: impl Into<String>) -> Self {
    Self { text: text.into(), highlight: true, ..Self::default() }
  }

  pub fn features(&self) -> FeatureSet {
    let mut set = FeatureSet::NONE;
    if self.bold {
      set = set.with(RichTextFeature::Bold);
    }
    if self.italic {
      set = set.with(RichTextFeature::Italic);
    }
    if self.code {
      set = set.with(RichTextFeature::Code);
    }
    if self.highlight {
      set = set.with(RichTextFeature::Highlight);
    }
    set
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockNode {
  Paragraph { children: Vec<TextRun> },
  Quote { children: Vec<TextRun> },
}

impl BlockNode {
  pub fn children(&self) -> &[TextRun] {
    match self {
      Self::Paragraph { children } | Self::Quote { children } => children,
    }
  }
}

/// Ordered block nodes. A bare JSON string deserializes to one paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RichText(pub Vec<BlockNode>);

impl<'de> Deserialize<'de> for RichText {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
      Plain(String),
      Blocks(Vec<BlockNode>),
    }

    Ok(match Repr::deserialize(deserializer)? {
      Repr::Plain(text) => Self::plain(text),
      Repr::Blocks(blocks) => Self(blocks),
    })
  }
}

impl RichText {
  pub fn plain(text: impl Into<String>) -> Self {
    Self::paragraph(vec![TextRun::plain(text)])
  }

  pub fn paragraph(children: Vec<TextRun>) -> Self {
    Self(vec![BlockNode::Paragraph { children }])
  }

  pub fn deserialize_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
    Self::deserialize(value)
  }

  pub fn blocks(&self) -> &[BlockNode] {
    &self.0
  }

  /// Union of marks used by every run.
  pub fn features_used(&self) -> FeatureSet {
    self
      .0
      .iter()
      .flat_map(BlockNode::children)
      .fold(FeatureSet::NONE, |acc, run| FeatureSet(acc.0 | run.features().0))
  }

  pub fn to_plain_text(&self) -> String {
    self
      .0
      .iter()
      .map(|b| b.children().iter().map(|r| r.text.as_str()).collect::<String>())
      .collect::<Vec<_>>()
      .join("\n")
  }
}

pub type BlockRenderer<'a> = &'a dyn Fn(&BlockNode, Vec<Node>) -> Node;
pub type HighlightRenderer<'a> = &'a dyn Fn(Vec<Node>) -> Node;

/// How a field's value turns into nodes.
pub struct RichTextOptions<'a> {
  pub allowed: FeatureSet,
  pub render_block: BlockRenderer<'a>,
  pub render_highlight: Option<HighlightRenderer<'a>>,
}

/// Render each block through `render_block`. Marks outside `allowed` are
/// dropped; their text is kept.
pub fn render_rich_text(value: &RichText, opts: &RichTextOptions<'_>) -> Vec<Node> {
  value
    .blocks()
    .iter()
    .map(|block| {
      let children = block.children().iter().map(|run| render_run(run, opts)).collect();
      (opts.render_block)(block, children)
    })
    .collect()
}

fn render_run(run: &TextRun, opts: &RichTextOptions<'_>) -> Node {
  let allowed = opts.allowed;
  let mut node = Node::text(&run.text);
  if run.code && allowed.contains(RichTextFeature::Code) {
    node = Element::new("code").child(node).into();
  }
  if run.italic && allowed.contains(RichTextFeature::Italic) {
    node = Element::new("i").child(node).into();
  }
  if run.bold && allowed.contains(RichTextFeature::Bold) {
    node = Element::new("b").child(node).into();
  }
  if run.highlight && allowed.contains(RichTextFeature::Highlight) {
    node = match opts.render_highlight {
      Some(render) => render(vec![node]),
      None => Element::new("mark").child(node).into(),
    };
  }
  node
}
