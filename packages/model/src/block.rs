use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque block identifier, unique within one document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BlockId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Heading level. Only `h1`..`h3` are offered by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
        }
    }

    /// Tag name (`h1`, `h2`, `h3`)
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = String;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            other => Err(format!("heading level must be 1, 2 or 3 (got {})", other)),
        }
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.as_u8()
    }
}

/// Variant discriminant, used to pick presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Heading,
    Paragraph,
    Image,
    Button,
}

impl BlockKind {
    pub const ALL: [BlockKind; 4] = [
        BlockKind::Heading,
        BlockKind::Paragraph,
        BlockKind::Image,
        BlockKind::Button,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Image => "image",
            BlockKind::Button => "button",
        }
    }
}

impl FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "heading" => Ok(BlockKind::Heading),
            "paragraph" | "text" => Ok(BlockKind::Paragraph),
            "image" => Ok(BlockKind::Image),
            "button" => Ok(BlockKind::Button),
            other => Err(format!("unknown block kind: {}", other)),
        }
    }
}

/// Content of a block, one variant per block kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockContent {
    Heading {
        text: String,
        level: HeadingLevel,
    },

    #[serde(alias = "text")]
    Paragraph {
        text: String,
    },

    Image {
        src: String,
        alt: String,
    },

    Button {
        label: String,
        href: String,
    },
}

impl BlockContent {
    pub fn heading(text: impl Into<String>, level: HeadingLevel) -> Self {
        BlockContent::Heading {
            text: text.into(),
            level,
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        BlockContent::Paragraph { text: text.into() }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        BlockContent::Image {
            src: src.into(),
            alt: alt.into(),
        }
    }

    pub fn button(label: impl Into<String>, href: impl Into<String>) -> Self {
        BlockContent::Button {
            label: label.into(),
            href: href.into(),
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Heading { .. } => BlockKind::Heading,
            BlockContent::Paragraph { .. } => BlockKind::Paragraph,
            BlockContent::Image { .. } => BlockKind::Image,
            BlockContent::Button { .. } => BlockKind::Button,
        }
    }

    /// Apply a patch of the same variant.
    ///
    /// Returns `true` if any field changed. A patch of a different variant
    /// is ignored.
    pub fn apply_patch(&mut self, patch: &BlockPatch) -> bool {
        match (self, patch) {
            (
                BlockContent::Heading { text, level },
                BlockPatch::Heading {
                    text: new_text,
                    level: new_level,
                },
            ) => set_field(text, new_text) | set_field(level, new_level),

            (BlockContent::Paragraph { text }, BlockPatch::Paragraph { text: new_text }) => {
                set_field(text, new_text)
            }

            (
                BlockContent::Image { src, alt },
                BlockPatch::Image {
                    src: new_src,
                    alt: new_alt,
                },
            ) => set_field(src, new_src) | set_field(alt, new_alt),

            (
                BlockContent::Button { label, href },
                BlockPatch::Button {
                    label: new_label,
                    href: new_href,
                },
            ) => set_field(label, new_label) | set_field(href, new_href),

            _ => false,
        }
    }
}

fn set_field<T: Clone + PartialEq>(field: &mut T, value: &Option<T>) -> bool {
    match value {
        Some(v) if v != field => {
            *field = v.clone();
            true
        }
        _ => false,
    }
}

/// A single content unit. The id is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    id: BlockId,

    #[serde(flatten)]
    content: BlockContent,
}

impl Block {
    pub fn new(id: BlockId, content: BlockContent) -> Self {
        Self { id, content }
    }

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    pub fn content(&self) -> &BlockContent {
        &self.content
    }

    pub fn kind(&self) -> BlockKind {
        self.content.kind()
    }

    pub(crate) fn content_mut(&mut self) -> &mut BlockContent {
        &mut self.content
    }
}

/// Partial update for one block variant.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockPatch {
    Heading {
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        level: Option<HeadingLevel>,
    },

    #[serde(alias = "text")]
    Paragraph {
        #[serde(default)]
        text: Option<String>,
    },

    Image {
        #[serde(default)]
        src: Option<String>,
        #[serde(default)]
        alt: Option<String>,
    },

    Button {
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        href: Option<String>,
    },
}

impl BlockPatch {
    pub fn heading_text(text: impl Into<String>) -> Self {
        BlockPatch::Heading {
            text: Some(text.into()),
            level: None,
        }
    }

    pub fn heading_level(level: HeadingLevel) -> Self {
        BlockPatch::Heading {
            text: None,
            level: Some(level),
        }
    }

    pub fn paragraph_text(text: impl Into<String>) -> Self {
        BlockPatch::Paragraph {
            text: Some(text.into()),
        }
    }

    pub fn image_src(src: impl Into<String>) -> Self {
        BlockPatch::Image {
            src: Some(src.into()),
            alt: None,
        }
    }

    pub fn image_alt(alt: impl Into<String>) -> Self {
        BlockPatch::Image {
            src: None,
            alt: Some(alt.into()),
        }
    }

    pub fn button_label(label: impl Into<String>) -> Self {
        BlockPatch::Button {
            label: Some(label.into()),
            href: None,
        }
    }

    pub fn button_href(href: impl Into<String>) -> Self {
        BlockPatch::Button {
            label: None,
            href: Some(href.into()),
        }
    }

    /// Variant this patch targets
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockPatch::Heading { .. } => BlockKind::Heading,
            BlockPatch::Paragraph { .. } => BlockKind::Paragraph,
            BlockPatch::Image { .. } => BlockKind::Image,
            BlockPatch::Button { .. } => BlockKind::Button,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_bounds() {
        assert_eq!(HeadingLevel::try_from(2), Ok(HeadingLevel::H2));
        assert!(HeadingLevel::try_from(0).is_err());
        assert!(HeadingLevel::try_from(4).is_err());
    }

    #[test]
    fn test_patch_touches_only_given_fields() {
        let mut content = BlockContent::heading("Old", HeadingLevel::H1);
        assert!(content.apply_patch(&BlockPatch::heading_level(HeadingLevel::H3)));
        assert_eq!(content, BlockContent::heading("Old", HeadingLevel::H3));

        assert!(content.apply_patch(&BlockPatch::heading_text("New")));
        assert_eq!(content, BlockContent::heading("New", HeadingLevel::H3));
    }

    #[test]
    fn test_patch_of_other_variant_is_ignored() {
        let mut content = BlockContent::paragraph("Body");
        assert!(!content.apply_patch(&BlockPatch::button_label("Go")));
        assert!(!content.apply_patch(&BlockPatch::heading_text("Title")));
        assert_eq!(content, BlockContent::paragraph("Body"));
    }

    #[test]
    fn test_patch_with_same_value_reports_no_change() {
        let mut content = BlockContent::button("Go", "#");
        assert!(!content.apply_patch(&BlockPatch::button_href("#")));
    }

    #[test]
    fn test_block_json_shape() {
        let block = Block::new(
            BlockId::new("b-1"),
            BlockContent::heading("Hi", HeadingLevel::H1),
        );
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "b-1", "type": "heading", "text": "Hi", "level": 1})
        );
    }

    #[test]
    fn test_legacy_text_tag_reads_as_paragraph() {
        let block: Block =
            serde_json::from_str(r#"{"id": "p", "type": "text", "text": "Body"}"#).unwrap();
        assert_eq!(block.kind(), BlockKind::Paragraph);
    }

    #[test]
    fn test_invalid_heading_level_rejected() {
        let result: Result<Block, _> =
            serde_json::from_str(r#"{"id": "h", "type": "heading", "text": "x", "level": 7}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_patch_json() {
        let patch: BlockPatch = serde_json::from_str(r#"{"type": "image", "alt": "Cat"}"#).unwrap();
        assert_eq!(patch, BlockPatch::image_alt("Cat"));
    }

    #[test]
    fn test_block_kind_from_str() {
        assert_eq!("Heading".parse::<BlockKind>(), Ok(BlockKind::Heading));
        assert_eq!("text".parse::<BlockKind>(), Ok(BlockKind::Paragraph));
        assert!("video".parse::<BlockKind>().is_err());
    }
}
