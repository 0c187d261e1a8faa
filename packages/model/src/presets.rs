//! Block library defaults and the starter page

use crate::block::{BlockContent, BlockKind, HeadingLevel};

pub const PRESET_IMAGE_URL: &str = "https://images.unsplash.com/photo-1528795259021-d8c86e14354c?q=80&w=1200&auto=format&fit=crop";

impl BlockContent {
    /// Content a freshly added block of `kind` starts with
    pub fn preset(kind: BlockKind) -> Self {
        match kind {
            BlockKind::Heading => BlockContent::heading("A beautiful heading", HeadingLevel::H2),
            BlockKind::Paragraph => {
                BlockContent::paragraph("This is a paragraph. Edit it to make it yours.")
            }
            BlockKind::Image => BlockContent::image(PRESET_IMAGE_URL, "Unsplash"),
            BlockKind::Button => BlockContent::button("Call to Action", "#"),
        }
    }
}

/// Blocks of a new page, in order
pub fn starter_contents() -> Vec<BlockContent> {
    vec![
        BlockContent::heading("Welcome to my site", HeadingLevel::H1),
        BlockContent::paragraph("Click blocks to edit content."),
    ]
}
