//! # Pagecraft Model
//!
//! Block and document types shared by the compilers and the editor.
//!
//! ```rust,ignore
//! use pagecraft_model::{Block, BlockContent, Document, HeadingLevel, IDGenerator};
//!
//! let mut ids = IDGenerator::new("index");
//! let doc = Document::new()
//!     .appended(Block::new(ids.new_id(), BlockContent::heading("Hi", HeadingLevel::H1)));
//! ```

mod block;
mod document;
mod id_generator;
mod presets;

pub use block::{Block, BlockContent, BlockId, BlockKind, BlockPatch, HeadingLevel};
pub use document::{Direction, Document};
pub use id_generator::{document_seed, IDGenerator};
pub use presets::{starter_contents, PRESET_IMAGE_URL};
