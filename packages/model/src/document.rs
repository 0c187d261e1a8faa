//! # Block Document
//!
//! An ordered, immutable snapshot of blocks.
//!
//! Every edit returns a new `Document` instead of changing the old one, so
//! two handles to the same snapshot can be compared by identity
//! ([`Document::ptr_eq`]) to know nothing changed in between. Edits that
//! turn out to be no-ops (unknown id, move past a boundary, patch of the
//! wrong variant) hand back the same snapshot.
//!
//! ## Invariants
//!
//! - Block ids are pairwise distinct
//! - Block order is the emission order of every derived artifact

use crate::block::{Block, BlockContent, BlockId, BlockPatch};
use pagecraft_common::{CommonError, CommonResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Direction for a one-step move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the start (-1)
    Up,
    /// Towards the end (+1)
    Down,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }

    /// Map `-1`/`+1` to a direction; anything else is `None`
    pub fn from_offset(offset: i64) -> Option<Self> {
        match offset {
            -1 => Some(Direction::Up),
            1 => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Immutable, cheaply clonable block sequence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Block>", into = "Vec<Block>")]
pub struct Document {
    blocks: Arc<Vec<Block>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document, rejecting duplicate ids
    pub fn from_blocks(blocks: Vec<Block>) -> CommonResult<Self> {
        let mut seen = HashSet::with_capacity(blocks.len());
        for block in &blocks {
            if !seen.insert(block.id()) {
                return Err(CommonError::DuplicateId(block.id().to_string()));
            }
        }
        Ok(Self {
            blocks: Arc::new(blocks),
        })
    }

    /// Parse a JSON array of blocks
    pub fn from_json(json: &str) -> CommonResult<Self> {
        let blocks: Vec<Block> = serde_json::from_str(json)?;
        Self::from_blocks(blocks)
    }

    pub fn to_json_pretty(&self) -> CommonResult<String> {
        Ok(serde_json::to_string_pretty(self.blocks.as_slice())?)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id() == id)
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id() == id)
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &BlockId> {
        self.blocks.iter().map(|b| b.id())
    }

    /// True if both handles point at the same snapshot
    pub fn ptr_eq(&self, other: &Document) -> bool {
        Arc::ptr_eq(&self.blocks, &other.blocks)
    }

    /// Snapshot with `block` appended at the end.
    ///
    /// A block whose id is already present is dropped so the id invariant
    /// holds; callers mint ids through an `IDGenerator`.
    pub fn appended(&self, block: Block) -> Document {
        if self.contains(block.id()) {
            warn!(id = %block.id(), "refusing to append block with duplicate id");
            return self.clone();
        }

        let mut blocks = Vec::with_capacity(self.blocks.len() + 1);
        blocks.extend(self.blocks.iter().cloned());
        blocks.push(block);
        Self::wrap(blocks)
    }

    /// Snapshot without the block `id`
    pub fn without(&self, id: &BlockId) -> Document {
        let Some(index) = self.position(id) else {
            debug!(%id, "remove: no such block");
            return self.clone();
        };

        let mut blocks = self.blocks.as_ref().clone();
        blocks.remove(index);
        Self::wrap(blocks)
    }

    /// Snapshot with block `id` moved one step in `direction`.
    ///
    /// Moving the first block up or the last block down is a no-op.
    pub fn moved(&self, id: &BlockId, direction: Direction) -> Document {
        let Some(from) = self.position(id) else {
            debug!(%id, "move: no such block");
            return self.clone();
        };

        let to = match direction {
            Direction::Up if from == 0 => None,
            Direction::Up => Some(from - 1),
            Direction::Down if from + 1 >= self.blocks.len() => None,
            Direction::Down => Some(from + 1),
        };

        let Some(to) = to else {
            debug!(%id, ?direction, "move: already at boundary");
            return self.clone();
        };

        let mut blocks = self.blocks.as_ref().clone();
        blocks.swap(from, to);
        Self::wrap(blocks)
    }

    /// Snapshot with `patch` applied to block `id`.
    ///
    /// Unknown ids, patches for another variant and patches that change
    /// nothing all return the same snapshot.
    pub fn patched(&self, id: &BlockId, patch: &BlockPatch) -> Document {
        let Some(index) = self.position(id) else {
            debug!(%id, "update: no such block");
            return self.clone();
        };

        let mut content: BlockContent = self.blocks[index].content().clone();
        if !content.apply_patch(patch) {
            debug!(%id, kind = patch.kind().name(), "update: patch changed nothing");
            return self.clone();
        }

        let mut blocks = self.blocks.as_ref().clone();
        *blocks[index].content_mut() = content;
        Self::wrap(blocks)
    }

    fn wrap(blocks: Vec<Block>) -> Document {
        Self {
            blocks: Arc::new(blocks),
        }
    }
}

impl TryFrom<Vec<Block>> for Document {
    type Error = CommonError;

    fn try_from(blocks: Vec<Block>) -> Result<Self, Self::Error> {
        Self::from_blocks(blocks)
    }
}

impl From<Document> for Vec<Block> {
    fn from(document: Document) -> Self {
        Arc::try_unwrap(document.blocks).unwrap_or_else(|shared| shared.as_ref().clone())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
