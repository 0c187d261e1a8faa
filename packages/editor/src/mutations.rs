//! # Block Mutations
//!
//! The five editing operations, as data.
//!
//! ## Mutation Semantics
//!
//! ### AddBlock
//! - Appends a block with a freshly minted id
//! - Always succeeds
//!
//! ### RemoveBlock
//! - Removes the block if present, otherwise no-op
//! - Clears the selection if it named the removed block
//!
//! ### MoveBlock
//! - One step up or down, clamped at the ends
//! - Other blocks keep their relative order
//!
//! ### UpdateBlock
//! - Only fields of the block's own variant can be patched
//! - Unknown id or mismatched variant is a no-op
//!
//! ### Select
//! - Selects an existing block or clears the selection
//! - Selecting an unknown id clears the selection

use crate::EditorError;
use pagecraft_model::{BlockContent, BlockId, BlockPatch, Direction};
use serde::{Deserialize, Serialize};

/// Semantic edit operation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Mutation {
    /// Append a new block at the end
    AddBlock { content: BlockContent },

    /// Remove a block
    RemoveBlock { id: BlockId },

    /// Move a block one position
    MoveBlock { id: BlockId, direction: Direction },

    /// Patch fields of a block
    UpdateBlock { id: BlockId, patch: BlockPatch },

    /// Change the selection
    Select { id: Option<BlockId> },
}

impl Mutation {
    /// Parse a mutation from its JSON form
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddBlock { .. } => "addBlock",
            Mutation::RemoveBlock { .. } => "removeBlock",
            Mutation::MoveBlock { .. } => "moveBlock",
            Mutation::UpdateBlock { .. } => "updateBlock",
            Mutation::Select { .. } => "select",
        }
    }
}

/// Outcome of applying a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// Session version after the mutation
    pub version: u64,

    /// Whether the document or the selection changed
    pub changed: bool,

    /// Id of the block created by `AddBlock`
    pub added: Option<BlockId>,
}
