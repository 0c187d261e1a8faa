//! # Edit Session
//!
//! One editing surface's state: the current document snapshot, the
//! selection and the id generator new blocks draw from.
//!
//! Every edit swaps in a new snapshot; the previous one is never touched.
//! The selection always names a block present in the current snapshot or
//! is empty.

use crate::{EditorError, Mutation, MutationResult};
use pagecraft_model::{
    starter_contents, Block, BlockContent, BlockId, BlockKind, BlockPatch, Direction, Document,
    IDGenerator,
};
use tracing::debug;

/// Single-user edit session
#[derive(Debug, Clone)]
pub struct EditSession {
    name: String,
    document: Document,
    selection: Option<BlockId>,
    ids: IDGenerator,
    version: u64,
}

impl EditSession {
    /// Empty session. `name` seeds the block ids.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_document(name, Document::new())
    }

    /// Session over the starter page (a heading and a paragraph)
    pub fn starter(name: impl Into<String>) -> Self {
        let mut session = Self::new(name);
        for content in starter_contents() {
            session.add(content);
        }
        session.version = 0;
        session
    }

    /// Session over an existing document
    pub fn with_document(name: impl Into<String>, document: Document) -> Self {
        let name = name.into();
        Self {
            ids: IDGenerator::new(&name),
            name,
            document,
            selection: None,
            version: 0,
        }
    }

    /// Session over a JSON array of blocks
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, EditorError> {
        let document = Document::from_json(json)?;
        Ok(Self::with_document(name, document))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current snapshot (cheap to clone)
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> Option<&BlockId> {
        self.selection.as_ref()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selection.as_ref().and_then(|id| self.document.get(id))
    }

    /// Incremented by every mutation that changed something
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Append a block and return its new id
    pub fn add(&mut self, content: BlockContent) -> BlockId {
        let id = self.fresh_id();
        debug!(%id, kind = content.kind().name(), "add block");
        let document = self.document.appended(Block::new(id.clone(), content));
        self.replace_document(document);
        id
    }

    /// Append a block with the library defaults for `kind`
    pub fn add_preset(&mut self, kind: BlockKind) -> BlockId {
        self.add(BlockContent::preset(kind))
    }

    /// Remove a block. Returns whether anything changed.
    pub fn remove(&mut self, id: &BlockId) -> bool {
        let document = self.document.without(id);
        if self.selection.as_ref() == Some(id) {
            self.selection = None;
        }
        self.replace_document(document)
    }

    /// Move a block one step. Returns whether anything changed.
    pub fn move_block(&mut self, id: &BlockId, direction: Direction) -> bool {
        let document = self.document.moved(id, direction);
        self.replace_document(document)
    }

    /// Patch a block. Returns whether anything changed.
    pub fn update(&mut self, id: &BlockId, patch: &BlockPatch) -> bool {
        let document = self.document.patched(id, patch);
        self.replace_document(document)
    }

    /// Select a block, or clear with `None`.
    ///
    /// An id that is not in the document clears the selection.
    pub fn select(&mut self, id: Option<BlockId>) -> bool {
        let next = match id {
            Some(id) if self.document.contains(&id) => Some(id),
            Some(id) => {
                debug!(%id, "select: no such block, clearing selection");
                None
            }
            None => None,
        };

        if next == self.selection {
            return false;
        }
        self.selection = next;
        self.version += 1;
        true
    }

    /// Apply a mutation
    pub fn apply(&mut self, mutation: Mutation) -> MutationResult {
        let name = mutation.name();
        let mut added = None;

        let changed = match mutation {
            Mutation::AddBlock { content } => {
                added = Some(self.add(content));
                true
            }
            Mutation::RemoveBlock { id } => self.remove(&id),
            Mutation::MoveBlock { id, direction } => self.move_block(&id, direction),
            Mutation::UpdateBlock { id, patch } => self.update(&id, &patch),
            Mutation::Select { id } => self.select(id),
        };

        debug!(op = name, changed, version = self.version, "applied mutation");

        MutationResult {
            version: self.version,
            changed,
            added,
        }
    }

    fn fresh_id(&mut self) -> BlockId {
        loop {
            let id = self.ids.new_id();
            if !self.document.contains(&id) {
                return id;
            }
        }
    }

    fn replace_document(&mut self, document: Document) -> bool {
        if document.ptr_eq(&self.document) {
            return false;
        }
        self.document = document;
        self.version += 1;
        true
    }
}
