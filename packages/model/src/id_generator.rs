use crate::block::BlockId;
use crc32fast::Hasher;

/// Derive a stable seed from a document name using CRC32
pub fn document_seed(name: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(name.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential block id generator.
///
/// Ids look like `<seed>-<n>`. The counter only ever grows, so an id is
/// never handed out twice by the same generator, even after the block it
/// named has been removed.
#[derive(Debug, Clone)]
pub struct IDGenerator {
    seed: String,
    count: u64,
}

impl IDGenerator {
    pub fn new(document_name: &str) -> Self {
        Self {
            seed: document_seed(document_name),
            count: 0,
        }
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate the next id
    pub fn new_id(&mut self) -> BlockId {
        self.count += 1;
        BlockId::new(format!("{}-{}", self.seed, self.count))
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// Number of ids handed out so far
    pub fn count(&self) -> u64 {
        self.count
    }
}
