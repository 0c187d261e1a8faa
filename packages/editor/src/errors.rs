//! Error types for the editor

use pagecraft_common::CommonError;
use thiserror::Error;

/// Errors from the editor's fallible edges.
///
/// Edits themselves never fail; only loading a document from outside can.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Invalid document: {0}")]
    Document(#[from] CommonError),

    #[error("Invalid mutation: {0}")]
    Mutation(#[from] serde_json::Error),
}
