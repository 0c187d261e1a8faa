//! # Pagecraft Editor
//!
//! Editing engine for block pages.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: Block, Document (immutable snapshot) │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession + mutations             │
//! │  - add / remove / move / update / select    │
//! │  - selection always names a live block      │
//! │  - every edit swaps in a new snapshot       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ pipeline: snapshot → html, css, react       │
//! │  (memoized on snapshot identity)            │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pagecraft_editor::{EditSession, Mutation, Pipeline};
//! use pagecraft_model::{BlockContent, HeadingLevel};
//!
//! let mut pipeline = Pipeline::new(EditSession::new("index"));
//! let result = pipeline.apply_mutation(Mutation::AddBlock {
//!     content: BlockContent::heading("Hi", HeadingLevel::H1),
//! });
//! println!("{}", result.artifacts.markup);
//! ```

mod errors;
mod mutations;
mod pipeline;
mod session;

pub use errors::EditorError;
pub use mutations::{Mutation, MutationResult};
pub use pipeline::{derive_artifacts, DerivationCache, DeriveOptions, Pipeline, PipelineResult};
pub use session::EditSession;

// Re-export common types for convenience
pub use pagecraft_common::ArtifactTriple;
pub use pagecraft_model::Document;
