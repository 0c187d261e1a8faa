//! # Derivation Pipeline
//!
//! Coordinates edit → derive: every mutation goes through the session and
//! the three artifacts are re-derived for the resulting snapshot.
//!
//! Derivation is memoized on snapshot identity. The cache keeps a handle to
//! the snapshot it derived from, so the snapshot cannot be freed and its
//! address reused while the entry is alive.

use crate::{EditSession, Mutation, MutationResult};
use pagecraft_common::ArtifactTriple;
use pagecraft_compiler_css::compile_to_css;
use pagecraft_compiler_html::{compile_to_html, CompileOptions as HtmlOptions};
use pagecraft_compiler_react::{compile_to_react, CompileOptions as ReactOptions};
use pagecraft_model::Document;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Options for all three compilers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeriveOptions {
    pub html: HtmlOptions,
    pub react: ReactOptions,
}

/// Derive the markup, stylesheet and component source for a document
#[instrument(skip_all, fields(blocks = document.len()))]
pub fn derive_artifacts(document: &Document, options: &DeriveOptions) -> ArtifactTriple {
    ArtifactTriple {
        markup: compile_to_html(document, &options.html),
        stylesheet: compile_to_css(document),
        component_source: compile_to_react(document, options.react.clone()),
    }
}

/// Single-entry cache of the last derived triple
#[derive(Debug, Default)]
pub struct DerivationCache {
    options: DeriveOptions,
    entry: Option<(Document, ArtifactTriple)>,
    hits: u64,
    misses: u64,
}

impl DerivationCache {
    pub fn new(options: DeriveOptions) -> Self {
        Self {
            options,
            entry: None,
            hits: 0,
            misses: 0,
        }
    }

    /// Artifacts for `document`, derived only if it differs from the
    /// cached snapshot
    pub fn get(&mut self, document: &Document) -> &ArtifactTriple {
        let entry = match self.entry.take() {
            Some((cached, triple)) if cached.ptr_eq(document) || cached == *document => {
                self.hits += 1;
                trace!(hits = self.hits, "derivation cache hit");
                // keep the newest handle so later identity checks succeed
                (document.clone(), triple)
            }
            _ => {
                self.misses += 1;
                debug!(misses = self.misses, "derivation cache miss");
                (document.clone(), derive_artifacts(document, &self.options))
            }
        };

        &self.entry.insert(entry).1
    }

    /// Replace the options and drop the cached entry
    pub fn set_options(&mut self, options: DeriveOptions) {
        self.options = options;
        self.invalidate();
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

/// Manages the full edit → derive pipeline
#[derive(Debug)]
pub struct Pipeline {
    session: EditSession,
    cache: DerivationCache,
}

impl Pipeline {
    pub fn new(session: EditSession) -> Self {
        Self::with_options(session, DeriveOptions::default())
    }

    pub fn with_options(session: EditSession, options: DeriveOptions) -> Self {
        Self {
            session,
            cache: DerivationCache::new(options),
        }
    }

    /// Apply a mutation and return the artifacts for the new snapshot
    pub fn apply_mutation(&mut self, mutation: Mutation) -> PipelineResult {
        let mutation = self.session.apply(mutation);
        let artifacts = self.cache.get(self.session.document()).clone();

        PipelineResult {
            mutation,
            artifacts,
        }
    }

    /// Artifacts for the current snapshot
    pub fn artifacts(&mut self) -> &ArtifactTriple {
        self.cache.get(self.session.document())
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn cache(&self) -> &DerivationCache {
        &self.cache
    }
}

/// Result of pipeline execution
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub mutation: MutationResult,
    pub artifacts: ArtifactTriple,
}
