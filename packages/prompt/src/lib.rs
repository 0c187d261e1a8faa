//! # Pagecraft Prompt
//!
//! Turns a free-text instruction into a hero section, optionally followed by
//! a three-card grid, in all three output formats.
//!
//! This is a small set of pattern rules, not a language model. Anything the
//! rules do not recognise falls back to a default, so interpretation never
//! fails.
//!
//! ```rust,ignore
//! use pagecraft_prompt::interpret;
//!
//! let out = interpret("hero with title 'Launch Day' and a grid", &base);
//! assert!(out.markup.contains("<h1>Launch Day</h1>"));
//! ```

mod intent;
mod interpreter;

pub use intent::{
    extract_button_label, extract_title, wants_grid, PromptIntent, DEFAULT_BUTTON_LABEL,
    DEFAULT_TITLE, HERO_TAGLINE,
};
pub use interpreter::{interpret, PromptInterpreter};
