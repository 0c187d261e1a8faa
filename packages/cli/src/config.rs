use clap::ValueEnum;
use pagecraft_common::ArtifactTriple;
use pagecraft_compiler_html::CompileOptions as HtmlOptions;
use pagecraft_compiler_react::CompileOptions as ReactOptions;
use pagecraft_editor::DeriveOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

/// Page files end in this suffix; the part before it names the outputs
pub const PAGE_SUFFIX: &str = ".page.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read {}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A generated file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Html,
    Css,
    React,
}

impl Target {
    pub const EACH: [Target; 3] = [Target::Html, Target::Css, Target::React];

    /// File extension of the generated file
    pub fn extension(self) -> &'static str {
        match self {
            Target::Html => "html",
            Target::Css => "css",
            Target::React => "jsx",
        }
    }

    /// The artifact this target writes
    pub fn select(self, artifacts: &ArtifactTriple) -> &str {
        match self {
            Target::Html => &artifacts.markup,
            Target::Css => &artifacts.stylesheet,
            Target::React => &artifacts.component_source,
        }
    }
}

/// A format as named in the config file or on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Emit {
    Html,
    Css,
    React,
    All,
}

impl Emit {
    fn covers(self, target: Target) -> bool {
        matches!(
            (self, target),
            (Emit::All, _)
                | (Emit::Html, Target::Html)
                | (Emit::Css, Target::Css)
                | (Emit::React, Target::React)
        )
    }

    /// Expand `All` and drop duplicates, always in html, css, react order
    pub fn resolve(emit: &[Emit]) -> Vec<Target> {
        Target::EACH
            .into_iter()
            .filter(|target| emit.iter().any(|e| e.covers(*target)))
            .collect()
    }
}

/// Pagecraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Directory containing `*.page.json` files
    pub src_dir: String,

    /// Directory generated files are written to
    pub out_dir: String,

    /// Output formats to emit
    pub emit: Vec<Emit>,

    pub html: HtmlOptions,

    pub react: ReactOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src_dir: "pages".to_string(),
            out_dir: "dist".to_string(),
            emit: vec![Emit::Html, Emit::Css, Emit::React],
            html: HtmlOptions::default(),
            react: ReactOptions::default(),
        }
    }
}

impl Config {
    /// Load config from a directory, falling back to defaults
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let path = cwd.join(DEFAULT_CONFIG_NAME);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn src_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.src_dir)
    }

    pub fn out_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_dir)
    }

    pub fn derive_options(&self) -> DeriveOptions {
        DeriveOptions {
            html: self.html.clone(),
            react: self.react.clone(),
        }
    }
}

/// Output name of a page file: `about.page.json` → `about`
pub fn page_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    file_name
        .strip_suffix(PAGE_SUFFIX)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
}
