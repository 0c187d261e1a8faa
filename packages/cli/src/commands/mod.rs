pub mod compile;
pub mod init;
pub mod prompt;

pub use compile::{compile, CompileArgs};
pub use init::{init, InitArgs};
pub use prompt::{prompt, PromptArgs};

use crate::config::Target;
use anyhow::Result;
use pagecraft_common::ArtifactTriple;
use std::fs;
use std::path::{Path, PathBuf};

/// Write one file per target as `<out_dir>/<name>.<ext>`
pub(crate) fn write_artifacts(
    artifacts: &ArtifactTriple,
    name: &str,
    targets: &[Target],
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(targets.len());
    for target in targets {
        let path = out_dir.join(format!("{}.{}", name, target.extension()));
        fs::write(&path, target.select(artifacts))?;
        written.push(path);
    }

    Ok(written)
}

/// Print each target's artifact to stdout
pub(crate) fn print_artifacts(artifacts: &ArtifactTriple, targets: &[Target]) {
    for target in targets {
        println!("{}", target.select(artifacts));
    }
}
