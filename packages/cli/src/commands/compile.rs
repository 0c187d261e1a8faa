use super::{print_artifacts, write_artifacts};
use crate::config::{page_name, Config, Emit, Target};
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_editor::{derive_artifacts, DeriveOptions};
use pagecraft_model::Document;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Page file or directory to compile (defaults to the configured srcDir)
    pub path: Option<String>,

    /// Target format (overrides config emit)
    #[arg(short, long, value_enum)]
    pub target: Option<Emit>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn compile(args: CompileArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = match &args.path {
        Some(path) => cwd.join(path),
        None => config.src_dir(cwd),
    };

    if !input.exists() {
        return Err(anyhow!("Path does not exist: {}", input.display()));
    }

    let targets = match args.target {
        Some(emit) => Emit::resolve(&[emit]),
        None => Emit::resolve(&config.emit),
    };
    if targets.is_empty() {
        return Err(anyhow!("Nothing to emit: config emit list is empty"));
    }

    let out_dir = match &args.out_dir {
        Some(out) => cwd.join(out),
        None => config.out_dir(cwd),
    };

    if !args.stdout {
        println!("{}", "🔨 Compiling pages...".bright_blue().bold());
    }

    let pages = find_page_files(&input);
    if pages.is_empty() {
        println!("{}", "⚠️  No .page.json files found".yellow());
        return Ok(());
    }

    let options = config.derive_options();
    let mut success_count = 0;
    let mut error_count = 0;

    let destination = (!args.stdout).then_some(out_dir.as_path());

    for page in &pages {
        let relative_path = page.strip_prefix(&input).unwrap_or(page);

        match compile_page(page, &options, &targets, destination) {
            Ok(written) => {
                success_count += 1;
                for output in written {
                    println!(
                        "  {} {} → {}",
                        "✓".green(),
                        relative_path.display(),
                        output.display()
                    );
                }
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    format!("{:#}", e).red()
                );
            }
        }
    }

    if error_count > 0 {
        return Err(anyhow!(
            "Compiled {} pages, {} failed",
            success_count,
            error_count
        ));
    }

    if !args.stdout {
        println!();
        println!(
            "{} Compiled {} pages successfully",
            "✅".green(),
            success_count
        );
    }

    Ok(())
}

/// Page files under `input`, sorted; `input` itself if it is a file
pub(crate) fn find_page_files(input: &Path) -> Vec<PathBuf> {
    if input.is_file() {
        return vec![input.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| page_name(path).is_some())
        .collect();

    files.sort();
    files
}

/// Load a page file and derive its artifacts
pub(crate) fn derive_page(
    path: &Path,
    options: &DeriveOptions,
) -> Result<pagecraft_common::ArtifactTriple> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    let document =
        Document::from_json(&source).with_context(|| format!("Invalid page {}", path.display()))?;

    tracing::debug!(path = %path.display(), blocks = document.len(), "loaded page");
    Ok(derive_artifacts(&document, options))
}

/// Derive one page and write it under `out_dir`, or print it when there
/// is no output directory
fn compile_page(
    path: &Path,
    options: &DeriveOptions,
    targets: &[Target],
    out_dir: Option<&Path>,
) -> Result<Vec<PathBuf>> {
    let artifacts = derive_page(path, options)?;

    match out_dir {
        Some(out_dir) => {
            let name = page_name(path).unwrap_or_else(|| "page".to_string());
            write_artifacts(&artifacts, &name, targets, out_dir)
        }
        None => {
            print_artifacts(&artifacts, targets);
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{init, InitArgs};

    fn args(target: Option<Emit>) -> CompileArgs {
        CompileArgs {
            path: None,
            target,
            stdout: false,
            out_dir: None,
        }
    }

    #[test]
    fn test_compile_starter_project() {
        let dir = tempfile::tempdir().unwrap();
        init(InitArgs { force: false }, dir.path()).unwrap();

        compile(args(None), dir.path()).unwrap();

        let dist = dir.path().join("dist");
        let html = fs::read_to_string(dist.join("index.html")).unwrap();
        assert!(html.contains("<h1>Welcome to my site</h1>"));
        assert!(html.contains("<title>My Site</title>"));
        assert!(fs::read_to_string(dist.join("index.css"))
            .unwrap()
            .contains(".btn {"));
        assert!(fs::read_to_string(dist.join("index.jsx"))
            .unwrap()
            .starts_with("export default function MySection() {"));
    }

    #[test]
    fn test_compile_single_target_and_out_dir() {
        let dir = tempfile::tempdir().unwrap();
        init(InitArgs { force: false }, dir.path()).unwrap();

        let mut args = args(Some(Emit::Css));
        args.out_dir = Some("public".to_string());
        compile(args, dir.path()).unwrap();

        let public = dir.path().join("public");
        assert!(public.join("index.css").exists());
        assert!(!public.join("index.html").exists());
        assert!(!public.join("index.jsx").exists());
    }

    #[test]
    fn test_compile_uses_config_options() {
        let dir = tempfile::tempdir().unwrap();
        init(InitArgs { force: false }, dir.path()).unwrap();
        fs::write(
            dir.path().join("pagecraft.config.json"),
            r#"{ "emit": ["html"], "html": { "title": "Launch" } }"#,
        )
        .unwrap();

        compile(args(None), dir.path()).unwrap();

        let dist = dir.path().join("dist");
        let html = fs::read_to_string(dist.join("index.html")).unwrap();
        assert!(html.contains("<title>Launch</title>"));
        assert!(!dist.join("index.css").exists());
    }

    #[test]
    fn test_compile_reports_invalid_page() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("broken.page.json"), "{").unwrap();

        assert!(compile(args(None), dir.path()).is_err());
    }

    #[test]
    fn test_stdout_mode_keeps_going_after_invalid_page() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("a_broken.page.json"), "{").unwrap();
        fs::write(pages.join("b_fine.page.json"), "[]").unwrap();

        let mut args = args(Some(Emit::Html));
        args.stdout = true;
        let err = compile(args, dir.path()).unwrap_err();

        assert_eq!(err.to_string(), "Compiled 1 pages, 1 failed");
        assert!(!dir.path().join("dist").exists());
    }

    #[test]
    fn test_file_mode_reports_failure_count() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("a_broken.page.json"), "{").unwrap();
        fs::write(pages.join("b_fine.page.json"), "[]").unwrap();

        let err = compile(args(Some(Emit::Html)), dir.path()).unwrap_err();

        assert_eq!(err.to_string(), "Compiled 1 pages, 1 failed");
        assert!(dir.path().join("dist/b_fine.html").exists());
    }

    #[test]
    fn test_compile_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(compile(args(None), dir.path()).is_err());
    }

    #[test]
    fn test_find_page_files_skips_other_json() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("blog");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("b.page.json"), "[]").unwrap();
        fs::write(nested.join("a.page.json"), "[]").unwrap();
        fs::write(dir.path().join("notes.json"), "[]").unwrap();

        let files = find_page_files(dir.path());
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| page_name(f).is_some()));
    }
}
