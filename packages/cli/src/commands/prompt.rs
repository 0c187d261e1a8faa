use super::compile::derive_page;
use super::{print_artifacts, write_artifacts};
use crate::config::{Config, Target, PAGE_SUFFIX};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_editor::{derive_artifacts, EditSession};
use pagecraft_prompt::{PromptIntent, PromptInterpreter};
use std::fs;
use std::path::{Path, PathBuf};

/// Base name of the files the prompt command writes
pub const PROMPT_OUTPUT_NAME: &str = "prompt";

#[derive(Debug, Args)]
pub struct PromptArgs {
    /// Free-text instruction, e.g. "hero with title 'Launch Day' and a grid"
    pub instruction: String,

    /// Page file whose artifacts the result builds on (defaults to the starter page)
    #[arg(short, long)]
    pub base: Option<String>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Also write the hero as an editable page in srcDir
    #[arg(long)]
    pub seed: bool,
}

pub fn prompt(args: PromptArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let options = config.derive_options();

    let base = match &args.base {
        Some(path) => derive_page(&cwd.join(path), &options)?,
        None => derive_artifacts(EditSession::starter("index").document(), &options),
    };

    let intent = PromptIntent::parse(&args.instruction);
    let artifacts = PromptInterpreter::new().render(&intent, &base);
    let targets = Target::EACH;

    if args.seed {
        let page = seed_page(&intent, &config.src_dir(cwd))?;
        eprintln!("  {} Seeded {}", "✓".green(), page.display());
    }

    if args.stdout {
        print_artifacts(&artifacts, &targets);
        return Ok(());
    }

    let out_dir = match &args.out_dir {
        Some(out) => cwd.join(out),
        None => config.out_dir(cwd),
    };

    println!("{}", "✨ Generating from prompt...".bright_blue().bold());
    for output in write_artifacts(&artifacts, PROMPT_OUTPUT_NAME, &targets, &out_dir)? {
        println!("  {} {}", "✓".green(), output.display());
    }

    Ok(())
}

/// Write the intent's blocks as `<src_dir>/prompt.page.json`. An existing
/// page is never overwritten.
fn seed_page(intent: &PromptIntent, src_dir: &Path) -> Result<PathBuf> {
    let path = src_dir.join(format!("{}{}", PROMPT_OUTPUT_NAME, PAGE_SUFFIX));
    if path.exists() {
        return Err(anyhow!("{} already exists", path.display()));
    }

    let mut session = EditSession::new(PROMPT_OUTPUT_NAME);
    for content in intent.blocks() {
        session.add(content);
    }

    fs::create_dir_all(src_dir)?;
    fs::write(&path, session.document().to_json_pretty()?)?;
    tracing::debug!(path = %path.display(), blocks = session.document().len(), "seeded page");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::{BlockContent, Document, HeadingLevel};

    fn args(instruction: &str) -> PromptArgs {
        PromptArgs {
            instruction: instruction.to_string(),
            base: None,
            stdout: false,
            out_dir: None,
            seed: false,
        }
    }

    #[test]
    fn test_prompt_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        prompt(args("title 'Launch Day' with a grid"), dir.path()).unwrap();

        let dist = dir.path().join("dist");
        let html = fs::read_to_string(dist.join("prompt.html")).unwrap();
        assert!(html.contains("<h1>Launch Day</h1>"));
        assert!(html.contains("Card 3"));

        let css = fs::read_to_string(dist.join("prompt.css")).unwrap();
        assert!(css.starts_with("/* Based on current export */"));
        assert!(css.contains(".btn {"));
        assert!(css.contains(".card {"));

        assert!(dist.join("prompt.jsx").exists());
    }

    #[test]
    fn test_prompt_builds_on_base_page() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("empty.page.json"), "[]").unwrap();
        fs::write(
            dir.path().join("pagecraft.config.json"),
            r#"{ "outDir": "out" }"#,
        )
        .unwrap();

        let mut args = args("make a page");
        args.base = Some("empty.page.json".to_string());
        prompt(args, dir.path()).unwrap();

        let html = fs::read_to_string(dir.path().join("out/prompt.html")).unwrap();
        assert!(html.contains("<h1>Welcome</h1>"));
    }

    #[test]
    fn test_prompt_missing_base() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args("make a page");
        args.base = Some("nope.page.json".to_string());
        assert!(prompt(args, dir.path()).is_err());
    }

    #[test]
    fn test_seed_writes_editable_page() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args("title 'Launch Day' and button 'Join'");
        args.seed = true;
        prompt(args, dir.path()).unwrap();

        let page = fs::read_to_string(dir.path().join("pages/prompt.page.json")).unwrap();
        let document = Document::from_json(&page).unwrap();
        let contents: Vec<_> = document.iter().map(|b| b.content().clone()).collect();
        assert_eq!(
            contents,
            vec![
                BlockContent::heading("Launch Day", HeadingLevel::H1),
                BlockContent::paragraph("Create websites without code."),
                BlockContent::button("Join", "#"),
            ]
        );

        // the seeded page compiles like any other
        crate::commands::compile(
            crate::commands::CompileArgs {
                path: None,
                target: None,
                stdout: false,
                out_dir: None,
            },
            dir.path(),
        )
        .unwrap();
        let html = fs::read_to_string(dir.path().join("dist/prompt.html")).unwrap();
        assert!(html.contains("<h1>Launch Day</h1>"));
    }

    #[test]
    fn test_seed_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("prompt.page.json"), "[]").unwrap();

        let mut args = args("make a page");
        args.seed = true;
        assert!(prompt(args, dir.path()).is_err());
        assert_eq!(fs::read_to_string(pages.join("prompt.page.json")).unwrap(), "[]");
    }
}
