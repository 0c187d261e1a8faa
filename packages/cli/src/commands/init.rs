use crate::config::{Config, DEFAULT_CONFIG_NAME, PAGE_SUFFIX};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagecraft_editor::EditSession;
use std::fs;
use std::path::Path;

pub const STARTER_PAGE: &str = "index";

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Pagecraft project...".bright_blue().bold());

    let config = Config::default();

    let src_dir = config.src_dir(cwd);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), config.src_dir);
    }

    let page_file = src_dir.join(format!("{}{}", STARTER_PAGE, PAGE_SUFFIX));
    if !page_file.exists() {
        let session = EditSession::starter(STARTER_PAGE);
        fs::write(&page_file, session.document().to_json_pretty()?)?;
        println!("  {} Created {}{}", "✓".green(), STARTER_PAGE, PAGE_SUFFIX);
    }

    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    tracing::debug!(path = %config_path.display(), "wrote config");

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/{}{}", config.src_dir, STARTER_PAGE, PAGE_SUFFIX);
    println!("  2. Run: pagecraft compile");
    println!("  3. Check output in {}/", config.out_dir);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::Document;

    #[test]
    fn test_init_writes_config_and_starter_page() {
        let dir = tempfile::tempdir().unwrap();
        init(InitArgs { force: false }, dir.path()).unwrap();

        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());

        let page = fs::read_to_string(dir.path().join("pages/index.page.json")).unwrap();
        let document = Document::from_json(&page).unwrap();
        assert_eq!(document.len(), 2);
    }

    #[test]
    fn test_init_keeps_existing_config_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(DEFAULT_CONFIG_NAME);
        fs::write(&config_path, r#"{ "srcDir": "site" }"#).unwrap();

        init(InitArgs { force: false }, dir.path()).unwrap();
        assert_eq!(Config::load(dir.path()).unwrap().src_dir, "site");

        init(InitArgs { force: true }, dir.path()).unwrap();
        assert_eq!(Config::load(dir.path()).unwrap().src_dir, "pages");
    }

    #[test]
    fn test_init_keeps_existing_page() {
        let dir = tempfile::tempdir().unwrap();
        let pages = dir.path().join("pages");
        fs::create_dir_all(&pages).unwrap();
        fs::write(pages.join("index.page.json"), "[]").unwrap();

        init(InitArgs { force: false }, dir.path()).unwrap();
        assert_eq!(fs::read_to_string(pages.join("index.page.json")).unwrap(), "[]");
    }
}
