use once_cell::sync::Lazy;
use pagecraft_model::{BlockContent, HeadingLevel};
use regex::Regex;

pub const DEFAULT_TITLE: &str = "Welcome";
pub const DEFAULT_BUTTON_LABEL: &str = "Get Started";
pub const HERO_TAGLINE: &str = "Create websites without code.";

// Neither pattern is anchored to a word boundary: "subtitle 'x'" also
// yields a title. First match wins.
static TITLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)title '([^']+)'|title "([^"]+)""#).expect("title pattern is valid")
});

static BUTTON_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)button '?"?([^'"\n]+)'?"?"#).expect("button pattern is valid")
});

/// Quoted text following `title`, single or double quotes
pub fn extract_title(instruction: &str) -> Option<String> {
    let captures = TITLE_PATTERN.captures(instruction)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str().to_string())
}

/// Text following `button`, with optional surrounding quotes
pub fn extract_button_label(instruction: &str) -> Option<String> {
    BUTTON_PATTERN
        .captures(instruction)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
}

/// Whether the instruction asks for the card grid
pub fn wants_grid(instruction: &str) -> bool {
    instruction.to_lowercase().contains("grid")
}

/// What an instruction asks for, with defaults filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptIntent {
    pub instruction: String,
    pub title: String,
    pub button_label: String,
    pub grid: bool,
}

impl PromptIntent {
    pub fn parse(instruction: &str) -> Self {
        Self {
            instruction: instruction.to_string(),
            title: extract_title(instruction).unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            button_label: extract_button_label(instruction)
                .unwrap_or_else(|| DEFAULT_BUTTON_LABEL.to_string()),
            grid: wants_grid(instruction),
        }
    }

    /// Blocks that seed a page with the hero content
    pub fn blocks(&self) -> Vec<BlockContent> {
        vec![
            BlockContent::heading(self.title.clone(), HeadingLevel::H1),
            BlockContent::paragraph(HERO_TAGLINE),
            BlockContent::button(self.button_label.clone(), "#"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_single_and_double_quotes() {
        assert_eq!(extract_title("title 'Launch Day'"), Some("Launch Day".to_string()));
        assert_eq!(extract_title("a hero, title \"Big News\""), Some("Big News".to_string()));
        assert_eq!(extract_title("TITLE 'Loud'"), Some("Loud".to_string()));
    }

    #[test]
    fn test_title_needs_quotes() {
        assert_eq!(extract_title("title Launch Day"), None);
        assert_eq!(extract_title("title ''"), None);
        assert_eq!(extract_title("title 'unterminated"), None);
    }

    #[test]
    fn test_title_first_match_wins() {
        assert_eq!(
            extract_title("title 'One' then title \"Two\""),
            Some("One".to_string())
        );
    }

    #[test]
    fn test_title_not_word_anchored() {
        assert_eq!(extract_title("subtitle 'Sub'"), Some("Sub".to_string()));
    }

    #[test]
    fn test_button_label_forms() {
        assert_eq!(extract_button_label("button 'Sign up'"), Some("Sign up".to_string()));
        assert_eq!(extract_button_label("Button \"Join\""), Some("Join".to_string()));
        assert_eq!(extract_button_label("button Buy now"), Some("Buy now".to_string()));
        assert_eq!(extract_button_label("no cta here"), None);
    }

    #[test]
    fn test_button_label_stops_at_quote_or_newline() {
        assert_eq!(
            extract_button_label("button 'Go' and title 'X'"),
            Some("Go".to_string())
        );
        assert_eq!(
            extract_button_label("button Next\nmore text"),
            Some("Next".to_string())
        );
    }

    #[test]
    fn test_title_and_button_independent() {
        let intent = PromptIntent::parse("title 'Hello' with a button 'Go'");
        assert_eq!(intent.title, "Hello");
        assert_eq!(intent.button_label, "Go");
    }

    #[test]
    fn test_defaults() {
        let intent = PromptIntent::parse("make a page");
        assert_eq!(intent.title, DEFAULT_TITLE);
        assert_eq!(intent.button_label, DEFAULT_BUTTON_LABEL);
        assert!(!intent.grid);
    }

    #[test]
    fn test_grid_any_case() {
        assert!(wants_grid("add a GRID"));
        assert!(wants_grid("Grid of cards"));
        assert!(wants_grid("gridlines"));
        assert!(!wants_grid("g r i d"));
    }

    #[test]
    fn test_intent_blocks() {
        let blocks = PromptIntent::parse("title 'Shop'").blocks();
        assert_eq!(blocks[0], BlockContent::heading("Shop", HeadingLevel::H1));
        assert_eq!(blocks[2], BlockContent::button(DEFAULT_BUTTON_LABEL, "#"));
    }
}
