use pagecraft_model::Document;
use tracing::{instrument, trace};

/// Custom property every accent colour in the base stylesheet reads from
pub const ACCENT_PROPERTY: &str = "--brand";

/// CSS rule with selector and ordered properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssRule {
    pub selector: String,
    pub properties: Vec<(String, String)>,
}

impl CssRule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            properties: Vec::new(),
        }
    }

    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    fn write_to(&self, css: &mut String) {
        css.push_str(&self.selector);
        css.push_str(" {\n");

        for (key, value) in &self.properties {
            css.push_str("  ");
            css.push_str(key);
            css.push_str(": ");
            css.push_str(value);
            css.push_str(";\n");
        }

        css.push_str("}\n");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssItem {
    Comment(String),
    Rule(CssRule),
}

/// Ordered list of rules and comments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    pub items: Vec<CssItem>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comment(mut self, text: impl Into<String>) -> Self {
        self.items.push(CssItem::Comment(text.into()));
        self
    }

    pub fn rule(mut self, rule: CssRule) -> Self {
        self.items.push(CssItem::Rule(rule));
        self
    }

    pub fn rules(&self) -> impl Iterator<Item = &CssRule> {
        self.items.iter().filter_map(|item| match item {
            CssItem::Rule(rule) => Some(rule),
            CssItem::Comment(_) => None,
        })
    }

    /// Convert to CSS text. Rules are separated by a blank line; a comment
    /// sits directly above the rule that follows it.
    pub fn to_css(&self) -> String {
        let mut css = String::new();

        for (i, item) in self.items.iter().enumerate() {
            match item {
                CssItem::Comment(text) => {
                    if i > 0 {
                        css.push('\n');
                    }
                    css.push_str("/* ");
                    css.push_str(text);
                    css.push_str(" */\n");
                }
                CssItem::Rule(rule) => {
                    if i > 0 && matches!(self.items[i - 1], CssItem::Rule(_)) {
                        css.push('\n');
                    }
                    rule.write_to(&mut css);
                }
            }
        }

        css
    }
}

/// The fixed page stylesheet: typography, spacing and the `.btn` style
pub fn base_stylesheet() -> StyleSheet {
    let accent = format!("var({})", ACCENT_PROPERTY);

    StyleSheet::new()
        .rule(CssRule::new(":root").property(ACCENT_PROPERTY, "#6d28d9"))
        .rule(
            CssRule::new("body")
                .property(
                    "font-family",
                    "Inter, system-ui, -apple-system, Segoe UI, Roboto, sans-serif",
                )
                .property("margin", "0")
                .property("padding", "2rem")
                .property("color", "#111827"),
        )
        .rule(
            CssRule::new("main")
                .property("max-width", "900px")
                .property("margin", "0 auto"),
        )
        .rule(CssRule::new("h1, h2, h3").property("line-height", "1.1"))
        .rule(CssRule::new("p").property("color", "#374151"))
        .rule(
            CssRule::new("img")
                .property("max-width", "100%")
                .property("border-radius", "12px"),
        )
        .rule(
            CssRule::new(".btn")
                .property("display", "inline-block")
                .property("background", accent)
                .property("color", "white")
                .property("padding", ".6rem 1rem")
                .property("border-radius", ".6rem")
                .property("text-decoration", "none"),
        )
}

/// Compile the stylesheet for a document.
///
/// The stylesheet does not depend on block content; every document gets
/// the same base template.
#[instrument(skip_all, fields(blocks = document.len()))]
pub fn compile_to_css(document: &Document) -> String {
    trace!("emitting base stylesheet");
    base_stylesheet().to_css()
}
