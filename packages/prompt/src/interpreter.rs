use crate::intent::{PromptIntent, HERO_TAGLINE};
use pagecraft_common::{escape_text, guard_jsx_text, ArtifactTriple};
use pagecraft_compiler_css::{CssRule, StyleSheet};
use pagecraft_compiler_react::{CompileOptions, CompilerContext};
use tracing::{debug, instrument};

const CARD_COUNT: usize = 3;

/// Builds hero (and grid) artifacts on top of a base artifact triple
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptInterpreter;

impl PromptInterpreter {
    pub fn new() -> Self {
        Self
    }

    /// Interpret `instruction` against `base`. The base is only read.
    #[instrument(skip_all, fields(len = instruction.len()))]
    pub fn interpret(&self, instruction: &str, base: &ArtifactTriple) -> ArtifactTriple {
        let intent = PromptIntent::parse(instruction);
        debug!(
            title = %intent.title,
            button = %intent.button_label,
            grid = intent.grid,
            "interpreted prompt"
        );
        self.render(&intent, base)
    }

    /// Render an already parsed intent
    pub fn render(&self, intent: &PromptIntent, base: &ArtifactTriple) -> ArtifactTriple {
        ArtifactTriple {
            markup: hero_markup(intent),
            stylesheet: hero_stylesheet(intent, &base.stylesheet),
            component_source: hero_component(intent),
        }
    }
}

/// Interpret `instruction` with the default interpreter
pub fn interpret(instruction: &str, base: &ArtifactTriple) -> ArtifactTriple {
    PromptInterpreter::new().interpret(instruction, base)
}

fn hero_markup(intent: &PromptIntent) -> String {
    let ctx = CompilerContext::new(CompileOptions::default());

    ctx.add_line(&format!("<!-- Prompt: {} -->", escape_text(&intent.instruction)));
    ctx.add_line("<main>");
    ctx.nested(|ctx| {
        ctx.add_line("<section class=\"hero\">");
        ctx.nested(|ctx| {
            ctx.add_line(&format!("<h1>{}</h1>", escape_text(&intent.title)));
            ctx.add_line(&format!("<p>{}</p>", HERO_TAGLINE));
            ctx.add_line(&format!(
                "<a href=\"#\" class=\"btn-primary\">{}</a>",
                escape_text(&intent.button_label)
            ));
        });
        ctx.add_line("</section>");

        if intent.grid {
            ctx.add_line("<section class=\"grid\">");
            ctx.nested(|ctx| {
                for n in 1..=CARD_COUNT {
                    ctx.add_line(&format!("<div class=\"card\">Card {}</div>", n));
                }
            });
            ctx.add_line("</section>");
        }
    });
    ctx.add_line("</main>");

    ctx.get_output()
}

fn hero_stylesheet(intent: &PromptIntent, base: &str) -> String {
    let mut sheet = StyleSheet::new()
        .comment("Prompt styles")
        .rule(
            CssRule::new(".hero")
                .property("max-width", "960px")
                .property("margin", "0 auto")
                .property("padding", "3rem 1rem"),
        )
        .rule(
            CssRule::new(".hero h1")
                .property("font-size", "clamp(2rem, 5vw, 3rem)")
                .property("line-height", "1.1"),
        )
        .rule(
            CssRule::new(".hero p")
                .property("color", "#6b7280")
                .property("margin", ".75rem 0 1rem"),
        )
        .rule(
            CssRule::new(".btn-primary")
                .property("display", "inline-block")
                .property("background", "#7c3aed")
                .property("color", "white")
                .property("padding", ".6rem 1rem")
                .property("border-radius", ".6rem"),
        );

    if intent.grid {
        sheet = sheet
            .rule(
                CssRule::new(".grid")
                    .property("display", "grid")
                    .property("grid-template-columns", "repeat(auto-fit, minmax(220px, 1fr))")
                    .property("gap", "1rem")
                    .property("margin-top", "2rem"),
            )
            .rule(
                CssRule::new(".card")
                    .property("background", "#111827")
                    .property("color", "#e5e7eb")
                    .property("padding", "1rem")
                    .property("border-radius", ".75rem"),
            );
    }

    let mut css = String::from("/* Based on current export */\n");
    css.push_str(base);
    if !base.is_empty() && !base.ends_with('\n') {
        css.push('\n');
    }
    css.push('\n');
    css.push_str(&sheet.to_css());
    css
}

fn hero_component(intent: &PromptIntent) -> String {
    let ctx = CompilerContext::new(CompileOptions::default());

    ctx.add_line(&format!("// Prompt: {}", single_line(&intent.instruction)));
    ctx.add_line("export default function Section() {");
    ctx.nested(|ctx| {
        ctx.add_line("return (");
        ctx.nested(|ctx| {
            ctx.add_line("<main className=\"max-w-4xl mx-auto p-6\">");
            ctx.nested(|ctx| {
                ctx.add_line("<section className=\"text-center\">");
                ctx.nested(|ctx| {
                    ctx.add_line(&format!(
                        "<h1 className=\"text-4xl md:text-5xl font-bold tracking-tight\">{}</h1>",
                        guard_jsx_text(&intent.title)
                    ));
                    ctx.add_line(&format!(
                        "<p className=\"text-muted-foreground mt-3\">{}</p>",
                        HERO_TAGLINE
                    ));
                    ctx.add_line(&format!(
                        "<a href=\"#\" className=\"inline-flex items-center rounded-md bg-primary px-4 py-2 text-primary-foreground mt-4\">{}</a>",
                        guard_jsx_text(&intent.button_label)
                    ));

                    if intent.grid {
                        ctx.add_line("<div className=\"mt-8 grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-4\">");
                        ctx.nested(|ctx| {
                            for n in 1..=CARD_COUNT {
                                ctx.add_line(&format!(
                                    "<div className=\"rounded-lg border p-4\">Card {}</div>",
                                    n
                                ));
                            }
                        });
                        ctx.add_line("</div>");
                    }
                });
                ctx.add_line("</section>");
            });
            ctx.add_line("</main>");
        });
        ctx.add_line(");");
    });
    ctx.add_line("}");

    ctx.get_output()
}

/// Collapse line terminators so the text fits in a `//` comment
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' | '\u{2028}' | '\u{2029}' => ' ',
            other => other,
        })
        .collect()
}
