use crate::context::{CompileOptions, CompilerContext};
use pagecraft_common::{escape_attr, escape_jsx_text, escape_text};
use pagecraft_model::{Block, BlockContent, Document};
use tracing::instrument;

const DEFAULT_COMPONENT_NAME: &str = "MySection";

/// Compile a block document to a single React function component.
///
/// The blocks are wrapped in one `<main>` container, in document order.
#[instrument(skip_all, fields(blocks = document.len()))]
pub fn compile_to_react(document: &Document, options: CompileOptions) -> String {
    let ctx = CompilerContext::new(options);

    compile_imports(&ctx);

    let name = component_identifier(&ctx.options.component_name);
    ctx.add_line(&format!("export default function {}() {{", name));
    ctx.nested(|ctx| {
        ctx.add_line("return (");
        ctx.nested(|ctx| {
            ctx.add_line("<main className=\"max-w-3xl mx-auto p-6\">");
            ctx.nested(|ctx| {
                for block in document {
                    ctx.add_line(&compile_block(block, &ctx.options));
                }
            });
            ctx.add_line("</main>");
        });
        ctx.add_line(");");
    });
    ctx.add_line("}");

    ctx.get_output()
}

fn compile_imports(ctx: &CompilerContext) {
    if ctx.options.include_css_import {
        ctx.add_line("import \"./styles.css\";");
        ctx.add("\n");
    }
}

/// JSX for a single block, without indentation
pub fn compile_block(block: &Block, options: &CompileOptions) -> String {
    let text_escape: fn(&str) -> String = if options.guard_jsx_expressions {
        escape_jsx_text
    } else {
        escape_text
    };

    match block.content() {
        BlockContent::Heading { text, level } => format!(
            "<{tag} className=\"mb-3\">{}</{tag}>",
            text_escape(text),
            tag = level.tag()
        ),
        BlockContent::Paragraph { text } => format!(
            "<p className=\"text-muted-foreground mb-4\">{}</p>",
            text_escape(text)
        ),
        BlockContent::Image { src, alt } => format!(
            "<img src=\"{}\" alt=\"{}\" className=\"rounded-xl mb-4\" />",
            escape_attr(src),
            escape_attr(alt)
        ),
        BlockContent::Button { label, href } => format!(
            "<a href=\"{}\" className=\"inline-flex items-center rounded-md bg-indigo-600 px-4 py-2 text-white\">{}</a>",
            escape_attr(href),
            text_escape(label)
        ),
    }
}

/// Turn a configured component name into a valid JS identifier.
///
/// Characters other than ASCII letters, digits, `_` and `$` are dropped; a
/// leading digit gets an `_` prefix; an empty result falls back to
/// `MySection`.
pub fn component_identifier(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
        .collect();

    match cleaned.chars().next() {
        None => DEFAULT_COMPONENT_NAME.to_string(),
        Some(first) if first.is_ascii_digit() => format!("_{}", cleaned),
        Some(_) => cleaned,
    }
}
