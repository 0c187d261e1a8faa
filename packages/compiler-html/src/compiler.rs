use pagecraft_common::{escape_attr, escape_text};
use pagecraft_model::{Block, BlockContent, Document};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Options for HTML compilation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileOptions {
    /// Page `<title>`
    pub title: String,
    /// Stylesheet linked from the head
    pub stylesheet_href: String,
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            stylesheet_href: "styles.css".to_string(),
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct Context<'a> {
    options: &'a CompileOptions,
    depth: usize,
    buffer: String,
}

impl<'a> Context<'a> {
    fn new(options: &'a CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a block document to a standalone HTML page.
///
/// Blocks are emitted inside `<main>` in document order, one per line.
#[instrument(skip_all, fields(blocks = document.len()))]
pub fn compile_to_html(document: &Document, options: &CompileOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!doctype html>");
    ctx.add_line("<html>");
    ctx.indent();

    compile_head(&mut ctx);

    ctx.add_line("<body>");
    ctx.indent();
    ctx.add_line("<main>");
    ctx.indent();

    for block in document {
        ctx.add_line(&compile_block(block));
    }

    ctx.dedent();
    ctx.add_line("</main>");
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn compile_head(ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"utf-8\" />");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />");
    let title = format!("<title>{}</title>", escape_text(&ctx.options.title));
    ctx.add_line(&title);
    let link = format!(
        "<link rel=\"stylesheet\" href=\"{}\" />",
        escape_attr(&ctx.options.stylesheet_href)
    );
    ctx.add_line(&link);

    ctx.dedent();
    ctx.add_line("</head>");
}

/// HTML for a single block, without indentation
pub fn compile_block(block: &Block) -> String {
    match block.content() {
        BlockContent::Heading { text, level } => {
            format!("<{tag}>{}</{tag}>", escape_text(text), tag = level.tag())
        }
        BlockContent::Paragraph { text } => format!("<p>{}</p>", escape_text(text)),
        BlockContent::Image { src, alt } => format!(
            "<img src=\"{}\" alt=\"{}\" />",
            escape_attr(src),
            escape_attr(alt)
        ),
        BlockContent::Button { label, href } => format!(
            "<a href=\"{}\" class=\"btn\">{}</a>",
            escape_attr(href),
            escape_text(label)
        ),
    }
}
