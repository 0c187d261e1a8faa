use pagecraft_compiler_react::{compile_to_react, CompileOptions};
use pagecraft_model::{Block, BlockContent, BlockKind, Document, HeadingLevel, IDGenerator};

fn main() {
    let mut ids = IDGenerator::new("example");

    let document = Document::new()
        .appended(Block::new(
            ids.new_id(),
            BlockContent::heading("Build websites without code", HeadingLevel::H1),
        ))
        .appended(Block::new(
            ids.new_id(),
            BlockContent::paragraph("Create pages in HTML, CSS and React."),
        ))
        .appended(Block::new(ids.new_id(), BlockContent::preset(BlockKind::Image)))
        .appended(Block::new(
            ids.new_id(),
            BlockContent::button("Start Building", "#builder"),
        ));

    let options = CompileOptions {
        component_name: "Landing".to_string(),
        include_css_import: true,
        ..Default::default()
    };

    println!("{}", compile_to_react(&document, options));
}
