use crate::{compile_block, compile_to_html, CompileOptions};
use pagecraft_model::{Block, BlockContent, Document, HeadingLevel, IDGenerator};

fn document(contents: Vec<BlockContent>) -> Document {
    let mut ids = IDGenerator::from_seed("test");
    Document::from_blocks(
        contents
            .into_iter()
            .map(|content| Block::new(ids.new_id(), content))
            .collect(),
    )
    .expect("ids are unique")
}

#[test]
fn test_compile_empty_document() {
    let html = compile_to_html(&Document::new(), &CompileOptions::default());

    println!("Generated HTML:\n{}", html);

    assert!(html.starts_with("<!doctype html>\n<html>\n"));
    assert!(html.contains("    <main>\n    </main>\n"));
    assert!(html.contains("<title>My Site</title>"));
    assert!(html.contains("<link rel=\"stylesheet\" href=\"styles.css\" />"));
}

#[test]
fn test_compile_each_block_kind() {
    let doc = document(vec![
        BlockContent::heading("Title", HeadingLevel::H2),
        BlockContent::paragraph("Body"),
        BlockContent::image("photo.jpg", "Photo"),
        BlockContent::button("Go", "#start"),
    ]);

    let html = compile_to_html(&doc, &CompileOptions::default());

    println!("Generated HTML:\n{}", html);

    assert!(html.contains("      <h2>Title</h2>\n"));
    assert!(html.contains("      <p>Body</p>\n"));
    assert!(html.contains("      <img src=\"photo.jpg\" alt=\"Photo\" />\n"));
    assert!(html.contains("      <a href=\"#start\" class=\"btn\">Go</a>\n"));
}

#[test]
fn test_blocks_emitted_in_document_order() {
    let doc = document(vec![
        BlockContent::heading("A", HeadingLevel::H1),
        BlockContent::paragraph("B"),
    ]);

    let html = compile_to_html(&doc, &CompileOptions::default());

    let heading = html.find("<h1>A</h1>").expect("heading emitted");
    let paragraph = html.find("<p>B</p>").expect("paragraph emitted");
    assert!(heading < paragraph);
}

#[test]
fn test_text_is_escaped() {
    let doc = document(vec![BlockContent::paragraph("Hello <world> & \"friends\"")]);
    let html = compile_to_html(&doc, &CompileOptions::default());

    assert!(html.contains("<p>Hello &lt;world&gt; &amp; &quot;friends&quot;</p>"));
}

#[test]
fn test_attributes_use_narrow_escaping() {
    let block = Block::new(
        "img".into(),
        BlockContent::image("https://x.test/?a=1&b=2", "Tom's \"cat\""),
    );

    assert_eq!(
        compile_block(&block),
        "<img src=\"https://x.test/?a=1&b=2\" alt=\"Tom&#39;s &quot;cat&quot;\" />"
    );
}

#[test]
fn test_button_label_and_href() {
    let block = Block::new("btn".into(), BlockContent::button("<Go>", "javascript:'x'"));

    assert_eq!(
        compile_block(&block),
        "<a href=\"javascript:&#39;x&#39;\" class=\"btn\">&lt;Go&gt;</a>"
    );
}

#[test]
fn test_compile_with_custom_head() {
    let options = CompileOptions {
        title: "Launch & Learn".to_string(),
        stylesheet_href: "css/site.css".to_string(),
        ..Default::default()
    };

    let html = compile_to_html(&Document::new(), &options);

    assert!(html.contains("<title>Launch &amp; Learn</title>"));
    assert!(html.contains("href=\"css/site.css\""));
}

#[test]
fn test_compile_without_pretty_print() {
    let doc = document(vec![BlockContent::paragraph("Click")]);
    let options = CompileOptions {
        pretty: false,
        ..Default::default()
    };

    let html = compile_to_html(&doc, &options);

    println!("Generated HTML:\n{}", html);

    // Should be compact, no extra newlines
    assert!(!html.contains('\n'));
    assert!(html.contains("<main><p>Click</p></main>"));
}

#[test]
fn test_compile_is_deterministic() {
    let doc = document(vec![
        BlockContent::heading("Same", HeadingLevel::H3),
        BlockContent::button("Twice", "#"),
    ]);
    let options = CompileOptions::default();

    assert_eq!(compile_to_html(&doc, &options), compile_to_html(&doc, &options));
}
