mod compiler;

pub use compiler::{compile_block, compile_to_html, CompileOptions};

#[cfg(test)]
mod tests;
