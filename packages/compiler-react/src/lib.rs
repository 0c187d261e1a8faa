mod compiler;
mod context;

pub use compiler::{compile_block, compile_to_react, component_identifier};
pub use context::{CompileOptions, CompilerContext};
