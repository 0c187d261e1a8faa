use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Options for React compilation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompileOptions {
    /// Name of the exported component function
    pub component_name: String,
    /// Whether to import the generated stylesheet
    pub include_css_import: bool,
    /// Also replace `{` and `}` in text so JSX never reads it as an
    /// expression. Off by default, which keeps text identical to the markup.
    pub guard_jsx_expressions: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            component_name: "MySection".to_string(),
            include_css_import: false,
            guard_jsx_expressions: false,
        }
    }
}

/// Indenting output buffer used while generating source text
#[derive(Clone)]
pub struct CompilerContext {
    buffer: Rc<RefCell<String>>,
    indent_level: Rc<RefCell<usize>>,
    pub options: CompileOptions,
}

impl CompilerContext {
    pub fn new(options: CompileOptions) -> Self {
        Self {
            buffer: Rc::new(RefCell::new(String::new())),
            indent_level: Rc::new(RefCell::new(0)),
            options,
        }
    }

    pub fn add(&self, text: &str) {
        self.buffer.borrow_mut().push_str(text);
    }

    pub fn add_line(&self, text: &str) {
        self.add_indented(text);
        self.add("\n");
    }

    pub fn add_indented(&self, text: &str) {
        let indent = "  ".repeat(*self.indent_level.borrow());
        let mut buffer = self.buffer.borrow_mut();
        buffer.push_str(&indent);
        buffer.push_str(text);
    }

    pub fn indent(&self) {
        *self.indent_level.borrow_mut() += 1;
    }

    pub fn dedent(&self) {
        let mut level = self.indent_level.borrow_mut();
        if *level > 0 {
            *level -= 1;
        }
    }

    /// Run `f` one indentation level deeper
    pub fn nested(&self, f: impl FnOnce(&Self)) {
        self.indent();
        f(self);
        self.dedent();
    }

    pub fn get_output(&self) -> String {
        self.buffer.borrow().clone()
    }
}
