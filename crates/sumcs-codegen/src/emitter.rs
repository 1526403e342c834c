//! Line-oriented output with an explicit stack of open scopes.
//!
//! Every `{` and `(` that spans multiple lines is opened through the [Emitter], which remembers
//! it and indents everything until the matching [Emitter::close]. [Emitter::finish] closes
//! whatever is still open, so the output is balanced no matter what was emitted.

static INDENT: &str = "    ";

// Always `\n`, the output must not depend on the host platform.
static NEWLINE: &str = "\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// A brace delimited body: type declarations.
    Block,
    /// A parenthesised list: method parameters, one per line.
    List,
}

impl Scope {
    fn closer(self) -> &'static str {
        match self {
            Self::Block => "}",
            Self::List => ")",
        }
    }
}

#[derive(Debug, Default)]
pub struct Emitter {
    accum: String,
    scopes: Vec<Scope>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many scopes are currently open.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Write a line at the current indentation.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            for _ in 0..self.scopes.len() {
                self.accum.push_str(INDENT);
            }
            self.accum.push_str(text);
        }
        self.accum.push_str(NEWLINE);
    }

    pub fn blank_line(&mut self) {
        self.accum.push_str(NEWLINE);
    }

    /// ```csharp
    /// header
    /// {
    /// ```
    pub fn open_block(&mut self, header: &str) {
        self.line(header);
        self.line("{");
        self.scopes.push(Scope::Block);
    }

    /// ```csharp
    /// head(
    /// ```
    pub fn open_list(&mut self, head: &str) {
        self.line(&format!("{}(", head));
        self.scopes.push(Scope::List);
    }

    /// Close the innermost scope, following the closing delimiter with `trailer`.
    pub fn close(&mut self, trailer: &str) {
        let scope = self.scopes.pop();
        debug_assert!(scope.is_some(), "closed a scope that was never opened");
        if let Some(scope) = scope {
            self.line(&format!("{}{}", scope.closer(), trailer));
        }
    }

    pub fn finish(mut self) -> String {
        while !self.scopes.is_empty() {
            self.close("");
        }
        self.accum
    }
}
