//! Indentation and class bookkeeping carried across the rewrite loop

/// Nesting level of the output. Never drops below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct IndentDepth(usize);

impl IndentDepth {
    pub fn new(depth: usize) -> Self {
        Self(depth)
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn deeper(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn shallower(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

/// The class whose body is currently being emitted.
///
/// There is a single slot: a class declared inside another class replaces the
/// outer one until its own body closes, after which no class is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassContext {
    pub name: String,
    /// Depth at which `class Name` was emitted
    pub opened_at: IndentDepth,
}

impl ClassContext {
    pub fn new(name: impl Into<String>, opened_at: IndentDepth) -> Self {
        Self {
            name: name.into(),
            opened_at,
        }
    }

    pub fn is_constructor(&self, method_name: &str) -> bool {
        self.name == method_name
    }
}

/// Output buffer with indentation helpers
#[derive(Debug, Clone)]
pub struct Emitter {
    out: String,
    indent_width: usize,
}

impl Emitter {
    pub fn new(indent_width: usize) -> Self {
        Self {
            out: String::new(),
            indent_width,
        }
    }

    pub fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Newline followed by the indentation for `depth`
    pub fn newline(&mut self, depth: IndentDepth) {
        self.out.push('\n');
        self.indent(depth);
    }

    pub fn indent(&mut self, depth: IndentDepth) {
        self.out
            .extend(std::iter::repeat(' ').take(depth.get() * self.indent_width));
    }

    /// Drop up to one level of trailing indentation
    pub fn dedent(&mut self) {
        for _ in 0..self.indent_width {
            if !self.out.ends_with(' ') {
                break;
            }
            self.out.pop();
        }
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_saturates() {
        let depth = IndentDepth::default();
        assert_eq!(depth.shallower().get(), 0);
        assert_eq!(depth.deeper().deeper().shallower().get(), 1);
    }

    #[test]
    fn test_newline_and_dedent() {
        let mut emitter = Emitter::new(2);
        emitter.push("a;");
        emitter.newline(IndentDepth::new(2));
        assert_eq!(emitter.as_str(), "a;\n    ");

        emitter.dedent();
        assert_eq!(emitter.as_str(), "a;\n  ");
        emitter.dedent();
        emitter.dedent();
        assert_eq!(emitter.as_str(), "a;\n");
    }

    #[test]
    fn test_constructor_match() {
        let class = ClassContext::new("Main", IndentDepth::new(0));
        assert!(class.is_constructor("Main"));
        assert!(!class.is_constructor("main"));
    }
}
