//! Render sink
//!
//! Query elements never build strings themselves; they push text into a
//! [`SqlOutput`], which owns line breaks and indentation.

use config::{LineEnding, RenderConfig};

/// Primitive text operations consumed by the renderer
pub trait SqlOutput {
    /// Append text to the current line
    fn print(&mut self, text: &str);

    /// Append a single character to the current line
    fn print_char(&mut self, c: char);

    /// Terminate the current line
    fn println(&mut self);

    /// Append text, then terminate the line
    fn println_str(&mut self, text: &str) {
        self.print(text);
        self.println();
    }

    /// Increase the indent depth applied to subsequent lines
    fn indent(&mut self);

    /// Decrease the indent depth applied to subsequent lines
    fn unindent(&mut self);
}

/// String-backed sink that prefixes every new line with `depth * indent_width` spaces
#[derive(Debug, Clone)]
pub struct IndentedWriter {
    buffer: String,
    depth: usize,
    indent_width: usize,
    line_ending: LineEnding,
    at_line_start: bool,
}

impl IndentedWriter {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            indent_width: config.indent_width,
            line_ending: config.line_ending,
            at_line_start: true,
        }
    }

    /// Current indent depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    fn start_line_if_needed(&mut self) {
        if self.at_line_start {
            let width = self.depth * self.indent_width;
            self.buffer.push_str(&" ".repeat(width));
            self.at_line_start = false;
        }
    }
}

impl Default for IndentedWriter {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl SqlOutput for IndentedWriter {
    fn print(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.start_line_if_needed();
        self.buffer.push_str(text);
    }

    fn print_char(&mut self, c: char) {
        self.start_line_if_needed();
        self.buffer.push(c);
    }

    fn println(&mut self) {
        self.buffer.push_str(self.line_ending.as_str());
        self.at_line_start = true;
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn unindent(&mut self) {
        if self.depth == 0 {
            tracing::warn!("unindent requested at depth 0, ignoring");
            return;
        }
        self.depth -= 1;
    }
}
