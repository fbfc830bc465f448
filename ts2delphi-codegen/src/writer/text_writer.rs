//! Stateful text accumulator used by every emitter.

use tracing::trace;

use super::Indent;

/// Accumulates generated text with a current indentation level.
///
/// The level is a plain counter floored at zero: decrementing past zero
/// clamps instead of failing.
///
/// # Example
///
/// ```
/// use ts2delphi_codegen::writer::Writer;
///
/// let mut writer = Writer::default();
/// writer
///     .write_line("begin")
///     .adjust_indentation(1)
///     .write_line("x := 1;")
///     .adjust_indentation(-1)
///     .write_line("end");
///
/// assert_eq!(writer.build(), "begin\n\tx := 1;\nend\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Writer {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl Writer {
    /// Create a new writer with the specified indentation unit.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Write indentation, `text` and a newline.
    ///
    /// An empty `text` still writes the indentation. Use
    /// [`Writer::blank_line`] for a line with nothing on it.
    pub fn write_line(&mut self, text: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Write the parts verbatim, without indentation or newline.
    pub fn write(&mut self, parts: &[&str]) -> &mut Self {
        for part in parts {
            self.buffer.push_str(part);
        }
        self
    }

    /// Write indentation followed by the parts, without a newline.
    pub fn write_indented(&mut self, parts: &[&str]) -> &mut Self {
        self.write_indent();
        self.write(parts)
    }

    /// End the current line.
    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank_line(&mut self) -> &mut Self {
        self.newline()
    }

    /// Change the indentation level by `delta`, clamping at zero.
    pub fn adjust_indentation(&mut self, delta: isize) -> &mut Self {
        self.indent_level = self.indent_level.saturating_add_signed(delta);
        trace!(level = self.indent_level, "adjusted indentation");
        self
    }

    /// Increase indentation level by one.
    pub fn indent(&mut self) -> &mut Self {
        self.adjust_indentation(1)
    }

    /// Decrease indentation level by one.
    pub fn dedent(&mut self) -> &mut Self {
        self.adjust_indentation(-1)
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the writer and return the generated text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}
