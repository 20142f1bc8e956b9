//! Builder‐style helper for constructing **Markdown prompts**.
//!
//! Every method returns `self`, enabling call-chaining:
//!
//! ```rust
//! use neighbors_prompt::builder::PromptBuilder;
//!
//! let md = PromptBuilder::new()
//!     .add_section_h1("Task")
//!     .add_key_value("Region", "United States")
//!     .add_bullet("Only list states that share a land border.")
//!     .finalize();
//!
//! assert!(md.starts_with("# Task"));
//! ```
//!
//! Newlines and whitespace are emitted exactly as requested; the builder does
//! no smart formatting.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce markdown fragments.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you’re done, call [`Self::finalize`] to obtain the assembled markdown.
#[derive(Debug, Default)]
pub struct PromptBuilder {
    buffer: String,
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    // Writing into a `String` cannot fail, so the `fmt::Result`s below are
    // discarded.

    /// Add a level-1 (`#`) heading.
    pub fn add_section_h1(mut self, line: impl Display) -> Self {
        let _ = writeln!(self.buffer, "# {line}");
        self
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        let _ = writeln!(self.buffer, "{line}");
        self
    }

    /// Add a markdown list item (`- text`).
    pub fn add_bullet(mut self, line: impl Display) -> Self {
        let _ = writeln!(self.buffer, "- {line}");
        self
    }

    /// Add a key–value pair in **bold**:
    /// `**Key**: Value`
    pub fn add_key_value(mut self, key: impl Display, value: impl Display) -> Self {
        let _ = writeln!(self.buffer, "**{key}**: {value}");
        self
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated markdown and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_lines_in_order() {
        let md = PromptBuilder::new()
            .add_section_h1("Neighbors")
            .add_blank_line()
            .add_key_value("State", "Utah")
            .add_bullet("north")
            .add_line("done")
            .finalize();

        assert_eq!(md, "# Neighbors\n\n**State**: Utah\n- north\ndone\n");
    }

    #[test]
    fn empty_builder_is_empty() {
        assert!(PromptBuilder::new().finalize().is_empty());
    }
}
