#![forbid(unsafe_code)]

//! Line-oriented text frame.
//!
//! A [`Frame`] is what [`Model::view`](crate::Model::view) draws into. It is
//! a fixed-width column of text lines; anything wider than the frame is
//! clipped at a grapheme boundary.
//!
//! # Example
//!
//! ```
//! use tenessi_runtime::Frame;
//!
//! let mut frame = Frame::new(10);
//! frame.line("Diagnóstico gratuito");
//! frame.rule('-');
//! assert_eq!(frame.lines(), ["Diagnóstic", "----------"]);
//! ```

use std::fmt;

use unicode_segmentation::UnicodeSegmentation;

/// Default frame width in columns.
pub const DEFAULT_WIDTH: u16 = 80;

/// A fixed-width column of text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    lines: Vec<String>,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl Frame {
    /// Create an empty frame `width` columns wide.
    #[must_use]
    pub fn new(width: u16) -> Self {
        Self {
            width,
            lines: Vec::new(),
        }
    }

    /// Frame width in columns.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of lines drawn so far.
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Whether nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append a line, clipped to the frame width.
    ///
    /// Embedded newlines start new lines.
    pub fn line(&mut self, text: impl AsRef<str>) {
        for part in text.as_ref().split('\n') {
            let clipped: String = part.graphemes(true).take(self.width as usize).collect();
            self.lines.push(clipped);
        }
    }

    /// Append an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Append a horizontal rule of `ch` spanning the frame.
    pub fn rule(&mut self, ch: char) {
        self.lines
            .push(std::iter::repeat_n(ch, self.width as usize).collect());
    }

    /// Drawn lines, top to bottom.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any line contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    /// Remove every line, keeping the width.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
