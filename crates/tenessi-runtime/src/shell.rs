#![forbid(unsafe_code)]

//! Page shell: the surface that carries out user-visible effects.
//!
//! A [`Shell`] receives the effects a [`Program`](crate::Program) pulls out
//! of a model's commands: a blocking acknowledgment, a request to scroll a
//! section into view, a log line, and finished frames.
//!
//! [`TextShell`] renders all of them as plain text to any [`Write`] sink.

use std::io::{self, Write};

use crate::frame::Frame;

/// Effects a page shell must support.
pub trait Shell {
    /// Show a blocking acknowledgment to the user.
    fn alert(&mut self, text: &str) -> io::Result<()>;

    /// Bring the section with `anchor` into view.
    fn scroll_into_view(&mut self, anchor: &str) -> io::Result<()>;

    /// Write a log line.
    fn log(&mut self, text: &str) -> io::Result<()>;

    /// Show a finished frame.
    fn present(&mut self, frame: &Frame) -> io::Result<()>;

    /// Flush buffered output.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Plain-text shell writing to `W`.
#[derive(Debug)]
pub struct TextShell<W: Write> {
    out: W,
    presented: usize,
}

impl<W: Write> TextShell<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out, presented: 0 }
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> usize {
        self.presented
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Shell for TextShell<W> {
    fn alert(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "[alert] {text}")
    }

    fn scroll_into_view(&mut self, anchor: &str) -> io::Result<()> {
        writeln!(self.out, "[scroll] #{anchor}")
    }

    fn log(&mut self, text: &str) -> io::Result<()> {
        let text = text.strip_suffix('\n').unwrap_or(text);
        writeln!(self.out, "[log] {text}")
    }

    fn present(&mut self, frame: &Frame) -> io::Result<()> {
        self.presented += 1;
        write!(self.out, "{frame}")?;
        writeln!(
            self.out,
            "{}",
            "~".repeat(usize::from(frame.width()))
        )
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
