use crate::error::CoreResult;
use crate::primitive::Primitive;
use crate::value::Value;
use std::io::{self, Write};

/// Which of the two textual forms to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Bare form, as `display` prints it.
    Display,
    /// Read-back form, as `write` prints it.
    Write,
}

pub fn render(value: &Value, mode: RenderMode) -> String {
    match mode {
        RenderMode::Display => value.render_display(),
        RenderMode::Write => value.render_write(),
    }
}

/// Writes rendered values to an output sink.
pub struct Printer<W: Write> {
    out: W,
    mode: RenderMode,
}

impl Printer<io::Stdout> {
    pub fn stdout(mode: RenderMode) -> Self {
        Printer::new(io::stdout(), mode)
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, mode: RenderMode) -> Self {
        Printer { out, mode }
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn print(&mut self, value: &Value) -> CoreResult<()> {
        self.write_chunks(&[render(value, self.mode)], false)
    }

    pub fn println(&mut self, value: &Value) -> CoreResult<()> {
        self.write_chunks(&[render(value, self.mode)], true)
    }

    /// Prints `values` separated by single spaces, without a trailing newline.
    pub fn write_all(&mut self, values: &[Value]) -> CoreResult<()> {
        let chunks: Vec<String> = values.iter().map(|value| render(value, self.mode)).collect();
        self.write_chunks(&chunks, false)
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_chunks(&mut self, chunks: &[String], newline: bool) -> CoreResult<()> {
        log::trace!("printing {} value(s) in {:?} mode", chunks.len(), self.mode);
        if let Some((first, rest)) = chunks.split_first() {
            self.out.write_all(first.as_bytes())?;
            for chunk in rest {
                self.out.write_all(b" ")?;
                self.out.write_all(chunk.as_bytes())?;
            }
        }
        if newline {
            self.out.write_all(b"\n")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
