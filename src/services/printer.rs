use std::fmt::{self, Display, Write};

/// Text sink that renders colors with an optional fixed precision
pub struct Printer<'a, W: Write> {
    out: &'a mut W,
    precision: Option<usize>,
}

impl<'a, W: Write> Printer<'a, W> {
    pub fn new(out: &'a mut W, precision: Option<usize>) -> Self {
        Self { out, precision }
    }

    /// Write a color (or any value) using the configured precision
    pub fn value<V: Display + ?Sized>(&mut self, value: &V) -> fmt::Result {
        match self.precision {
            Some(precision) => write!(self.out, "{value:.precision$}"),
            None => write!(self.out, "{value}"),
        }
    }

    /// Write a line of plain text
    pub fn line(&mut self, text: impl Display) -> fmt::Result {
        writeln!(self.out, "{text}")
    }
}
