//! Result presentation.

use std::io::{self, Write};

/// Trait for presenting dispatch results to the user.
pub trait ResultPresenter {
    /// Present one dispatch result.
    fn present(&mut self, result: &str) -> io::Result<()>;
}

/// Writes each result on its own line.
pub struct LinePresenter<W> {
    out: W,
}

impl<W: Write> LinePresenter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ResultPresenter for LinePresenter<W> {
    fn present(&mut self, result: &str) -> io::Result<()> {
        writeln!(self.out, "{result}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presents_one_line_per_result() {
        let mut presenter = LinePresenter::new(Vec::new());
        presenter.present("alpha 1").unwrap();
        presenter.present("beta 2").unwrap();
        assert_eq!(presenter.into_inner(), b"alpha 1\nbeta 2\n");
    }

    #[test]
    fn presents_empty_result_as_blank_line() {
        let mut presenter = LinePresenter::new(Vec::new());
        presenter.present("").unwrap();
        assert_eq!(presenter.into_inner(), b"\n");
    }
}
