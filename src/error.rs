use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad invocation, detected before any document I/O
    Usage,
    /// Failure while opening, rendering, encoding or writing
    Processing,
}

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("Input file '{}' does not exist.", .0.display())]
    MissingInput(PathBuf),

    #[error("Input file '{}' is not a PDF.", .0.display())]
    NotPdf(PathBuf),

    #[error("{0:#}")]
    Processing(#[from] anyhow::Error),
}

impl SplitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SplitError::MissingInput(_) | SplitError::NotPdf(_) => ErrorKind::Usage,
            SplitError::Processing(_) => ErrorKind::Processing,
        }
    }

    /// Print the user-facing diagnostic. A closed or broken `out` is ignored.
    pub fn report(&self, out: &mut impl Write) {
        let _ = match self.kind() {
            ErrorKind::Usage => writeln!(out, "Error: {}", self),
            ErrorKind::Processing => writeln!(out, "Error processing PDF: {}", self),
        };
        let _ = out.flush();
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Usage | ErrorKind::Processing => 1,
        }
    }
}
