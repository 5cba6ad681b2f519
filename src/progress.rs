use std::io::{self, Write};
use std::path::Path;

/// Line-oriented progress output.
///
/// Write failures are swallowed: progress is never a reason to abort a run.
pub struct Progress<W: Write> {
    out: W,
}

impl Progress<io::Stdout> {
    pub fn stdout() -> Self {
        Progress::new(io::stdout())
    }
}

impl<W: Write> Progress<W> {
    pub fn new(out: W) -> Self {
        Progress { out }
    }

    pub fn start(&mut self, total_pages: usize) {
        let _ = writeln!(self.out, "Processing {} pages...", total_pages);
    }

    /// `page_num` is 1-based
    pub fn page_done(&mut self, page_num: usize, total_pages: usize) {
        let _ = writeln!(self.out, "Processed page {}/{}", page_num, total_pages);
    }

    pub fn finish(&mut self, output: &Path, original_pages: usize, new_pages: usize) {
        let _ = writeln!(
            self.out,
            "\nSuccess! Split PDF saved as '{}'",
            output.display()
        );
        let _ = writeln!(self.out, "Original pages: {}", original_pages);
        let _ = writeln!(self.out, "New pages: {}", new_pages);
        let _ = self.out.flush();
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
