use crate::error::SplitError;
use crate::pdf::DEFAULT_DPI;
use std::path::{Path, PathBuf};

/// Environment variable naming a directory that holds the PDFium library
pub const PDFIUM_DIR_ENV: &str = "PDFIUM_LIB_DIR";

/// Everything a run needs, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Rendering resolution for each half
    pub dpi: f32,
    pub pdfium_dir: Option<PathBuf>,
}

impl Config {
    pub fn new(input: PathBuf, output: PathBuf) -> Self {
        Config {
            input,
            output,
            dpi: DEFAULT_DPI,
            pdfium_dir: None,
        }
    }

    /// Pick up optional settings from the process environment
    pub fn with_env(mut self) -> Self {
        self.pdfium_dir = std::env::var_os(PDFIUM_DIR_ENV).map(PathBuf::from);
        self
    }

    /// Check the input path before any document is opened.
    ///
    /// The output path is not checked; write failures surface when saving.
    pub fn validate(&self) -> Result<(), SplitError> {
        validate_input(&self.input)
    }
}

pub fn validate_input(path: &Path) -> Result<(), SplitError> {
    if !path.exists() {
        return Err(SplitError::MissingInput(path.to_path_buf()));
    }

    let is_pdf = path
        .file_name()
        .map(|name| name.to_string_lossy().to_lowercase().ends_with(".pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(SplitError::NotPdf(path.to_path_buf()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.pdf");
        let err = validate_input(&path).unwrap_err();
        assert!(matches!(err, SplitError::MissingInput(_)));
        assert_eq!(err.kind(), ErrorKind::Usage);
    }

    #[test]
    fn test_wrong_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.png");
        std::fs::write(&path, b"not a pdf").unwrap();
        assert!(matches!(
            validate_input(&path).unwrap_err(),
            SplitError::NotPdf(_)
        ));
    }

    #[test]
    fn test_missing_checked_before_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.png");
        assert!(matches!(
            validate_input(&path).unwrap_err(),
            SplitError::MissingInput(_)
        ));
    }

    #[test]
    fn test_extension_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["book.pdf", "BOOK.PDF", "Book.Pdf"] {
            let path = dir.path().join(name);
            std::fs::write(&path, b"%PDF-1.4").unwrap();
            assert!(validate_input(&path).is_ok(), "{} should be accepted", name);
        }
    }

    #[test]
    fn test_contents_not_inspected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.pdf");
        std::fs::write(&path, b"garbage").unwrap();
        assert!(validate_input(&path).is_ok());
    }

    #[test]
    fn test_rejection_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"").unwrap();

        let first = validate_input(&path).unwrap_err().to_string();
        let second = validate_input(&path).unwrap_err().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new(PathBuf::from("in.pdf"), PathBuf::from("out.pdf"));
        assert_eq!(config.dpi, DEFAULT_DPI);
        assert_eq!(config.pdfium_dir, None);
    }
}
