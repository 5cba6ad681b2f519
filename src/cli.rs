use clap::Parser;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Example usage:
  pdf-splitter input.pdf output.pdf
  pdf-splitter \"My Book.pdf\" \"My Book - Split.pdf\"";

#[derive(Parser)]
#[command(name = "pdf-splitter")]
#[command(about = "Split a PDF with two pages per sheet into individual pages.")]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    /// Input PDF file
    pub input_file: PathBuf,

    /// Output PDF file
    pub output_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_two_positionals() {
        let cli = Cli::try_parse_from(["pdf-splitter", "My Book.pdf", "split.pdf"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("My Book.pdf"));
        assert_eq!(cli.output_file, PathBuf::from("split.pdf"));
    }

    #[test]
    fn test_output_required() {
        assert!(Cli::try_parse_from(["pdf-splitter", "in.pdf"]).is_err());
    }

    #[test]
    fn test_no_extra_flags() {
        assert!(Cli::try_parse_from(["pdf-splitter", "--dpi", "300", "in.pdf", "out.pdf"]).is_err());
    }
}
