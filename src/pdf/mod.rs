pub mod document;
pub mod geometry;
pub mod writer;

pub use document::{bind_pdfium, PdfDocumentSource, SourceDocument, DEFAULT_DPI};
pub use geometry::split_halves;
pub use writer::OutputDocument;
