use crate::config::Config;
use crate::error::SplitError;
use crate::pdf::{bind_pdfium, split_halves, OutputDocument, PdfDocumentSource, SourceDocument};
use crate::progress::Progress;
use anyhow::Context;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitSummary {
    pub original_pages: usize,
    pub new_pages: usize,
}

/// Validate the input, open it with PDFium and split it into `config.output`.
pub fn run(
    config: Config,
    progress: &mut Progress<impl Write>,
) -> Result<SplitSummary, SplitError> {
    config.validate()?;

    let pdfium = bind_pdfium(config.pdfium_dir.as_deref())?;
    let source = PdfDocumentSource::open(&pdfium, &config.input, config.dpi)?;
    info!(input = %config.input.display(), dpi = config.dpi, "splitting");

    let summary = split_document(source, &config.output, progress)?;
    info!(
        original_pages = summary.original_pages,
        new_pages = summary.new_pages,
        "split complete"
    );
    Ok(summary)
}

/// Render each page of `source` as a left half and a right half, one output
/// page per half, and write the result to `output`.
///
/// `source` is consumed and dropped exactly once, whether or not splitting
/// succeeds. Nothing is written unless every page was processed.
pub fn split_document<S: SourceDocument, W: Write>(
    source: S,
    output: &Path,
    progress: &mut Progress<W>,
) -> anyhow::Result<SplitSummary> {
    let total_pages = source.page_count();
    progress.start(total_pages);

    let mut out = OutputDocument::new();
    for index in 0..total_pages {
        let page_num = index + 1;
        let size = source
            .page_size(index)
            .with_context(|| format!("Failed to read size of page {}", page_num))?;
        debug!(page = page_num, width = size.width, height = size.height, "splitting page");

        let halves = split_halves(size);
        let clips = halves.map(|(_, clip)| clip);
        let rasters = source
            .render_clips(index, &clips)
            .with_context(|| format!("Failed to render page {}", page_num))?;
        if rasters.len() != clips.len() {
            anyhow::bail!(
                "Rendering page {} produced {} images, expected {}",
                page_num,
                rasters.len(),
                clips.len()
            );
        }

        for ((side, _), raster) in halves.iter().zip(&rasters) {
            out.push_image_page(raster).with_context(|| {
                format!("Failed to add {} half of page {}", side.as_str(), page_num)
            })?;
        }

        progress.page_done(page_num, total_pages);
    }
    drop(source);

    let new_pages = out.page_count();
    debug_assert_eq!(new_pages, total_pages * 2);
    out.save(output)?;

    progress.finish(output, total_pages, new_pages);
    Ok(SplitSummary {
        original_pages: total_pages,
        new_pages,
    })
}
