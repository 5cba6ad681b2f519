use super::geometry::{ClipRect, PageSize};
use anyhow::{anyhow, Context, Result};
use image::{imageops, DynamicImage, RgbImage, RgbaImage};
use pdfium_render::prelude::*;
use std::path::Path;
use tracing::debug;

/// Rendering resolution for page halves, in dots per inch
pub const DEFAULT_DPI: f32 = 150.0;

const POINTS_PER_INCH: f32 = 72.0;

/// A read-only, paginated document that can rasterize parts of its pages.
///
/// Implementations own the underlying document handle and release it on drop.
pub trait SourceDocument {
    fn page_count(&self) -> usize;

    /// Width and height of the 0-indexed page in page-space units
    fn page_size(&self, index: usize) -> Result<PageSize>;

    /// Render only the `clip` region of the 0-indexed page to an RGB raster
    fn render_clip(&self, index: usize, clip: &ClipRect) -> Result<RgbImage>;

    /// Render several regions of one page, in the order given.
    ///
    /// The default renders each clip on its own; backends that rasterize the
    /// whole page should override this to render the page once.
    fn render_clips(&self, index: usize, clips: &[ClipRect]) -> Result<Vec<RgbImage>> {
        clips
            .iter()
            .map(|clip| self.render_clip(index, clip))
            .collect()
    }
}

/// Bind to the PDFium shared library.
///
/// Searches `search_dir` first (if given), then the current directory, then
/// the system library paths.
pub fn bind_pdfium(search_dir: Option<&Path>) -> Result<Pdfium> {
    let at = |dir: &Path| {
        Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
    };

    let bindings = match search_dir {
        Some(dir) => at(dir).or_else(|_| at(Path::new("./"))),
        None => at(Path::new("./")),
    }
    .or_else(|_| Pdfium::bind_to_system_library())
    .map_err(|e| {
        anyhow!(
            "Failed to load PDFium library (set PDFIUM_LIB_DIR or install libpdfium): {:?}",
            e
        )
    })?;

    Ok(Pdfium::new(bindings))
}

pub struct PdfDocumentSource<'a> {
    document: PdfDocument<'a>,
    dpi: f32,
    path: String,
}

impl<'a> PdfDocumentSource<'a> {
    pub fn open<P: AsRef<Path>>(pdfium: &'a Pdfium, path: P, dpi: f32) -> Result<Self> {
        let path_str = path.as_ref().display().to_string();
        let document = pdfium
            .load_pdf_from_file(path.as_ref(), None)
            .map_err(|e| anyhow!("Failed to open PDF: {}: {:?}", path_str, e))?;

        debug!(path = %path_str, pages = document.pages().len(), "opened source document");

        Ok(PdfDocumentSource {
            document,
            dpi,
            path: path_str,
        })
    }

    fn page(&self, index: usize) -> Result<PdfPage<'_>> {
        self.document
            .pages()
            .iter()
            .nth(index)
            .ok_or_else(|| anyhow!("Page {} is out of range (1-{})", index + 1, self.page_count()))
    }

    /// Rasterize the whole page at `self.dpi`
    fn render_page(&self, index: usize) -> Result<(PageSize, RgbImage)> {
        let page = self.page(index)?;
        let size = PageSize {
            width: page.width().value,
            height: page.height().value,
        };

        let config = PdfRenderConfig::new()
            .scale_page_by_factor(self.dpi / POINTS_PER_INCH)
            .render_form_data(true);

        let bitmap = page
            .render_with_config(&config)
            .map_err(|e| anyhow!("Failed to render page {}: {:?}", index + 1, e))?;

        let (width, height) = (bitmap.width() as u32, bitmap.height() as u32);
        let rgba = RgbaImage::from_raw(width, height, bitmap.as_rgba_bytes())
            .with_context(|| format!("Rendered bitmap for page {} has unexpected size", index + 1))?;

        debug!(
            page = index + 1,
            bitmap_width = width,
            bitmap_height = height,
            "rendered page"
        );
        Ok((size, DynamicImage::ImageRgba8(rgba).to_rgb8()))
    }
}

/// Cut the `clip` region of a page out of its full-page raster
fn crop_clip(full: &RgbImage, size: PageSize, clip: &ClipRect, index: usize) -> Result<RgbImage> {
    let bounds = clip.to_pixel_bounds(size, full.width(), full.height());
    if bounds.width == 0 || bounds.height == 0 {
        anyhow::bail!("Clip region of page {} is empty", index + 1);
    }
    Ok(imageops::crop_imm(full, bounds.x, bounds.y, bounds.width, bounds.height).to_image())
}

impl SourceDocument for PdfDocumentSource<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn page_size(&self, index: usize) -> Result<PageSize> {
        let page = self.page(index)?;
        Ok(PageSize {
            width: page.width().value,
            height: page.height().value,
        })
    }

    fn render_clip(&self, index: usize, clip: &ClipRect) -> Result<RgbImage> {
        let (size, full) = self.render_page(index)?;
        crop_clip(&full, size, clip, index)
    }

    fn render_clips(&self, index: usize, clips: &[ClipRect]) -> Result<Vec<RgbImage>> {
        let (size, full) = self.render_page(index)?;
        clips
            .iter()
            .map(|clip| crop_clip(&full, size, clip, index))
            .collect()
    }
}

impl Drop for PdfDocumentSource<'_> {
    fn drop(&mut self) {
        debug!(path = %self.path, "closed source document");
    }
}
