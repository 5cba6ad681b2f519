use anyhow::{Context, Result};
use flate2::write::ZlibEncoder;
use flate2::Compression;
use image::RgbImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// An output document assembled in memory from full-page raster images.
///
/// Pages keep insertion order; nothing touches the filesystem until [`save`].
///
/// [`save`]: OutputDocument::save
pub struct OutputDocument {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
}

impl OutputDocument {
    pub fn new() -> Self {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        OutputDocument {
            doc,
            pages_id,
            kids: Vec::new(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Append `image` as a new page whose MediaBox matches its pixel size
    pub fn push_image_page(&mut self, image: &RgbImage) -> Result<()> {
        let (width, height) = image.dimensions();

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(image.as_raw())
            .context("Failed to compress page image")?;
        let data = encoder.finish().context("Failed to compress page image")?;

        let image_id = self.doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => width as i64,
                "Height" => height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
                "Filter" => "FlateDecode",
            },
            data,
        ));

        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        (width as i64).into(),
                        0.into(),
                        0.into(),
                        (height as i64).into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = self.doc.add_object(Stream::new(
            dictionary! {},
            content.encode().context("Failed to encode page content")?,
        ));

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), (width as i64).into(), (height as i64).into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! { "Im0" => image_id },
            },
        });
        self.kids.push(page_id.into());

        Ok(())
    }

    /// Serialize the whole document to bytes
    pub fn to_bytes(mut self) -> Result<Vec<u8>> {
        let count = self.kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => self.kids,
                "Count" => count,
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut buf = Vec::new();
        self.doc
            .save_to(&mut buf)
            .context("Failed to serialize output PDF")?;
        Ok(buf)
    }

    /// Serialize and write to `path`, creating or truncating it
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;

        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        file.write_all(&bytes)
            .with_context(|| format!("Failed to save PDF: {}", path.display()))?;

        debug!(path = %path.display(), bytes = bytes.len(), "wrote output document");
        Ok(())
    }
}

impl Default for OutputDocument {
    fn default() -> Self {
        Self::new()
    }
}
