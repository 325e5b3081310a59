//! Pixel work: decode, draw frames, resample, encode.
//!
//! Everything here is a thin layer over the `image` crate. The geometry
//! comes from [`frame`](crate::frame), [`resize`](crate::resize) and
//! [`favicon`](crate::favicon); this module only executes it.
//!
//! Decoded images are owned values. There are no handles to release: a
//! [`DecodedImage`] is freed when it goes out of scope, whichever way the
//! caller leaves.

use std::io::Cursor;
use std::path::Path;

use image::codecs::ico::IcoEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageDecoder, ImageReader, Rgba, RgbaImage};

use crate::error::LayoutError;
use crate::export::ExportFormat;
use crate::favicon::favicon_plan;
use crate::frame::FrameLayout;
use crate::geometry::ImageDimensions;
use crate::orientation::Orientation;
use crate::resize::ResizeResult;

/// Resampling filter for every scale operation.
const FILTER: FilterType = FilterType::Lanczos3;

/// Errors from decoding, encoding or file I/O.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("webp encoding failed: {0}")]
    Webp(String),
}

/// A decoded image, already turned upright.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    image: DynamicImage,
    orientation: Orientation,
    dimensions: ImageDimensions,
}

impl DecodedImage {
    /// Wrap pixels that need no orientation fix.
    pub fn from_image(image: DynamicImage) -> Result<Self, RasterError> {
        let dimensions = ImageDimensions::new(image.width(), image.height())?;
        Ok(Self {
            image,
            orientation: Orientation::Normal,
            dimensions,
        })
    }

    /// Display dimensions, after orientation.
    pub fn dimensions(&self) -> ImageDimensions {
        self.dimensions
    }

    /// The EXIF orientation that was applied while decoding.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}

/// Decode an encoded image, guessing the format from its bytes.
pub fn decode(bytes: &[u8]) -> Result<DecodedImage, RasterError> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = reader.format();
    let mut decoder = reader.into_decoder()?;
    let exif_orientation = decoder.orientation()?;
    let mut image = DynamicImage::from_decoder(decoder)?;
    image.apply_orientation(exif_orientation);

    let orientation = Orientation::from_exif(exif_orientation.to_exif()).unwrap_or_default();
    let dimensions = ImageDimensions::new(image.width(), image.height())?;
    log::debug!(
        "decoded {format:?} {}x{} (orientation {})",
        dimensions.width(),
        dimensions.height(),
        orientation.to_exif()
    );
    Ok(DecodedImage {
        image,
        orientation,
        dimensions,
    })
}

/// Read and decode a file.
pub fn open(path: impl AsRef<Path>) -> Result<DecodedImage, RasterError> {
    let path = path.as_ref();
    log::trace!("reading {}", path.display());
    let bytes = std::fs::read(path)?;
    decode(&bytes)
}

/// Paint the frame: background fill, then the source scaled into the
/// content rectangle.
pub fn render_frame(source: &DecodedImage, layout: &FrameLayout) -> RgbaImage {
    let canvas_size = layout.canvas;
    let mut canvas = RgbaImage::from_pixel(
        canvas_size.width,
        canvas_size.height,
        Rgba(layout.background.to_rgba()),
    );

    let target = layout.content_pixels();
    let pixels = source.image.to_rgba8();
    let content = if layout.needs_resize(source.dimensions) {
        log::trace!(
            "scaling {}x{} into {}x{}",
            pixels.width(),
            pixels.height(),
            target.width,
            target.height
        );
        imageops::resize(&pixels, target.width, target.height, FILTER)
    } else {
        pixels
    };
    imageops::overlay(&mut canvas, &content, target.x as i64, target.y as i64);
    log::debug!(
        "framed onto {}x{} canvas at ({}, {})",
        canvas_size.width,
        canvas_size.height,
        target.x,
        target.y
    );
    canvas
}

/// Resample to exactly `target`. Aspect ratio is the caller's concern.
pub fn render_resize(source: &DecodedImage, target: ResizeResult) -> DynamicImage {
    if target.is_identity(source.dimensions) {
        return source.image.clone();
    }
    log::debug!(
        "resizing {}x{} to {}x{}",
        source.dimensions.width(),
        source.dimensions.height(),
        target.width,
        target.height
    );
    source.image.resize_exact(target.width, target.height, FILTER)
}

/// Cover-crop to a square, scale to the favicon size and pack as ICO.
pub fn render_favicon(source: &DecodedImage) -> Result<Vec<u8>, RasterError> {
    let plan = favicon_plan(source.dimensions);
    let rgba = source.image.to_rgba8();
    let crop = plan.crop;
    let cropped = imageops::crop_imm(&rgba, crop.x, crop.y, crop.width, crop.height).to_image();
    let icon = imageops::resize(&cropped, plan.output.width, plan.output.height, FILTER);

    let mut out = Vec::new();
    DynamicImage::ImageRgba8(icon).write_with_encoder(IcoEncoder::new(&mut out))?;
    log::debug!("favicon: {} bytes", out.len());
    Ok(out)
}

/// Encode in the given format.
pub fn encode(image: &DynamicImage, format: ExportFormat) -> Result<Vec<u8>, RasterError> {
    let mut out = Vec::new();
    match format {
        ExportFormat::Png => {
            image.write_with_encoder(PngEncoder::new(&mut out))?;
        }
        ExportFormat::Jpeg { .. } => {
            let quality = format.quality_percent().unwrap_or(100).min(100);
            // JPEG has no alpha channel.
            let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
            rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut out, quality))?;
        }
        ExportFormat::Webp { quality } => {
            let rgba = image.to_rgba8();
            let encoded = webp::Encoder::from_rgba(&rgba, rgba.width(), rgba.height())
                .encode_simple(false, quality * 100.0)
                .map_err(|e| RasterError::Webp(format!("{e:?}")))?;
            out.extend_from_slice(&encoded);
        }
    }
    log::debug!("encoded {} bytes as {}", out.len(), format.mime_type());
    Ok(out)
}

/// Write encoded bytes to `path`.
pub fn save(bytes: &[u8], path: impl AsRef<Path>) -> Result<(), RasterError> {
    let path = path.as_ref();
    std::fs::write(path, bytes)?;
    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
