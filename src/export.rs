//! Output formats, encoder quality, and download file names.

use alloc::format;
use alloc::string::String;
use core::fmt;

use crate::error::LayoutError;

/// Encoded output format. Quality is in `0.0..=1.0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ExportFormat {
    Png,
    Jpeg { quality: f32 },
    Webp { quality: f32 },
}

impl ExportFormat {
    /// Export buttons of the frame designer, in display order.
    pub const FRAME_PRESETS: [(&'static str, Self); 4] = [
        ("JPEG 80%", Self::Jpeg { quality: 0.8 }),
        ("JPEG 95%", Self::Jpeg { quality: 0.95 }),
        ("JPEG 100%", Self::Jpeg { quality: 1.0 }),
        ("PNG", Self::Png),
    ];

    /// Frame designer's initial export choice.
    pub const FRAME_DEFAULT: Self = Self::Jpeg { quality: 0.95 };

    /// JPEG quality used by the resizer.
    pub const RESIZE_JPEG_QUALITY: f32 = 0.8;

    /// JPEG with the given quality.
    pub fn jpeg(quality: f32) -> Result<Self, LayoutError> {
        Ok(Self::Jpeg {
            quality: check_quality(quality)?,
        })
    }

    /// WebP with the given quality.
    pub fn webp(quality: f32) -> Result<Self, LayoutError> {
        Ok(Self::Webp {
            quality: check_quality(quality)?,
        })
    }

    /// Look up a format by name (`png`, `jpeg`/`jpg`, `webp`, case-insensitive).
    /// `quality` is required to be valid for lossy formats and ignored for PNG.
    pub fn from_name(name: &str, quality: f32) -> Option<Result<Self, LayoutError>> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("png") {
            Some(Ok(Self::Png))
        } else if name.eq_ignore_ascii_case("jpeg") || name.eq_ignore_ascii_case("jpg") {
            Some(Self::jpeg(quality))
        } else if name.eq_ignore_ascii_case("webp") {
            Some(Self::webp(quality))
        } else {
            None
        }
    }

    /// `image/png`, `image/jpeg` or `image/webp`.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg { .. } => "image/jpeg",
            Self::Webp { .. } => "image/webp",
        }
    }

    /// Short format name: `png`, `jpeg`, `webp`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg { .. } => "jpeg",
            Self::Webp { .. } => "webp",
        }
    }

    /// Conventional file extension: `png`, `jpg`, `webp`.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg { .. } => "jpg",
            Self::Webp { .. } => "webp",
        }
    }

    /// Encoder quality, `None` for lossless PNG.
    pub fn quality(&self) -> Option<f32> {
        match *self {
            Self::Png => None,
            Self::Jpeg { quality } | Self::Webp { quality } => Some(quality),
        }
    }

    /// Quality on the 1-100 scale used by JPEG encoders.
    pub fn quality_percent(&self) -> Option<u8> {
        self.quality()
            .map(|q| ((q.clamp(0.0, 1.0) * 100.0 + 0.5) as u8).max(1))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Png => "PNG",
            Self::Jpeg { .. } => "JPEG",
            Self::Webp { .. } => "WebP",
        };
        match self.quality_percent() {
            Some(q) => write!(f, "{label} {q}%"),
            None => f.write_str(label),
        }
    }
}

fn check_quality(quality: f32) -> Result<f32, LayoutError> {
    if (0.0..=1.0).contains(&quality) {
        Ok(quality)
    } else {
        Err(LayoutError::InvalidQuality(quality))
    }
}

/// `{stem}-framed.{ext}`, where the stem drops the last extension.
///
/// Names without an extension fall back to `framed-image`.
pub fn framed_file_name(original: &str, format: ExportFormat) -> String {
    let stem = original
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .filter(|stem| !stem.is_empty())
        .unwrap_or("framed-image");
    format!("{stem}-framed.{}", format.extension())
}

/// `{stem}-resized.{format}`, where the stem is everything before the first dot.
///
/// The suffix is the format name (`jpeg`, not `jpg`), matching what the
/// resizer has always produced.
pub fn resized_file_name(original: &str, format: ExportFormat) -> String {
    let stem = first_dot_stem(original).unwrap_or("resized-image");
    format!("{stem}-resized.{}", format.name())
}

/// `{stem}.{format}` for the format converter.
pub fn converted_file_name(original: &str, format: ExportFormat) -> String {
    let stem = first_dot_stem(original).unwrap_or("converted-image");
    format!("{stem}.{}", format.name())
}

/// Everything before the first dot that has at least one character after it.
fn first_dot_stem(name: &str) -> Option<&str> {
    let stem = match name.find('.') {
        Some(i) if i + 1 < name.len() => &name[..i],
        _ => name,
    };
    (!stem.is_empty()).then_some(stem)
}
