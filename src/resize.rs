//! Target dimensions for the resizer: by percentage, or by absolute
//! width/height with an optional aspect lock.
//!
//! Under aspect lock, one side is authoritative and the other is derived
//! from it. Which side drives is passed in explicitly as [`Driving`]; two
//! different edits can leave the same width/height pair behind, so it
//! cannot be recovered from the numbers.
//!
//! # Example
//!
//! ```
//! use framefit::{resolve_dimensions, AspectRatio, Driving, ImageDimensions, ResizeSpec};
//!
//! let source = ImageDimensions::new(1920, 1080).unwrap();
//!
//! let half = resolve_dimensions(source, ResizeSpec::percentage(50.0), None).unwrap();
//! assert_eq!((half.width, half.height), (960, 540));
//!
//! // The user typed 1000 into the width field with a 1:1 ratio locked.
//! let spec = ResizeSpec::absolute(1000, 1080).locked(Driving::Width);
//! let square = resolve_dimensions(source, spec, Some(AspectRatio::SQUARE)).unwrap();
//! assert_eq!((square.width, square.height), (1000, 1000));
//! ```

#[allow(unused_imports)]
use num_traits::Float as _;

use crate::aspect::AspectRatio;
use crate::error::LayoutError;
use crate::geometry::{ImageDimensions, Size};

/// The side most recently set by the user; authoritative under aspect lock.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Driving {
    #[default]
    Width,
    Height,
}

/// How the resizer should pick the output size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ResizeSpec {
    /// Scale both sides by a percentage of the source. Aspect is preserved
    /// by construction, so there is no lock.
    Percentage(f64),
    /// Explicit sides. `None` means "keep the source's side".
    ///
    /// `lock: Some(driving)` derives the non-driving side from the driving
    /// side and the ratio; the non-driving value given here is ignored.
    Absolute {
        width: Option<u32>,
        height: Option<u32>,
        lock: Option<Driving>,
    },
}

impl ResizeSpec {
    /// Percentages offered as buttons by the resizer.
    pub const PERCENT_PRESETS: [u8; 4] = [100, 75, 50, 25];

    /// Scale by `percentage` of the source.
    pub fn percentage(percentage: f64) -> Self {
        Self::Percentage(percentage)
    }

    /// Exact width and height, unlocked.
    pub fn absolute(width: u32, height: u32) -> Self {
        Self::Absolute {
            width: Some(width),
            height: Some(height),
            lock: None,
        }
    }

    /// Width only; height follows the ratio.
    pub fn width(width: u32) -> Self {
        Self::Absolute {
            width: Some(width),
            height: None,
            lock: Some(Driving::Width),
        }
    }

    /// Height only; width follows the ratio.
    pub fn height(height: u32) -> Self {
        Self::Absolute {
            width: None,
            height: Some(height),
            lock: Some(Driving::Height),
        }
    }

    /// Lock the aspect ratio with `driving` as the authoritative side.
    /// No effect in percentage mode.
    pub fn locked(self, driving: Driving) -> Self {
        match self {
            Self::Absolute { width, height, .. } => Self::Absolute {
                width,
                height,
                lock: Some(driving),
            },
            p => p,
        }
    }

    /// Drop the aspect lock. No effect in percentage mode.
    pub fn unlocked(self) -> Self {
        match self {
            Self::Absolute { width, height, .. } => Self::Absolute {
                width,
                height,
                lock: None,
            },
            p => p,
        }
    }

    /// Whether width and height are tied together.
    pub fn is_aspect_locked(&self) -> bool {
        match self {
            Self::Percentage(_) => true,
            Self::Absolute { lock, .. } => lock.is_some(),
        }
    }
}

/// Output pixel size. Both sides are at least 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResizeResult {
    pub width: u32,
    pub height: u32,
}

impl ResizeResult {
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// As image dimensions, for feeding into another layout step.
    pub fn dimensions(self) -> Result<ImageDimensions, LayoutError> {
        ImageDimensions::new(self.width, self.height)
    }

    /// Whether this equals the source size.
    pub fn is_identity(self, source: ImageDimensions) -> bool {
        self.width == source.width() && self.height == source.height()
    }
}

/// Resolve the output size for `source` under `spec`.
///
/// `custom_ratio` applies only to locked absolute mode; `None` locks to the
/// source's own ratio.
pub fn resolve_dimensions(
    source: ImageDimensions,
    spec: ResizeSpec,
    custom_ratio: Option<AspectRatio>,
) -> Result<ResizeResult, LayoutError> {
    match spec {
        ResizeSpec::Percentage(p) => {
            // Never upscale past the source.
            if !(p > 0.0 && p <= 100.0) {
                return Err(LayoutError::InvalidPercentage(p));
            }
            let factor = p / 100.0;
            Ok(ResizeResult {
                width: to_pixels(source.width() as f64 * factor)?,
                height: to_pixels(source.height() as f64 * factor)?,
            })
        }
        ResizeSpec::Absolute {
            width,
            height,
            lock: None,
        } => {
            let width = width.unwrap_or(source.width());
            let height = height.unwrap_or(source.height());
            if width == 0 || height == 0 {
                return Err(LayoutError::ZeroTargetDimension);
            }
            Ok(ResizeResult { width, height })
        }
        ResizeSpec::Absolute {
            width,
            height,
            lock: Some(driving),
        } => {
            let ratio = custom_ratio.unwrap_or_else(|| AspectRatio::of(source));
            match driving {
                Driving::Width => {
                    let width = width.unwrap_or(source.width());
                    if width == 0 {
                        return Err(LayoutError::ZeroTargetDimension);
                    }
                    Ok(ResizeResult {
                        width,
                        height: to_pixels(width as f64 * ratio.height() / ratio.width())?,
                    })
                }
                Driving::Height => {
                    let height = height.unwrap_or(source.height());
                    if height == 0 {
                        return Err(LayoutError::ZeroTargetDimension);
                    }
                    Ok(ResizeResult {
                        width: to_pixels(height as f64 * ratio.width() / ratio.height())?,
                        height,
                    })
                }
            }
        }
    }
}

/// Round to the nearest pixel, minimum 1.
fn to_pixels(v: f64) -> Result<u32, LayoutError> {
    let r = v.round().max(1.0);
    if r > u32::MAX as f64 {
        return Err(LayoutError::DimensionOverflow);
    }
    Ok(r as u32)
}
