//! Favicon geometry: a centered cover crop scaled to a fixed square icon.
//!
//! ```
//! use framefit::{favicon_plan, ImageDimensions, Rect, Size};
//!
//! let plan = favicon_plan(ImageDimensions::new(1000, 500).unwrap());
//! assert_eq!(plan.crop, Rect::new(250, 0, 500, 500));
//! assert_eq!(plan.output, Size::new(128, 128));
//! ```

#[allow(unused_imports)]
use num_traits::Float as _;

use crate::geometry::{ImageDimensions, Rect, Size};

/// Edge length of the generated icon, in pixels.
pub const FAVICON_SIZE: u32 = 128;

/// Which part of the source to keep and what size to scale it to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FaviconPlan {
    /// Region of the source, matching the output aspect ratio.
    pub crop: Rect,
    /// Final icon size.
    pub output: Size,
}

impl FaviconPlan {
    /// Whether the crop keeps the full source.
    pub fn is_uncropped(&self, source: ImageDimensions) -> bool {
        self.crop.is_full(source.width(), source.height())
    }
}

/// Plan a [`FAVICON_SIZE`] square icon for `source`.
pub fn favicon_plan(source: ImageDimensions) -> FaviconPlan {
    let output = Size::new(FAVICON_SIZE, FAVICON_SIZE);
    FaviconPlan {
        crop: cover_crop(source, output),
        output,
    }
}

/// Largest centered region of `source` with the aspect ratio of `target`.
///
/// Scaling this region to `target` fills it completely with no padding and
/// no distortion ("cover" fit).
pub fn cover_crop(source: ImageDimensions, target: Size) -> Rect {
    let (sw, sh) = (source.width(), source.height());
    let (tw, th) = (target.width.max(1), target.height.max(1));

    // Cross-multiply so exact matches skip floating point.
    if sw as u64 * th as u64 == sh as u64 * tw as u64 {
        return Rect::new(0, 0, sw, sh);
    }

    if sw as f64 / sh as f64 > tw as f64 / th as f64 {
        // Source is wider: keep full height, trim the sides.
        let w = ((sh as f64 * tw as f64 / th as f64).round() as u32).clamp(1, sw);
        Rect::new((sw - w) / 2, 0, w, sh)
    } else {
        // Source is taller: keep full width, trim top and bottom.
        let h = ((sw as f64 * th as f64 / tw as f64).round() as u32).clamp(1, sh);
        Rect::new(0, (sh - h) / 2, sw, h)
    }
}
