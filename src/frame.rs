//! Canvas-frame layout: place an image, centered and inset, on a canvas of a
//! chosen aspect ratio.
//!
//! The canvas keeps the source's longest side, so framing never upscales the
//! output. The image is scaled down (never up) to fit inside the inset
//! border and centered on both axes.
//!
//! # Example
//!
//! ```
//! use framefit::{AspectRatio, FrameSpec, ImageDimensions, InsetSpec, Size};
//!
//! let image = ImageDimensions::new(4000, 3000).unwrap();
//! let layout = FrameSpec::new(AspectRatio::SQUARE)
//!     .inset(InsetSpec::new(5.0).unwrap())
//!     .compute(image)
//!     .unwrap();
//!
//! assert_eq!(layout.canvas, Size::new(4000, 4000));
//! assert_eq!(layout.content_pixels().x, 200);
//! assert_eq!(layout.content_pixels().y, 650);
//! ```

#[allow(unused_imports)]
use num_traits::Float as _;

use crate::aspect::AspectRatio;
use crate::color::CanvasColor;
use crate::error::LayoutError;
use crate::geometry::{ContentRect, ImageDimensions, Rect, Size};

/// Border width as a percentage of the canvas's shorter side.
///
/// Valid values are finite and below 50; anything at or above 50 would
/// leave no room for the image. Negative values act as no inset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InsetSpec {
    percentage: f64,
}

impl InsetSpec {
    /// No border.
    pub const NONE: Self = Self { percentage: 0.0 };

    /// The frame designer's starting value, 5%.
    pub const DEFAULT: Self = Self { percentage: 5.0 };

    /// Slider bounds of the frame designer, in whole percent.
    pub const SLIDER_MIN: u8 = 1;
    pub const SLIDER_MAX: u8 = 20;

    /// Create an inset, rejecting percentages `>= 50` and non-finite values.
    pub fn new(percentage: f64) -> Result<Self, LayoutError> {
        if !percentage.is_finite() || percentage >= 50.0 {
            return Err(LayoutError::InsetOutOfRange(percentage));
        }
        Ok(Self { percentage })
    }

    /// Inset picked on the frame designer's slider, which stops at
    /// [`SLIDER_MIN`](Self::SLIDER_MIN) and [`SLIDER_MAX`](Self::SLIDER_MAX).
    pub fn from_slider(percentage: f64) -> Result<Self, LayoutError> {
        let range = Self::SLIDER_MIN as f64..=Self::SLIDER_MAX as f64;
        if !range.contains(&percentage) {
            return Err(LayoutError::InsetOutOfRange(percentage));
        }
        Ok(Self { percentage })
    }

    /// Percentage as given.
    pub fn percentage(self) -> f64 {
        self.percentage
    }

    /// Inset in pixels for a canvas of the given size.
    pub fn pixels(self, canvas: Size) -> f64 {
        (self.percentage.max(0.0) / 100.0) * canvas.width.min(canvas.height) as f64
    }
}

impl Default for InsetSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Frame request: target aspect ratio, inset and background.
///
/// Defaults match the frame designer's initial state: 1:1, 5% inset, white.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameSpec {
    pub aspect: AspectRatio,
    pub inset: InsetSpec,
    pub background: CanvasColor,
}

impl Default for FrameSpec {
    fn default() -> Self {
        Self::new(AspectRatio::SQUARE)
    }
}

impl FrameSpec {
    /// Frame with the given aspect ratio and default inset/background.
    pub fn new(aspect: AspectRatio) -> Self {
        Self {
            aspect,
            inset: InsetSpec::DEFAULT,
            background: CanvasColor::WHITE,
        }
    }

    /// Set the inset.
    pub fn inset(mut self, inset: InsetSpec) -> Self {
        self.inset = inset;
        self
    }

    /// Set the canvas background.
    pub fn background(mut self, color: CanvasColor) -> Self {
        self.background = color;
        self
    }

    /// Compute the layout for an image of the given dimensions.
    pub fn compute(&self, image: ImageDimensions) -> Result<FrameLayout, LayoutError> {
        if !self.inset.percentage.is_finite() || self.inset.percentage >= 50.0 {
            return Err(LayoutError::InsetOutOfRange(self.inset.percentage));
        }

        let canvas = canvas_size(image.longest_side(), self.aspect)?;
        let inset_pixels = self.inset.pixels(canvas);

        let area_w = canvas.width as f64 - 2.0 * inset_pixels;
        let area_h = canvas.height as f64 - 2.0 * inset_pixels;
        if area_w <= 0.0 || area_h <= 0.0 {
            return Err(LayoutError::ContentAreaEmpty {
                width: area_w,
                height: area_h,
            });
        }

        let iw = image.width() as f64;
        let ih = image.height() as f64;
        // Fit inside the area; never upscale.
        let scale = (area_w / iw).min(area_h / ih).min(1.0);
        // The product can land an ulp past the bounding side.
        let width = (iw * scale).min(area_w);
        let height = (ih * scale).min(area_h);

        Ok(FrameLayout {
            canvas,
            content: ContentRect {
                x: ((canvas.width as f64 - width) / 2.0).max(0.0),
                y: ((canvas.height as f64 - height) / 2.0).max(0.0),
                width,
                height,
            },
            inset_pixels,
            background: self.background,
        })
    }
}

/// Computed frame: canvas size, image placement and fill color.
///
/// To rasterize, fill the whole canvas with `background`, then draw the
/// source image into `content` (or [`content_pixels`](Self::content_pixels)).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameLayout {
    /// Output canvas dimensions.
    pub canvas: Size,
    /// Where the scaled image sits on the canvas.
    pub content: ContentRect,
    /// Border width in pixels (before centering slack).
    pub inset_pixels: f64,
    /// Canvas fill.
    pub background: CanvasColor,
}

impl FrameLayout {
    /// Content rectangle snapped to whole pixels.
    ///
    /// Sides are rounded and kept at least 1; the origin is rounded and then
    /// pulled back if needed so the rect stays on the canvas.
    pub fn content_pixels(&self) -> Rect {
        let cw = self.canvas.width;
        let ch = self.canvas.height;
        let w = (self.content.width.round() as u32).clamp(1, cw);
        let h = (self.content.height.round() as u32).clamp(1, ch);
        let x = (self.content.x.round() as u32).min(cw - w);
        let y = (self.content.y.round() as u32).min(ch - h);
        Rect::new(x, y, w, h)
    }

    /// Whether the scaled image is smaller than the source (downscale needed).
    pub fn needs_resize(&self, source: ImageDimensions) -> bool {
        let px = self.content_pixels();
        px.width != source.width() || px.height != source.height()
    }
}

/// Compute a frame layout with the default white background.
///
/// ```
/// use framefit::{compute_frame_layout, AspectRatio, ImageDimensions, InsetSpec, Size};
///
/// let layout = compute_frame_layout(
///     ImageDimensions::new(1080, 1920).unwrap(),
///     AspectRatio::WIDESCREEN,
///     InsetSpec::NONE,
/// )
/// .unwrap();
/// assert_eq!(layout.canvas, Size::new(1920, 1080));
/// ```
pub fn compute_frame_layout(
    image: ImageDimensions,
    aspect: AspectRatio,
    inset: InsetSpec,
) -> Result<FrameLayout, LayoutError> {
    FrameSpec::new(aspect).inset(inset).compute(image)
}

/// Canvas whose longest side equals `longest`, at the given aspect ratio.
/// Rounded once, after all scaling.
fn canvas_size(longest: u32, aspect: AspectRatio) -> Result<Size, LayoutError> {
    let longest = longest as f64;
    let target = aspect.ratio();

    let (mut w, mut h) = if target >= 1.0 {
        (longest, longest / target)
    } else {
        (longest * target, longest)
    };

    // Absorbs floating-point drift only; the branches above already keep
    // both sides within `longest`.
    if w > longest {
        let s = longest / w;
        w *= s;
        h *= s;
    }
    if h > longest {
        let s = longest / h;
        w *= s;
        h *= s;
    }

    let width = w.round() as u32;
    let height = h.round() as u32;
    if width == 0 || height == 0 {
        return Err(LayoutError::EmptyCanvas { width, height });
    }
    Ok(Size::new(width, height))
}
