//! Pixel sizes and rectangles shared by the layout modules.

use crate::error::LayoutError;

/// Natural pixel size of a decoded source image. Both sides are non-zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageDimensions {
    width: u32,
    height: u32,
}

impl ImageDimensions {
    /// Create image dimensions, rejecting a zero side.
    pub const fn new(width: u32, height: u32) -> Result<Self, LayoutError> {
        if width == 0 || height == 0 {
            return Err(LayoutError::ZeroSourceDimension);
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    pub const fn width(self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub const fn height(self) -> u32 {
        self.height
    }

    /// The larger of the two sides.
    pub fn longest_side(self) -> u32 {
        self.width.max(self.height)
    }

    /// The smaller of the two sides.
    pub fn shortest_side(self) -> u32 {
        self.width.min(self.height)
    }

    /// Width over height.
    pub fn ratio(self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Same dimensions with width and height exchanged.
    pub const fn transposed(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl TryFrom<Size> for ImageDimensions {
    type Error = LayoutError;

    fn try_from(size: Size) -> Result<Self, LayoutError> {
        Self::new(size.width, size.height)
    }
}

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in whole pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this rect covers all of a `w`×`h` image.
    pub fn is_full(&self, w: u32, h: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == w && self.height == h
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Sub-pixel placement of the image on a frame canvas.
///
/// Kept fractional so that the centered offsets are exact; snap with
/// [`FrameLayout::content_pixels`](crate::FrameLayout::content_pixels)
/// before handing it to a raster surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContentRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ContentRect {
    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the rect lies entirely inside a `canvas`-sized area anchored at the origin.
    pub fn is_within(&self, canvas: Size) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.right() <= canvas.width as f64
            && self.bottom() <= canvas.height as f64
    }
}
