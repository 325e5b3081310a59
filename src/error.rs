//! Error taxonomy for layout and dimension computation.

/// Broad category of a [`LayoutError`].
///
/// Callers use this to pick a message: invalid input means the request
/// itself is wrong, degenerate geometry means the request was well-formed
/// but leaves nothing to draw (e.g. "inset too large for this aspect ratio").
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A parameter is out of its valid domain.
    InvalidInput,
    /// Parameters are valid individually but produce an empty canvas or content area.
    DegenerateGeometry,
}

/// Layout computation error.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Source image has zero width or height.
    #[error("source image has zero width or height")]
    ZeroSourceDimension,
    /// Target width or height is zero.
    #[error("target width or height is zero")]
    ZeroTargetDimension,
    /// An aspect ratio component is zero, negative, or not finite.
    #[error("aspect ratio components must be positive and finite")]
    InvalidAspectRatio,
    /// An aspect ratio string is not of the form `W:H`.
    #[error("aspect ratio must be written as W:H")]
    MalformedAspectRatio,
    /// Inset percentage is `>= 50`, not finite, or off the slider's range.
    #[error("inset percentage {0} is out of range")]
    InsetOutOfRange(f64),
    /// Resize percentage is not in `0 < p <= 100`.
    #[error("resize percentage {0} is outside the range 0..=100")]
    InvalidPercentage(f64),
    /// Encoder quality is outside `0.0..=1.0`.
    #[error("quality {0} is outside the range 0..=1")]
    InvalidQuality(f32),
    /// A computed dimension does not fit in `u32`.
    #[error("computed dimension does not fit in 32 bits")]
    DimensionOverflow,
    /// Canvas rounded to zero pixels on one axis.
    #[error("canvas collapsed to {width}x{height} pixels")]
    EmptyCanvas { width: u32, height: u32 },
    /// Inset leaves no room for the image.
    #[error("inset too large for this aspect ratio: content area is {width}x{height}")]
    ContentAreaEmpty { width: f64, height: f64 },
}

impl LayoutError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyCanvas { .. } | Self::ContentAreaEmpty { .. } => {
                ErrorKind::DegenerateGeometry
            }
            _ => ErrorKind::InvalidInput,
        }
    }

    /// Shorthand for `kind() == ErrorKind::DegenerateGeometry`.
    pub fn is_degenerate(&self) -> bool {
        self.kind() == ErrorKind::DegenerateGeometry
    }
}
