//! Width:height ratio constraints and the presets offered by the tools.

use core::fmt;
use core::str::FromStr;

use crate::error::LayoutError;
use crate::geometry::ImageDimensions;

/// A width:height ratio, e.g. `16:9`.
///
/// Components are kept as written rather than reduced, so `4:5` and `8:10`
/// compare unequal but produce the same [`ratio`](Self::ratio).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

impl AspectRatio {
    /// 1:1
    pub const SQUARE: Self = Self::from_const(1, 1);
    /// 4:5
    pub const PORTRAIT_4_5: Self = Self::from_const(4, 5);
    /// 5:4
    pub const LANDSCAPE_5_4: Self = Self::from_const(5, 4);
    /// 9:16
    pub const PORTRAIT_9_16: Self = Self::from_const(9, 16);
    /// 16:9
    pub const WIDESCREEN: Self = Self::from_const(16, 9);
    /// 4:3
    pub const STANDARD: Self = Self::from_const(4, 3);
    /// 3:2
    pub const CLASSIC: Self = Self::from_const(3, 2);
    /// 2:1
    pub const PANORAMA: Self = Self::from_const(2, 1);

    /// Ratios offered by the frame-inset designer, in display order.
    pub const FRAME_PRESETS: [Self; 6] = [
        Self::SQUARE,
        Self::PORTRAIT_4_5,
        Self::LANDSCAPE_5_4,
        Self::PORTRAIT_9_16,
        Self::WIDESCREEN,
        Self::PANORAMA,
    ];

    /// Custom ratios offered by the resizer (besides "Original"), in display order.
    pub const RESIZE_PRESETS: [Self; 5] = [
        Self::SQUARE,
        Self::WIDESCREEN,
        Self::STANDARD,
        Self::CLASSIC,
        Self::PANORAMA,
    ];

    const fn from_const(width: u32, height: u32) -> Self {
        Self {
            width: width as f64,
            height: height as f64,
        }
    }

    /// Create a ratio. Both components must be finite and positive.
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(LayoutError::InvalidAspectRatio);
        }
        Ok(Self { width, height })
    }

    /// The ratio of an image's own width and height.
    pub fn of(image: ImageDimensions) -> Self {
        Self {
            width: image.width() as f64,
            height: image.height() as f64,
        }
    }

    /// Parse a resizer ratio choice: `"Original"` (case-insensitive) yields
    /// `None`, anything else must be `W:H`.
    ///
    /// ```
    /// use framefit::AspectRatio;
    ///
    /// assert_eq!(AspectRatio::parse_choice("Original").unwrap(), None);
    /// assert_eq!(
    ///     AspectRatio::parse_choice("16:9").unwrap(),
    ///     Some(AspectRatio::WIDESCREEN)
    /// );
    /// ```
    pub fn parse_choice(s: &str) -> Result<Option<Self>, LayoutError> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("original") {
            return Ok(None);
        }
        s.parse().map(Some)
    }

    /// Width component.
    pub fn width(self) -> f64 {
        self.width
    }

    /// Height component.
    pub fn height(self) -> f64 {
        self.height
    }

    /// `width / height`.
    pub fn ratio(self) -> f64 {
        self.width / self.height
    }

    /// Landscape or square (`ratio() >= 1`).
    pub fn is_landscape(self) -> bool {
        self.ratio() >= 1.0
    }

    /// Whether the frame designer offers this ratio.
    pub fn is_frame_preset(self) -> bool {
        Self::FRAME_PRESETS.contains(&self)
    }

    /// Whether the resizer offers this ratio as a custom lock.
    pub fn is_resize_preset(self) -> bool {
        Self::RESIZE_PRESETS.contains(&self)
    }
}

impl FromStr for AspectRatio {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, LayoutError> {
        let (w, h) = s
            .trim()
            .split_once(':')
            .ok_or(LayoutError::MalformedAspectRatio)?;
        let w: f64 = w
            .trim()
            .parse()
            .map_err(|_| LayoutError::MalformedAspectRatio)?;
        let h: f64 = h
            .trim()
            .parse()
            .map_err(|_| LayoutError::MalformedAspectRatio)?;
        Self::new(w, h)
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_presets() {
        assert_eq!("1:1".parse::<AspectRatio>().unwrap(), AspectRatio::SQUARE);
        assert_eq!(
            " 9 : 16 ".parse::<AspectRatio>().unwrap(),
            AspectRatio::PORTRAIT_9_16
        );
        assert_eq!(
            "1.91:1".parse::<AspectRatio>().unwrap().ratio(),
            1.91
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            "16x9".parse::<AspectRatio>(),
            Err(LayoutError::MalformedAspectRatio)
        );
        assert_eq!(
            "a:9".parse::<AspectRatio>(),
            Err(LayoutError::MalformedAspectRatio)
        );
        assert_eq!(
            "16:0".parse::<AspectRatio>(),
            Err(LayoutError::InvalidAspectRatio)
        );
        assert_eq!(
            "-4:3".parse::<AspectRatio>(),
            Err(LayoutError::InvalidAspectRatio)
        );
    }

    #[test]
    fn new_rejects_non_finite() {
        assert!(AspectRatio::new(f64::NAN, 1.0).is_err());
        assert!(AspectRatio::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn choice_original() {
        assert_eq!(AspectRatio::parse_choice("original").unwrap(), None);
        assert_eq!(
            AspectRatio::parse_choice("3:2").unwrap(),
            Some(AspectRatio::CLASSIC)
        );
        assert!(AspectRatio::parse_choice("").is_err());
    }

    #[test]
    fn display_round_trips() {
        for preset in AspectRatio::FRAME_PRESETS {
            let text = preset.to_string();
            assert_eq!(text.parse::<AspectRatio>().unwrap(), preset);
        }
    }

    #[test]
    fn preset_membership() {
        let classic: AspectRatio = "3:2".parse().unwrap();
        assert!(classic.is_resize_preset());
        assert!(!classic.is_frame_preset());
        assert!(AspectRatio::PORTRAIT_9_16.is_frame_preset());
        assert!(!AspectRatio::PORTRAIT_9_16.is_resize_preset());
        // Same ratio, different spelling.
        assert!(!"8:10".parse::<AspectRatio>().unwrap().is_frame_preset());
        for ratio in [AspectRatio::SQUARE, AspectRatio::WIDESCREEN, AspectRatio::PANORAMA] {
            assert!(ratio.is_frame_preset() && ratio.is_resize_preset());
        }
    }

    #[test]
    fn square_counts_as_landscape() {
        assert!(AspectRatio::SQUARE.is_landscape());
        assert!(!AspectRatio::PORTRAIT_4_5.is_landscape());
    }
}
