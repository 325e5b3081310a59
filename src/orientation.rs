//! EXIF orientation and the display size it implies.
//!
//! Layout always works on the image as the viewer sees it. A phone photo
//! stored as 4000×3000 with orientation 6 is laid out as 3000×4000.

use crate::geometry::ImageDimensions;

/// The eight EXIF orientations, named by the transform that makes the
/// stored pixels display upright.
///
/// ```text
///     1: Normal      2: FlipH       3: Rotate180   4: FlipV
///     ┌───┐          ┌───┐          ┌───┐          ┌───┐
///     │ F │          │ Ꟊ │          │   │          │   │
///     │   │          │   │          │ Ꟊ │          │ F │
///     └───┘          └───┘          └───┘          └───┘
///
///     5: Transpose   6: Rotate90    7: Transverse  8: Rotate270
///     ┌────┐         ┌────┐         ┌────┐         ┌────┐
///     │ F  │         │  F │         │  Ꟊ │         │ Ꟊ  │
///     └────┘         └────┘         └────┘         └────┘
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    Transpose = 5,
    /// 90° clockwise.
    Rotate90 = 6,
    Transverse = 7,
    /// 270° clockwise (90° counter-clockwise).
    Rotate270 = 8,
}

impl Orientation {
    /// All orientations, indexed by EXIF value - 1.
    const ALL: [Self; 8] = [
        Self::Normal,
        Self::FlipHorizontal,
        Self::Rotate180,
        Self::FlipVertical,
        Self::Transpose,
        Self::Rotate90,
        Self::Transverse,
        Self::Rotate270,
    ];

    /// From the EXIF orientation tag (1-8). `None` for anything else.
    pub fn from_exif(value: u8) -> Option<Self> {
        match value {
            1..=8 => Some(Self::ALL[(value - 1) as usize]),
            _ => None,
        }
    }

    /// EXIF orientation tag value (1-8).
    pub fn to_exif(self) -> u8 {
        self as u8
    }

    pub fn is_identity(self) -> bool {
        self == Self::Normal
    }

    /// Whether displaying the image exchanges width and height.
    pub fn swaps_axes(self) -> bool {
        matches!(
            self,
            Self::Transpose | Self::Rotate90 | Self::Transverse | Self::Rotate270
        )
    }

    /// Size of the image as displayed, given its stored size.
    pub fn display_dimensions(self, stored: ImageDimensions) -> ImageDimensions {
        if self.swaps_axes() {
            stored.transposed()
        } else {
            stored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exif_round_trip() {
        for v in 1..=8u8 {
            let o = Orientation::from_exif(v).unwrap();
            assert_eq!(o.to_exif(), v, "round-trip failed for EXIF {v}");
        }
    }

    #[test]
    fn exif_invalid() {
        assert!(Orientation::from_exif(0).is_none());
        assert!(Orientation::from_exif(9).is_none());
        assert!(Orientation::from_exif(255).is_none());
    }

    #[test]
    fn only_quarter_turns_swap() {
        let swapping: [u8; 4] = [5, 6, 7, 8];
        for v in 1..=8u8 {
            let o = Orientation::from_exif(v).unwrap();
            assert_eq!(o.swaps_axes(), swapping.contains(&v), "EXIF {v}");
        }
    }

    #[test]
    fn display_dimensions_of_rotated_photo() {
        let stored = ImageDimensions::new(4000, 3000).unwrap();
        let shown = Orientation::Rotate90.display_dimensions(stored);
        assert_eq!((shown.width(), shown.height()), (3000, 4000));
        assert_eq!(Orientation::FlipVertical.display_dimensions(stored), stored);
    }

    #[test]
    fn default_is_identity() {
        assert!(Orientation::default().is_identity());
        assert!(!Orientation::Rotate180.is_identity());
    }
}
