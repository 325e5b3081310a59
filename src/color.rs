//! Opaque canvas background colors: hex (`#RGB`, `#RRGGBB`) and CSS named colors.

use core::fmt;
use core::str::FromStr;

/// Opaque sRGB color used to fill the frame canvas.
///
/// There is no alpha: the frame background is always fully covered, so
/// JPEG export and PNG export produce the same pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanvasColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for CanvasColor {
    fn default() -> Self {
        Self::WHITE
    }
}

impl CanvasColor {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const SILVER: Self = Self::rgb(192, 192, 192);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const ORANGE: Self = Self::rgb(255, 165, 0);
    pub const RED: Self = Self::rgb(255, 0, 0);

    /// Background swatches offered by the frame-inset designer, in display order.
    pub const FRAME_PALETTE: [(&'static str, Self); 6] = [
        ("white", Self::WHITE),
        ("silver", Self::SILVER),
        ("gray", Self::GRAY),
        ("black", Self::BLACK),
        ("orange", Self::ORANGE),
        ("red", Self::RED),
    ];

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `[r, g, b, 255]`, ready for an RGBA pixel buffer.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }

    /// Parse a hex or CSS named color.
    ///
    /// Accepts:
    /// - `#RGB` or `RGB`: 3-digit hex
    /// - `#RRGGBB` or `RRGGBB`: 6-digit hex
    /// - CSS named colors (case-insensitive): `white`, `orange`, `grey`, ...
    ///
    /// Forms carrying alpha are rejected since the canvas is opaque.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }
        let hex = s.strip_prefix('#').unwrap_or(s);
        parse_hex(hex).or_else(|| lookup_named(s))
    }
}

impl FromStr for CanvasColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, UnknownColor> {
        Self::parse(s).ok_or(UnknownColor)
    }
}

impl fmt::Display for CanvasColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Returned by [`CanvasColor::from_str`] for strings that are neither hex nor a known name.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized color; expected #RGB, #RRGGBB or a CSS color name")]
pub struct UnknownColor;

fn parse_hex(hex: &str) -> Option<CanvasColor> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => Some(CanvasColor::rgb(
            expand_nibble(bytes[0])?,
            expand_nibble(bytes[1])?,
            expand_nibble(bytes[2])?,
        )),
        6 => Some(CanvasColor::rgb(
            parse_byte(bytes[0], bytes[1])?,
            parse_byte(bytes[2], bytes[3])?,
            parse_byte(bytes[4], bytes[5])?,
        )),
        _ => None,
    }
}

/// 'f' → 0xFF, 'a' → 0xAA.
fn expand_nibble(ch: u8) -> Option<u8> {
    let n = hex_val(ch)?;
    Some(n << 4 | n)
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

fn parse_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(hex_val(hi)? << 4 | hex_val(lo)?)
}

fn lookup_named(name: &str) -> Option<CanvasColor> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| c)
}

/// CSS basic keywords plus `orange` and the `grey` spelling.
const NAMED_COLORS: &[(&str, CanvasColor)] = &[
    ("aqua", CanvasColor::rgb(0, 255, 255)),
    ("black", CanvasColor::BLACK),
    ("blue", CanvasColor::rgb(0, 0, 255)),
    ("fuchsia", CanvasColor::rgb(255, 0, 255)),
    ("gray", CanvasColor::GRAY),
    ("green", CanvasColor::rgb(0, 128, 0)),
    ("grey", CanvasColor::GRAY),
    ("lime", CanvasColor::rgb(0, 255, 0)),
    ("maroon", CanvasColor::rgb(128, 0, 0)),
    ("navy", CanvasColor::rgb(0, 0, 128)),
    ("olive", CanvasColor::rgb(128, 128, 0)),
    ("orange", CanvasColor::ORANGE),
    ("purple", CanvasColor::rgb(128, 0, 128)),
    ("red", CanvasColor::RED),
    ("silver", CanvasColor::SILVER),
    ("teal", CanvasColor::rgb(0, 128, 128)),
    ("white", CanvasColor::WHITE),
    ("yellow", CanvasColor::rgb(255, 255, 0)),
];
