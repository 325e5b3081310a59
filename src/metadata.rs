//! Photo metadata as handed over by an EXIF reader.
//!
//! Extraction itself happens elsewhere (exiftool, a browser library, ...).
//! This module models what comes back: an open-ended, ordered mapping from
//! tag name to a small value type, plus the two views the tools build on
//! it: the shutter-count report and the metadata viewer's summary table.
//!
//! # Example
//!
//! ```
//! use framefit::metadata::{ShutterReport, TagMap};
//!
//! let mut tags = TagMap::new();
//! tags.insert("Make", "SONY");
//! tags.insert("Model", "ILCE-7M3");
//! tags.insert("Sony:ShutterCount", 48213.0);
//!
//! let report = ShutterReport::from_tags(&tags);
//! assert_eq!(report.make, "SONY");
//! assert_eq!(report.shutter_count_text(), "48213");
//! ```

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

#[allow(unused_imports)]
use num_traits::Float as _;

/// A single tag value.
#[derive(Clone, Debug, PartialEq)]
pub enum TagValue {
    Number(f64),
    Text(String),
    Date(ExifDateTime),
}

impl TagValue {
    /// Whether the value carries information: non-zero numbers, non-empty
    /// text, any date. Lookups skip values that are not present.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Text(s) => !s.is_empty(),
            Self::Date(_) => true,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Date value, parsing text in EXIF or ISO form if needed.
    pub fn as_date(&self) -> Option<ExifDateTime> {
        match self {
            Self::Date(d) => Some(*d),
            Self::Text(s) => s.parse().ok(),
            Self::Number(_) => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{d}"),
        }
    }
}

impl From<f64> for TagValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for TagValue {
    fn from(n: u32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<ExifDateTime> for TagValue {
    fn from(d: ExifDateTime) -> Self {
        Self::Date(d)
    }
}

/// Calendar date and wall-clock time, no time zone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExifDateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

/// Returned when a date string is neither `YYYY:MM:DD HH:MM:SS` nor ISO 8601.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("expected a date like 2024:01:15 10:30:00")]
pub struct InvalidDate;

impl FromStr for ExifDateTime {
    type Err = InvalidDate;

    /// Accepts `YYYY:MM:DD HH:MM:SS` and `YYYY-MM-DDTHH:MM:SS`; anything
    /// after the seconds (fractions, offsets) is ignored.
    fn from_str(s: &str) -> Result<Self, InvalidDate> {
        let b = s.trim().as_bytes();
        if b.len() < 19 || !matches!(b[10], b' ' | b'T') {
            return Err(InvalidDate);
        }
        let date_sep = b[4];
        if !matches!(date_sep, b':' | b'-') || b[7] != date_sep || b[13] != b':' || b[16] != b':'
        {
            return Err(InvalidDate);
        }
        let num = |range: core::ops::Range<usize>| -> Result<u16, InvalidDate> {
            b[range].iter().try_fold(0u16, |acc, &c| {
                if c.is_ascii_digit() {
                    Ok(acc * 10 + (c - b'0') as u16)
                } else {
                    Err(InvalidDate)
                }
            })
        };
        let d = Self {
            year: num(0..4)?,
            month: num(5..7)? as u8,
            day: num(8..10)? as u8,
            hour: num(11..13)? as u8,
            minute: num(14..16)? as u8,
            second: num(17..19)? as u8,
        };
        let valid = (1..=12).contains(&d.month)
            && (1..=31).contains(&d.day)
            && d.hour < 24
            && d.minute < 60
            && d.second < 61;
        if valid { Ok(d) } else { Err(InvalidDate) }
    }
}

impl fmt::Display for ExifDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Tag name → value, in the order the reader produced them.
///
/// Keys are open-ended (`"Make"`, `"Sony:ShutterCount"`, ...). Absent
/// tags are simply missing; there is no null.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TagMap {
    entries: Vec<(String, TagValue)>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced tag keeps its original position.
    /// Returns the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TagValue>) -> Option<TagValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(core::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&TagValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// First alias, in priority order, whose value is present.
    pub fn get_any<'a>(&'a self, aliases: &[&str]) -> Option<(&'a str, &'a TagValue)> {
        aliases.iter().find_map(|alias| {
            self.entries
                .iter()
                .find(|(k, v)| k == alias && v.is_present())
                .map(|(k, v)| (k.as_str(), v))
        })
    }

    /// Like [`get_any`](Self::get_any), without the matched key.
    pub fn value_of(&self, aliases: &[&str]) -> Option<&TagValue> {
        self.get_any(aliases).map(|(_, v)| v)
    }

    pub fn remove(&mut self, key: &str) -> Option<TagValue> {
        let idx = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<TagValue>> FromIterator<(K, V)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<TagValue>> Extend<(K, V)> for TagMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

// ============================================================================
// Shutter count
// ============================================================================

/// Tags that may hold the shutter actuation count, in priority order.
pub const SHUTTER_COUNT_TAGS: &[&str] = &[
    "ImageCount",
    "ShutterCount",
    "Sony:ShutterCount",
    "Nikon:ShutterCount",
    "Canon:ShutterCount",
];

const UNKNOWN: &str = "Unknown";
const UNAVAILABLE: &str = "Unavailable";

/// Camera identity and shutter count, as returned by the lookup service.
#[derive(Clone, Debug, PartialEq)]
pub struct ShutterReport {
    /// Camera make, `"Unknown"` when missing.
    pub make: String,
    /// Camera model, `"Unknown"` when missing.
    pub model: String,
    /// `None` when no shutter-count tag is present.
    pub shutter_count: Option<TagValue>,
}

impl ShutterReport {
    pub fn from_tags(tags: &TagMap) -> Self {
        let text_or_unknown = |key: &str| {
            tags.value_of(&[key])
                .map(ToString::to_string)
                .unwrap_or_else(|| UNKNOWN.to_string())
        };
        Self {
            make: text_or_unknown("Make"),
            model: text_or_unknown("Model"),
            shutter_count: tags.value_of(SHUTTER_COUNT_TAGS).cloned(),
        }
    }

    /// The count as text, or `"Unavailable"`.
    pub fn shutter_count_text(&self) -> String {
        match &self.shutter_count {
            Some(v) => v.to_string(),
            None => UNAVAILABLE.to_string(),
        }
    }
}

// ============================================================================
// Viewer summary
// ============================================================================

/// One row of the metadata viewer's table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Build the viewer table. Rows whose tags are missing are left out;
/// camera brand, model and copyright always appear (as `"Unknown"`).
pub fn summarize(tags: &TagMap) -> Vec<SummaryRow> {
    let mut rows = Vec::new();
    let mut push = |label: &'static str, value: Option<String>| {
        if let Some(value) = value {
            rows.push(SummaryRow { label, value });
        }
    };
    let text = |aliases: &[&str]| tags.value_of(aliases).map(ToString::to_string);

    push(
        "Camera Brand",
        Some(text(&["Make"]).unwrap_or_else(|| UNKNOWN.to_string())),
    );
    push(
        "Camera Model",
        Some(text(&["Model"]).unwrap_or_else(|| UNKNOWN.to_string())),
    );
    push("Lens Make", text(&["LensMake"]));
    push("Lens Model", text(&["LensModel"]));
    push(
        "Focal Length",
        text(&["FocalLength"]).map(|v| format!("{v} mm")),
    );
    push(
        "Equivalent In Full Frame",
        text(&["FocalLengthIn35mmFormat"]).map(|v| format!("{v} mm")),
    );
    push("Aperture", text(&["FNumber"]).map(|v| format!("f/{v}")));
    push(
        "Shutter Speed",
        tags.value_of(&["ExposureTime"]).map(|v| match v.as_number() {
            Some(t) => format_exposure_time(t),
            None => v.to_string(),
        }),
    );
    push("ISO", text(&["ISO"]));
    push(
        "Exposure Compensation",
        text(&["ExposureCompensation", "ExposureBiasValue"]),
    );
    push("Fujifilm Simulation", text(&["FilmMode", "Simulation"]));
    push("Flash", text(&["Flash"]));
    push(
        "Date",
        tags.value_of(&["DateTimeOriginal"])
            .map(|v| v.as_date().map_or_else(|| v.to_string(), |d| d.to_string())),
    );
    let location = match (text(&["GPSLatitude"]), text(&["GPSLongitude"])) {
        (Some(lat), Some(lon)) => Some(format!("Latitude: {lat}, Longitude: {lon}")),
        _ => None,
    };
    push("Location", location);
    push(
        "Copyright",
        Some(text(&["Copyright"]).unwrap_or_else(|| UNKNOWN.to_string())),
    );
    push(
        "Color Space",
        tags.value_of(&["ColorSpace"]).map(|v| match v.as_number() {
            Some(n) => color_space_name(n),
            None => v.to_string(),
        }),
    );
    rows
}

/// `"2 sec"` for long exposures, `"1/250 sec"` for fractions of a second.
pub fn format_exposure_time(seconds: f64) -> String {
    let denominator = (1.0 / seconds).round();
    if seconds >= 1.0 || seconds <= 0.0 || !denominator.is_finite() {
        format!("{seconds} sec")
    } else {
        format!("1/{denominator} sec")
    }
}

/// EXIF `ColorSpace` tag: 1 is sRGB, 0xFFFF is uncalibrated.
pub fn color_space_name(value: f64) -> String {
    match value {
        v if v == 1.0 => "sRGB".to_string(),
        v if v == 65535.0 => "Uncalibrated".to_string(),
        v => format!("Unknown ({v})"),
    }
}

// ============================================================================
// Serialization
// ============================================================================

#[cfg(feature = "serde")]
mod serialize {
    use super::*;
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    impl Serialize for TagValue {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                // Whole numbers as integers, so counts read `48213`, not `48213.0`.
                Self::Number(n) if n.fract() == 0.0 && n.abs() < 9.0e15 => {
                    serializer.serialize_i64(*n as i64)
                }
                Self::Number(n) => serializer.serialize_f64(*n),
                Self::Text(s) => serializer.serialize_str(s),
                Self::Date(d) => serializer.collect_str(d),
            }
        }
    }

    impl Serialize for ExifDateTime {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    /// `{"Make": ..., "Model": ..., "shutterCount": ...}`
    impl Serialize for ShutterReport {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut s = serializer.serialize_struct("ShutterReport", 3)?;
            s.serialize_field("Make", &self.make)?;
            s.serialize_field("Model", &self.model)?;
            match &self.shutter_count {
                Some(v) => s.serialize_field("shutterCount", v)?,
                None => s.serialize_field("shutterCount", UNAVAILABLE)?,
            }
            s.end()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TagMap {
        [
            ("Make", TagValue::from("FUJIFILM")),
            ("Model", TagValue::from("X-T5")),
            ("FocalLength", TagValue::from(23.0)),
            ("FNumber", TagValue::from(2.8)),
            ("ExposureTime", TagValue::from(0.004)),
            ("ISO", TagValue::from(400u32)),
            ("ExposureCompensation", TagValue::from(0.0)),
            ("ExposureBiasValue", TagValue::from(-0.7)),
            ("FilmMode", TagValue::from("Classic Chrome")),
            ("DateTimeOriginal", TagValue::from("2024:05:01 18:42:07")),
            ("ColorSpace", TagValue::from(1u32)),
        ]
        .into_iter()
        .collect()
    }

    // ── TagMap ──────────────────────────────────────────────────────────

    #[test]
    fn insert_replaces_in_place() {
        let mut tags = TagMap::new();
        tags.insert("A", 1.0);
        tags.insert("B", 2.0);
        assert_eq!(tags.insert("A", "x"), Some(TagValue::Number(1.0)));
        let keys: Vec<&str> = tags.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["A", "B"]);
        assert_eq!(tags.get("A"), Some(&TagValue::from("x")));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn get_any_skips_empty_values() {
        let mut tags = TagMap::new();
        tags.insert("ImageCount", 0.0);
        tags.insert("ShutterCount", 1234.0);
        assert_eq!(
            tags.get_any(SHUTTER_COUNT_TAGS),
            Some(("ShutterCount", &TagValue::Number(1234.0)))
        );
        tags.insert("ImageCount", 99.0);
        assert_eq!(tags.value_of(SHUTTER_COUNT_TAGS), Some(&TagValue::Number(99.0)));
    }

    #[test]
    fn remove_tag() {
        let mut tags = sample();
        assert!(tags.remove("Make").is_some());
        assert!(tags.get("Make").is_none());
        assert!(tags.remove("Make").is_none());
    }

    // ── ExifDateTime ────────────────────────────────────────────────────

    #[test]
    fn parse_exif_and_iso_dates() {
        let d: ExifDateTime = "2024:05:01 18:42:07".parse().unwrap();
        assert_eq!(d.to_string(), "2024-05-01 18:42:07");
        let iso: ExifDateTime = "2024-05-01T18:42:07.120+02:00".parse().unwrap();
        assert_eq!(iso, d);
    }

    #[test]
    fn reject_bad_dates() {
        for s in ["", "2024:05:01", "2024:13:01 00:00:00", "2024-05:01 00:00:00", "abcd:05:01 00:00:00"] {
            assert_eq!(s.parse::<ExifDateTime>(), Err(InvalidDate), "{s}");
        }
    }

    // ── ShutterReport ───────────────────────────────────────────────────

    #[test]
    fn shutter_report_prefers_image_count() {
        let mut tags = TagMap::new();
        tags.insert("Make", "NIKON CORPORATION");
        tags.insert("Nikon:ShutterCount", 5000.0);
        tags.insert("ImageCount", 5001.0);
        let r = ShutterReport::from_tags(&tags);
        assert_eq!(r.make, "NIKON CORPORATION");
        assert_eq!(r.model, "Unknown");
        assert_eq!(r.shutter_count_text(), "5001");
    }

    #[test]
    fn shutter_report_unavailable() {
        let r = ShutterReport::from_tags(&sample());
        assert_eq!(r.shutter_count, None);
        assert_eq!(r.shutter_count_text(), "Unavailable");
        assert_eq!(r.model, "X-T5");
    }

    // ── summarize ───────────────────────────────────────────────────────

    #[test]
    fn summary_rows() {
        let rows = summarize(&sample());
        let get = |label: &str| {
            rows.iter()
                .find(|r| r.label == label)
                .map(|r| r.value.as_str())
        };
        assert_eq!(get("Camera Brand"), Some("FUJIFILM"));
        assert_eq!(get("Focal Length"), Some("23 mm"));
        assert_eq!(get("Aperture"), Some("f/2.8"));
        assert_eq!(get("Shutter Speed"), Some("1/250 sec"));
        assert_eq!(get("ISO"), Some("400"));
        assert_eq!(get("Exposure Compensation"), Some("-0.7"));
        assert_eq!(get("Fujifilm Simulation"), Some("Classic Chrome"));
        assert_eq!(get("Date"), Some("2024-05-01 18:42:07"));
        assert_eq!(get("Copyright"), Some("Unknown"));
        assert_eq!(get("Color Space"), Some("sRGB"));
        assert_eq!(get("Lens Model"), None);
        assert_eq!(get("Location"), None);
    }

    #[test]
    fn summary_of_empty_map() {
        let labels: Vec<&str> = summarize(&TagMap::new()).iter().map(|r| r.label).collect();
        assert_eq!(labels, ["Camera Brand", "Camera Model", "Copyright"]);
    }

    #[test]
    fn location_needs_both_coordinates() {
        let mut tags = TagMap::new();
        tags.insert("GPSLatitude", 48.8584);
        assert!(summarize(&tags).iter().all(|r| r.label != "Location"));
        tags.insert("GPSLongitude", 2.2945);
        let row = summarize(&tags)
            .into_iter()
            .find(|r| r.label == "Location")
            .unwrap();
        assert_eq!(row.value, "Latitude: 48.8584, Longitude: 2.2945");
    }

    #[test]
    fn exposure_time_formats() {
        assert_eq!(format_exposure_time(2.0), "2 sec");
        assert_eq!(format_exposure_time(1.0), "1 sec");
        assert_eq!(format_exposure_time(1.0 / 60.0), "1/60 sec");
        assert_eq!(format_exposure_time(0.3), "1/3 sec");
    }

    #[test]
    fn exposure_time_without_a_reciprocal() {
        assert_eq!(format_exposure_time(-0.25), "-0.25 sec");
        assert_eq!(format_exposure_time(0.0), "0 sec");
        let tiny = f64::MIN_POSITIVE / 4.0;
        assert_eq!(format_exposure_time(tiny), format!("{tiny} sec"));
        assert!(!format_exposure_time(f64::NAN).contains('/'));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn shutter_report_json_shape() {
        let mut tags = TagMap::new();
        tags.insert("Make", "Canon");
        tags.insert("Canon:ShutterCount", 48213.0);
        let json = serde_json::to_value(ShutterReport::from_tags(&tags)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"Make": "Canon", "Model": "Unknown", "shutterCount": 48213})
        );

        let json = serde_json::to_string(&ShutterReport::from_tags(&TagMap::new())).unwrap();
        assert_eq!(
            json,
            r#"{"Make":"Unknown","Model":"Unknown","shutterCount":"Unavailable"}"#
        );
    }

    #[test]
    fn color_space_names() {
        assert_eq!(color_space_name(1.0), "sRGB");
        assert_eq!(color_space_name(65535.0), "Uncalibrated");
        assert_eq!(color_space_name(2.0), "Unknown (2)");
    }
}
