use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Index of a series within its chart. Stable for the chart's lifetime
/// because series data is immutable once the chart is built.
pub type SeriesId = usize;

/// One AQI observation: hour of day (0..=24) and the reading.
///
/// Samples are not required to be gap-free; rendering spans gaps with a
/// straight segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub hour: f64,
    pub value: f64,
}

impl Sample {
    pub fn new(hour: f64, value: f64) -> Self {
        Self { hour, value }
    }
}

/// A monitor's time series: identity, styling hints, and ordered samples.
/// Treated as read-only for the chart's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub color: Rgb8,
    #[serde(default)]
    pub marker: MarkerShape,
    /// On/off stroke lengths in pixels; empty means solid.
    #[serde(default)]
    pub dash: Vec<u32>,
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new(name: impl Into<String>, color: Rgb8, samples: Vec<Sample>) -> Self {
        Self {
            name: name.into(),
            color,
            marker: MarkerShape::Circle,
            dash: Vec::new(),
            samples,
        }
    }

    pub fn with_marker(mut self, marker: MarkerShape) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_dash(mut self, dash: Vec<u32>) -> Self {
        self.dash = dash;
        self
    }

    /// A series needs at least two samples to draw a line or anchor a label.
    pub fn is_drawable(&self) -> bool {
        self.samples.len() >= 2
    }

    /// Dash pattern sanitized for drawing: any zero-length step degrades the
    /// whole pattern to a solid stroke.
    pub fn effective_dash(&self) -> &[u32] {
        if self.dash.iter().any(|d| *d == 0) {
            &[]
        } else {
            &self.dash
        }
    }
}

/// Marker shape for data points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerShape {
    #[default]
    Circle,
    Square,
    Triangle,
    Diamond,
}

/// Opaque RGB color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Rgb8 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb8 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HexVisitor;

        impl<'de> Visitor<'de> for HexVisitor {
            type Value = Rgb8;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a hex color string like \"#60a5fa\"")
            }

            fn visit_str<E: de::Error>(self, s: &str) -> Result<Rgb8, E> {
                Rgb8::from_hex(s).ok_or_else(|| E::custom(format!("invalid hex color: {s}")))
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

/// One AQI severity tier: values in `(previous max, max]` map to a label
/// and a color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub label: &'static str,
    pub max: f64,
    pub color: Rgb8,
}

// Band colors follow the conventional AQI palette.
const STANDARD_BANDS: [Band; 5] = [
    Band { label: "GOOD", max: 50.0, color: Rgb8::new(0x10, 0xb9, 0x81) },
    Band { label: "MODERATE", max: 100.0, color: Rgb8::new(0xfb, 0xbf, 0x24) },
    Band { label: "USG", max: 150.0, color: Rgb8::new(0xf9, 0x73, 0x16) },
    Band { label: "UNHEALTHY", max: 200.0, color: Rgb8::new(0xef, 0x44, 0x44) },
    Band { label: "VERY UNHEALTHY", max: 300.0, color: Rgb8::new(0xa8, 0x55, 0xf7) },
];

const EXTENDED_BANDS: [Band; 6] = [
    Band { label: "GOOD", max: 50.0, color: Rgb8::new(0x10, 0xb9, 0x81) },
    Band { label: "MODERATE", max: 100.0, color: Rgb8::new(0xfb, 0xbf, 0x24) },
    Band { label: "USG", max: 150.0, color: Rgb8::new(0xf9, 0x73, 0x16) },
    Band { label: "UNHEALTHY", max: 200.0, color: Rgb8::new(0xef, 0x44, 0x44) },
    Band { label: "VERY UNHEALTHY", max: 300.0, color: Rgb8::new(0xa8, 0x55, 0xf7) },
    Band { label: "HAZARDOUS", max: 500.0, color: Rgb8::new(0x7f, 0x1d, 0x1d) },
];

/// Which band table a chart uses. `Standard` caps the value axis at 300,
/// `Extended` at 500.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BandScale {
    #[default]
    Standard,
    Extended,
}

impl BandScale {
    pub fn bands(self) -> &'static [Band] {
        match self {
            BandScale::Standard => &STANDARD_BANDS,
            BandScale::Extended => &EXTENDED_BANDS,
        }
    }

    /// Upper bound of the value axis for this scale.
    pub fn cap(self) -> f64 {
        self.bands().last().map(|b| b.max).unwrap_or(300.0)
    }

    /// Severity color for a reading; values above the scale use the top tier.
    pub fn color_for(self, value: f64) -> Rgb8 {
        for band in self.bands() {
            if value <= band.max {
                return band.color;
            }
        }
        self.bands()
            .last()
            .map(|b| b.color)
            .unwrap_or(Rgb8::new(0, 0, 0))
    }

    /// Caption drawn inside a band; the abbreviated tier is spelled out.
    pub fn caption_for(self, band: &Band) -> &'static str {
        if band.label == "USG" {
            "UNHEALTHY FOR SENSITIVE GROUPS"
        } else {
            band.label
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let c = Rgb8::from_hex("#60a5fa").unwrap();
        assert_eq!(c, Rgb8::new(0x60, 0xa5, 0xfa));
        assert_eq!(c.to_hex(), "#60a5fa");
        assert_eq!(Rgb8::from_hex("34d399"), Some(Rgb8::new(0x34, 0xd3, 0x99)));
        assert_eq!(Rgb8::from_hex("#12345"), None);
        assert_eq!(Rgb8::from_hex("#gggggg"), None);
    }

    #[test]
    fn bands_are_ascending_and_contiguous() {
        for scale in [BandScale::Standard, BandScale::Extended] {
            let mut prev = 0.0;
            for b in scale.bands() {
                assert!(b.max > prev, "{} not ascending", b.label);
                prev = b.max;
            }
            assert_eq!(prev, scale.cap());
        }
    }

    #[test]
    fn color_lookup_matches_tiers() {
        let s = BandScale::Standard;
        assert_eq!(s.color_for(0.0), Rgb8::from_hex("#10b981").unwrap());
        assert_eq!(s.color_for(50.0), Rgb8::from_hex("#10b981").unwrap());
        assert_eq!(s.color_for(51.0), Rgb8::from_hex("#fbbf24").unwrap());
        assert_eq!(s.color_for(150.0), Rgb8::from_hex("#f97316").unwrap());
        // Above the cap: top tier color, never a panic.
        assert_eq!(s.color_for(900.0), Rgb8::from_hex("#a855f7").unwrap());
    }

    #[test]
    fn zero_length_dash_step_degrades_to_solid() {
        let s = Series::new("m", Rgb8::new(1, 2, 3), vec![]).with_dash(vec![12, 0, 3]);
        assert!(s.effective_dash().is_empty());
        let solid = Series::new("m", Rgb8::new(1, 2, 3), vec![]).with_dash(vec![12, 8]);
        assert_eq!(solid.effective_dash(), &[12, 8]);
    }
}
