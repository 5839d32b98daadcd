//! Descriptor type and the three table shapes the scales are built from.

use serde::Serialize;

/// Colour token of a severity band. `hex` gives the palette value used by
/// the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    DarkRed,
    Gray,
}

impl ColorToken {
    pub fn hex(&self) -> &'static str {
        match self {
            ColorToken::Blue => "#007bff",
            ColorToken::Green => "#28a745",
            ColorToken::Yellow => "#ffc107",
            ColorToken::Orange => "#fd7e14",
            ColorToken::Red => "#dc3545",
            ColorToken::DarkRed => "#721c24",
            ColorToken::Gray => "#6c757d",
        }
    }
}

/// Display classification of a single raw value.
///
/// `level` is the ordinal position within its scale, `0` meaning
/// "unknown". Descriptors are derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityDescriptor {
    pub level: u8,
    pub color: ColorToken,
    pub icon: &'static str,
    pub label: &'static str,
}

impl SeverityDescriptor {
    pub const fn new(
        level: u8,
        color: ColorToken,
        icon: &'static str,
        label: &'static str,
    ) -> Self {
        Self {
            level,
            color,
            icon,
            label,
        }
    }

    /// Empty gray descriptor: nothing to show.
    pub const NEUTRAL: SeverityDescriptor = SeverityDescriptor::new(0, ColorToken::Gray, "", "");

    pub fn is_unknown(&self) -> bool {
        self.level == 0
    }
}

/// One band of a [`ThresholdTable`]: values `>= min` fall in this band
/// unless an earlier band already matched.
#[derive(Debug, Clone, Copy)]
pub struct Band {
    pub min: f64,
    pub descriptor: SeverityDescriptor,
}

/// Continuous scale. Bands are ordered by descending `min`; values below
/// the last band get `floor`, absent or NaN values get `missing`.
#[derive(Debug)]
pub struct ThresholdTable {
    pub bands: &'static [Band],
    pub floor: SeverityDescriptor,
    pub missing: SeverityDescriptor,
}

impl ThresholdTable {
    pub fn classify(&self, value: Option<f64>) -> SeverityDescriptor {
        match value {
            Some(v) if !v.is_nan() => self
                .bands
                .iter()
                .find(|band| v >= band.min)
                .map(|band| band.descriptor)
                .unwrap_or(self.floor),
            _ => self.missing,
        }
    }
}

/// Enumerated scale keyed by label, matched after trimming and
/// lowercasing.
#[derive(Debug)]
pub struct LabelTable {
    pub entries: &'static [(&'static str, SeverityDescriptor)],
    pub unknown: SeverityDescriptor,
}

impl LabelTable {
    pub fn classify(&self, label: Option<&str>) -> SeverityDescriptor {
        let Some(label) = label else {
            return self.unknown;
        };
        let normalized = label.trim().to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| *key == normalized)
            .map(|(_, descriptor)| *descriptor)
            .unwrap_or(self.unknown)
    }
}

/// Enumerated scale keyed by an integer level.
#[derive(Debug)]
pub struct LevelTable {
    pub entries: &'static [(i64, SeverityDescriptor)],
    pub unknown: SeverityDescriptor,
}

impl LevelTable {
    pub fn classify(&self, level: Option<i64>) -> SeverityDescriptor {
        level
            .and_then(|level| self.entries.iter().find(|(key, _)| *key == level))
            .map(|(_, descriptor)| *descriptor)
            .unwrap_or(self.unknown)
    }
}
