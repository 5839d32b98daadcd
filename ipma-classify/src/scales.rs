//! The six dashboard severity scales.

use crate::descriptor::{Band, ColorToken, LabelTable, LevelTable, SeverityDescriptor, ThresholdTable};

const UNKNOWN: SeverityDescriptor = SeverityDescriptor::new(0, ColorToken::Gray, "❓", "Desconhecido");

// ───────────────────── Fire risk ─────────────────────

/// Fire risk levels 1 (low) to 5 (maximum).
pub static FIRE_RISK: LevelTable = LevelTable {
    entries: &[
        (1, SeverityDescriptor::new(1, ColorToken::Green, "🔥", "Baixo")),
        (2, SeverityDescriptor::new(2, ColorToken::Yellow, "🔥", "Moderado")),
        (3, SeverityDescriptor::new(3, ColorToken::Orange, "🔥", "Elevado")),
        (4, SeverityDescriptor::new(4, ColorToken::Red, "🔥", "Muito Elevado")),
        (5, SeverityDescriptor::new(5, ColorToken::DarkRed, "🔥", "Máximo")),
    ],
    unknown: UNKNOWN,
};

pub fn fire_risk(level: Option<i64>) -> SeverityDescriptor {
    FIRE_RISK.classify(level)
}

// ───────────────────── UV ─────────────────────

pub static UV_LEVEL: LabelTable = LabelTable {
    entries: &[
        ("baixo", SeverityDescriptor::new(1, ColorToken::Green, "☀️", "Baixo")),
        ("moderado", SeverityDescriptor::new(2, ColorToken::Yellow, "☀️", "Moderado")),
        ("alto", SeverityDescriptor::new(3, ColorToken::Orange, "☀️", "Alto")),
        ("muito alto", SeverityDescriptor::new(4, ColorToken::Red, "☀️", "Muito Alto")),
        ("extremo", SeverityDescriptor::new(5, ColorToken::DarkRed, "☀️", "Extremo")),
    ],
    unknown: UNKNOWN,
};

pub fn uv_level(label: Option<&str>) -> SeverityDescriptor {
    UV_LEVEL.classify(label)
}

// ───────────────────── Drought (PDSI) ─────────────────────

/// Palmer drought severity index. Level grows with dryness. An absent
/// index is neutral; `0.0` is a real reading and classifies as normal.
pub static DROUGHT_INDEX: ThresholdTable = ThresholdTable {
    bands: &[
        Band {
            min: 3.0,
            descriptor: SeverityDescriptor::new(1, ColorToken::Blue, "💧", "Muito Húmido"),
        },
        Band {
            min: 1.0,
            descriptor: SeverityDescriptor::new(2, ColorToken::Green, "💧", "Húmido"),
        },
        Band {
            min: -1.0,
            descriptor: SeverityDescriptor::new(3, ColorToken::Yellow, "🌾", "Normal"),
        },
        Band {
            min: -3.0,
            descriptor: SeverityDescriptor::new(4, ColorToken::Orange, "🏜️", "Seco"),
        },
    ],
    floor: SeverityDescriptor::new(5, ColorToken::Red, "🏜️", "Muito Seco"),
    missing: SeverityDescriptor::NEUTRAL,
};

pub fn drought_index(pdsi: Option<f64>) -> SeverityDescriptor {
    DROUGHT_INDEX.classify(pdsi)
}

// ───────────────────── Seismic magnitude ─────────────────────

pub static SEISMIC_MAGNITUDE: ThresholdTable = ThresholdTable {
    bands: &[
        Band {
            min: 5.0,
            descriptor: SeverityDescriptor::new(5, ColorToken::Red, "🏠", "Forte"),
        },
        Band {
            min: 4.0,
            descriptor: SeverityDescriptor::new(4, ColorToken::Orange, "🏠", "Moderado"),
        },
        Band {
            min: 3.0,
            descriptor: SeverityDescriptor::new(3, ColorToken::Yellow, "🏠", "Ligeiro"),
        },
        Band {
            min: 2.0,
            descriptor: SeverityDescriptor::new(2, ColorToken::Green, "🏠", "Muito Ligeiro"),
        },
    ],
    floor: SeverityDescriptor::new(1, ColorToken::Gray, "🏠", "Micro"),
    missing: UNKNOWN,
};

pub fn seismic_magnitude(magnitude: Option<f64>) -> SeverityDescriptor {
    SEISMIC_MAGNITUDE.classify(magnitude)
}

// ───────────────────── Water quality ─────────────────────

/// Shellfish harvesting zone status.
pub static WATER_STATUS: LabelTable = LabelTable {
    entries: &[
        ("aberta", SeverityDescriptor::new(1, ColorToken::Green, "✅", "Aberta")),
        ("condicional", SeverityDescriptor::new(2, ColorToken::Yellow, "⚠️", "Condicional")),
        ("fechada", SeverityDescriptor::new(3, ColorToken::Red, "❌", "Fechada")),
    ],
    unknown: UNKNOWN,
};

pub fn water_status(status: Option<&str>) -> SeverityDescriptor {
    WATER_STATUS.classify(status)
}

// ───────────────────── Temperature ─────────────────────

/// Station temperature emphasis in °C. Colour only, no label.
pub static TEMPERATURE_BAND: ThresholdTable = ThresholdTable {
    bands: &[
        Band {
            min: 35.0,
            descriptor: SeverityDescriptor::new(5, ColorToken::Red, "🌡️", ""),
        },
        Band {
            min: 25.0,
            descriptor: SeverityDescriptor::new(4, ColorToken::Orange, "🌡️", ""),
        },
        Band {
            min: 15.0,
            descriptor: SeverityDescriptor::new(3, ColorToken::Yellow, "🌡️", ""),
        },
        Band {
            min: 5.0,
            descriptor: SeverityDescriptor::new(2, ColorToken::Green, "🌡️", ""),
        },
    ],
    floor: SeverityDescriptor::new(1, ColorToken::Blue, "🌡️", ""),
    missing: SeverityDescriptor::NEUTRAL,
};

pub fn temperature_band(celsius: Option<f64>) -> SeverityDescriptor {
    TEMPERATURE_BAND.classify(celsius)
}
