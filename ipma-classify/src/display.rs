//! Warning levels, icon lookups and value formatting used when rendering.

use crate::descriptor::{ColorToken, LabelTable, SeverityDescriptor};
use ipma_types::{AgriculturalType, Region};

/// Weather warning colour levels.
pub static WARNING_LEVEL: LabelTable = LabelTable {
    entries: &[
        ("verde", SeverityDescriptor::new(1, ColorToken::Green, "⚠️", "Verde")),
        ("amarelo", SeverityDescriptor::new(2, ColorToken::Yellow, "⚠️", "Amarelo")),
        ("laranja", SeverityDescriptor::new(3, ColorToken::Orange, "⚠️", "Laranja")),
        ("vermelho", SeverityDescriptor::new(4, ColorToken::Red, "⚠️", "Vermelho")),
    ],
    unknown: SeverityDescriptor::new(0, ColorToken::Gray, "⚠️", "Desconhecido"),
};

pub fn warning_level(level: Option<&str>) -> SeverityDescriptor {
    WARNING_LEVEL.classify(level)
}

/// Ordered keyword → icon table; the first entry with a keyword contained
/// in the lowercased text wins.
type KeywordIcons = &'static [(&'static [&'static str], &'static str)];

const WARNING_ICONS: KeywordIcons = &[
    (&["vento"], "🌬️"),
    (&["chuva", "precipitação"], "🌧️"),
    (&["neve"], "❄️"),
    (&["trovoada"], "⛈️"),
    (&["temperatura"], "🌡️"),
    (&["nevoeiro"], "🌫️"),
    (&["agitação"], "🌊"),
];

const WEATHER_ICONS: KeywordIcons = &[
    (&["limpo", "sol"], "☀️"),
    (&["nublado", "nuvens"], "☁️"),
    (&["chuva", "chuvoso"], "🌧️"),
    (&["vento"], "🌬️"),
    (&["neve"], "❄️"),
    (&["trovoada"], "⛈️"),
];

const SERVICE_STATUS_ICONS: KeywordIcons = &[
    (&["🟢", "✅"], "🟢"),
    (&["🔴", "❌"], "🔴"),
    (&["🟡", "⚠️"], "🟡"),
];

fn keyword_icon(table: KeywordIcons, text: &str, fallback: &'static str) -> &'static str {
    let lowered = text.to_lowercase();
    table
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, icon)| *icon)
        .unwrap_or(fallback)
}

/// Icon for a warning's type or phenomenon.
pub fn warning_icon(warning_type: &str) -> &'static str {
    keyword_icon(WARNING_ICONS, warning_type, "⚠️")
}

/// Icon for a forecast condition description.
pub fn weather_icon(description: &str) -> &'static str {
    keyword_icon(WEATHER_ICONS, description, "🌤️")
}

/// Traffic-light icon for a dashboard service status string.
pub fn service_status_icon(status: &str) -> &'static str {
    keyword_icon(SERVICE_STATUS_ICONS, status, "📊")
}

pub fn region_flag(region: Region) -> &'static str {
    match region {
        Region::Continente => "🇵🇹",
        Region::Acores | Region::Madeira => "🏝️",
    }
}

pub fn agricultural_icon(kind: AgriculturalType) -> &'static str {
    match kind {
        AgriculturalType::Evapotranspiration => "💨",
        AgriculturalType::Precipitation => "🌧️",
        AgriculturalType::TemperatureMin => "🌡️❄️",
        AgriculturalType::TemperatureMax => "🌡️🔥",
        AgriculturalType::Pdsi => "🏜️",
    }
}

const WIND_ARROWS: &[(&str, &str)] = &[
    ("N", "⬆️"),
    ("NE", "↗️"),
    ("E", "➡️"),
    ("SE", "↘️"),
    ("S", "⬇️"),
    ("SW", "↙️"),
    ("W", "⬅️"),
    ("NW", "↖️"),
];

/// Arrow for a compass direction; unrecognised tokens are returned as-is
/// and an absent direction renders empty.
pub fn wind_arrow(direction: Option<&str>) -> String {
    let Some(direction) = direction else {
        return String::new();
    };
    let upper = direction.trim().to_uppercase();
    WIND_ARROWS
        .iter()
        .find(|(token, _)| *token == upper)
        .map(|(_, arrow)| arrow.to_string())
        .unwrap_or_else(|| direction.to_string())
}

/// `12.3°C`, or `N/A` when absent.
pub fn format_temperature(celsius: Option<f64>) -> String {
    match celsius {
        Some(t) => format!("{:.1}°C", t),
        None => "N/A".to_string(),
    }
}

/// Reading of an agricultural series with its unit, or `N/A`.
pub fn format_agricultural_value(kind: AgriculturalType, value: Option<f64>) -> String {
    let Some(v) = value else {
        return "N/A".to_string();
    };
    match kind {
        AgriculturalType::Evapotranspiration => format!("{:.2} mm", v),
        AgriculturalType::Precipitation => format!("{:.1} mm", v),
        AgriculturalType::TemperatureMin | AgriculturalType::TemperatureMax => {
            format!("{:.1}°C", v)
        }
        AgriculturalType::Pdsi => format!("{:.2}", v),
    }
}

/// Capitalise the first character, as selector labels do for district
/// and service names.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_level_colors() {
        assert_eq!(warning_level(Some("amarelo")).color, ColorToken::Yellow);
        assert_eq!(warning_level(Some("VERMELHO")).color, ColorToken::Red);
        assert!(warning_level(Some("roxo")).is_unknown());
    }

    #[test]
    fn test_warning_icon_first_match_wins() {
        assert_eq!(warning_icon("Vento forte"), "🌬️");
        assert_eq!(warning_icon("Precipitação"), "🌧️");
        assert_eq!(warning_icon("Agitação Marítima"), "🌊");
        assert_eq!(warning_icon("Tempo quente"), "⚠️");
    }

    #[test]
    fn test_weather_icon() {
        assert_eq!(weather_icon("Céu limpo"), "☀️");
        assert_eq!(weather_icon("Céu muito nublado"), "☁️");
        assert_eq!(weather_icon("Aguaceiros"), "🌤️");
    }

    #[test]
    fn test_service_status_icon() {
        assert_eq!(service_status_icon("🟢 Operacional"), "🟢");
        assert_eq!(service_status_icon("❌ Falha"), "🔴");
        assert_eq!(service_status_icon("⚠️ Degradado"), "🟡");
        assert_eq!(service_status_icon("Operacional"), "📊");
    }

    #[test]
    fn test_wind_arrow() {
        assert_eq!(wind_arrow(Some("nw")), "↖️");
        assert_eq!(wind_arrow(Some("NNE")), "NNE");
        assert_eq!(wind_arrow(None), "");
    }

    #[test]
    fn test_format_values_keep_zero() {
        assert_eq!(format_temperature(Some(0.0)), "0.0°C");
        assert_eq!(format_temperature(None), "N/A");
        assert_eq!(
            format_agricultural_value(AgriculturalType::Precipitation, Some(0.0)),
            "0.0 mm"
        );
        assert_eq!(
            format_agricultural_value(AgriculturalType::Evapotranspiration, Some(3.456)),
            "3.46 mm"
        );
        assert_eq!(format_agricultural_value(AgriculturalType::Pdsi, None), "N/A");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("évora"), "Évora");
        assert_eq!(capitalize(""), "");
    }
}
