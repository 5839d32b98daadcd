//! Plain-text rendering of the controller's views.

use ipma_classify::display::{capitalize, region_flag};
use ipma_controller::view::{
    agriculture_panel, forecast_view, marine_panel, seismic_summary, service_rows,
    stations_panel, warning_rows,
};
use ipma_controller::ViewState;
use ipma_types::dashboard::ServiceHealth;

const NO_DATA: &str = "Sem dados disponíveis";

pub fn health(health: &ServiceHealth) -> Vec<String> {
    let icon = if health.is_healthy() { "🟢" } else { "🔴" };
    let mut lines = vec![
        format!("{} {} (v{})", icon, health.status, health.version),
        health.message.clone(),
    ];
    if let Some(services) = &health.services {
        lines.push(format!("  IPMA: {}", services.ipma_connection));
        lines.push(format!("  Endpoints: {}", services.total_endpoints));
        lines.push(format!("  Cache: {}", services.cache_status));
    }
    lines
}

pub fn dashboard(state: &ViewState) -> Vec<String> {
    let mut lines = vec![state.api_status.to_string()];
    let Some(data) = &state.cache.dashboard.data else {
        lines.push(NO_DATA.to_string());
        return lines;
    };
    let summary = &data.data_summary;
    lines.push(format!(
        "Versão {} · actualizado {}",
        data.version, data.last_update
    ));
    lines.push(format!("Distritos: {}", summary.districts_available));
    lines.push(format!("Avisos activos: {}", summary.active_warnings));
    lines.push(format!("Sismos recentes: {}", summary.recent_seismic_events));
    lines.push(format!("Estações: {}", summary.weather_stations));
    for (name, status, icon) in service_rows(&state.cache) {
        lines.push(format!("  {} {}: {}", icon, capitalize(name), status));
    }
    if let Some(links) = &state.cache.dashboard.quick_links {
        lines.push(format!("Documentação: {}", links.documentation));
    }
    lines
}

pub fn forecast(state: &ViewState) -> Vec<String> {
    let Some(view) = forecast_view(&state.cache) else {
        return vec![NO_DATA.to_string()];
    };
    let mut lines = vec![
        format!(
            "{} ({}) · {}",
            view.forecast.location, view.forecast.district, view.forecast.date
        ),
        format!("Mín {} · Máx {}", view.min_temperature, view.max_temperature),
    ];
    for row in view.hours {
        lines.push(format!(
            "  {} {} {} {} {}",
            row.hour.hour,
            row.icon,
            row.temperature,
            row.hour.weather_condition.description,
            row.wind_arrow
        ));
    }
    lines
}

pub fn warnings(state: &ViewState, level: Option<&str>) -> Vec<String> {
    let level = level.map(|l| l.trim().to_lowercase());
    let lines: Vec<String> = warning_rows(&state.cache)
        .into_iter()
        .filter(|row| match &level {
            Some(level) => row.warning.level.to_lowercase() == *level,
            None => true,
        })
        .map(|row| {
            format!(
                "{} [{}] {} · {}: {} ({} → {})",
                row.icon,
                row.level.label,
                row.warning.area,
                row.warning.warning_type,
                row.warning.description,
                row.warning.start_time,
                row.warning.end_time
            )
        })
        .collect();
    if lines.is_empty() {
        return vec!["Nenhum aviso activo".to_string()];
    }
    lines
}

pub fn seismic(state: &ViewState) -> Vec<String> {
    let region = state.cache.seismic.region;
    let summary = seismic_summary(&state.cache);
    let mut lines = vec![format!(
        "{} {} · {} eventos",
        region_flag(region),
        region.display_name(),
        summary.total
    )];
    match summary.highest_magnitude {
        Some(magnitude) => lines.push(format!(
            "Maior magnitude: {:.1} ({})",
            magnitude, summary.highest_severity.label
        )),
        None => lines.push(NO_DATA.to_string()),
    }
    for event in summary.events {
        lines.push(format!(
            "  M{:.1} {} · {} · {:.0} km · {}",
            event.item.magnitude,
            event.severity.label,
            event.item.location,
            event.item.depth,
            event.item.time
        ));
    }
    lines
}

pub fn marine(state: &ViewState) -> Vec<String> {
    let panel = marine_panel(&state.cache);
    let mut lines = vec!["Risco de incêndio".to_string()];
    for risk in panel.fire_risk {
        lines.push(format!(
            "  {} {} · {}",
            risk.severity.icon, risk.item.location, risk.severity.label
        ));
    }
    lines.push("Índice UV".to_string());
    for uv in panel.uv_index {
        lines.push(format!(
            "  {} {} · {:.1} ({})",
            uv.severity.icon, uv.item.location, uv.item.uv_index, uv.severity.label
        ));
    }
    lines.push("Estado do mar".to_string());
    for sea in panel.sea_state {
        let waves = sea
            .wave_height
            .map(|h| format!("{:.1} m", h))
            .unwrap_or_else(|| "N/A".to_string());
        lines.push(format!("  🌊 {} · ondas {}", sea.location, waves));
    }
    lines
}

pub fn stations(state: &ViewState) -> Vec<String> {
    let panel = stations_panel(&state.cache);
    let mut lines = vec!["Observações recentes".to_string()];
    for row in panel.observations {
        lines.push(format!(
            "  {} · {} {}",
            row.observation.station_name, row.temperature, row.wind_arrow
        ));
    }
    lines.push("Estações".to_string());
    for station in panel.stations {
        lines.push(format!(
            "  {} ({:.3}, {:.3})",
            station.name, station.coordinates.latitude, station.coordinates.longitude
        ));
    }
    lines
}

pub fn agriculture(state: &ViewState) -> Vec<String> {
    let panel = agriculture_panel(&state.cache);
    let mut lines = vec![format!("{} {}", panel.icon, panel.title)];
    for row in panel.records {
        let mut line = format!(
            "  {} · {} · {}",
            row.record.municipality, row.record.date, row.value
        );
        if !row.drought.label.is_empty() {
            line.push_str(&format!(" ({})", row.drought.label));
        }
        lines.push(line);
    }
    lines.push("Qualidade da água".to_string());
    for zone in panel.water_quality {
        lines.push(format!(
            "  {} {} · {}",
            zone.severity.icon, zone.item.zone_name, zone.severity.label
        ));
    }
    lines
}
