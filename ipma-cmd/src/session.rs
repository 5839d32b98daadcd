//! One function per subcommand, each a short scripted user session.

use crate::render;
use anyhow::{anyhow, bail};
use ipma_controller::{QueryService, ViewController, ViewState};
use ipma_types::{AgriculturalType, Category, Region};
use ipma_utils::dates::{parse_forecast_date, today};

/// Print the view and turn a recorded error into the command's result.
fn report<S: QueryService>(
    controller: &ViewController<S>,
    render: impl Fn(&ViewState) -> Vec<String>,
) -> anyhow::Result<()> {
    let state = controller.state();
    for line in render(&*state) {
        println!("{}", line);
    }
    match &state.error {
        Some(error) => {
            log::debug!(
                "[IPMA] {} failed (query {:?}, filters {:?})",
                error.category,
                error.query,
                error.filters
            );
            Err(anyhow!("{}", error.message))
        }
        None => Ok(()),
    }
}

pub async fn run_health<S: QueryService>(controller: &ViewController<S>) -> anyhow::Result<()> {
    let health = controller.service().health().await?;
    for line in render::health(&health) {
        println!("{}", line);
    }
    if !health.is_healthy() {
        bail!("API reports status '{}'", health.status);
    }
    Ok(())
}

pub async fn run_dashboard<S: QueryService>(controller: &ViewController<S>) -> anyhow::Result<()> {
    controller.mount().await;
    report(controller, render::dashboard)
}

pub async fn run_forecast<S: QueryService>(
    controller: &ViewController<S>,
    district: &str,
    location: &str,
    date: Option<&str>,
) -> anyhow::Result<()> {
    let date = date
        .map(|d| parse_forecast_date(d, &today()))
        .transpose()?;

    controller.select_category(Category::Weather).await;
    controller.set_district(Some(district.to_string())).await;

    let location = location.trim().to_lowercase();
    {
        let state = controller.state();
        if let Some(error) = &state.error {
            bail!("{}", error.message);
        }
        let locations = state.cache.weather.locations.as_deref().unwrap_or_default();
        if !locations.is_empty() && !locations.iter().any(|l| l.key() == location) {
            let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
            bail!(
                "unknown location '{}' in {}; available: {}",
                location,
                district,
                names.join(", ")
            );
        }
    }

    controller.set_location(Some(location));
    controller.set_date(date);
    controller.fetch_forecast().await;
    report(controller, render::forecast)
}

pub async fn run_warnings<S: QueryService>(
    controller: &ViewController<S>,
    level: Option<&str>,
) -> anyhow::Result<()> {
    controller.select_category(Category::Warnings).await;
    report(controller, |state| render::warnings(state, level))
}

pub async fn run_seismic<S: QueryService>(
    controller: &ViewController<S>,
    region: Region,
) -> anyhow::Result<()> {
    controller.select_category(Category::Seismic).await;
    controller.set_region(region).await;
    report(controller, render::seismic)
}

pub async fn run_marine<S: QueryService>(controller: &ViewController<S>) -> anyhow::Result<()> {
    controller.select_category(Category::Marine).await;
    report(controller, render::marine)
}

pub async fn run_stations<S: QueryService>(controller: &ViewController<S>) -> anyhow::Result<()> {
    controller.select_category(Category::Stations).await;
    report(controller, render::stations)
}

pub async fn run_agriculture<S: QueryService>(
    controller: &ViewController<S>,
    kind: AgriculturalType,
) -> anyhow::Result<()> {
    controller.select_category(Category::Agriculture).await;
    controller.set_agricultural_type(kind).await;
    report(controller, render::agriculture)
}
