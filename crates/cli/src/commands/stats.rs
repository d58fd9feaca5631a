//! Headline stats commands.

use ocean_clean_site::models::Stats;

use super::{CommandError, open_store};

pub fn show() -> Result<(), CommandError> {
    let (_, store) = open_store()?;
    let stats = store.stats();
    tracing::info!(
        "tons: {} / years: {} / prob: {}%",
        stats.tons,
        stats.years,
        stats.prob
    );
    Ok(())
}

/// Overwrite stats, keeping current values for omitted fields.
pub fn set(
    tons: Option<String>,
    years: Option<String>,
    prob: Option<String>,
) -> Result<(), CommandError> {
    let (_, mut store) = open_store()?;
    let current = store.stats().clone();

    let next = Stats {
        tons: tons.unwrap_or(current.tons),
        years: years.unwrap_or(current.years),
        prob: prob.unwrap_or(current.prob),
    };
    store.update_stats(next)?;

    tracing::info!("Stats updated");
    Ok(())
}
