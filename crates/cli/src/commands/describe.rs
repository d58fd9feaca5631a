//! AI description command.

use ocean_clean_site::config::SiteConfig;

use super::{CommandError, description_service};

/// Print a generated description for `title`.
pub async fn run(title: &str) -> Result<(), CommandError> {
    let config = SiteConfig::from_env()?;
    let service = description_service(&config)?;

    let description = service.generate_description(title.trim()).await;
    tracing::info!("{description}");
    Ok(())
}
