//! Reward listing commands.

use ocean_clean_site::models::NewActivity;
use ocean_clean_site::services::ActivityService;

use super::{CommandError, description_service, open_store};

/// List listings, newest first.
pub fn list() -> Result<(), CommandError> {
    let (_, store) = open_store()?;
    let activities = store.activities();

    if activities.is_empty() {
        tracing::info!("No activities posted");
        return Ok(());
    }

    for activity in activities {
        tracing::info!(
            "[{}] {} - {}원 - {}",
            activity.id,
            activity.title,
            activity.price,
            activity.desc
        );
    }
    Ok(())
}

/// Post a listing, optionally drafting its description with Gemini.
pub async fn add(
    title: String,
    price: String,
    desc: String,
    img: String,
    describe: bool,
) -> Result<(), CommandError> {
    let (config, mut store) = open_store()?;

    let desc = if describe && desc.trim().is_empty() {
        description_service(&config)?
            .generate_description(title.trim())
            .await
    } else {
        desc
    };

    let activity = ActivityService::new(&mut store).add(NewActivity {
        title,
        desc,
        price,
        img,
    })?;

    tracing::info!("Posted activity {}: {}", activity.id, activity.desc);
    Ok(())
}

/// Remove every listing. Requires `--yes`.
pub fn clear(yes: bool) -> Result<(), CommandError> {
    if !yes {
        return Err(CommandError::NotConfirmed("clear all activities"));
    }

    let (_, mut store) = open_store()?;
    ActivityService::new(&mut store).clear()?;
    tracing::info!("All activities removed");
    Ok(())
}
