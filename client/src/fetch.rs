use anyhow::{Context, Result};
use pokegui_protocol::MoveFilter;
use pokegui_team::CreatureRecord;

use crate::source::Source;

/// Look up a creature; any failure yields `None`
pub(crate) async fn fetch_creature(
    source: &dyn Source,
    name: &str,
    filter: &MoveFilter<'_>,
) -> Option<CreatureRecord> {
    match try_fetch_creature(source, name, filter).await {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(name = %name, error = %format!("{e:#}"), "Creature lookup failed");
            None
        }
    }
}

async fn try_fetch_creature(
    source: &dyn Source,
    name: &str,
    filter: &MoveFilter<'_>,
) -> Result<CreatureRecord> {
    let name = name.to_lowercase();
    tracing::debug!(name = %name, max_level = filter.max_level, "Looking up creature");

    let pokemon = source.pokemon(&name).await?;

    let image = match pokemon.sprite_url() {
        Some(url) => Some(
            source
                .sprite(url)
                .await
                .with_context(|| format!("Failed to fetch sprite for {}", pokemon.name))?,
        ),
        None => None,
    };

    Ok(CreatureRecord::new(
        pokemon.name.clone(),
        pokemon.type_names(),
        pokemon.learnable_moves(filter),
        image,
    ))
}
