mod config;
#[cfg(test)]
mod fake;
mod fetch;
mod relations;
mod source;

use std::sync::Arc;

use anyhow::Result;
use pokegui_protocol::MoveFilter;

pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use pokegui_team::{CreatureRecord, TypeRelations};
pub use source::{HttpSource, Source};

/// PokeAPI client.
///
/// Cheap to clone; clones share the underlying HTTP connection pool.
#[derive(Clone)]
pub struct Client {
    source: Arc<dyn Source>,
    config: Arc<ClientConfig>,
}

impl Client {
    /// Client talking HTTP to `config.base_url`
    pub fn new(config: ClientConfig) -> Result<Self> {
        let source = HttpSource::new(&config)?;
        Ok(Self::with_source(source, config))
    }

    /// Client backed by any [`Source`]
    pub fn with_source(source: impl Source + 'static, config: ClientConfig) -> Self {
        Self {
            source: Arc::new(source),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch types, sprite and moves learnable by `level`.
    ///
    /// Returns `None` for unknown names and for every transport or parse
    /// failure; the cause is only logged.
    pub async fn fetch_creature(&self, name: &str, level: i32) -> Option<CreatureRecord> {
        let filter = MoveFilter {
            version_group: &self.config.version_group,
            learn_method: &self.config.learn_method,
            max_level: level,
        };

        fetch::fetch_creature(self.source.as_ref(), name, &filter).await
    }

    /// Union of the double-damage relations of `types`
    pub async fn type_relations(&self, types: &[String]) -> TypeRelations {
        relations::aggregate_type_relations(self.source.as_ref(), types).await
    }

    /// Fetch a creature and attach its type relations
    pub async fn lookup(&self, name: &str, level: i32) -> Option<CreatureRecord> {
        let record = self.fetch_creature(name, level).await?;
        let relations = self.type_relations(&record.types).await;

        tracing::info!(
            name = %record.name,
            moves = record.moves.len(),
            strengths = relations.strengths.len(),
            weaknesses = relations.weaknesses.len(),
            "Creature loaded"
        );

        Some(record.with_relations(relations))
    }
}
