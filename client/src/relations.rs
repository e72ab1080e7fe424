use futures_util::future::join_all;
use pokegui_team::TypeRelations;

use crate::source::Source;

/// Union the double-damage relations of `types`.
///
/// Types are looked up concurrently. A type that cannot be resolved is
/// skipped; the others still contribute.
pub(crate) async fn aggregate_type_relations(
    source: &dyn Source,
    types: &[String],
) -> TypeRelations {
    let lookups = types
        .iter()
        .map(|name| async move { (name, source.type_info(name).await) });

    let mut relations = TypeRelations::new();
    for (name, result) in join_all(lookups).await {
        match result {
            Ok(info) => relations.extend(info.strong_against(), info.weak_to()),
            Err(e) => {
                tracing::warn!(
                    type_name = %name,
                    error = %format!("{e:#}"),
                    "Skipping type relations"
                );
            }
        }
    }

    relations
}
