//! Creature records and aggregated type relations

use std::collections::BTreeSet;

/// Strengths and weaknesses of a creature, unioned across its types
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeRelations {
    /// Types the creature deals double damage to
    pub strengths: BTreeSet<String>,
    /// Types the creature takes double damage from
    pub weaknesses: BTreeSet<String>,
}

impl TypeRelations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty() && self.weaknesses.is_empty()
    }

    /// Add one type's relations to the union
    pub fn extend<S, W>(&mut self, strong_against: S, weak_to: W)
    where
        S: IntoIterator,
        S::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        self.strengths
            .extend(strong_against.into_iter().map(Into::into));
        self.weaknesses.extend(weak_to.into_iter().map(Into::into));
    }
}

/// Everything shown in one panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureRecord {
    /// Name as returned by the API (lowercase)
    pub name: String,

    /// Type names in slot order
    pub types: Vec<String>,

    /// Level-up moves up to the requested level; may contain duplicates
    pub moves: Vec<String>,

    /// Encoded sprite bytes, absent when the API has no sprite
    pub image: Option<Vec<u8>>,

    /// Filled in after type relations are aggregated
    pub relations: TypeRelations,
}

impl CreatureRecord {
    /// Create a record without type relations
    pub fn new(
        name: String,
        types: Vec<String>,
        moves: Vec<String>,
        image: Option<Vec<u8>>,
    ) -> Self {
        Self {
            name,
            types,
            moves,
            image,
            relations: TypeRelations::new(),
        }
    }

    pub fn with_relations(mut self, relations: TypeRelations) -> Self {
        self.relations = relations;
        self
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}
