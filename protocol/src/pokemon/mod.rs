
use serde::Deserialize;

use crate::ParseError;

/// Learn method for moves gained purely by reaching a level
pub const LEVEL_UP: &str = "level-up";

/// Version grouping the move list is read from
pub const PLATINUM: &str = "platinum";

/// `{ "name": ..., "url": ... }` reference used throughout the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Body of `GET /pokemon/{name}/`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    pub types: Vec<TypeSlot>,
    pub sprites: Sprites,
    pub moves: Vec<MoveEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub learned: NamedResource,
    pub version_group_details: Vec<VersionGroupDetail>,
}

/// How a move is learned in one version group
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VersionGroupDetail {
    pub level_learned_at: i32,
    pub move_learn_method: NamedResource,
    pub version_group: NamedResource,
}

impl VersionGroupDetail {
    fn matches(&self, filter: &MoveFilter<'_>) -> bool {
        self.version_group.name == filter.version_group
            && self.move_learn_method.name == filter.learn_method
            && self.level_learned_at <= filter.max_level
    }
}

/// Selects the moves a creature knows by a given level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveFilter<'a> {
    pub version_group: &'a str,
    pub learn_method: &'a str,
    /// Inclusive level cutoff
    pub max_level: i32,
}

impl MoveFilter<'static> {
    /// Platinum level-up moves learned at or below `max_level`
    pub fn level_up(max_level: i32) -> Self {
        Self {
            version_group: PLATINUM,
            learn_method: LEVEL_UP,
            max_level,
        }
    }
}

impl PokemonResponse {
    /// Type names in slot order as returned by the API
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|t| t.kind.name.clone()).collect()
    }

    /// Front sprite URL, if the API provides a non-empty one
    pub fn sprite_url(&self) -> Option<&str> {
        self.sprites
            .front_default
            .as_deref()
            .filter(|url| !url.is_empty())
    }

    /// Names of the moves matching `filter`.
    ///
    /// A move is listed once per matching version group detail, so a move
    /// recorded twice for the same group appears twice.
    pub fn learnable_moves(&self, filter: &MoveFilter<'_>) -> Vec<String> {
        self.moves
            .iter()
            .flat_map(|entry| {
                entry
                    .version_group_details
                    .iter()
                    .filter(|detail| detail.matches(filter))
                    .map(|_| entry.learned.name.clone())
            })
            .collect()
    }
}

/// Parse the body of a creature lookup
pub fn parse_pokemon(body: &str) -> Result<PokemonResponse, ParseError> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyBody);
    }

    Ok(serde_json::from_str(body)?)
}
