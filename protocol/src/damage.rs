use serde::Deserialize;

use crate::ParseError;
use crate::pokemon::NamedResource;

/// Body of `GET /type/{name}/`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeResponse {
    pub name: String,
    pub damage_relations: DamageRelations,
}

/// Damage relations of one attacking/defending type.
///
/// The API also reports half and no damage relations; only the double
/// damage lists are read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DamageRelations {
    pub double_damage_to: Vec<NamedResource>,
    pub double_damage_from: Vec<NamedResource>,
}

impl TypeResponse {
    /// Types this type deals double damage to
    pub fn strong_against(&self) -> impl Iterator<Item = &str> {
        self.damage_relations
            .double_damage_to
            .iter()
            .map(|t| t.name.as_str())
    }

    /// Types this type takes double damage from
    pub fn weak_to(&self) -> impl Iterator<Item = &str> {
        self.damage_relations
            .double_damage_from
            .iter()
            .map(|t| t.name.as_str())
    }
}

/// Parse the body of a type lookup
pub fn parse_type(body: &str) -> Result<TypeResponse, ParseError> {
    if body.trim().is_empty() {
        return Err(ParseError::EmptyBody);
    }

    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRE: &str = include_str!("../../fixtures/fire.json");

    #[test]
    fn test_parse_type() {
        let fire = parse_type(FIRE).unwrap();

        assert_eq!(fire.name, "fire");
        assert_eq!(
            fire.strong_against().collect::<Vec<_>>(),
            vec!["bug", "steel", "grass", "ice"]
        );
        assert_eq!(
            fire.weak_to().collect::<Vec<_>>(),
            vec!["ground", "rock", "water"]
        );
    }

    #[test]
    fn test_parse_type_missing_relations() {
        let result = parse_type(r#"{"name":"fire"}"#);

        assert!(matches!(result, Err(ParseError::InvalidJson(_))));
    }

    #[test]
    fn test_parse_type_empty() {
        assert!(matches!(parse_type(""), Err(ParseError::EmptyBody)));
    }
}
