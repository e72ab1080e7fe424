//! Response types and data shaping for the PokeAPI endpoints used by pokegui.
//!
//! Two JSON documents are modelled: the creature lookup (`/pokemon/{name}/`)
//! and the type lookup (`/type/{name}/`). Only the fields the UI consumes are
//! deserialized; everything else in the payload is ignored.

use thiserror::Error;

pub mod damage;
pub mod pokemon;

pub use damage::{DamageRelations, TypeResponse, parse_type};
pub use pokemon::{
    LEVEL_UP, MoveEntry, MoveFilter, NamedResource, PLATINUM, PokemonResponse, Sprites, TypeSlot,
    VersionGroupDetail, parse_pokemon,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid response body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Empty response body")]
    EmptyBody,
}
