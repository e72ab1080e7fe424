//! In-memory [`Source`] for unit tests

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use pokegui_protocol::{PokemonResponse, TypeResponse, parse_pokemon, parse_type};

use crate::source::Source;

pub const CHARMANDER: &str = include_str!("../../fixtures/charmander.json");
pub const CHARIZARD: &str = include_str!("../../fixtures/charizard.json");
pub const FIRE: &str = include_str!("../../fixtures/fire.json");
pub const FLYING: &str = include_str!("../../fixtures/flying.json");

/// PNG signature; the client never decodes sprites
pub const SPRITE: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

#[derive(Default)]
pub struct FakeSource {
    pokemon: HashMap<String, String>,
    types: HashMap<String, String>,
    sprites_fail: bool,
    requests: Mutex<Requests>,
}

#[derive(Default)]
struct Requests {
    pokemon: Vec<String>,
    types: Vec<String>,
    sprites: Vec<String>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pokemon(mut self, name: &str, body: &str) -> Self {
        self.pokemon.insert(name.to_string(), body.to_string());
        self
    }

    pub fn with_type(mut self, name: &str, body: &str) -> Self {
        self.types.insert(name.to_string(), body.to_string());
        self
    }

    /// Every sprite request fails
    pub fn without_sprites(mut self) -> Self {
        self.sprites_fail = true;
        self
    }

    pub fn requested_pokemon(&self) -> Vec<String> {
        self.requests.lock().unwrap().pokemon.clone()
    }

    pub fn requested_types(&self) -> Vec<String> {
        self.requests.lock().unwrap().types.clone()
    }

    pub fn requested_sprites(&self) -> Vec<String> {
        self.requests.lock().unwrap().sprites.clone()
    }
}

#[async_trait]
impl Source for FakeSource {
    async fn pokemon(&self, name: &str) -> Result<PokemonResponse> {
        self.requests.lock().unwrap().pokemon.push(name.to_string());

        let body = self
            .pokemon
            .get(name)
            .ok_or_else(|| anyhow!("404 Not Found: pokemon/{}", name))?;
        parse_pokemon(body).context("Failed to parse creature")
    }

    async fn type_info(&self, name: &str) -> Result<TypeResponse> {
        self.requests.lock().unwrap().types.push(name.to_string());

        let body = self
            .types
            .get(name)
            .ok_or_else(|| anyhow!("404 Not Found: type/{}", name))?;
        parse_type(body).context("Failed to parse type")
    }

    async fn sprite(&self, url: &str) -> Result<Vec<u8>> {
        self.requests.lock().unwrap().sprites.push(url.to_string());

        if self.sprites_fail {
            anyhow::bail!("Connection reset: {}", url);
        }
        Ok(SPRITE.to_vec())
    }
}
