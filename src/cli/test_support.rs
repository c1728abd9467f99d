//! In-memory catalog for command and REPL tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::api::CatalogApi;
use crate::cache::{ExpiringCache, ReadThrough};
use crate::cli::App;
use crate::error::FetchError;
use crate::models::{
    LocationArea, LocationPage, NamedResource, Pokemon, PokemonEncounter, PokemonStat, PokemonType,
};

pub const BASE: &str = "http://stub";

/// Serves canned resources keyed by URL and counts every request.
#[derive(Default)]
pub struct StubCatalog {
    pages: HashMap<String, LocationPage>,
    areas: HashMap<String, LocationArea>,
    pokemon: HashMap<String, Pokemon>,
    requests: AtomicUsize,
}

impl StubCatalog {
    /// Two location pages, one area and two pokemon.
    pub fn seeded() -> Self {
        let mut stub = Self::default();
        let first = format!("{BASE}/location");
        let second = format!("{BASE}/location?offset=2");

        stub.pages.insert(
            first.clone(),
            LocationPage {
                count: 3,
                next: Some(second.clone()),
                previous: None,
                results: vec![named("canalave-city"), named("eterna-city")],
            },
        );
        stub.pages.insert(
            second,
            LocationPage {
                count: 3,
                next: None,
                previous: Some(first),
                results: vec![named("pastoria-city")],
            },
        );
        stub.areas.insert(
            format!("{BASE}/location-area/canalave-city-area"),
            LocationArea {
                name: "canalave-city-area".to_string(),
                pokemon_encounters: vec![
                    PokemonEncounter { pokemon: named("tentacool") },
                    PokemonEncounter { pokemon: named("wingull") },
                ],
            },
        );
        // base_experience 0 gives a zero threshold: always caught
        stub.pokemon.insert(
            format!("{BASE}/pokemon/pikachu"),
            Pokemon {
                name: "pikachu".to_string(),
                base_experience: Some(0),
                height: 4,
                weight: 60,
                stats: vec![
                    PokemonStat { base_stat: 35, effort: 0, stat: named("hp") },
                    PokemonStat { base_stat: 90, effort: 2, stat: named("speed") },
                ],
                types: vec![PokemonType { slot: 1, kind: named("electric") }],
            },
        );
        // Threshold capped at 90, so rolls below 90 escape
        stub.pokemon.insert(
            format!("{BASE}/pokemon/mewtwo"),
            Pokemon {
                name: "mewtwo".to_string(),
                base_experience: Some(340),
                ..Default::default()
            },
        );
        stub
    }

    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    fn lookup<T: Clone>(&self, map: &HashMap<String, T>, url: &str) -> Result<T, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        map.get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))
    }
}

#[async_trait]
impl CatalogApi for StubCatalog {
    fn base_url(&self) -> &str {
        BASE
    }

    async fn location_page(&self, url: &str) -> Result<LocationPage, FetchError> {
        self.lookup(&self.pages, url)
    }

    async fn location_area(&self, url: &str) -> Result<LocationArea, FetchError> {
        self.lookup(&self.areas, url)
    }

    async fn pokemon(&self, url: &str) -> Result<Pokemon, FetchError> {
        self.lookup(&self.pokemon, url)
    }
}

pub fn named(name: &str) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url: String::new(),
    }
}

/// App over the seeded stub with a fixed rng seed.
pub fn stub_app() -> (App, Arc<StubCatalog>) {
    let stub = Arc::new(StubCatalog::seeded());
    let cache = Arc::new(ExpiringCache::new(Duration::from_secs(300)));
    let app = App::with_rng(
        stub.clone(),
        ReadThrough::new(cache),
        StdRng::seed_from_u64(7),
    );
    (app, stub)
}
