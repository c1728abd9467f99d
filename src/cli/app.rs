//! Shell state shared by every command.

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::api::CatalogApi;
use crate::cache::ReadThrough;
use crate::models::{LocationPage, Pokemon};

/// Application state for one shell session.
pub struct App {
    /// Remote catalog
    pub(crate) api: Arc<dyn CatalogApi>,
    /// Cached view over the catalog
    pub(crate) catalog: ReadThrough,
    /// Last location page shown by `map`/`mapb`
    pub(crate) locations: Option<LocationPage>,
    /// Caught pokemon by name
    pub(crate) pokedex: BTreeMap<String, Pokemon>,
    /// Source of catch rolls
    pub(crate) rng: StdRng,
}

impl App {
    /// Creates a session with an OS-seeded catch rng.
    pub fn new(api: Arc<dyn CatalogApi>, catalog: ReadThrough) -> Self {
        Self::with_rng(api, catalog, StdRng::from_os_rng())
    }

    /// Creates a session with a caller-supplied rng (deterministic in tests).
    pub fn with_rng(api: Arc<dyn CatalogApi>, catalog: ReadThrough, rng: StdRng) -> Self {
        Self {
            api,
            catalog,
            locations: None,
            pokedex: BTreeMap::new(),
            rng,
        }
    }

    /// Caught pokemon, sorted by name.
    pub fn pokedex(&self) -> &BTreeMap<String, Pokemon> {
        &self.pokedex
    }

    /// The location page `map`/`mapb` last printed.
    pub fn current_locations(&self) -> Option<&LocationPage> {
        self.locations.as_ref()
    }

    pub fn catalog(&self) -> &ReadThrough {
        &self.catalog
    }
}
