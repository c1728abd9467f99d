//! Catalog response models
//!
//! This module defines the DTOs (Data Transfer Objects) the catalog API
//! returns and the cache stores in encoded form.

pub mod locations;
pub mod pokemon;

// Re-export commonly used types
pub use locations::{LocationArea, LocationPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
