//! Pokedex - An interactive shell over the PokeAPI catalog
//!
//! Catalog responses are kept in an expiring in-memory cache so paging back
//! and forth or re-throwing at the same pokemon does not hit the network.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::{CatalogApi, PokeApiClient};
pub use cache::{ExpiringCache, ReadThrough};
pub use cli::App;
pub use config::Config;
