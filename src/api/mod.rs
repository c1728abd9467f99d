//! API Module
//!
//! Client side of the remote catalog.
//!
//! # Endpoints used
//! - `GET /location` - Paginated location listing
//! - `GET /location-area/{name}` - Pokemon encounters in an area
//! - `GET /pokemon/{name}` - Pokemon details

pub mod client;

pub use client::{CatalogApi, PokeApiClient};
