//! Shell Commands
//!
//! Command parsing and the handlers behind each command.

use std::io::Write;

use rand::Rng;
use tracing::debug;

use crate::cli::App;
use crate::error::{CommandError, Result};
use crate::models::{LocationArea, LocationPage, Pokemon};

// == Command Registry ==
/// Name and help text of a shell command.
#[derive(Debug, Clone, Copy)]
pub struct CommandInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every command, in the order `help` lists them.
pub const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "help",
        description: "Displays a help message",
    },
    CommandInfo {
        name: "exit",
        description: "Exit the Pokedex",
    },
    CommandInfo {
        name: "map",
        description: "Displays the next page of location areas",
    },
    CommandInfo {
        name: "mapb",
        description: "Displays the previous page of location areas",
    },
    CommandInfo {
        name: "explore",
        description: "List all the Pokémon located in the provided area",
    },
    CommandInfo {
        name: "catch",
        description: "Catch a Pokémon and add it to your Pokedex",
    },
    CommandInfo {
        name: "inspect",
        description: "Show name, height, weight, stats and types of a caught Pokémon",
    },
    CommandInfo {
        name: "pokedex",
        description: "List all caught Pokémon",
    },
    CommandInfo {
        name: "cache",
        description: "Show response cache statistics",
    },
];

/// Highest catch difficulty; keeps every pokemon catchable.
pub const MAX_CATCH_THRESHOLD: f64 = 90.0;

// == Command ==
/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    Mapb,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    Cache,
}

/// What the REPL should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl Command {
    /// Parses cleaned input words. Extra arguments are ignored.
    pub fn parse(words: &[String]) -> Result<Self> {
        let (name, args) = match words.split_first() {
            Some((name, args)) => (name.as_str(), args),
            None => return Err(CommandError::Unknown(String::new())),
        };
        let first_arg = args.first().cloned();

        match name {
            "help" => Ok(Command::Help),
            "exit" => Ok(Command::Exit),
            "map" => Ok(Command::Map),
            "mapb" => Ok(Command::Mapb),
            "explore" => first_arg
                .map(Command::Explore)
                .ok_or(CommandError::Usage("area must be provided to explore")),
            "catch" => first_arg
                .map(Command::Catch)
                .ok_or(CommandError::Usage("which pokemon do you want to catch?")),
            "inspect" => first_arg
                .map(Command::Inspect)
                .ok_or(CommandError::Usage("please provide the name of the pokemon to inspect")),
            "pokedex" => Ok(Command::Pokedex),
            "cache" => Ok(Command::Cache),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Catch difficulty for a pokemon: a third of its base experience, capped.
pub fn catch_threshold(base_experience: u32) -> f64 {
    (f64::from(base_experience) / 3.0).min(MAX_CATCH_THRESHOLD)
}

impl App {
    // == Execute ==
    /// Runs one command, writing its output to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow> {
        debug!(?command, "executing command");
        match command {
            Command::Help => self.help(out)?,
            Command::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                return Ok(Flow::Exit);
            }
            Command::Map => {
                let url = self
                    .locations
                    .as_ref()
                    .and_then(|page| page.next.clone())
                    .unwrap_or_else(|| self.api.first_location_page_url());
                self.show_locations(&url, out).await?;
            }
            Command::Mapb => {
                let url = self
                    .locations
                    .as_ref()
                    .and_then(|page| page.previous.clone())
                    .unwrap_or_else(|| self.api.first_location_page_url());
                self.show_locations(&url, out).await?;
            }
            Command::Explore(area) => self.explore(&area, out).await?,
            Command::Catch(name) => self.catch(&name, out).await?,
            Command::Inspect(name) => self.inspect(&name, out)?,
            Command::Pokedex => {
                writeln!(out, "Your Pokedex:")?;
                for name in self.pokedex.keys() {
                    writeln!(out, "  - {}", name)?;
                }
            }
            Command::Cache => self.cache_stats(out).await?,
        }
        Ok(Flow::Continue)
    }

    fn help<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for info in COMMANDS {
            writeln!(out, "{}: {}", info.name, info.description)?;
        }
        Ok(())
    }

    async fn show_locations<W: Write>(&mut self, url: &str, out: &mut W) -> Result<()> {
        let page: LocationPage = self
            .catalog
            .fetch_cached(url, || self.api.location_page(url))
            .await?;

        for location in &page.results {
            writeln!(out, "{}-area", location.name)?;
        }
        self.locations = Some(page);
        Ok(())
    }

    async fn explore<W: Write>(&mut self, area: &str, out: &mut W) -> Result<()> {
        let url = self.api.location_area_url(area);
        let found: LocationArea = self
            .catalog
            .fetch_cached(&url, || self.api.location_area(&url))
            .await
            .map_err(|err| {
                if err.is_not_found() {
                    CommandError::AreaNotFound(area.to_string())
                } else {
                    err.into()
                }
            })?;

        writeln!(out, "Exploring {}...", area)?;
        for name in found.pokemon_names() {
            writeln!(out, " - {}", name)?;
        }
        Ok(())
    }

    async fn catch<W: Write>(&mut self, name: &str, out: &mut W) -> Result<()> {
        writeln!(out, "Throwing a Pokeball at {}...", name)?;

        let url = self.api.pokemon_url(name);
        let pokemon: Pokemon = self
            .catalog
            .fetch_cached(&url, || self.api.pokemon(&url))
            .await
            .map_err(|err| {
                if err.is_not_found() {
                    CommandError::PokemonNotFound(name.to_string())
                } else {
                    err.into()
                }
            })?;

        let threshold = catch_threshold(pokemon.base_experience.unwrap_or(0));
        let attempt: u32 = self.rng.random_range(0..100);
        debug!(name, threshold, attempt, "catch roll");

        if f64::from(attempt) >= threshold {
            writeln!(out, "{} was caught!", name)?;
            self.pokedex.insert(pokemon.name.clone(), pokemon);
        } else {
            writeln!(out, "{} escaped!", name)?;
        }
        Ok(())
    }

    fn inspect<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let pokemon = self
            .pokedex
            .get(name)
            .ok_or_else(|| CommandError::NotCaught(name.to_string()))?;

        writeln!(out, "Name: {}", pokemon.name)?;
        writeln!(out, "Height: {}", pokemon.height)?;
        writeln!(out, "Weight: {}", pokemon.weight)?;
        writeln!(out, "Stats:")?;
        for stat in &pokemon.stats {
            writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
        }
        writeln!(out, "Types:")?;
        for kind in &pokemon.types {
            writeln!(out, "  - {}", kind.kind.name)?;
        }
        Ok(())
    }

    async fn cache_stats<W: Write>(&self, out: &mut W) -> Result<()> {
        let stats = self.catalog.stats().await;
        writeln!(out, "Cached responses: {}", stats.total_entries)?;
        writeln!(out, "Hits: {}", stats.hits)?;
        writeln!(out, "Misses: {}", stats.misses)?;
        writeln!(out, "Evictions: {}", stats.evictions)?;
        writeln!(out, "Hit rate: {:.1}%", stats.hit_rate() * 100.0)?;
        writeln!(
            out,
            "Entry lifetime: {}s",
            self.catalog.cache().lifetime().as_secs()
        )?;
        Ok(())
    }
}
