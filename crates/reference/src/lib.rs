//! Static country reference data for the leaderboard game
//!
//! Provides:
//! - The canonical country table with ISO 3166-1 alpha-2 codes
//! - Derived views (sorted name list, display-name map, code map)
//! - Alternative namings and name resolution

pub mod alternatives;
pub mod countries;

use thiserror::Error;

pub use alternatives::{alternative_namings, resolve, ALTERNATIVE_NAMINGS};
pub use countries::{country_codes, country_map, country_names, Country, COUNTRIES};

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Country name is empty")]
    Empty,

    #[error("Unknown country: {0}")]
    UnknownCountry(String),
}

pub type LookupResult<T> = Result<T, LookupError>;
