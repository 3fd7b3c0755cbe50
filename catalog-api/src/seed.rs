//! The startup seeding phase.

use catalog_core::{
    seed::{SeedData, SeedError, SeedReport, reseed},
};
use catalog_sqlite::Db;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Why the startup seeding did not complete.
#[derive(Debug, Error)]
pub enum SeedFailure {
    /// A seed file could not be loaded; the store was left untouched
    #[error(transparent)]
    Load(#[from] SeedError),

    /// The store rejected part of the reseed; the collections may be
    /// partially replaced
    #[error("store error while reseeding: {0}")]
    Store(#[from] sqlx::Error),
}

/// Locations of the seed files.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedConfig {
    /// The review seed file, holding `{"reviews": [...]}`
    #[serde(default = "default_reviews")]
    pub reviews: PathBuf,

    /// The dealership seed file, holding `{"dealerships": [...]}`
    #[serde(default = "default_dealerships")]
    pub dealerships: PathBuf,
}

fn default_reviews() -> PathBuf {
    PathBuf::from("data/reviews.json")
}

fn default_dealerships() -> PathBuf {
    PathBuf::from("data/dealerships.json")
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            reviews: default_reviews(),
            dealerships: default_dealerships(),
        }
    }
}

impl SeedConfig {
    /// Load both seed files and replace the collections of `db` with them.
    ///
    /// Nothing is written unless both files load.
    pub async fn run(&self, db: &Db) -> Result<SeedReport, SeedFailure> {
        let data = SeedData::load(&self.reviews, &self.dealerships)?;
        Ok(reseed(db, data).await?)
    }
}
