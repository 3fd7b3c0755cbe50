//! Seeding replaces both collections with static data at startup.
//!
//! The phase is destructive: whatever the collections held before, including
//! reviews created through the API, is removed. Callers are expected to log a
//! failure and keep serving with whatever state resulted.

use crate::{
    models::{Dealership, Review},
    ports::{DealershipRepository, ReviewRepository},
};
use serde::Deserialize;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{Level, event};

/// Failure to load a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The file could not be opened or read
    #[error("cannot read seed file {}: {source}", .path.display())]
    Io {
        /// The offending file
        path: PathBuf,
        /// The underlying error
        source: std::io::Error,
    },

    /// The file is not a valid seed document
    #[error("malformed seed file {}: {source}", .path.display())]
    Json {
        /// The offending file
        path: PathBuf,
        /// The underlying error
        source: serde_json::Error,
    },
}

/// The on-disk shape of the review seed file: `{"reviews": [...]}`.
#[derive(Deserialize)]
struct ReviewSeed {
    reviews: Vec<Review>,
}

/// The on-disk shape of the dealership seed file: `{"dealerships": [...]}`.
#[derive(Deserialize)]
struct DealershipSeed {
    dealerships: Vec<Dealership>,
}

/// The records written into the store at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedData {
    /// Reviews, with their ids as given in the seed file
    pub reviews: Vec<Review>,
    /// Dealerships, with their ids as given in the seed file
    pub dealerships: Vec<Dealership>,
}

impl SeedData {
    /// Load the seed data from the two seed files.
    pub fn load(reviews: &Path, dealerships: &Path) -> Result<Self, SeedError> {
        Ok(Self {
            reviews: read_json::<ReviewSeed>(reviews)?.reviews,
            dealerships: read_json::<DealershipSeed>(dealerships)?.dealerships,
        })
    }

    /// Parse the seed data from two readers holding the seed documents.
    pub fn from_readers(
        reviews: impl Read,
        dealerships: impl Read,
    ) -> Result<Self, serde_json::Error> {
        let ReviewSeed { reviews } = serde_json::from_reader(reviews)?;
        let DealershipSeed { dealerships } = serde_json::from_reader(dealerships)?;
        Ok(Self {
            reviews,
            dealerships,
        })
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, SeedError> {
    let file = File::open(path).map_err(|source| SeedError::Io {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| SeedError::Json {
        path: path.to_owned(),
        source,
    })
}

/// The outcome of a successful reseed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Number of reviews removed before inserting the seed
    pub reviews_removed: usize,
    /// Number of seed reviews inserted
    pub reviews_inserted: usize,
    /// Number of dealerships removed before inserting the seed
    pub dealerships_removed: usize,
    /// Number of seed dealerships inserted
    pub dealerships_inserted: usize,
}

/// Replace the contents of both collections with `seed`.
///
/// Each collection is emptied and then bulk-loaded. This is not transactional:
/// if a step fails, the error is returned and the collections keep whatever
/// state the completed steps left behind. Running it twice in a row leaves a
/// single copy of every seed record.
pub async fn reseed<R>(db: &R, seed: SeedData) -> Result<SeedReport, R::Error>
where
    R: ReviewRepository + DealershipRepository,
{
    let SeedData {
        reviews,
        dealerships,
    } = seed;

    let reviews_removed = db.delete_reviews().await?;
    let reviews_inserted = db.insert_reviews(reviews).await?;
    event!(
        Level::DEBUG,
        removed = reviews_removed,
        inserted = reviews_inserted,
        "reseeded reviews"
    );

    let dealerships_removed = db.delete_dealerships().await?;
    let dealerships_inserted = db.insert_dealerships(dealerships).await?;
    event!(
        Level::DEBUG,
        removed = dealerships_removed,
        inserted = dealerships_inserted,
        "reseeded dealerships"
    );

    Ok(SeedReport {
        reviews_removed,
        reviews_inserted,
        dealerships_removed,
        dealerships_inserted,
    })
}
