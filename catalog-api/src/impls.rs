//! The application wiring the catalog routes to the SQLite store.

use catalog_core::ports::Application;
use catalog_sqlite::Db;

/// The application state shared by every request.
///
/// Cloning is cheap: the store is a pair of connection pools.
#[derive(Clone)]
pub struct CatalogApp {
    /// The document store
    pub db: Db,
}

impl Application for CatalogApp {
    type Repository = Db;

    fn database(&self) -> &Self::Repository {
        &self.db
    }
}
