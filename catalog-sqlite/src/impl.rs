//! Repository trait implementations for the SQLite database.
//!
//! This module contains the implementations of the repository traits defined
//! in `catalog-core` for the SQLite document store.

use crate::Db;
use catalog_core::ports::Repository;

mod dealership;
mod review;

/// Rows per bulk insert statement. SQLite caps the number of bound variables
/// in a single statement, and every row binds three.
const INSERT_CHUNK: usize = 1000;

impl Repository for Db {
    type Error = sqlx::Error;
}
