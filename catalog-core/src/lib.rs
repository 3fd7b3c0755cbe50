#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Document models for the catalog collections.
///
/// These are plain data structures. Dealerships carry arbitrary descriptive
/// fields alongside the ones the service filters on, so they are modeled as a
/// typed core with a flattened passthrough map.
pub mod models;

/// Interface traits for the catalog service.
///
/// This module contains the "ports" in the hexagonal architecture pattern:
/// the operations the HTTP layer and the seeder need from a document store,
/// without specifying how the store implements them.
pub mod ports;

/// The startup phase that replaces the collections with seed data.
pub mod seed;
