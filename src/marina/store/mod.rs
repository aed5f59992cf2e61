//! # Storage Layer
//!
//! The storefront does not own its data. Listings and reference data live in
//! a hosted backend; this module defines the narrow interface the rest of the
//! crate needs from it, the [`CatalogStore`] trait.
//!
//! ## Contract
//!
//! Each method returns a fully materialized list. There is no pagination and
//! no partial result: a call either yields the whole list or an error. The
//! filter engine never calls the store directly; [`crate::catalog::Catalog`]
//! fetches once and everything else reads from that cache.
//!
//! ## Implementations
//!
//! - [`fs::FileCatalog`]: reads a JSON export of the backend tables.
//! - [`memory::InMemoryCatalog`]: for tests and embedding, no I/O.
//!
//! ## Export Layout
//!
//! ```text
//! {
//!   "locations": [ { "id": 3, "name": "Bodrum", "title": "Bodrum Marina" } ],
//!   "boatTypes": [ { "id": 1, "name": "Gulet" } ],
//!   "products":  [ { "id": 1, "name": "Mavi Rüya", "typeId": 1, ... } ]
//! }
//! ```

use crate::error::Result;
use crate::model::{BoatType, Location, Product};
use serde::{Deserialize, Serialize};

pub mod fs;
pub mod memory;

#[cfg(any(test, feature = "test_utils"))]
pub use memory::fixtures;

/// Abstract interface to the remote catalog.
pub trait CatalogStore {
    /// All boat listings.
    fn list_products(&self) -> Result<Vec<Product>>;

    /// All departure locations.
    fn list_locations(&self) -> Result<Vec<Location>>;

    /// All boat types.
    fn list_boat_types(&self) -> Result<Vec<BoatType>>;
}

/// On-disk representation of a full catalog export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    #[serde(default)]
    pub locations: Vec<Location>,
    #[serde(default)]
    pub boat_types: Vec<BoatType>,
    #[serde(default)]
    pub products: Vec<Product>,
}
