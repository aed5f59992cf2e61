//! # Catalog Cache
//!
//! [`Catalog`] holds the one fetched copy of the product list and the two
//! reference lists. The filter engine reads only from here; it never triggers
//! a fetch of its own.
//!
//! ## Load States
//!
//! Each list carries its own [`LoadState`]:
//!
//! - `NotLoaded`: nothing fetched yet.
//! - `Ready(items)`: the materialized list.
//! - `Failed(reason)`: the last fetch failed; the previous contents are dropped.
//!
//! Readers that only want items ([`Catalog::products`] and friends) get an
//! empty slice for anything other than `Ready`. The results surface uses
//! [`Catalog::listing_status`] to tell "still loading", "failed" and "no
//! matches" apart.
//!
//! ## Revisions
//!
//! Every [`Catalog::fetch`] bumps [`Catalog::revision`]. The reconciler watches
//! it to re-derive the location criterion once reference data arrives (a deep
//! link naming a location can only be resolved after locations load).

use crate::error::Result;
use crate::model::{BoatType, BoatTypeId, Location, LocationId, Product, ProductId};
use crate::store::CatalogStore;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    NotLoaded,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::NotLoaded
    }
}

impl<T> LoadState<T> {
    fn from_result(result: Result<Vec<T>>, what: &str) -> Self {
        match result {
            Ok(items) => {
                info!(count = items.len(), "loaded {}", what);
                LoadState::Ready(items)
            }
            Err(e) => {
                warn!(error = %e, "failed to load {}", what);
                LoadState::Failed(e.to_string())
            }
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            LoadState::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// What a results listing should show, before looking at the items themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingStatus {
    Loading,
    Failed(String),
    Empty,
    Ready(usize),
}

#[derive(Debug, Default)]
pub struct Catalog {
    products: LoadState<Product>,
    locations: LoadState<Location>,
    boat_types: LoadState<BoatType>,
    revision: u64,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch (or refetch) every list, replacing previous contents wholesale.
    ///
    /// Individual list failures are recorded in that list's state rather than
    /// returned, so a broken product table still lets reference data load.
    pub fn fetch<S: CatalogStore>(&mut self, store: &S) {
        self.products = LoadState::from_result(store.list_products(), "products");
        self.locations = LoadState::from_result(store.list_locations(), "locations");
        self.boat_types = LoadState::from_result(store.list_boat_types(), "boat types");
        self.revision += 1;
    }

    /// Fetch only if nothing has been fetched yet.
    pub fn ensure_loaded<S: CatalogStore>(&mut self, store: &S) {
        if self.revision == 0 {
            self.fetch(store);
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn products(&self) -> &[Product] {
        self.products.items()
    }

    pub fn locations(&self) -> &[Location] {
        self.locations.items()
    }

    pub fn boat_types(&self) -> &[BoatType] {
        self.boat_types.items()
    }

    pub fn products_state(&self) -> &LoadState<Product> {
        &self.products
    }

    pub fn locations_state(&self) -> &LoadState<Location> {
        &self.locations
    }

    pub fn boat_types_state(&self) -> &LoadState<BoatType> {
        &self.boat_types
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products().iter().find(|p| p.id == id)
    }

    pub fn location_by_id(&self, id: LocationId) -> Option<&Location> {
        self.locations().iter().find(|l| l.id == id)
    }

    /// Case-insensitive lookup used by "browse by location" paths.
    pub fn location_by_name(&self, name: &str) -> Option<&Location> {
        self.locations().iter().find(|l| l.name_matches(name))
    }

    pub fn boat_type_by_id(&self, id: BoatTypeId) -> Option<&BoatType> {
        self.boat_types().iter().find(|t| t.id == id)
    }

    /// Status of a listing showing `visible` matching products.
    pub fn listing_status(&self, visible: usize) -> ListingStatus {
        match &self.products {
            LoadState::NotLoaded => ListingStatus::Loading,
            LoadState::Failed(reason) => ListingStatus::Failed(reason.clone()),
            LoadState::Ready(_) if visible == 0 => ListingStatus::Empty,
            LoadState::Ready(_) => ListingStatus::Ready(visible),
        }
    }
}
