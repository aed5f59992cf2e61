//! # Domain Model: Catalog Records
//!
//! The storefront works with three kinds of records, all owned by the remote
//! backend and materialized here as immutable snapshots:
//!
//! - [`Location`]: a marina or harbour boats depart from (reference data).
//! - [`BoatType`]: a category such as gulet, yacht or catamaran (reference data).
//! - [`Product`]: a boat listing that visitors browse, filter and open.
//!
//! ## Wire Format
//!
//! Records arrive as JSON with camelCase keys, the shape the backend's
//! tables expose:
//!
//! ```text
//! {
//!   "id": 1,
//!   "name": "Mavi Rüya",
//!   "title": "Mavi Rüya 24m Gulet",
//!   "typeId": 1,
//!   "locationId": 3,
//!   "travelCapacity": 20,
//!   "price": 45000,
//!   "durationType": "daily",
//!   "images": ["https://…/1.jpg"]
//! }
//! ```
//!
//! ## Missing Fields
//!
//! Listings entered by hand in the admin console are often incomplete. Every
//! field other than the identifiers and `name` is optional on the wire and
//! falls back to an empty/zero value, so one sloppy row never poisons the
//! whole catalog load. `title` stays an `Option`: the search-term predicate
//! treats an absent title as non-matching rather than as the empty string.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type LocationId = u32;
pub type BoatTypeId = u32;
pub type ProductId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    #[serde(default)]
    pub title: String,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            title: title.into(),
        }
    }

    /// Case-insensitive name comparison used by "browse by location" links.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoatType {
    pub id: BoatTypeId,
    pub name: String,
}

impl BoatType {
    pub fn new(id: BoatTypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// How a listing's price is quoted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DurationType {
    Hourly,
    #[default]
    Daily,
    Weekly,
}

impl fmt::Display for DurationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DurationType::Hourly => "hour",
            DurationType::Daily => "day",
            DurationType::Weekly => "week",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    pub type_id: BoatTypeId,
    pub location_id: LocationId,
    #[serde(default)]
    pub travel_capacity: u32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub duration_type: DurationType,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        type_id: BoatTypeId,
        location_id: LocationId,
        travel_capacity: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            title: None,
            type_id,
            location_id,
            travel_capacity,
            price: 0.0,
            duration_type: DurationType::default(),
            images: Vec::new(),
            description: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_price(mut self, price: f64, duration_type: DurationType) -> Self {
        self.price = price;
        self.duration_type = duration_type;
        self
    }

    /// The heading shown on cards: the marketing title when present, else the name.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }
}
