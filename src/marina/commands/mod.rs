//! # Command Layer
//!
//! Each storefront operation lives in its own submodule as a plain function over
//! a loaded [`crate::catalog::Catalog`]. Commands return a structured
//! [`CmdResult`]; they never print, prompt or exit.
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries whatever the operation produced:
//! - `listed_products`: products to show, each resolved into a [`ProductView`]
//! - `locations` / `boat_types`: reference listings
//! - `criteria`: the criteria after reconciliation (search only)
//! - `link`: the route the session settled on (search only)
//! - `status`: loading / failed / empty / ready for the results listing
//! - `messages`: leveled messages for the UI to render
//!
//! ## Command Modules
//!
//! - [`search`]: deep link + criteria edits → reconciled criteria, link, results
//! - [`show`]: one product's detail
//! - [`reference`]: location and boat-type listings
//! - [`helpers`]: input resolution and product views

use crate::catalog::ListingStatus;
use crate::criteria::FilterCriteria;
use crate::model::{BoatType, Location};
use serde::Serialize;

pub mod helpers;
pub mod reference;
pub mod search;
pub mod show;

pub use helpers::ProductView;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_products: Vec<ProductView>,
    pub locations: Vec<Location>,
    pub boat_types: Vec<BoatType>,
    pub criteria: Option<FilterCriteria>,
    pub link: Option<String>,
    pub status: Option<ListingStatus>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_products(mut self, products: Vec<ProductView>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = locations;
        self
    }

    pub fn with_boat_types(mut self, boat_types: Vec<BoatType>) -> Self {
        self.boat_types = boat_types;
        self
    }
}
