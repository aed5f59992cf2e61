//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It owns the catalog store, the [`Catalog`] cache and the config.
//!
//! The facade:
//! - **Loads** the catalog lazily, once per facade
//! - **Normalizes inputs**: ids, names and `all` into locations and boat types,
//!   date strings into dates
//! - **Dispatches** to `commands/*.rs` and returns `Result<CmdResult>`
//!
//! Search links come back absolute, resolved against `site_url`.
//!
//! `MarinaApi<S: CatalogStore>` is generic over the data provider:
//! - Production: `MarinaApi<FileCatalog>`
//! - Testing: `MarinaApi<InMemoryCatalog>`

use crate::catalog::Catalog;
use crate::commands::{self, CmdResult};
use crate::config::MarinaConfig;
use crate::criteria::{CriteriaPatch, ALL_SENTINEL};
use crate::error::{MarinaError, Result};
use crate::model::ProductId;
use crate::route::Route;
use crate::store::CatalogStore;
use crate::sync::parse_date;

/// Raw criteria edits as a UI collects them.
///
/// `None` leaves a criterion as the link set it. `location`, `boat_type` and
/// `date` accept `all` to clear.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    pub location: Option<String>,
    pub boat_type: Option<String>,
    pub date: Option<String>,
    pub people: Option<i32>,
    pub term: Option<String>,
    pub reset: bool,
}

pub struct MarinaApi<S: CatalogStore> {
    store: S,
    catalog: Catalog,
    config: MarinaConfig,
}

impl<S: CatalogStore> MarinaApi<S> {
    pub fn new(store: S, config: MarinaConfig) -> Self {
        Self {
            store,
            catalog: Catalog::new(),
            config,
        }
    }

    pub fn config(&self) -> &MarinaConfig {
        &self.config
    }

    pub fn catalog(&mut self) -> &Catalog {
        self.catalog.ensure_loaded(&self.store);
        &self.catalog
    }

    /// Drop cached data and fetch again.
    pub fn refresh(&mut self) {
        self.catalog.fetch(&self.store);
    }

    /// Search starting from `url` (the search page when absent) with `input` applied.
    pub fn search(&mut self, url: Option<&str>, input: SearchInput) -> Result<CmdResult> {
        self.catalog.ensure_loaded(&self.store);
        let route = match url {
            Some(url) => Route::parse(url),
            None => Route::new(self.config.search_path.as_str()),
        };
        let patch = self.patch_from(&input)?;
        let mut result = commands::search::run(
            &self.catalog,
            &self.config.search_path,
            route,
            input.reset,
            patch,
        )?;
        result.link = result
            .link
            .map(|link| Route::parse(&link).absolute(&self.config.site_url).unwrap_or(link));
        Ok(result)
    }

    /// Open a shared link as-is.
    pub fn open(&mut self, url: &str) -> Result<CmdResult> {
        self.search(Some(url), SearchInput::default())
    }

    pub fn show_product(&mut self, id: ProductId) -> Result<CmdResult> {
        self.catalog.ensure_loaded(&self.store);
        commands::show::run(&self.catalog, id)
    }

    pub fn locations(&mut self) -> Result<CmdResult> {
        self.catalog.ensure_loaded(&self.store);
        commands::reference::locations(&self.catalog)
    }

    pub fn boat_types(&mut self) -> Result<CmdResult> {
        self.catalog.ensure_loaded(&self.store);
        commands::reference::boat_types(&self.catalog)
    }

    fn patch_from(&self, input: &SearchInput) -> Result<CriteriaPatch> {
        let mut patch = CriteriaPatch::default();
        if let Some(raw) = &input.location {
            patch.selected_location = Some(commands::helpers::resolve_location(&self.catalog, raw)?);
        }
        if let Some(raw) = &input.boat_type {
            patch.boat_type = Some(commands::helpers::resolve_boat_type(&self.catalog, raw)?);
        }
        if let Some(raw) = &input.date {
            patch.departure_date = Some(parse_date_input(raw)?);
        }
        patch.number_of_people = input.people;
        patch.search_term = input.term.clone();
        Ok(patch)
    }
}

fn parse_date_input(raw: &str) -> Result<Option<chrono::NaiveDate>> {
    if raw.trim().eq_ignore_ascii_case(ALL_SENTINEL) {
        return Ok(None);
    }
    parse_date(raw)
        .map(Some)
        .ok_or_else(|| MarinaError::Api(format!("Invalid date '{}', expected YYYY-MM-DD", raw)))
}
