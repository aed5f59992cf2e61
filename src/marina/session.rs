//! # Search Session
//!
//! A [`SearchSession`] ties one [`FilterStore`] to one [`History`] and runs the
//! reconciliation cycle between them. It is created explicitly and passed to
//! whatever needs the criteria; there is no ambient instance.
//!
//! ## The Cycle
//!
//! Hosts call [`SearchSession::reconcile`] after anything that may have changed
//! the route, the criteria or the catalog. One call is one cycle:
//!
//! 1. **URL → State**, if the route or the catalog revision differs from what
//!    the session last saw. The guard enters `SyncingFromSource` first.
//! 2. **State → URL**, if location, date or people changed since the last
//!    cycle, the guard is `Idle` and the current route is the search page.
//!    The new route replaces the current history entry.
//! 3. **Settle**: the guard returns to `Idle`.
//!
//! Changes made while guarded are consumed without being projected: within a
//! cycle the URL wins, and a write caused by reading the URL is never echoed
//! back to it. After one cycle the route and the criteria are stable; a second
//! `reconcile` with nothing new does nothing.

use crate::catalog::Catalog;
use crate::filter::{evaluate, ProductQuery};
use crate::filters::FilterStore;
use crate::history::History;
use crate::model::Product;
use crate::route::Route;
use crate::sync::{apply_route, project_criteria, SyncPhase};
use tracing::debug;

/// What one reconciliation cycle did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Criteria written from the URL.
    pub derived: usize,
    /// The route that replaced the current entry, if any.
    pub replaced: Option<Route>,
    /// Criteria changes that were not projected because the guard was held.
    pub suppressed: bool,
}

impl SyncReport {
    pub fn is_noop(&self) -> bool {
        self.derived == 0 && self.replaced.is_none() && !self.suppressed
    }
}

pub struct SearchSession<H: History> {
    filters: FilterStore,
    history: H,
    phase: SyncPhase,
    seen_route: Option<Route>,
    seen_revision: u64,
    search_path: String,
}

impl<H: History> SearchSession<H> {
    pub fn new(history: H, search_path: impl Into<String>) -> Self {
        Self {
            filters: FilterStore::new(),
            history,
            phase: SyncPhase::Idle,
            seen_route: None,
            seen_revision: 0,
            search_path: search_path.into(),
        }
    }

    pub fn filters(&self) -> &FilterStore {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut FilterStore {
        &mut self.filters
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Direct access for back/forward; call [`Self::reconcile`] afterwards.
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    pub fn current_route(&self) -> &Route {
        self.history.current()
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    pub fn search_path(&self) -> &str {
        &self.search_path
    }

    pub fn is_on_search_page(&self) -> bool {
        self.current_route().is_search(&self.search_path)
    }

    /// Navigate with a new history entry.
    pub fn navigate(&mut self, route: Route) {
        self.history.push(route);
    }

    /// Run one reconciliation cycle.
    pub fn reconcile(&mut self, catalog: &Catalog) -> SyncReport {
        let mut report = SyncReport::default();

        self.sync_from_route(catalog, &mut report);
        self.sync_to_route(&mut report);
        self.phase.settle();

        report
    }

    fn sync_from_route(&mut self, catalog: &Catalog, report: &mut SyncReport) {
        let route = self.history.current().clone();
        let route_changed = self.seen_route.as_ref() != Some(&route);
        let reference_changed = self.seen_revision != catalog.revision();
        if !route_changed && !reference_changed {
            return;
        }

        self.phase.begin();
        report.derived = apply_route(
            &route,
            &mut self.filters,
            catalog.locations(),
            &self.search_path,
        );
        debug!(route = %route, derived = report.derived, "synced criteria from route");

        self.seen_route = Some(route);
        self.seen_revision = catalog.revision();
    }

    fn sync_to_route(&mut self, report: &mut SyncReport) {
        let changes = self.filters.take_changes();
        if !changes.affects_route() {
            return;
        }
        if self.phase.is_guarded() {
            debug!(?changes, "criteria came from the route, not projecting back");
            report.suppressed = true;
            return;
        }
        if !self.is_on_search_page() {
            return;
        }

        let current = self.history.current();
        if let Some(next) = project_criteria(self.filters.criteria(), current, &self.search_path) {
            debug!(from = %current, to = %next, "replacing route");
            self.history.replace(next.clone());
            self.seen_route = Some(next.clone());
            report.replaced = Some(next);
        }
    }

    /// The products matching the current criteria.
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let query = ProductQuery::from(self.filters.criteria());
        evaluate(catalog.products(), &query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::CriteriaPatch;
    use crate::history::MemoryHistory;
    use crate::model::Location;
    use crate::store::fixtures::CatalogFixture;
    use chrono::NaiveDate;

    const SEARCH: &str = "/search";

    fn loaded_catalog() -> Catalog {
        let fixture = CatalogFixture::new();
        let mut catalog = Catalog::new();
        catalog.fetch(&fixture.store);
        catalog
    }

    fn session_at(url: &str) -> SearchSession<MemoryHistory> {
        SearchSession::new(MemoryHistory::new(Route::parse(url)), SEARCH)
    }

    #[test]
    fn test_fresh_load_derives_criteria() {
        let catalog = loaded_catalog();
        let mut session = session_at("/search?location=3&date=2025-07-01&people=4");

        let report = session.reconcile(&catalog);

        assert_eq!(report.derived, 3);
        assert!(report.suppressed);
        assert_eq!(report.replaced, None);
        assert_eq!(session.filters().selected_location().map(|l| l.id), Some(3));
        assert_eq!(session.phase(), SyncPhase::Idle);
    }

    #[test]
    fn test_setter_projects_to_url_with_replace() {
        let catalog = loaded_catalog();
        let mut session = session_at("/search");
        session.reconcile(&catalog);

        session.filters_mut().set_number_of_people(6);
        let report = session.reconcile(&catalog);

        assert_eq!(
            report.replaced.as_ref().map(|r| r.to_string()).as_deref(),
            Some("/search?people=6")
        );
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().replacements(), 1);
    }

    #[test]
    fn test_second_cycle_is_noop() {
        let catalog = loaded_catalog();
        let mut session = session_at("/search");
        session.reconcile(&catalog);
        session.filters_mut().set_number_of_people(6);
        session.reconcile(&catalog);

        let report = session.reconcile(&catalog);
        assert!(report.is_noop());
        assert_eq!(session.history().replacements(), 1);
    }

    #[test]
    fn test_url_derived_values_are_not_written_back() {
        let catalog = loaded_catalog();
        let mut session = session_at("/search/bodrum?people=4");

        let report = session.reconcile(&catalog);

        // The path segment selected Bodrum; the URL keeps its shape.
        assert_eq!(session.filters().selected_location().map(|l| l.id), Some(3));
        assert_eq!(report.replaced, None);
        assert_eq!(session.current_route().to_string(), "/search/bodrum?people=4");

        let settled = session.reconcile(&catalog);
        assert!(settled.is_noop());
        assert_eq!(session.current_route().to_string(), "/search/bodrum?people=4");
    }

    #[test]
    fn test_navigation_rederives_criteria() {
        let catalog = loaded_catalog();
        let mut session = session_at("/search?people=4");
        session.reconcile(&catalog);

        session.navigate(Route::parse("/search?people=8&date=2025-09-10"));
        let report = session.reconcile(&catalog);

        assert_eq!(report.derived, 2);
        assert_eq!(session.filters().number_of_people(), 8);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history().replacements(), 0);
    }

    #[test]
    fn test_back_button_restores_previous_people() {
        let catalog = loaded_catalog();
        let mut session = session_at("/search?people=4");
        session.reconcile(&catalog);
        session.navigate(Route::parse("/search?people=8"));
        session.reconcile(&catalog);

        session.history_mut().back();
        session.reconcile(&catalog);
        assert_eq!(session.filters().number_of_people(), 4);
    }

    #[test]
    fn test_no_projection_off_the_search_page() {
        let catalog = loaded_catalog();
        let mut session = session_at("/");
        session.reconcile(&catalog);

        session.filters_mut().set_number_of_people(5);
        let report = session.reconcile(&catalog);

        assert_eq!(report.replaced, None);
        assert_eq!(session.current_route().to_string(), "/");
    }

    #[test]
    fn test_term_and_type_do_not_touch_the_url() {
        let catalog = loaded_catalog();
        let mut session = session_at("/search");
        session.reconcile(&catalog);

        session.filters_mut().update_filters(CriteriaPatch {
            search_term: Some("mavi".into()),
            boat_type: Some(catalog.boat_type_by_id(1).cloned()),
            ..Default::default()
        });
        let report = session.reconcile(&catalog);

        assert!(report.is_noop());
        assert_eq!(session.current_route().to_string(), "/search");
    }

    #[test]
    fn test_clearing_location_removes_parameter() {
        let catalog = loaded_catalog();
        let mut session = session_at("/search?location=3&people=4");
        session.reconcile(&catalog);

        session.filters_mut().set_selected_location(None);
        session.reconcile(&catalog);

        assert_eq!(session.current_route().to_string(), "/search?people=4");
    }

    #[test]
    fn test_clearing_segment_location_rewrites_path() {
        let catalog = loaded_catalog();
        let mut session = session_at("/search/bodrum?people=4");
        session.reconcile(&catalog);

        session.filters_mut().set_selected_location(None);
        session.reconcile(&catalog);
        assert_eq!(session.current_route().to_string(), "/search?people=4");

        let link = session.current_route().to_string();
        let mut reloaded = session_at(&link);
        reloaded.reconcile(&catalog);
        assert!(reloaded.filters().selected_location().is_none());
        assert_eq!(
            reloaded.visible(&catalog).len(),
            session.visible(&catalog).len()
        );
    }

    #[test]
    fn test_reset_clears_url() {
        let catalog = loaded_catalog();
        let mut session = session_at("/search?location=3&date=2025-07-01&people=4");
        session.reconcile(&catalog);

        session.filters_mut().reset_filters();
        session.reconcile(&catalog);

        assert_eq!(session.current_route().to_string(), "/search");
    }

    #[test]
    fn test_location_resolves_once_reference_data_arrives() {
        let fixture = CatalogFixture::new();
        let mut catalog = Catalog::new();
        let mut session = session_at("/search?location=7");

        session.reconcile(&catalog);
        assert!(session.filters().selected_location().is_none());

        catalog.fetch(&fixture.store);
        let report = session.reconcile(&catalog);
        assert_eq!(report.derived, 1);
        assert_eq!(session.filters().selected_location().map(|l| l.id), Some(7));
    }

    #[test]
    fn test_round_trip_through_fresh_session() {
        let catalog = loaded_catalog();
        let mut session = session_at("/search");
        session.reconcile(&catalog);

        let marmaris = Location::new(7, "Marmaris", "Marmaris Netsel");
        let date = NaiveDate::from_ymd_opt(2025, 7, 14);
        session.filters_mut().set_selected_location(Some(marmaris.clone()));
        session.filters_mut().set_departure_date(date);
        session.filters_mut().set_number_of_people(5);
        session.reconcile(&catalog);

        let link = session.current_route().to_string();
        let mut reloaded = session_at(&link);
        reloaded.reconcile(&catalog);

        assert_eq!(reloaded.filters().selected_location(), Some(&marmaris));
        assert_eq!(reloaded.filters().departure_date(), date);
        assert_eq!(reloaded.filters().number_of_people(), 5);
    }

    #[test]
    fn test_visible_follows_criteria() {
        let catalog = loaded_catalog();
        let mut session = session_at("/search?location=3");
        session.reconcile(&catalog);

        let ids: Vec<u32> = session.visible(&catalog).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 6]);

        session.filters_mut().set_search_term("deniz");
        let ids: Vec<u32> = session.visible(&catalog).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_visible_is_empty_before_load() {
        let session = session_at("/search");
        assert!(session.visible(&Catalog::new()).is_empty());
    }
}
