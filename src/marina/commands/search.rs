use super::helpers::product_views;
use super::{CmdMessage, CmdResult};
use crate::catalog::{Catalog, ListingStatus};
use crate::criteria::CriteriaPatch;
use crate::error::Result;
use crate::history::MemoryHistory;
use crate::route::Route;
use crate::session::SearchSession;

/// Open `route` as a fresh page load, apply the visitor's edits, and list matches.
///
/// Mirrors what a browser session does: derive criteria from the URL, then
/// let the edits flow back into it. `reset` clears everything the URL set
/// before `patch` is merged.
pub fn run(
    catalog: &Catalog,
    search_path: &str,
    route: Route,
    reset: bool,
    patch: CriteriaPatch,
) -> Result<CmdResult> {
    let mut session = SearchSession::new(MemoryHistory::new(route), search_path);
    session.reconcile(catalog);

    if reset {
        session.filters_mut().reset_filters();
    }
    session.filters_mut().update_filters(patch);
    session.reconcile(catalog);

    let visible = session.visible(catalog);
    let status = catalog.listing_status(visible.len());

    let mut result = CmdResult::default().with_listed_products(product_views(&visible, catalog));
    match &status {
        ListingStatus::Loading => result.add_message(CmdMessage::info("Catalog is still loading.")),
        ListingStatus::Failed(reason) => result.add_message(CmdMessage::error(format!(
            "Could not load boats: {}",
            reason
        ))),
        ListingStatus::Empty => {
            result.add_message(CmdMessage::info("No boats match these filters."))
        }
        ListingStatus::Ready(_) => {}
    }

    result.criteria = Some(session.filters().criteria().clone());
    result.link = Some(session.current_route().to_string());
    result.status = Some(status);
    Ok(result)
}
