//! # URL Reconciliation Rules
//!
//! The URL is the persisted form of the search criteria: it survives reloads,
//! can be bookmarked, and moves with the back/forward buttons. The
//! [`FilterStore`] is a working copy of it. Two one-directional passes keep
//! them convergent:
//!
//! ```text
//!   route ──apply_route──▶ FilterStore      (on navigation / reference reload)
//!   FilterStore ──project_criteria──▶ route (on criteria change, search page only)
//! ```
//!
//! ## URL → State ([`apply_route`])
//!
//! | Criterion | Source                                   | Unreadable / unknown |
//! |-----------|------------------------------------------|----------------------|
//! | location  | `location=<id>`, else `/search/<name>`   | unchanged            |
//! | date      | `date=yyyy-MM-dd`                        | unchanged            |
//! | people    | `people=<int>`, leading digits only      | default (1)          |
//!
//! An absent parameter leaves its criterion unchanged. Values are written only
//! when they differ from what the store holds.
//!
//! ## State → URL ([`project_criteria`])
//!
//! A criterion with a meaningful value sets its parameter; one at its empty
//! default removes it. A `/search/<name>` segment that no longer names the
//! selected location is dropped, so the path cannot re-select it on reload.
//! The result is `Some(route)` only if something actually changed, so
//! projecting twice is a no-op the second time.
//!
//! ## The Guard
//!
//! Values derived from the URL must not be written straight back to it within
//! the same cycle. [`SyncPhase`] is a two-state latch: the session enters
//! `SyncingFromSource` before [`apply_route`] and returns to `Idle` once the
//! whole reconciliation cycle is done. Projection is skipped while guarded.

use crate::criteria::{FilterCriteria, DEFAULT_PEOPLE};
use crate::filters::FilterStore;
use crate::model::Location;
use crate::route::Route;
use chrono::NaiveDate;
use tracing::debug;

pub const PARAM_LOCATION: &str = "location";
pub const PARAM_DATE: &str = "date";
pub const PARAM_PEOPLE: &str = "people";

/// ISO calendar date, no time component.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPhase {
    #[default]
    Idle,
    SyncingFromSource,
}

impl SyncPhase {
    pub fn begin(&mut self) {
        *self = SyncPhase::SyncingFromSource;
    }

    pub fn settle(&mut self) {
        *self = SyncPhase::Idle;
    }

    pub fn is_guarded(&self) -> bool {
        matches!(self, SyncPhase::SyncingFromSource)
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a people count from its leading integer (`"4"`, `"4.5"` and `"4abc"`
/// all read 4), falling back to the default when there is none.
pub fn parse_people(raw: &str) -> i32 {
    let trimmed = raw.trim();
    let sign = usize::from(trimmed.starts_with(|c: char| c == '-' || c == '+'));
    let digits = trimmed[sign..].bytes().take_while(u8::is_ascii_digit).count();
    trimmed[..sign + digits].parse::<i32>().unwrap_or_else(|_| {
        debug!(raw, "unreadable people parameter, using default");
        DEFAULT_PEOPLE
    })
}

/// Whether the people count is worth carrying in the URL.
pub fn people_is_meaningful(people: i32) -> bool {
    people > DEFAULT_PEOPLE
}

fn resolve_location(route: &Route, locations: &[Location], search_path: &str) -> Option<Location> {
    if let Some(raw) = route.query().get(PARAM_LOCATION) {
        let found = raw
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(|id| locations.iter().find(|l| l.id == id));
        if found.is_none() {
            debug!(raw, "location parameter does not name a known location");
        }
        return found.cloned();
    }

    let name = route.location_segment(search_path)?;
    let found = locations.iter().find(|l| l.name_matches(&name));
    if found.is_none() {
        debug!(name = %name, "location path segment does not name a known location");
    }
    found.cloned()
}

/// Derive criteria from `route` into `filters`. Returns how many criteria changed.
pub fn apply_route(
    route: &Route,
    filters: &mut FilterStore,
    locations: &[Location],
    search_path: &str,
) -> usize {
    let mut changed = 0;

    if let Some(location) = resolve_location(route, locations, search_path) {
        if filters.selected_location() != Some(&location) {
            filters.set_selected_location(Some(location));
            changed += 1;
        }
    }

    if let Some(raw) = route.query().get(PARAM_DATE) {
        match parse_date(raw) {
            Some(date) if filters.departure_date() != Some(date) => {
                filters.set_departure_date(Some(date));
                changed += 1;
            }
            Some(_) => {}
            None => debug!(raw, "ignoring malformed date parameter"),
        }
    }

    if let Some(raw) = route.query().get(PARAM_PEOPLE) {
        let people = parse_people(raw);
        if filters.number_of_people() != people {
            filters.set_number_of_people(people);
            changed += 1;
        }
    }

    changed
}

/// Compute the route reflecting `criteria`, or `None` if `route` already does.
pub fn project_criteria(
    criteria: &FilterCriteria,
    route: &Route,
    search_path: &str,
) -> Option<Route> {
    let mut next = route.clone();
    let mut changed = false;

    if let Some(segment) = route.location_segment(search_path) {
        let names_selection = criteria
            .selected_location
            .as_ref()
            .is_some_and(|l| l.name_matches(&segment));
        if !names_selection {
            next.set_path(search_path);
            changed = true;
        }
    }

    let query = next.query_mut();

    match &criteria.selected_location {
        Some(location) => {
            let id = location.id.to_string();
            if query.get(PARAM_LOCATION) != Some(id.as_str()) {
                query.set(PARAM_LOCATION, id);
                changed = true;
            }
        }
        None => changed |= query.remove(PARAM_LOCATION),
    }

    match criteria.departure_date {
        Some(date) => {
            let formatted = format_date(date);
            if query.get(PARAM_DATE) != Some(formatted.as_str()) {
                query.set(PARAM_DATE, formatted);
                changed = true;
            }
        }
        None => changed |= query.remove(PARAM_DATE),
    }

    if people_is_meaningful(criteria.number_of_people) {
        let people = criteria.number_of_people.to_string();
        if query.get(PARAM_PEOPLE) != Some(people.as_str()) {
            query.set(PARAM_PEOPLE, people);
            changed = true;
        }
    } else {
        changed |= query.remove(PARAM_PEOPLE);
    }

    changed.then_some(next)
}
