//! # Filter State Store
//!
//! [`FilterStore`] is the single source of truth for the visitor's current
//! [`FilterCriteria`]. It is an ordinary value, constructed explicitly and
//! handed to whoever needs it (usually a [`crate::session::SearchSession`]),
//! never a global.
//!
//! ## Setters
//!
//! Every criterion has two setters:
//! - `set_*` takes the new value.
//! - `update_*` takes a closure of the previous value and returns the next one.
//!
//! Setters perform no validation. In particular the people counter accepts
//! zero and negative numbers; only the stepper ([`FilterStore::decrement_people`])
//! clamps, and it clamps at 0, not at the declared default of 1.
//!
//! ## Change Tracking
//!
//! A setter that actually changes a value records it in a [`Changes`] set.
//! Writing the value already held is a no-op and records nothing, which keeps
//! the reconciler from doing work for redundant writes. The reconciler drains
//! the set with [`FilterStore::take_changes`].

use crate::criteria::{CriteriaPatch, FilterCriteria, DEFAULT_PEOPLE};
use crate::model::{BoatType, Location};
use chrono::NaiveDate;

/// Which criteria changed since the last drain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Changes {
    pub location: bool,
    pub date: bool,
    pub boat_type: bool,
    pub people: bool,
    pub term: bool,
}

impl Changes {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Location, date and people are mirrored in the URL; type and term are not.
    pub fn affects_route(&self) -> bool {
        self.location || self.date || self.people
    }

    pub fn count(&self) -> usize {
        [
            self.location,
            self.date,
            self.boat_type,
            self.people,
            self.term,
        ]
        .iter()
        .filter(|c| **c)
        .count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterStore {
    criteria: FilterCriteria,
    changes: Changes,
}

impl FilterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            changes: Changes::default(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn selected_location(&self) -> Option<&Location> {
        self.criteria.selected_location.as_ref()
    }

    pub fn departure_date(&self) -> Option<NaiveDate> {
        self.criteria.departure_date
    }

    pub fn boat_type(&self) -> Option<&BoatType> {
        self.criteria.boat_type.as_ref()
    }

    pub fn number_of_people(&self) -> i32 {
        self.criteria.number_of_people
    }

    pub fn search_term(&self) -> &str {
        &self.criteria.search_term
    }

    // --- Literal setters ---

    pub fn set_selected_location(&mut self, location: Option<Location>) {
        if self.criteria.selected_location != location {
            self.criteria.selected_location = location;
            self.changes.location = true;
        }
    }

    pub fn set_departure_date(&mut self, date: Option<NaiveDate>) {
        if self.criteria.departure_date != date {
            self.criteria.departure_date = date;
            self.changes.date = true;
        }
    }

    pub fn set_boat_type(&mut self, boat_type: Option<BoatType>) {
        if self.criteria.boat_type != boat_type {
            self.criteria.boat_type = boat_type;
            self.changes.boat_type = true;
        }
    }

    pub fn set_number_of_people(&mut self, people: i32) {
        if self.criteria.number_of_people != people {
            self.criteria.number_of_people = people;
            self.changes.people = true;
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if self.criteria.search_term != term {
            self.criteria.search_term = term;
            self.changes.term = true;
        }
    }

    // --- Functional setters ---

    pub fn update_selected_location<F>(&mut self, f: F)
    where
        F: FnOnce(Option<&Location>) -> Option<Location>,
    {
        let next = f(self.criteria.selected_location.as_ref());
        self.set_selected_location(next);
    }

    pub fn update_departure_date<F>(&mut self, f: F)
    where
        F: FnOnce(Option<NaiveDate>) -> Option<NaiveDate>,
    {
        let next = f(self.criteria.departure_date);
        self.set_departure_date(next);
    }

    pub fn update_boat_type<F>(&mut self, f: F)
    where
        F: FnOnce(Option<&BoatType>) -> Option<BoatType>,
    {
        let next = f(self.criteria.boat_type.as_ref());
        self.set_boat_type(next);
    }

    pub fn update_number_of_people<F>(&mut self, f: F)
    where
        F: FnOnce(i32) -> i32,
    {
        let next = f(self.criteria.number_of_people);
        self.set_number_of_people(next);
    }

    pub fn update_search_term<F>(&mut self, f: F)
    where
        F: FnOnce(&str) -> String,
    {
        let next = f(&self.criteria.search_term);
        self.set_search_term(next);
    }

    // --- Stepper ---

    pub fn increment_people(&mut self) {
        self.update_number_of_people(|n| n.saturating_add(1));
    }

    /// Steps the counter down, stopping at 0.
    pub fn decrement_people(&mut self) {
        self.update_number_of_people(|n| if n > 0 { n - 1 } else { n });
    }

    // --- Bulk operations ---

    /// Restore every criterion to its default.
    pub fn reset_filters(&mut self) {
        self.set_selected_location(None);
        self.set_departure_date(None);
        self.set_boat_type(None);
        self.set_number_of_people(DEFAULT_PEOPLE);
        self.set_search_term(String::new());
    }

    /// Merge the provided fields of `patch`; absent fields are left untouched.
    pub fn update_filters(&mut self, patch: CriteriaPatch) {
        if let Some(location) = patch.selected_location {
            self.set_selected_location(location);
        }
        if let Some(date) = patch.departure_date {
            self.set_departure_date(date);
        }
        if let Some(boat_type) = patch.boat_type {
            self.set_boat_type(boat_type);
        }
        if let Some(people) = patch.number_of_people {
            self.set_number_of_people(people);
        }
        if let Some(term) = patch.search_term {
            self.set_search_term(term);
        }
    }

    /// Drain the change set.
    pub fn take_changes(&mut self) -> Changes {
        std::mem::take(&mut self.changes)
    }

    pub fn pending_changes(&self) -> Changes {
        self.changes
    }
}
