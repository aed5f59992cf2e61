//! # Search Criteria
//!
//! [`FilterCriteria`] is the set of choices a visitor makes while looking for a
//! boat: where, when, what kind, how many people, and free text. It is plain
//! data; ownership and change tracking live in [`crate::filters::FilterStore`].
//!
//! ## Selections and the "all" Sentinel
//!
//! Dropdowns for boat type and location offer an "all" entry. Rather than
//! passing either a bare id or a record around, every call site uses
//! [`Selection`]: `All` means no restriction, `Only(id)` restricts to one id.
//! The textual sentinel `"all"` parses to `Selection::All`.
//!
//! ## Partial Updates
//!
//! [`CriteriaPatch`] merges into the current criteria. A field left as `None`
//! is ignored. For the nullable criteria, `Some(None)` explicitly clears.

use crate::model::{BoatType, Location};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The declared default for the people counter.
pub const DEFAULT_PEOPLE: i32 = 1;

/// Textual form of [`Selection::All`].
pub const ALL_SENTINEL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub selected_location: Option<Location>,
    pub departure_date: Option<NaiveDate>,
    pub boat_type: Option<BoatType>,
    pub number_of_people: i32,
    pub search_term: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            selected_location: None,
            departure_date: None,
            boat_type: None,
            number_of_people: DEFAULT_PEOPLE,
            search_term: String::new(),
        }
    }
}

impl FilterCriteria {
    pub fn location_selection(&self) -> Selection<u32> {
        Selection::from_option(self.selected_location.as_ref().map(|l| l.id))
    }

    pub fn boat_type_selection(&self) -> Selection<u32> {
        Selection::from_option(self.boat_type.as_ref().map(|t| t.id))
    }

    /// True when every criterion is at its default.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A filter value for one dimension: no restriction, or exactly one id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T> Selection<T> {
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Selection::Only(v),
            None => Selection::All,
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Selection::All => None,
            Selection::Only(v) => Some(v),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_SENTINEL) {
            return Ok(Selection::All);
        }
        trimmed
            .parse::<T>()
            .map(Selection::Only)
            .map_err(|_| format!("Invalid selection '{}': expected an id or '{}'", s, ALL_SENTINEL))
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => write!(f, "{}", ALL_SENTINEL),
            Selection::Only(v) => write!(f, "{}", v),
        }
    }
}

/// A partial criteria update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaPatch {
    pub selected_location: Option<Option<Location>>,
    pub departure_date: Option<Option<NaiveDate>>,
    pub boat_type: Option<Option<BoatType>>,
    pub number_of_people: Option<i32>,
    pub search_term: Option<String>,
}

impl CriteriaPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
