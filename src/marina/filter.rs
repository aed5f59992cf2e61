//! Product filtering.
//!
//! [`ProductQuery`] is the evaluator's view of the criteria: the search term,
//! a [`Selection`] per dimension and a minimum party size. It expands into a
//! list of [`ProductFilter`] predicates which [`evaluate`] applies one after
//! the other over the cached product list.
//!
//! This is a linear scan. It is fine for a catalog of a few hundred boats and
//! nothing more; there are no indexes and no pagination.

use crate::criteria::{FilterCriteria, Selection, DEFAULT_PEOPLE};
use crate::model::{BoatTypeId, LocationId, Product};

/// A single predicate over a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    /// Name or title contains the (already lowercased) term.
    Term(String),
    /// Boat type equals the id.
    BoatType(BoatTypeId),
    /// Departure location equals the id.
    Location(LocationId),
    /// Travel capacity is at least this many people.
    MinCapacity(u32),
}

impl ProductFilter {
    /// Build a term filter; matching is case-insensitive.
    pub fn term(term: &str) -> Self {
        Self::Term(term.to_lowercase())
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::Term(needle) => {
                contains_folded(Some(&product.name), needle)
                    || contains_folded(product.title.as_deref(), needle)
            }
            ProductFilter::BoatType(id) => product.type_id == *id,
            ProductFilter::Location(id) => product.location_id == *id,
            ProductFilter::MinCapacity(min) => product.travel_capacity >= *min,
        }
    }
}

fn contains_folded(haystack: Option<&str>, needle: &str) -> bool {
    haystack
        .map(|h| h.to_lowercase().contains(needle))
        .unwrap_or(false)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuery {
    pub search_term: String,
    pub boat_type: Selection<BoatTypeId>,
    pub location: Selection<LocationId>,
    pub number_of_people: i32,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            boat_type: Selection::All,
            location: Selection::All,
            number_of_people: DEFAULT_PEOPLE,
        }
    }
}

impl From<&FilterCriteria> for ProductQuery {
    fn from(criteria: &FilterCriteria) -> Self {
        Self {
            search_term: criteria.search_term.clone(),
            boat_type: criteria.boat_type_selection(),
            location: criteria.location_selection(),
            number_of_people: criteria.number_of_people,
        }
    }
}

impl ProductQuery {
    /// The active predicates, in application order.
    pub fn filters(&self) -> Vec<ProductFilter> {
        let mut filters = Vec::new();

        if !self.search_term.is_empty() {
            filters.push(ProductFilter::term(&self.search_term));
        }
        if let Selection::Only(id) = self.boat_type {
            filters.push(ProductFilter::BoatType(id));
        }
        if let Selection::Only(id) = self.location {
            filters.push(ProductFilter::Location(id));
        }
        // Counts at or below the default (including zero and negatives) do not
        // restrict anything.
        if self.number_of_people > DEFAULT_PEOPLE {
            filters.push(ProductFilter::MinCapacity(self.number_of_people as u32));
        }

        filters
    }

    pub fn is_unrestricted(&self) -> bool {
        self.filters().is_empty()
    }
}

/// Narrow `products` by every active predicate of `query`.
pub fn evaluate<'a>(products: &'a [Product], query: &ProductQuery) -> Vec<&'a Product> {
    let mut visible: Vec<&Product> = products.iter().collect();
    for filter in query.filters() {
        visible.retain(|p| filter.matches(p));
    }
    visible
}
