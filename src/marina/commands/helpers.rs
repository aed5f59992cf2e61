use crate::catalog::Catalog;
use crate::criteria::Selection;
use crate::error::{MarinaError, Result};
use crate::model::{BoatType, Location, Product};
use serde::Serialize;

/// A product paired with the display names of its type and location.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    pub product: Product,
    pub boat_type: Option<String>,
    pub location: Option<String>,
}

impl ProductView {
    pub fn resolve(product: &Product, catalog: &Catalog) -> Self {
        Self {
            product: product.clone(),
            boat_type: catalog
                .boat_type_by_id(product.type_id)
                .map(|t| t.name.clone()),
            location: catalog
                .location_by_id(product.location_id)
                .map(|l| l.name.clone()),
        }
    }
}

pub fn product_views(products: &[&Product], catalog: &Catalog) -> Vec<ProductView> {
    products
        .iter()
        .map(|p| ProductView::resolve(p, catalog))
        .collect()
}

/// Resolve user input (`all`, an id, or a name) to a location.
///
/// `Ok(None)` means "no restriction".
pub fn resolve_location(catalog: &Catalog, input: &str) -> Result<Option<Location>> {
    if let Ok(selection) = input.parse::<Selection<u32>>() {
        return match selection {
            Selection::All => Ok(None),
            Selection::Only(id) => catalog
                .location_by_id(id)
                .cloned()
                .map(Some)
                .ok_or_else(|| MarinaError::LocationNotFound(input.to_string())),
        };
    }
    catalog
        .location_by_name(input.trim())
        .cloned()
        .map(Some)
        .ok_or_else(|| MarinaError::LocationNotFound(input.to_string()))
}

/// Resolve user input (`all`, an id, or a name) to a boat type.
pub fn resolve_boat_type(catalog: &Catalog, input: &str) -> Result<Option<BoatType>> {
    if let Ok(selection) = input.parse::<Selection<u32>>() {
        return match selection {
            Selection::All => Ok(None),
            Selection::Only(id) => catalog
                .boat_type_by_id(id)
                .cloned()
                .map(Some)
                .ok_or_else(|| MarinaError::BoatTypeNotFound(input.to_string())),
        };
    }
    let needle = input.trim().to_lowercase();
    catalog
        .boat_types()
        .iter()
        .find(|t| t.name.to_lowercase() == needle)
        .cloned()
        .map(Some)
        .ok_or_else(|| MarinaError::BoatTypeNotFound(input.to_string()))
}
