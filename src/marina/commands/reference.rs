//! Reference data listings: the values a visitor can pick from.

use super::{CmdMessage, CmdResult};
use crate::catalog::{Catalog, LoadState};
use crate::error::{MarinaError, Result};

fn check<T>(state: &LoadState<T>) -> Result<()> {
    match state {
        LoadState::Failed(reason) => Err(MarinaError::Store(reason.clone())),
        _ => Ok(()),
    }
}

pub fn locations(catalog: &Catalog) -> Result<CmdResult> {
    check(catalog.locations_state())?;
    let mut result = CmdResult::default().with_locations(catalog.locations().to_vec());
    if result.locations.is_empty() {
        result.add_message(CmdMessage::info("No locations available."));
    }
    Ok(result)
}

pub fn boat_types(catalog: &Catalog) -> Result<CmdResult> {
    check(catalog.boat_types_state())?;
    let mut result = CmdResult::default().with_boat_types(catalog.boat_types().to_vec());
    if result.boat_types.is_empty() {
        result.add_message(CmdMessage::info("No boat types available."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::CatalogFixture;

    #[test]
    fn test_lists_locations_in_source_order() {
        let mut catalog = Catalog::new();
        catalog.fetch(&CatalogFixture::new().store);

        let result = locations(&catalog).unwrap();
        let ids: Vec<u32> = result.locations.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![3, 5, 7, 9]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn test_lists_boat_types() {
        let mut catalog = Catalog::new();
        catalog.fetch(&CatalogFixture::new().store);

        let result = boat_types(&catalog).unwrap();
        assert_eq!(result.boat_types.len(), 4);
    }

    #[test]
    fn test_empty_catalog_gets_message() {
        let mut catalog = Catalog::new();
        catalog.fetch(&CatalogFixture::empty().store);

        let result = locations(&catalog).unwrap();
        assert!(result.locations.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn test_failed_catalog_is_an_error() {
        let mut catalog = Catalog::new();
        catalog.fetch(&CatalogFixture::new().failing().store);

        assert!(matches!(boat_types(&catalog), Err(MarinaError::Store(_))));
    }
}
