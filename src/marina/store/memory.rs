use super::{CatalogDocument, CatalogStore};
use crate::error::{MarinaError, Result};
use crate::model::{BoatType, Location, Product};
use std::cell::Cell;

/// In-memory catalog for testing and embedding.
///
/// Uses `Cell` for the failure switch since the storefront is single-threaded.
#[derive(Default)]
pub struct InMemoryCatalog {
    document: CatalogDocument,
    simulate_error: Cell<bool>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(document: CatalogDocument) -> Self {
        Self {
            document,
            simulate_error: Cell::new(false),
        }
    }

    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.document.locations = locations;
        self
    }

    pub fn with_boat_types(mut self, boat_types: Vec<BoatType>) -> Self {
        self.document.boat_types = boat_types;
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.document.products = products;
        self
    }

    /// Make every subsequent call fail, for exercising error paths.
    pub fn set_simulate_error(&self, simulate: bool) {
        self.simulate_error.set(simulate);
    }

    fn check(&self) -> Result<()> {
        if self.simulate_error.get() {
            return Err(MarinaError::Store("Simulated backend error".to_string()));
        }
        Ok(())
    }
}

impl CatalogStore for InMemoryCatalog {
    fn list_products(&self) -> Result<Vec<Product>> {
        self.check()?;
        Ok(self.document.products.clone())
    }

    fn list_locations(&self) -> Result<Vec<Location>> {
        self.check()?;
        Ok(self.document.locations.clone())
    }

    fn list_boat_types(&self) -> Result<Vec<BoatType>> {
        self.check()?;
        Ok(self.document.boat_types.clone())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::DurationType;

    pub fn sample_locations() -> Vec<Location> {
        vec![
            Location::new(3, "Bodrum", "Bodrum Marina"),
            Location::new(5, "Göcek", "Göcek Koyları"),
            Location::new(7, "Marmaris", "Marmaris Netsel"),
            Location::new(9, "Fethiye", "Fethiye Ece Marina"),
        ]
    }

    pub fn sample_boat_types() -> Vec<BoatType> {
        vec![
            BoatType::new(1, "Gulet"),
            BoatType::new(2, "Motor Yacht"),
            BoatType::new(3, "Catamaran"),
            BoatType::new(4, "Sailboat"),
        ]
    }

    pub fn sample_products() -> Vec<Product> {
        vec![
            Product::new(1, "Mavi Rüya", 1, 3, 20)
                .with_title("Mavi Rüya 24m Gulet")
                .with_price(45000.0, DurationType::Daily),
            Product::new(2, "Ege Yıldızı", 2, 7, 10).with_price(3500.0, DurationType::Hourly),
            Product::new(3, "Deniz Kızı", 3, 3, 12)
                .with_title("Deniz Kızı Catamaran")
                .with_price(28000.0, DurationType::Daily),
            Product::new(4, "Poyraz", 4, 5, 6).with_price(90000.0, DurationType::Weekly),
            Product::new(5, "Lodos", 1, 9, 16).with_price(38000.0, DurationType::Daily),
            Product::new(6, "Yakamoz", 2, 3, 8).with_price(4200.0, DurationType::Hourly),
        ]
    }

    pub fn sample_document() -> CatalogDocument {
        CatalogDocument {
            locations: sample_locations(),
            boat_types: sample_boat_types(),
            products: sample_products(),
        }
    }

    pub struct CatalogFixture {
        pub store: InMemoryCatalog,
    }

    impl Default for CatalogFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CatalogFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryCatalog::from_document(sample_document()),
            }
        }

        pub fn empty() -> Self {
            Self {
                store: InMemoryCatalog::new(),
            }
        }

        pub fn with_product(mut self, product: Product) -> Self {
            self.store.document.products.push(product);
            self
        }

        pub fn failing(self) -> Self {
            self.store.set_simulate_error(true);
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_lists_document_contents() {
        let store = CatalogFixture::new().store;
        assert_eq!(store.list_products().unwrap().len(), 6);
        assert_eq!(store.list_locations().unwrap().len(), 4);
        assert_eq!(store.list_boat_types().unwrap().len(), 4);
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryCatalog::new();
        assert!(store.list_products().unwrap().is_empty());
    }

    #[test]
    fn test_builder_setters() {
        let store = InMemoryCatalog::new()
            .with_locations(sample_locations())
            .with_boat_types(sample_boat_types())
            .with_products(vec![Product::new(1, "Mavi Rüya", 1, 3, 20)]);
        assert_eq!(store.list_products().unwrap().len(), 1);
        assert_eq!(store.list_locations().unwrap()[0].name, "Bodrum");
    }

    #[test]
    fn test_simulated_error() {
        let store = CatalogFixture::new().failing().store;
        assert!(matches!(store.list_products(), Err(MarinaError::Store(_))));
        assert!(store.list_locations().is_err());

        store.set_simulate_error(false);
        assert!(store.list_locations().is_ok());
    }
}
