use super::helpers::ProductView;
use super::CmdResult;
use crate::catalog::Catalog;
use crate::error::{MarinaError, Result};
use crate::model::ProductId;

pub fn run(catalog: &Catalog, id: ProductId) -> Result<CmdResult> {
    if let Some(reason) = catalog.products_state().error() {
        return Err(MarinaError::Store(reason.to_string()));
    }
    let product = catalog.product(id).ok_or(MarinaError::ProductNotFound(id))?;
    Ok(CmdResult::default().with_listed_products(vec![ProductView::resolve(product, catalog)]))
}
