use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::Product;

/// Product registry keyed by product id.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<String, Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn insert(&self, product: Product) -> Result<Product, DomainError> {
        let mut products = self.products.write()?;
        if products.contains_key(&product.product_id) {
            return Err(DomainError::DuplicateProduct(product.product_id));
        }
        products.insert(product.product_id.clone(), product.clone());
        Ok(product)
    }

    fn find_by_id(&self, product_id: &str) -> Result<Option<Product>, DomainError> {
        Ok(self.products.read()?.get(product_id).cloned())
    }

    fn list(&self) -> Result<Vec<Product>, DomainError> {
        let mut items: Vec<Product> = self.products.read()?.values().cloned().collect();
        items.sort_by(|a, b| a.product_id.cmp(&b.product_id));
        Ok(items)
    }
}
