use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::Product;

pub struct ProductService<P> {
    repo: Arc<P>,
}

impl<P: ProductRepository> ProductService<P> {
    pub fn new(repo: Arc<P>) -> Self {
        Self { repo }
    }

    pub fn add_product(&self, product: Product) -> Result<Product, DomainError> {
        product.validate()?;
        match self.repo.insert(product) {
            Ok(stored) => {
                log::info!("Added product {}", stored.product_id);
                Ok(stored)
            }
            Err(DomainError::DuplicateProduct(id)) => {
                log::warn!("Rejected duplicate product {}", id);
                Err(DomainError::DuplicateProduct(id))
            }
            Err(e) => Err(e),
        }
    }

    pub fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        self.repo.list()
    }
}
