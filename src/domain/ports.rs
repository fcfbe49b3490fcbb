use super::errors::DomainError;
use super::order::{Order, OrderDraft};
use super::product::Product;

pub trait ProductRepository: Send + Sync + 'static {
    /// Stores `product` unless its id is already taken.
    fn insert(&self, product: Product) -> Result<Product, DomainError>;
    fn find_by_id(&self, product_id: &str) -> Result<Option<Product>, DomainError>;
    fn list(&self) -> Result<Vec<Product>, DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    fn create(&self, draft: OrderDraft) -> Result<Order, DomainError>;
    fn find_by_id(&self, id: &str) -> Result<Option<Order>, DomainError>;
    fn list(&self) -> Result<Vec<Order>, DomainError>;
    /// Replaces the stored order with the same id. Returns `None` when absent.
    fn update(&self, order: Order) -> Result<Option<Order>, DomainError>;
    /// Returns whether an order was removed.
    fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
