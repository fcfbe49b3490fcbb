use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::order::{
    total_price, validate_quantities, NewOrder, Order, OrderDraft, OrderLine,
};
use crate::domain::ports::{OrderRepository, ProductRepository};

pub struct OrderService<P, R> {
    products: Arc<P>,
    repo: R,
}

impl<P: ProductRepository, R: OrderRepository> OrderService<P, R> {
    pub fn new(products: Arc<P>, repo: R) -> Self {
        Self { products, repo }
    }

    /// Resolves every referenced product and stores the order.
    ///
    /// Lines are checked in request order and the first unknown product id
    /// fails the whole request; nothing is stored in that case.
    pub fn create_order(&self, new_order: NewOrder) -> Result<Order, DomainError> {
        validate_quantities(
            new_order
                .lines
                .iter()
                .map(|l| (l.product_id.as_str(), l.quantity)),
        )?;

        let lines = new_order
            .lines
            .iter()
            .map(|input| -> Result<OrderLine, DomainError> {
                let product = self
                    .products
                    .find_by_id(&input.product_id)?
                    .ok_or_else(|| DomainError::UnknownProduct(input.product_id.clone()))?;
                Ok(OrderLine {
                    product_id: product.product_id,
                    name: product.name,
                    unit_price: product.price,
                    quantity: input.quantity,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|e| {
                if let DomainError::UnknownProduct(id) = e {
                    log::warn!("Rejected order referencing unknown product {}", id);
                }
            })?;

        let created = self.repo.create(OrderDraft {
            customer_name: new_order.customer_name,
            customer_email: new_order.customer_email,
            lines,
        })?;
        log::info!(
            "Created order {} with {} line(s), total {}",
            created.id,
            created.lines.len(),
            created.total_price
        );
        Ok(created)
    }

    pub fn get_order(&self, id: &str) -> Result<Order, DomainError> {
        self.repo
            .find_by_id(id)?
            .ok_or_else(|| DomainError::NotFound(id.to_string()))
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        self.repo.list()
    }

    /// Replaces the stored order wholesale; the total is recomputed from the
    /// submitted lines.
    pub fn update_order(&self, mut order: Order) -> Result<Order, DomainError> {
        validate_quantities(
            order
                .lines
                .iter()
                .map(|l| (l.product_id.as_str(), l.quantity)),
        )?;
        order.total_price = total_price(&order.lines);

        let id = order.id.clone();
        let updated = self
            .repo
            .update(order)?
            .ok_or(DomainError::NotFound(id))?;
        log::info!("Updated order {} (status {})", updated.id, updated.status);
        Ok(updated)
    }

    /// Removing an unknown id is not an error; the return value tells
    /// whether anything was deleted.
    pub fn delete_order(&self, id: &str) -> Result<bool, DomainError> {
        let removed = self.repo.delete(id)?;
        if removed {
            log::info!("Deleted order {}", id);
        } else {
            log::debug!("Delete requested for unknown order {}", id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;

    use super::*;
    use crate::domain::order::{OrderLineInput, OrderStatus};
    use crate::domain::product::Product;
    use crate::infrastructure::order_repo::InMemoryOrderRepository;
    use crate::infrastructure::product_repo::InMemoryProductRepository;

    type Service = OrderService<InMemoryProductRepository, InMemoryOrderRepository>;

    fn service_with(products: &[(&str, &str)]) -> Service {
        let registry = Arc::new(InMemoryProductRepository::new());
        for (id, price) in products {
            registry
                .insert(Product {
                    product_id: id.to_string(),
                    name: format!("Product {id}"),
                    price: BigDecimal::from_str(price).expect("valid decimal"),
                    quantity: 10,
                })
                .expect("insert failed");
        }
        OrderService::new(registry, InMemoryOrderRepository::new())
    }

    fn new_order(lines: &[(&str, i32)]) -> NewOrder {
        NewOrder {
            customer_name: "Ada".to_string(),
            customer_email: None,
            lines: lines
                .iter()
                .map(|(id, quantity)| OrderLineInput {
                    product_id: id.to_string(),
                    quantity: *quantity,
                })
                .collect(),
        }
    }

    #[test]
    fn create_order_copies_product_details_and_totals() {
        let service = service_with(&[("P1", "10"), ("P2", "2.50")]);

        let order = service
            .create_order(new_order(&[("P1", 1), ("P2", 2)]))
            .expect("create failed");

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.lines[0].name, "Product P1");
        assert_eq!(
            order.lines[1].unit_price,
            BigDecimal::from_str("2.50").expect("valid decimal")
        );
        assert_eq!(
            order.total_price,
            BigDecimal::from_str("15").expect("valid decimal")
        );
    }

    #[test]
    fn created_order_is_retrievable_and_equal() {
        let service = service_with(&[("P1", "10")]);

        let created = service
            .create_order(new_order(&[("P1", 1)]))
            .expect("create failed");

        assert_eq!(service.get_order(&created.id).expect("get failed"), created);
    }

    #[test]
    fn first_unknown_product_fails_the_order() {
        let service = service_with(&[("P1", "10")]);

        let err = service
            .create_order(new_order(&[("P1", 1), ("X1", 1), ("X2", 1)]))
            .expect_err("unknown product must fail");

        assert_eq!(err, DomainError::UnknownProduct("X1".to_string()));
        assert!(service.list_orders().expect("list failed").is_empty());
    }

    #[test]
    fn unknown_product_before_known_one_still_fails() {
        let service = service_with(&[("P1", "10")]);

        let err = service
            .create_order(new_order(&[("X1", 1), ("P1", 1)]))
            .expect_err("unknown product must fail");

        assert_eq!(err, DomainError::UnknownProduct("X1".to_string()));
    }

    #[test]
    fn order_without_products_is_invalid() {
        let service = service_with(&[("P1", "10")]);

        assert!(matches!(
            service.create_order(new_order(&[])),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn get_unknown_order_is_not_found() {
        let service = service_with(&[]);

        assert_eq!(
            service.get_order("missing"),
            Err(DomainError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn update_recomputes_total() {
        let service = service_with(&[("P1", "10")]);
        let mut order = service
            .create_order(new_order(&[("P1", 1)]))
            .expect("create failed");

        order.lines[0].quantity = 3;
        order.status = OrderStatus::Confirmed;
        let updated = service.update_order(order).expect("update failed");

        assert_eq!(updated.status, OrderStatus::Confirmed);
        assert_eq!(
            updated.total_price,
            BigDecimal::from_str("30").expect("valid decimal")
        );
        assert_eq!(service.get_order(&updated.id).expect("get failed"), updated);
    }

    #[test]
    fn update_unknown_order_is_not_found() {
        let service = service_with(&[("P1", "10")]);
        let mut order = service
            .create_order(new_order(&[("P1", 1)]))
            .expect("create failed");
        order.id = "missing".to_string();

        assert_eq!(
            service.update_order(order),
            Err(DomainError::NotFound("missing".to_string()))
        );
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let service = service_with(&[("P1", "10")]);
        let created = service
            .create_order(new_order(&[("P1", 1)]))
            .expect("create failed");

        assert!(service.delete_order(&created.id).expect("delete failed"));
        assert!(matches!(
            service.get_order(&created.id),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn delete_unknown_order_is_a_no_op() {
        let service = service_with(&[]);
        assert!(!service.delete_order("missing").expect("delete failed"));
    }
}
