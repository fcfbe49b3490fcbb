use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::product::Product;
use crate::errors::AppError;
use crate::AppProductService;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub product_id: String,
    pub name: String,
    /// Decimal price, serialized as a string to avoid floating-point issues,
    /// e.g. "9.99". A JSON number is accepted on input.
    #[serde(deserialize_with = "super::decimal::deserialize")]
    #[schema(value_type = String, example = "9.99")]
    pub price: BigDecimal,
    /// Units in stock.
    #[serde(default)]
    pub quantity: i32,
}

impl From<ProductPayload> for Product {
    fn from(p: ProductPayload) -> Self {
        Product {
            product_id: p.product_id,
            name: p.name,
            price: p.price,
            quantity: p.quantity,
        }
    }
}

impl From<Product> for ProductPayload {
    fn from(p: Product) -> Self {
        ProductPayload {
            product_id: p.product_id,
            name: p.name,
            price: p.price,
            quantity: p.quantity,
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /addProduct
///
/// Registers a product unless its id is already taken.
#[utoipa::path(
    post,
    path = "/addProduct",
    request_body = ProductPayload,
    responses(
        (status = 200, description = "Product registered", body = ProductPayload),
        (status = 400, description = "Product id already exists or product is invalid"),
    ),
    tag = "products"
)]
pub async fn add_product(
    service: web::Data<AppProductService>,
    body: web::Json<ProductPayload>,
) -> Result<HttpResponse, AppError> {
    let stored = service.add_product(body.into_inner().into())?;
    Ok(HttpResponse::Ok().json(ProductPayload::from(stored)))
}

/// GET /availableProduct
///
/// Returns every registered product, sorted by id.
#[utoipa::path(
    get,
    path = "/availableProduct",
    responses(
        (status = 200, description = "All registered products", body = [ProductPayload]),
    ),
    tag = "products"
)]
pub async fn available_products(
    service: web::Data<AppProductService>,
) -> Result<HttpResponse, AppError> {
    let products: Vec<ProductPayload> = service
        .list_products()?
        .into_iter()
        .map(ProductPayload::from)
        .collect();
    Ok(HttpResponse::Ok().json(products))
}
