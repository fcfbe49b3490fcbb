use actix_web::{web, HttpResponse, Responder};
use actix_web_lab::sse;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::errors::DomainError;
use crate::domain::order::{NewOrder, Order, OrderLine, OrderLineInput};
use crate::errors::AppError;
use crate::AppOrderService;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub product_id: String,
    /// Defaults to 1.
    #[serde(default = "default_quantity")]
    pub quantity: i32,
}

fn default_quantity() -> i32 {
    1
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(alias = "product")]
    pub products: Vec<OrderLineRequest>,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineResponse {
    pub product_id: String,
    pub name: String,
    #[serde(deserialize_with = "super::decimal::deserialize")]
    #[schema(value_type = String, example = "9.99")]
    pub unit_price: BigDecimal,
    pub quantity: i32,
}

/// A stored order. Also the body of `PUT /updateOrder`, where `totalPrice`
/// and the timestamps may be omitted: they are recomputed by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: String,
    #[serde(alias = "product")]
    pub products: Vec<OrderLineResponse>,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: Option<String>,
    /// One of PENDING, CONFIRMED, SHIPPED, DELIVERED, CANCELLED.
    pub status: String,
    #[serde(default, deserialize_with = "super::decimal::deserialize")]
    #[schema(value_type = String, example = "19.98")]
    pub total_price: BigDecimal,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        NewOrder {
            customer_name: req.customer_name,
            customer_email: req.customer_email,
            lines: req
                .products
                .into_iter()
                .map(|l| OrderLineInput {
                    product_id: l.product_id,
                    quantity: l.quantity,
                })
                .collect(),
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        OrderResponse {
            order_id: o.id,
            products: o
                .lines
                .into_iter()
                .map(|l| OrderLineResponse {
                    product_id: l.product_id,
                    name: l.name,
                    unit_price: l.unit_price,
                    quantity: l.quantity,
                })
                .collect(),
            customer_name: o.customer_name,
            customer_email: o.customer_email,
            status: o.status.to_string(),
            total_price: o.total_price,
            created_at: o.created_at,
            updated_at: o.updated_at,
        }
    }
}

impl TryFrom<OrderResponse> for Order {
    type Error = DomainError;

    fn try_from(r: OrderResponse) -> Result<Self, Self::Error> {
        Ok(Order {
            id: r.order_id,
            customer_name: r.customer_name,
            customer_email: r.customer_email,
            status: r.status.parse()?,
            lines: r
                .products
                .into_iter()
                .map(|l| OrderLine {
                    product_id: l.product_id,
                    name: l.name,
                    unit_price: l.unit_price,
                    quantity: l.quantity,
                })
                .collect(),
            total_price: r.total_price,
            created_at: r.created_at,
            updated_at: r.updated_at,
        })
    }
}

/// One server-sent event carrying the order as JSON.
fn order_event(order: Order) -> Result<sse::Event, serde_json::Error> {
    sse::Data::new_json(OrderResponse::from(order)).map(sse::Event::from)
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /createOrder
///
/// Creates an order after checking that every referenced product exists.
/// The first unknown product id rejects the whole request.
#[utoipa::path(
    post,
    path = "/createOrder",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = OrderResponse),
        (status = 400, description = "Unknown product or invalid order"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    service: web::Data<AppOrderService>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let created = service.create_order(body.into_inner().into())?;
    Ok(HttpResponse::Ok().json(OrderResponse::from(created)))
}

/// GET /order/{id}
#[utoipa::path(
    get,
    path = "/order/{id}",
    params(
        ("id" = String, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<AppOrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let order = service.get_order(&path.into_inner())?;
    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}

/// GET /allOrder
///
/// Streams a snapshot of all orders as server-sent events, oldest first.
/// Each call takes a fresh snapshot.
#[utoipa::path(
    get,
    path = "/allOrder",
    responses(
        (status = 200, description = "Stream of orders", body = [OrderResponse], content_type = "text/event-stream"),
    ),
    tag = "orders"
)]
pub async fn all_orders(
    service: web::Data<AppOrderService>,
) -> Result<impl Responder, AppError> {
    let orders = service.list_orders()?;
    let events = futures::stream::iter(orders.into_iter().map(order_event));
    Ok(sse::Sse::from_stream(events))
}

/// PUT /updateOrder
///
/// Replaces an existing order wholesale.
#[utoipa::path(
    put,
    path = "/updateOrder",
    request_body = OrderResponse,
    responses(
        (status = 200, description = "Order updated", body = OrderResponse),
        (status = 400, description = "Invalid order"),
        (status = 404, description = "Order not found"),
    ),
    tag = "orders"
)]
pub async fn update_order(
    service: web::Data<AppOrderService>,
    body: web::Json<OrderResponse>,
) -> Result<HttpResponse, AppError> {
    let order = Order::try_from(body.into_inner())?;
    let updated = service.update_order(order)?;
    Ok(HttpResponse::Ok().json(OrderResponse::from(updated)))
}

/// DELETE /deleteOrder/{id}
///
/// Always answers 200 with an empty body, whether or not the order existed.
#[utoipa::path(
    delete,
    path = "/deleteOrder/{id}",
    params(
        ("id" = String, Path, description = "Order id"),
    ),
    responses(
        (status = 200, description = "Order deleted, or no such order"),
    ),
    tag = "orders"
)]
pub async fn delete_order(
    service: web::Data<AppOrderService>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_order(&path.into_inner())?;
    Ok(HttpResponse::Ok().finish())
}
