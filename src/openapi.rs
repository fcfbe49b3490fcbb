use utoipa::OpenApi;

use crate::handlers::{orders, products};

#[derive(OpenApi)]
#[openapi(
    info(title = "Order management", description = "Product registry and order store"),
    paths(
        products::add_product,
        products::available_products,
        orders::create_order,
        orders::get_order,
        orders::all_orders,
        orders::update_order,
        orders::delete_order,
    ),
    components(schemas(
        products::ProductPayload,
        orders::OrderLineRequest,
        orders::CreateOrderRequest,
        orders::OrderLineResponse,
        orders::OrderResponse,
    )),
    tags(
        (name = "products", description = "Product registry"),
        (name = "orders", description = "Order store")
    )
)]
pub struct ApiDoc;
