pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod openapi;

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use application::order_service::OrderService;
use application::product_service::ProductService;
use infrastructure::order_repo::InMemoryOrderRepository;
use infrastructure::product_repo::InMemoryProductRepository;

pub use config::ServerConfig;
pub use openapi::ApiDoc;

pub type AppProductService = ProductService<InMemoryProductRepository>;
pub type AppOrderService = OrderService<InMemoryProductRepository, InMemoryOrderRepository>;

/// Services shared by every worker. Cloning shares the underlying stores.
#[derive(Clone)]
pub struct AppState {
    pub products: web::Data<AppProductService>,
    pub orders: web::Data<AppOrderService>,
}

impl AppState {
    /// Empty product registry and order store; the order service validates
    /// against the same registry the product service writes to.
    pub fn in_memory() -> Self {
        let registry = Arc::new(InMemoryProductRepository::new());
        Self {
            products: web::Data::new(ProductService::new(Arc::clone(&registry))),
            orders: web::Data::new(OrderService::new(
                registry,
                InMemoryOrderRepository::new(),
            )),
        }
    }
}

/// Registers the application state and every REST route.
pub fn routes(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(state.products.clone())
        .app_data(state.orders.clone())
        .route("/addProduct", web::post().to(handlers::products::add_product))
        .route(
            "/availableProduct",
            web::get().to(handlers::products::available_products),
        )
        .route("/createOrder", web::post().to(handlers::orders::create_order))
        .route("/order/{id}", web::get().to(handlers::orders::get_order))
        .route("/allOrder", web::get().to(handlers::orders::all_orders))
        .route("/updateOrder", web::put().to(handlers::orders::update_order))
        .route(
            "/deleteOrder/{id}",
            web::delete().to(handlers::orders::delete_order),
        );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: AppState,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let openapi = ApiDoc::openapi();
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| routes(cfg, &state))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind((host.to_string(), port))?
    .run())
}
