pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod state;

use actix_web::{middleware::Logger, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::AppConfig;
pub use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::dishes::list_dishes,
        handlers::dishes::get_dish,
        handlers::dishes::create_dish,
        handlers::dishes::update_dish,
        handlers::orders::list_orders,
        handlers::orders::get_order,
        handlers::orders::create_order,
        handlers::orders::update_order,
        handlers::orders::delete_order,
    ),
    components(schemas(
        domain::dish::Dish,
        domain::order::Order,
        domain::order::LineItem,
        domain::order::OrderStatus,
        handlers::Envelope,
        handlers::ErrorBody,
    )),
    tags(
        (name = "dishes", description = "Menu dishes"),
        (name = "orders", description = "Customer orders and their delivery status"),
    )
)]
pub struct ApiDoc;

/// Registers the dish and order routes.
///
/// Unsupported methods on a known path answer 405; anything else answers 404.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/dishes")
            .route(web::get().to(handlers::dishes::list_dishes))
            .route(web::post().to(handlers::dishes::create_dish))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/dishes/{id}")
            .route(web::get().to(handlers::dishes::get_dish))
            .route(web::put().to(handlers::dishes::update_dish))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/orders")
            .route(web::get().to(handlers::orders::list_orders))
            .route(web::post().to(handlers::orders::create_order))
            .default_service(web::to(handlers::method_not_allowed)),
    )
    .service(
        web::resource("/orders/{id}")
            .route(web::get().to(handlers::orders::get_order))
            .route(web::put().to(handlers::orders::update_order))
            .route(web::delete().to(handlers::orders::delete_order))
            .default_service(web::to(handlers::method_not_allowed)),
    );
}

/// Build and return an actix-web `Server` bound to `host:port`.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server.
pub fn build_server(
    state: web::Data<AppState>,
    host: &str,
    port: u16,
) -> std::io::Result<actix_web::dev::Server> {
    let openapi = ApiDoc::openapi();
    Ok(HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(configure)
            .default_service(web::to(handlers::path_not_found))
    })
    .bind((host.to_string(), port))?
    .run())
}
