// src/routes.rs

use axum::{http::Method, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn build_router(app_state: AppState) -> Router {
    // Tabelas cruas do warehouse
    let warehouse_routes = Router::new()
        .route("/api/customers", get(handlers::warehouse::list_customers))
        .route("/api/movies", get(handlers::warehouse::list_movies))
        .route("/api/theaters", get(handlers::warehouse::list_theaters))
        .route("/api/dates", get(handlers::warehouse::list_dates))
        .route("/api/facts", get(handlers::warehouse::list_facts));

    // Visões agregadas
    let dashboard_routes = Router::new()
        .route("/", get(handlers::dashboard::get_dashboard))
        .route("/summary", get(handlers::dashboard::get_summary))
        .route("/revenue", get(handlers::dashboard::get_revenue))
        .route("/locations", get(handlers::dashboard::get_locations))
        .route("/top-movies", get(handlers::dashboard::get_top_movies))
        .route("/top-theaters", get(handlers::dashboard::get_top_theaters))
        .route("/years", get(handlers::dashboard::get_years));

    // O front roda em outra origem; só leitura
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .merge(warehouse_routes)
        .nest("/api/dashboard", dashboard_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}
