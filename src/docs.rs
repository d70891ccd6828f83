// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Warehouse ---
        handlers::warehouse::list_customers,
        handlers::warehouse::list_movies,
        handlers::warehouse::list_theaters,
        handlers::warehouse::list_dates,
        handlers::warehouse::list_facts,

        // --- Dashboard ---
        handlers::dashboard::get_dashboard,
        handlers::dashboard::get_summary,
        handlers::dashboard::get_revenue,
        handlers::dashboard::get_locations,
        handlers::dashboard::get_top_movies,
        handlers::dashboard::get_top_theaters,
        handlers::dashboard::get_years,
    ),
    components(
        schemas(
            // --- WAREHOUSE ---
            models::warehouse::Fact,
            models::warehouse::Movie,
            models::warehouse::Theater,
            models::warehouse::DateRow,

            // --- DASHBOARD ---
            models::dashboard::Period,
            models::dashboard::Region,
            models::dashboard::ChartPoint,
            models::dashboard::RevenueSeries,
            models::dashboard::LocationRevenue,
            models::dashboard::MovieRanking,
            models::dashboard::TheaterRanking,
            models::dashboard::YearOverYear,
            models::dashboard::FormattedKpis,
            models::dashboard::KpiSummary,
            models::dashboard::DashboardView,
        )
    ),
    tags(
        (name = "Warehouse", description = "Tabelas do data warehouse, sem filtro"),
        (name = "Dashboard", description = "Indicadores e Gráficos de Bilheteria")
    )
)]
pub struct ApiDoc;
