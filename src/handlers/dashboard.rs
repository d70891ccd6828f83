// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::{Validate, ValidationError};

use crate::{
    common::error::AppError,
    config::AppState,
    models::dashboard::{
        DashboardView, KpiSummary, LocationRevenue, MovieRanking, Period, Region, RevenueSeries,
        TheaterRanking,
    },
    services::DashboardSelection,
};

// O ano chega como texto ("2024") e é comparado como texto com a dimensão de datas
fn validate_year(year: &str) -> Result<(), ValidationError> {
    if year.is_empty() || year.len() > 8 || !year.chars().all(|c| c.is_ascii_digit()) {
        let mut err = ValidationError::new("year");
        err.message = Some("O ano deve conter apenas dígitos (ex: 2024).".into());
        return Err(err);
    }
    Ok(())
}

// ---
// Query: seleções da tela
// ---
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DashboardQuery {
    /// monthly (padrão), weekly ou quarterly
    pub period: Option<Period>,

    /// Ano selecionado; sem ele vale o primeiro ano disponível
    #[validate(custom(function = "validate_year"))]
    #[param(example = "2024")]
    pub year: Option<String>,

    /// All (padrão), North, South, East, West ou Central
    pub region: Option<Region>,
}

impl From<DashboardQuery> for DashboardSelection {
    fn from(query: DashboardQuery) -> Self {
        Self {
            period: query.period.unwrap_or_default(),
            year: query.year,
            region: query.region.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RegionQuery {
    pub region: Option<Region>,
}

// GET /api/dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = "Dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Cards, gráfico, localizações e rankings de uma vez", body = DashboardView),
        (status = 400, description = "Parâmetros inválidos"),
        (status = 500, description = "Falha no banco de dados")
    )
)]
pub async fn get_dashboard(
    State(app_state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let view = app_state.dashboard_service.dashboard(query.into()).await?;

    Ok((StatusCode::OK, Json(view)))
}

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "KPIs globais e crescimento ano a ano", body = KpiSummary)
    )
)]
pub async fn get_summary(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let summary = app_state.dashboard_service.summary().await?;
    Ok((StatusCode::OK, Json(summary)))
}

// GET /api/dashboard/revenue
#[utoipa::path(
    get,
    path = "/api/dashboard/revenue",
    tag = "Dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Receita do ano agrupada por período", body = RevenueSeries),
        (status = 400, description = "Parâmetros inválidos")
    )
)]
pub async fn get_revenue(
    State(app_state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let selection = DashboardSelection::from(query);
    let series = app_state
        .dashboard_service
        .revenue(selection.period, selection.year)
        .await?;

    Ok((StatusCode::OK, Json(series)))
}

// GET /api/dashboard/locations
#[utoipa::path(
    get,
    path = "/api/dashboard/locations",
    tag = "Dashboard",
    params(RegionQuery),
    responses(
        (status = 200, description = "Receita por cidade, opcionalmente filtrada por região", body = Vec<LocationRevenue>)
    )
)]
pub async fn get_locations(
    State(app_state): State<AppState>,
    Query(query): Query<RegionQuery>,
) -> Result<impl IntoResponse, AppError> {
    let locations = app_state
        .dashboard_service
        .locations(query.region.unwrap_or_default())
        .await?;

    Ok((StatusCode::OK, Json(locations)))
}

// GET /api/dashboard/top-movies
#[utoipa::path(
    get,
    path = "/api/dashboard/top-movies",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Top 5 filmes por receita", body = Vec<MovieRanking>)
    )
)]
pub async fn get_top_movies(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let movies = app_state.dashboard_service.top_movies().await?;
    Ok((StatusCode::OK, Json(movies)))
}

// GET /api/dashboard/top-theaters
#[utoipa::path(
    get,
    path = "/api/dashboard/top-theaters",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Top 5 cinemas por receita", body = Vec<TheaterRanking>)
    )
)]
pub async fn get_top_theaters(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let theaters = app_state.dashboard_service.top_theaters().await?;
    Ok((StatusCode::OK, Json(theaters)))
}

// GET /api/dashboard/years
#[utoipa::path(
    get,
    path = "/api/dashboard/years",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Anos disponíveis na dimensão de datas", body = Vec<String>)
    )
)]
pub async fn get_years(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let years = app_state.dashboard_service.available_years().await?;
    Ok((StatusCode::OK, Json(years)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::{
        analytics::fixtures::{date, fact, mumbai_snapshot, theater},
        routes::build_router,
    };

    async fn get_json(uri: &str, state: AppState) -> (StatusCode, serde_json::Value) {
        let response = build_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
    }

    #[test]
    fn test_validate_year() {
        assert!(validate_year("2024").is_ok());
        assert!(validate_year("").is_err());
        assert!(validate_year("20x4").is_err());
        assert!(validate_year("123456789").is_err());
    }

    #[tokio::test]
    async fn dashboard_reference_example() {
        let (status, body) = get_json(
            "/api/dashboard?period=monthly&year=2024",
            AppState::in_memory(mumbai_snapshot()),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["totalRevenue"], 1000.0);
        assert_eq!(body["summary"]["ticketsSold"], 10);
        assert_eq!(body["summary"]["avgTicketPrice"], 100.0);
        assert_eq!(body["summary"]["topRevenueLocation"], "Mumbai");
        assert_eq!(body["revenue"]["points"][0]["label"], "January");
        assert_eq!(body["revenue"]["points"][0]["revenue"], 1000.0);
        assert_eq!(body["topMovies"][0]["title"], "X");
        assert_eq!(body["region"], "All");
    }

    #[tokio::test]
    async fn invalid_year_is_rejected_with_details() {
        let (status, body) =
            get_json("/api/dashboard?year=abc", AppState::in_memory(mumbai_snapshot())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["details"]["year"].is_array());
    }

    #[tokio::test]
    async fn unknown_period_is_a_bad_request() {
        let (status, _) =
            get_json("/api/dashboard/revenue?period=daily", AppState::in_memory(mumbai_snapshot())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn weekly_revenue_series() {
        let mut snapshot = mumbai_snapshot();
        snapshot.dates.push(date(2, (2024, 3, 15), "March"));
        snapshot.facts.push(fact(2, 1, 1, 2, 1, 250, 0));

        let (status, body) = get_json(
            "/api/dashboard/revenue?period=weekly&year=2024",
            AppState::in_memory(snapshot),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["period"], "weekly");
        assert_eq!(body["points"][0]["label"], "W2");
        assert_eq!(body["points"][1]["axisLabel"], "Wk 11");
        assert_eq!(body["axisInterval"], 0);
    }

    #[tokio::test]
    async fn locations_filtered_by_region() {
        let mut snapshot = mumbai_snapshot();
        snapshot.theaters.push(theater(2, "Mall Cinema", "Kolkata"));
        snapshot.facts.push(fact(2, 1, 2, 1, 1, 80, 0));

        let (_, all) = get_json("/api/dashboard/locations", AppState::in_memory(snapshot.clone())).await;
        let (_, east) = get_json("/api/dashboard/locations?region=East", AppState::in_memory(snapshot)).await;

        assert_eq!(all.as_array().map(Vec::len), Some(2));
        assert_eq!(east.as_array().map(Vec::len), Some(1));
        assert_eq!(east[0]["location"], "Kolkata");
        assert_eq!(east[0]["region"], "East");
    }

    #[tokio::test]
    async fn years_endpoint_lists_available_years() {
        let mut snapshot = mumbai_snapshot();
        snapshot.dates.push(date(2, (2022, 3, 15), "March"));

        let (_, body) = get_json("/api/dashboard/years", AppState::in_memory(snapshot)).await;
        assert_eq!(body, serde_json::json!(["2022", "2024"]));
    }

    #[tokio::test]
    async fn top_theaters_endpoint() {
        let (status, body) =
            get_json("/api/dashboard/top-theaters", AppState::in_memory(mumbai_snapshot())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["t_name"], "PVR");
        assert_eq!(body[0]["totalAmount"], 1000.0);
    }
}
