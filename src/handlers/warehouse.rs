// src/handlers/warehouse.rs

// Endpoints de passthrough: cada um devolve a tabela inteira, sem filtro,
// paginação ou projeção.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    models::warehouse::{DateRow, Fact, Movie, Theater},
};

// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Warehouse",
    responses(
        (status = 200, description = "Todas as linhas da tabela customer", body = Vec<Object>),
        (status = 500, description = "Falha no banco de dados")
    )
)]
pub async fn list_customers(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let customers = app_state.dashboard_service.customers().await?;
    Ok((StatusCode::OK, Json(customers)))
}

// GET /api/movies
#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "Warehouse",
    responses(
        (status = 200, description = "Todas as linhas da tabela movie", body = Vec<Movie>),
        (status = 500, description = "Falha no banco de dados")
    )
)]
pub async fn list_movies(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let movies = app_state.dashboard_service.movies().await?;
    Ok((StatusCode::OK, Json(movies)))
}

// GET /api/theaters
#[utoipa::path(
    get,
    path = "/api/theaters",
    tag = "Warehouse",
    responses(
        (status = 200, description = "Todas as linhas da tabela theater", body = Vec<Theater>),
        (status = 500, description = "Falha no banco de dados")
    )
)]
pub async fn list_theaters(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let theaters = app_state.dashboard_service.theaters().await?;
    Ok((StatusCode::OK, Json(theaters)))
}

// GET /api/dates
#[utoipa::path(
    get,
    path = "/api/dates",
    tag = "Warehouse",
    responses(
        (status = 200, description = "Todas as linhas da dimensão de datas", body = Vec<DateRow>),
        (status = 500, description = "Falha no banco de dados")
    )
)]
pub async fn list_dates(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let dates = app_state.dashboard_service.dates().await?;
    Ok((StatusCode::OK, Json(dates)))
}

// GET /api/facts
#[utoipa::path(
    get,
    path = "/api/facts",
    tag = "Warehouse",
    responses(
        (status = 200, description = "Todas as vendas (fact_table)", body = Vec<Fact>),
        (status = 500, description = "Falha no banco de dados")
    )
)]
pub async fn list_facts(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let facts = app_state.dashboard_service.facts().await?;
    Ok((StatusCode::OK, Json(facts)))
}
