// src/services/dashboard_service.rs

use std::sync::Arc;

use chrono::Datelike;
use serde_json::Value;

use crate::{
    analytics::{kpi, location, period, ranking, DimensionIndex},
    common::error::AppError,
    db::WarehouseSource,
    models::{
        dashboard::{
            DashboardView, KpiSummary, LocationRevenue, MovieRanking, Period, Region,
            RevenueSeries, TheaterRanking,
        },
        warehouse::{DateRow, Fact, Movie, Theater, WarehouseSnapshot},
    },
};

/// Seleções da tela (granularidade, ano e região), já validadas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardSelection {
    pub period: Period,
    pub year: Option<String>,
    pub region: Region,
}

fn wall_clock_year() -> i32 {
    chrono::Local::now().year()
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn WarehouseSource>,
    current_year: fn() -> i32,
}

impl DashboardService {
    pub fn new(source: Arc<dyn WarehouseSource>) -> Self {
        Self {
            source,
            current_year: wall_clock_year,
        }
    }

    // Fixa o "ano corrente" do cálculo de crescimento
    #[cfg(test)]
    pub fn with_current_year(mut self, current_year: fn() -> i32) -> Self {
        self.current_year = current_year;
        self
    }

    // =========================================================================
    //  1. TABELAS CRUAS (passthrough)
    // =========================================================================

    pub async fn customers(&self) -> Result<Vec<Value>, AppError> {
        self.source.customers().await
    }

    pub async fn movies(&self) -> Result<Vec<Movie>, AppError> {
        self.source.movies().await
    }

    pub async fn theaters(&self) -> Result<Vec<Theater>, AppError> {
        self.source.theaters().await
    }

    pub async fn dates(&self) -> Result<Vec<DateRow>, AppError> {
        self.source.dates().await
    }

    pub async fn facts(&self) -> Result<Vec<Fact>, AppError> {
        self.source.facts().await
    }

    // =========================================================================
    //  2. SNAPSHOT
    // =========================================================================

    /// Busca as cinco tabelas em paralelo. Se uma falhar, as outras são
    /// descartadas junto com o futuro da requisição.
    pub async fn load_snapshot(&self) -> Result<WarehouseSnapshot, AppError> {
        let (customers, movies, theaters, dates, facts) = tokio::try_join!(
            self.source.customers(),
            self.source.movies(),
            self.source.theaters(),
            self.source.dates(),
            self.source.facts(),
        )?;

        let snapshot = WarehouseSnapshot {
            customers,
            movies,
            theaters,
            dates,
            facts,
        };

        tracing::debug!(
            customers = snapshot.customers.len(),
            movies = snapshot.movies.len(),
            theaters = snapshot.theaters.len(),
            dates = snapshot.dates.len(),
            facts = snapshot.facts.len(),
            "Snapshot do warehouse carregado"
        );

        Ok(snapshot)
    }

    // =========================================================================
    //  3. VISÕES AGREGADAS (recalculadas do zero a cada chamada)
    // =========================================================================

    pub async fn dashboard(&self, selection: DashboardSelection) -> Result<DashboardView, AppError> {
        let snapshot = self.load_snapshot().await?;
        Ok(self.build_view(&snapshot, selection))
    }

    pub async fn summary(&self) -> Result<KpiSummary, AppError> {
        let snapshot = self.load_snapshot().await?;
        let index = DimensionIndex::build(&snapshot);
        Ok(kpi::summarize(&snapshot.facts, &index, (self.current_year)()))
    }

    pub async fn revenue(&self, granularity: Period, year: Option<String>) -> Result<RevenueSeries, AppError> {
        let snapshot = self.load_snapshot().await?;
        let index = DimensionIndex::build(&snapshot);
        let year = resolve_year(year, &period::available_years(&snapshot.dates));

        Ok(period::revenue_series(&snapshot.facts, &index, granularity, year.as_deref()))
    }

    pub async fn locations(&self, region: Region) -> Result<Vec<LocationRevenue>, AppError> {
        let snapshot = self.load_snapshot().await?;
        let index = DimensionIndex::build(&snapshot);
        let all = location::revenue_by_location(&snapshot.facts, &index);

        Ok(location::filter_by_region(&all, region))
    }

    pub async fn top_movies(&self) -> Result<Vec<MovieRanking>, AppError> {
        let snapshot = self.load_snapshot().await?;
        let index = DimensionIndex::build(&snapshot);
        Ok(ranking::top_movies(&snapshot.facts, &index))
    }

    pub async fn top_theaters(&self) -> Result<Vec<TheaterRanking>, AppError> {
        let snapshot = self.load_snapshot().await?;
        let index = DimensionIndex::build(&snapshot);
        Ok(ranking::top_theaters(&snapshot.facts, &index))
    }

    // Só a dimensão de datas é necessária aqui
    pub async fn available_years(&self) -> Result<Vec<String>, AppError> {
        let dates = self.source.dates().await?;
        Ok(period::available_years(&dates))
    }

    /// Monta a visão completa a partir de um snapshot já carregado.
    pub fn build_view(&self, snapshot: &WarehouseSnapshot, selection: DashboardSelection) -> DashboardView {
        let index = DimensionIndex::build(snapshot);
        let available_years = period::available_years(&snapshot.dates);
        let selected_year = resolve_year(selection.year, &available_years);

        let summary = kpi::summarize(&snapshot.facts, &index, (self.current_year)());
        let revenue = period::revenue_series(
            &snapshot.facts,
            &index,
            selection.period,
            selected_year.as_deref(),
        );
        let all_locations = location::revenue_by_location(&snapshot.facts, &index);

        DashboardView {
            period: selection.period,
            selected_year,
            region: selection.region,
            region_options: location::REGION_OPTIONS.to_vec(),
            available_years,
            summary,
            revenue,
            locations: location::filter_by_region(&all_locations, selection.region),
            top_movies: ranking::top_movies(&snapshot.facts, &index),
            top_theaters: ranking::top_theaters(&snapshot.facts, &index),
        }
    }
}

// Sem ano explícito, vale o primeiro ano disponível
fn resolve_year(requested: Option<String>, available: &[String]) -> Option<String> {
    requested.or_else(|| available.first().cloned())
}
