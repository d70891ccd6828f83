// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::warehouse::{Movie, Theater};

// --- SELEÇÕES ---

/// Granularidade do gráfico de receita.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Monthly,
    Weekly,
    Quarterly,
}

/// Regiões do filtro de localização. `All` desliga o filtro.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Region {
    #[default]
    All,
    North,
    South,
    East,
    West,
    Central,
}

// --- 1. GRÁFICO DE RECEITA POR PERÍODO ---

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub label: String,      // "January", "W12", "Q3"
    pub axis_label: String, // "Wk 12" no semanal; igual ao label nos demais
    pub revenue: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RevenueSeries {
    pub period: Period,
    pub year: Option<String>,
    // Intervalo entre ticks do eixo X (0 = mostra todos)
    pub axis_interval: usize,
    pub points: Vec<ChartPoint>,
}

// --- 2. RECEITA POR LOCALIZAÇÃO ---

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationRevenue {
    pub location: String,
    pub region: Option<Region>, // None = cidade fora da tabela de regiões
    pub revenue: Decimal,
}

// --- 3. RANKINGS (Top 5) ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieRanking {
    // Atributos da primeira linha vista para o título
    #[serde(flatten)]
    pub movie: Movie,
    pub tickets_sold: i64,
    pub total_amount: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TheaterRanking {
    #[serde(flatten)]
    pub theater: Theater,
    pub tickets_sold: i64,
    pub total_amount: Decimal,
}

// --- 4. CARDS DO TOPO ---

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct YearOverYear {
    pub current_year: i32,
    pub this_year_revenue: Decimal,
    pub last_year_revenue: Decimal,
    pub growth: Decimal, // Percentual; 0 quando o ano anterior não teve receita
}

/// Valores já formatados para exibição (INR, agrupamento indiano).
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FormattedKpis {
    pub total_revenue: String,
    pub tickets_sold: String,
    pub avg_ticket_price: String,
    pub total_discounts: String,
    pub growth: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KpiSummary {
    pub total_revenue: Decimal,
    pub tickets_sold: i64,
    pub total_discounts: Decimal,
    pub avg_ticket_price: Decimal,
    pub top_revenue_location: String,
    pub year_over_year: YearOverYear,
    pub formatted: FormattedKpis,
}

// --- 5. VISÃO COMPLETA ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub period: Period,
    pub selected_year: Option<String>,
    pub region: Region,
    pub region_options: Vec<Region>,
    pub available_years: Vec<String>,
    pub summary: KpiSummary,
    pub revenue: RevenueSeries,
    pub locations: Vec<LocationRevenue>,
    pub top_movies: Vec<MovieRanking>,
    pub top_theaters: Vec<TheaterRanking>,
}
