// src/models/warehouse.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;

// As structs seguem os nomes de coluna do banco na serialização, porque os
// endpoints /api/<tabela> devolvem as linhas como estão.

// --- FATO ---

/// Uma venda de ingressos (linha de `fact_table`).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Fact {
    pub id: i64,
    pub c_id: Option<i64>,
    pub m_id: Option<i64>,
    pub t_id: Option<i64>,
    pub d_id: Option<i64>,

    #[sqlx(rename = "ticketsold")]
    #[serde(rename = "ticketsold")]
    pub tickets_sold: Option<i64>,

    #[sqlx(rename = "totalamount")]
    #[serde(rename = "totalamount")]
    pub total_amount: Option<Decimal>,

    pub discount: Option<Decimal>,
}

impl Fact {
    // Medidas ausentes (NULL) contam como zero em todas as agregações
    pub fn tickets(&self) -> i64 {
        self.tickets_sold.unwrap_or(0)
    }

    pub fn amount(&self) -> Decimal {
        self.total_amount.unwrap_or(Decimal::ZERO)
    }

    pub fn discount_amount(&self) -> Decimal {
        self.discount.unwrap_or(Decimal::ZERO)
    }
}

// --- DIMENSÕES ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Movie {
    pub m_id: i64,
    pub title: String,
    pub genre: Option<String>,
    pub release_date: Option<String>,
    pub duration: Option<i64>,
    pub rating: Option<Decimal>,
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Theater {
    pub t_id: i64,
    pub t_name: String,
    pub location: Option<String>,
    pub totalseats: Option<i64>,
    pub showtime: Option<String>,
    pub showdate: Option<String>,
}

/// Linha da dimensão de datas. A coluna do banco se chama `quater`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct DateRow {
    pub d_id: i64,
    pub date: Option<NaiveDate>,
    pub day: Option<String>,
    pub month: Option<String>,

    #[sqlx(rename = "quater")]
    #[serde(rename = "quater")]
    pub quarter: Option<i32>,

    pub year: Option<i32>,
    pub isweekend: Option<bool>,
}

// --- SNAPSHOT ---

/// As cinco tabelas carregadas juntas para uma requisição.
/// Imutável depois de montado; toda agregação lê daqui.
#[derive(Debug, Clone, Default)]
pub struct WarehouseSnapshot {
    // Clientes não entram em nenhuma agregação, então ficam como JSON cru
    pub customers: Vec<Value>,
    pub movies: Vec<Movie>,
    pub theaters: Vec<Theater>,
    pub dates: Vec<DateRow>,
    pub facts: Vec<Fact>,
}
