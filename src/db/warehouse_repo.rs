// src/db/warehouse_repo.rs

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::warehouse::{DateRow, Fact, Movie, Theater},
};

/// Origem das tabelas do data warehouse. O service só conhece esta trait;
/// em produção quem responde é o `WarehouseRepository` (Postgres).
#[async_trait]
pub trait WarehouseSource: Send + Sync {
    async fn customers(&self) -> Result<Vec<Value>, AppError>;
    async fn movies(&self) -> Result<Vec<Movie>, AppError>;
    async fn theaters(&self) -> Result<Vec<Theater>, AppError>;
    async fn dates(&self) -> Result<Vec<DateRow>, AppError>;
    async fn facts(&self) -> Result<Vec<Fact>, AppError>;
}

// Os casts deixam a decodificação independente do tipo exato de cada coluna
// (INT4 vs INT8, VARCHAR vs TEXT). O ORDER BY fixa a ordem de aparição,
// que decide empates nos rankings.

const MOVIES_SQL: &str = r#"
    SELECT
        m_id::INT8              AS m_id,
        COALESCE(title::TEXT, '') AS title,
        genre::TEXT             AS genre,
        release_date::TEXT      AS release_date,
        duration::INT8          AS duration,
        rating::NUMERIC         AS rating,
        language::TEXT          AS language
    FROM movie
    ORDER BY m_id
"#;

const THEATERS_SQL: &str = r#"
    SELECT
        t_id::INT8                 AS t_id,
        COALESCE(t_name::TEXT, '') AS t_name,
        location::TEXT             AS location,
        totalseats::INT8           AS totalseats,
        showtime::TEXT             AS showtime,
        showdate::TEXT             AS showdate
    FROM theater
    ORDER BY t_id
"#;

const DATES_SQL: &str = r#"
    SELECT
        d_id::INT8        AS d_id,
        "date"::DATE      AS "date",
        day::TEXT         AS day,
        month::TEXT       AS month,
        quater::INT4      AS quater,
        year::INT4        AS year,
        isweekend::BOOL   AS isweekend
    FROM "date"
    ORDER BY d_id
"#;

const FACTS_SQL: &str = r#"
    SELECT
        id::INT8               AS id,
        c_id::INT8             AS c_id,
        m_id::INT8             AS m_id,
        t_id::INT8             AS t_id,
        d_id::INT8             AS d_id,
        ticketsold::INT8       AS ticketsold,
        totalamount::NUMERIC   AS totalamount,
        discount::NUMERIC      AS discount
    FROM fact_table
    ORDER BY id
"#;

#[derive(Clone)]
pub struct WarehouseRepository {
    pool: PgPool,
}

impl WarehouseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WarehouseSource for WarehouseRepository {
    // O formato da tabela de clientes não é fixo: devolvemos cada linha como objeto JSON
    async fn customers(&self) -> Result<Vec<Value>, AppError> {
        let rows = sqlx::query_scalar::<_, Value>("SELECT row_to_json(c) FROM customer c")
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(rows = rows.len(), "customer carregado");
        Ok(rows)
    }

    async fn movies(&self) -> Result<Vec<Movie>, AppError> {
        let rows = sqlx::query_as::<_, Movie>(MOVIES_SQL)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(rows = rows.len(), "movie carregado");
        Ok(rows)
    }

    async fn theaters(&self) -> Result<Vec<Theater>, AppError> {
        let rows = sqlx::query_as::<_, Theater>(THEATERS_SQL)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(rows = rows.len(), "theater carregado");
        Ok(rows)
    }

    async fn dates(&self) -> Result<Vec<DateRow>, AppError> {
        let rows = sqlx::query_as::<_, DateRow>(DATES_SQL)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(rows = rows.len(), "date carregado");
        Ok(rows)
    }

    async fn facts(&self) -> Result<Vec<Fact>, AppError> {
        let rows = sqlx::query_as::<_, Fact>(FACTS_SQL)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(rows = rows.len(), "fact_table carregada");
        Ok(rows)
    }
}
