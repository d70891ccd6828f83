// src/db/memory.rs

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    common::error::AppError,
    db::WarehouseSource,
    models::warehouse::{DateRow, Fact, Movie, Theater, WarehouseSnapshot},
};

/// Fonte em memória para os testes de service e handler.
/// Com `failing = true` toda consulta de fatos falha como se o banco tivesse caído.
#[derive(Default)]
pub struct InMemoryWarehouse {
    pub snapshot: WarehouseSnapshot,
    pub failing: bool,
}

impl InMemoryWarehouse {
    pub fn new(snapshot: WarehouseSnapshot) -> Self {
        Self { snapshot, failing: false }
    }

    pub fn failing() -> Self {
        Self { failing: true, ..Default::default() }
    }
}

#[async_trait]
impl WarehouseSource for InMemoryWarehouse {
    async fn customers(&self) -> Result<Vec<Value>, AppError> {
        Ok(self.snapshot.customers.clone())
    }

    async fn movies(&self) -> Result<Vec<Movie>, AppError> {
        Ok(self.snapshot.movies.clone())
    }

    async fn theaters(&self) -> Result<Vec<Theater>, AppError> {
        Ok(self.snapshot.theaters.clone())
    }

    async fn dates(&self) -> Result<Vec<DateRow>, AppError> {
        Ok(self.snapshot.dates.clone())
    }

    async fn facts(&self) -> Result<Vec<Fact>, AppError> {
        if self.failing {
            return Err(AppError::DatabaseError(sqlx::Error::PoolTimedOut));
        }
        Ok(self.snapshot.facts.clone())
    }
}
