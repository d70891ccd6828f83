// src/config.rs

use std::{env, str::FromStr, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::{
    db::{WarehouseRepository, WarehouseSource},
    services::DashboardService,
};

/// Configuração lida do ambiente (e do `.env`, se existir).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub run_migrations: bool,
}

// Valor opcional de configuração; se existir, precisa ser parseável.
fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} tem um valor inválido: {:?}", key, raw)),
        None => Ok(default),
    }
}

fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_or(key, env::var(key).ok(), default)
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL deve ser definida")?;

        Ok(Self {
            database_url,
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:3000".to_string())?,
            max_connections: env_or("DB_MAX_CONNECTIONS", 5)?,
            acquire_timeout: Duration::from_secs(env_or("DB_ACQUIRE_TIMEOUT_SECS", 3)?),
            run_migrations: env_or("RUN_MIGRATIONS", false)?,
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: DashboardService,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await
            .context("Falha ao conectar ao banco de dados")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        if config.run_migrations {
            sqlx::migrate!()
                .run(&db_pool)
                .await
                .context("Falha ao rodar as migrações do banco de dados")?;
            tracing::info!("✅ Migrações do banco de dados executadas com sucesso!");
        }

        // --- Monta o gráfico de dependências ---
        let repo = WarehouseRepository::new(db_pool);
        Ok(Self::from_source(Arc::new(repo)))
    }

    pub fn from_source(source: Arc<dyn WarehouseSource>) -> Self {
        Self {
            dashboard_service: DashboardService::new(source),
        }
    }

    #[cfg(test)]
    pub fn in_memory(snapshot: crate::models::warehouse::WarehouseSnapshot) -> Self {
        Self::from_source(Arc::new(crate::db::InMemoryWarehouse::new(snapshot)))
    }

    #[cfg(test)]
    pub fn in_memory_failing() -> Self {
        Self::from_source(Arc::new(crate::db::InMemoryWarehouse::failing()))
    }
}
