use serde::Serialize;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::{info, warn};

use crate::config::AppConfig;

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub tables: Vec<String>,
}

/// Connectivity probe behind the `/test` endpoint. Connection problems
/// degrade the report, never the process.
#[derive(Debug, Default)]
pub struct Diagnostics {
    pool: Option<PgPool>,
    database_url_set: bool,
    database_name: Option<String>,
}

impl Diagnostics {
    pub async fn from_config(config: &AppConfig) -> Self {
        let pool = match &config.database_url {
            Some(database_url) => {
                match PgPoolOptions::new()
                    .max_connections(5)
                    .connect(database_url)
                    .await
                {
                    Ok(pool) => {
                        info!("Connected to Postgres for diagnostics");
                        Some(pool)
                    }
                    Err(error) => {
                        warn!(?error, "Postgres unreachable; /test will report the failure");
                        None
                    }
                }
            }
            None => None,
        };

        Self {
            pool,
            database_url_set: config.database_url.is_some(),
            database_name: config.database_name.clone(),
        }
    }

    pub async fn report(&self) -> DiagnosticsReport {
        let mut report = DiagnosticsReport {
            backend: "running".to_owned(),
            database: "not available".to_owned(),
            database_url: if self.database_url_set {
                "set".to_owned()
            } else {
                "not set".to_owned()
            },
            database_name: self
                .database_name
                .clone()
                .unwrap_or_else(|| "not set".to_owned()),
            connection_status: "not connected".to_owned(),
            tables: Vec::new(),
        };

        let Some(pool) = &self.pool else {
            return report;
        };

        report.connection_status = "connected".to_owned();

        match list_tables(pool).await {
            Ok(tables) => {
                report.database = "connected and working".to_owned();
                report.tables = tables;
            }
            Err(error) => {
                report.database = format!("connected but error: {error}");
            }
        }

        report
    }
}

async fn list_tables(pool: &PgPool) -> anyhow::Result<Vec<String>> {
    let tables = sqlx::query_as::<_, (String,)>(
        "SELECT tablename
         FROM pg_catalog.pg_tables
         WHERE schemaname NOT IN ('pg_catalog', 'information_schema')
         ORDER BY tablename
         LIMIT 10",
    )
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|row| row.0)
    .collect();

    Ok(tables)
}
