use std::path::Path;

use async_trait::async_trait;
use sqlx::{
    Column, Row, SqlitePool,
    error::ErrorKind,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow},
};

use crate::service_broker::{
    domain::model::enums::service_broker_domain_error::ServiceBrokerDomainError,
    infrastructure::persistence::statement_executor::{StatementExecutor, StatementRecord},
};

pub struct SqlxSqliteStatementExecutorImpl {
    pool: SqlitePool,
}

impl SqlxSqliteStatementExecutorImpl {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens a single-connection pool on a database file.
    pub async fn open(path: &Path, create_if_missing: bool) -> Result<Self, ServiceBrokerDomainError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(create_if_missing);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(map_sqlx_error)?;

        Ok(Self::new(pool))
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    fn row_to_record(row: &SqliteRow) -> Result<StatementRecord, ServiceBrokerDomainError> {
        let mut record = StatementRecord::with_capacity(row.columns().len());
        for column in row.columns() {
            let value: Option<String> = row.try_get(column.ordinal()).map_err(map_sqlx_error)?;
            if let Some(value) = value {
                record.insert(column.name().to_string(), value);
            }
        }
        Ok(record)
    }
}

#[async_trait]
impl StatementExecutor for SqlxSqliteStatementExecutorImpl {
    async fn execute(
        &self,
        statement: &str,
        params: &[&str],
    ) -> Result<u64, ServiceBrokerDomainError> {
        let mut connection = self.pool.acquire().await.map_err(map_sqlx_error)?;

        let mut query = sqlx::query(statement);
        for param in params {
            query = query.bind(*param);
        }

        let result = query
            .execute(&mut *connection)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected())
    }

    async fn select(
        &self,
        statement: &str,
        params: &[&str],
    ) -> Result<Vec<StatementRecord>, ServiceBrokerDomainError> {
        let mut connection = self.pool.acquire().await.map_err(map_sqlx_error)?;

        let mut query = sqlx::query(statement);
        for param in params {
            query = query.bind(*param);
        }

        let rows = query
            .fetch_all(&mut *connection)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter().map(Self::row_to_record).collect()
    }
}

fn map_sqlx_error(error: sqlx::Error) -> ServiceBrokerDomainError {
    if let sqlx::Error::Database(database_error) = &error {
        if matches!(database_error.kind(), ErrorKind::UniqueViolation) {
            return ServiceBrokerDomainError::BackendObjectAlreadyExists(
                database_error.message().to_string(),
            );
        }
    }

    ServiceBrokerDomainError::InfrastructureError(error.to_string())
}
