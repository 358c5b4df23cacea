use async_trait::async_trait;
use sqlx::{Column, PgPool, Row, postgres::PgRow};

use crate::service_broker::{
    domain::model::enums::service_broker_domain_error::ServiceBrokerDomainError,
    infrastructure::persistence::statement_executor::{StatementExecutor, StatementRecord},
};

const DUPLICATE_OBJECT: &str = "42710";
const DUPLICATE_DATABASE: &str = "42P04";
const UNIQUE_VIOLATION: &str = "23505";

pub struct SqlxPostgresStatementExecutorImpl {
    pool: PgPool,
}

impl SqlxPostgresStatementExecutorImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &PgRow) -> Result<StatementRecord, ServiceBrokerDomainError> {
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
impl StatementExecutor for SqlxPostgresStatementExecutorImpl {
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
        if matches!(
            database_error.code().as_deref(),
            Some(DUPLICATE_OBJECT | DUPLICATE_DATABASE | UNIQUE_VIOLATION)
        ) {
            return ServiceBrokerDomainError::BackendObjectAlreadyExists(
                database_error.message().to_string(),
            );
        }
    }

    ServiceBrokerDomainError::InfrastructureError(error.to_string())
}
