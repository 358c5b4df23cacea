use std::collections::HashMap;

use async_trait::async_trait;

use crate::service_broker::domain::model::enums::service_broker_domain_error::ServiceBrokerDomainError;

/// One result row keyed by column name. NULL columns are left out.
pub type StatementRecord = HashMap<String, String>;

/// Runs single SQL statements on a borrowed backend connection.
///
/// Parameters are positional (`$1`, `$2`, ...) and always bound as text.
/// Backend duplicate-object errors surface as
/// [`ServiceBrokerDomainError::BackendObjectAlreadyExists`]; every other
/// failure as [`ServiceBrokerDomainError::InfrastructureError`].
#[async_trait]
pub trait StatementExecutor: Send + Sync {
    async fn execute(&self, statement: &str, params: &[&str])
    -> Result<u64, ServiceBrokerDomainError>;

    async fn select(
        &self,
        statement: &str,
        params: &[&str],
    ) -> Result<Vec<StatementRecord>, ServiceBrokerDomainError>;

    async fn select_one(
        &self,
        statement: &str,
        params: &[&str],
    ) -> Result<Option<StatementRecord>, ServiceBrokerDomainError> {
        Ok(self.select(statement, params).await?.into_iter().next())
    }
}
