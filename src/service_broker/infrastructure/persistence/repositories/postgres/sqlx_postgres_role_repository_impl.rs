use std::sync::Arc;

use async_trait::async_trait;

use crate::service_broker::{
    domain::model::{
        enums::service_broker_domain_error::ServiceBrokerDomainError,
        value_objects::database_password::DatabasePassword,
    },
    infrastructure::persistence::{
        repositories::{
            postgres::postgres_sql::{quote_identifier, quote_literal},
            role_repository::RoleRepository,
        },
        statement_executor::StatementExecutor,
    },
};

pub struct SqlxPostgresRoleRepositoryImpl {
    executor: Arc<dyn StatementExecutor>,
}

impl SqlxPostgresRoleRepositoryImpl {
    pub fn new(executor: Arc<dyn StatementExecutor>) -> Self {
        Self { executor }
    }

    async fn run_statement(&self, statement: &str) -> Result<(), ServiceBrokerDomainError> {
        self.executor.execute(statement, &[]).await?;
        Ok(())
    }
}

#[async_trait]
impl RoleRepository for SqlxPostgresRoleRepositoryImpl {
    async fn create_role(&self, role_name: &str) -> Result<(), ServiceBrokerDomainError> {
        self.run_statement(&format!("CREATE ROLE {}", quote_identifier(role_name)))
            .await
    }

    async fn delete_role(&self, role_name: &str) -> Result<(), ServiceBrokerDomainError> {
        self.run_statement(&format!("DROP ROLE IF EXISTS {}", quote_identifier(role_name)))
            .await
    }

    async fn set_password(
        &self,
        role_name: &str,
        password: &DatabasePassword,
    ) -> Result<(), ServiceBrokerDomainError> {
        self.run_statement(&format!(
            "ALTER ROLE {} LOGIN PASSWORD {}",
            quote_identifier(role_name),
            quote_literal(password.value())
        ))
        .await
    }

    async fn unset_password(&self, role_name: &str) -> Result<(), ServiceBrokerDomainError> {
        self.run_statement(&format!("ALTER ROLE {} NOLOGIN", quote_identifier(role_name)))
            .await
    }

    async fn grant_role_to(
        &self,
        role_member: &str,
        role_group: &str,
    ) -> Result<(), ServiceBrokerDomainError> {
        self.run_statement(&format!(
            "GRANT {} TO {}",
            quote_identifier(role_group),
            quote_identifier(role_member)
        ))
        .await
    }
}
