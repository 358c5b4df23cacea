use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::service_broker::{
    domain::model::{
        enums::service_broker_domain_error::ServiceBrokerDomainError,
        value_objects::{
            connection_limit::ConnectionLimit, database_credentials::DatabaseCredentials,
            database_name::DatabaseName, database_password::DatabasePassword,
            database_username::DatabaseUsername,
        },
    },
    infrastructure::persistence::{
        repositories::{
            database_repository::DatabaseRepository, postgres::postgres_sql::quote_identifier,
            role_repository::RoleRepository,
        },
        statement_executor::StatementExecutor,
    },
};

/// Connection parameters of the master server, used both for administration
/// and for the credentials handed out to bound applications.
#[derive(Clone, Debug)]
pub struct PostgresMasterSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub elevated_privileges: bool,
}

pub struct SqlxPostgresDatabaseRepositoryImpl {
    executor: Arc<dyn StatementExecutor>,
    role_repository: Arc<dyn RoleRepository>,
    master: PostgresMasterSettings,
}

impl SqlxPostgresDatabaseRepositoryImpl {
    pub fn new(
        executor: Arc<dyn StatementExecutor>,
        role_repository: Arc<dyn RoleRepository>,
        master: PostgresMasterSettings,
    ) -> Self {
        Self {
            executor,
            role_repository,
            master,
        }
    }

    async fn run_statement(&self, statement: &str) -> Result<(), ServiceBrokerDomainError> {
        self.executor.execute(statement, &[]).await?;
        Ok(())
    }

    async fn resolve_master_username(&self) -> String {
        let lookup = self
            .executor
            .select_one("SELECT current_user::text AS username", &[])
            .await;

        match lookup {
            Ok(Some(record)) => match record.get("username") {
                Some(username) => username.clone(),
                None => self.master.username.clone(),
            },
            Ok(None) => self.master.username.clone(),
            Err(error) => {
                warn!(
                    error = %error,
                    fallback = %self.master.username,
                    "could not resolve current user, using configured master user"
                );
                self.master.username.clone()
            }
        }
    }
}

#[async_trait]
impl DatabaseRepository for SqlxPostgresDatabaseRepositoryImpl {
    async fn create_database(
        &self,
        database_name: &DatabaseName,
        connection_limit: ConnectionLimit,
    ) -> Result<(), ServiceBrokerDomainError> {
        let name = database_name.value();
        let db_identifier = quote_identifier(name);

        self.role_repository.create_role(name).await?;

        if self.master.elevated_privileges {
            self.role_repository
                .grant_role_to(name, &self.master.username)
                .await?;
        }

        self.run_statement(&format!(
            "CREATE DATABASE {db_identifier} ENCODING 'UTF8' CONNECTION LIMIT {}",
            connection_limit.value()
        ))
        .await?;

        self.run_statement(&format!(
            "REVOKE ALL ON DATABASE {db_identifier} FROM PUBLIC"
        ))
        .await?;

        self.run_statement(&format!(
            "ALTER DATABASE {db_identifier} OWNER TO {db_identifier}"
        ))
        .await?;

        debug!(database = name, "database created");
        Ok(())
    }

    async fn delete_database(
        &self,
        database_name: &DatabaseName,
    ) -> Result<(), ServiceBrokerDomainError> {
        let name = database_name.value();
        let db_identifier = quote_identifier(name);

        self.executor
            .execute(
                "SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = $1::name AND pid <> pg_backend_pid()",
                &[name],
            )
            .await?;

        // A failed provisioning leaves the role behind without its database.
        let existing = self
            .executor
            .select_one(
                "SELECT datname::text AS datname FROM pg_catalog.pg_database WHERE datname = $1::name",
                &[name],
            )
            .await?;
        if existing.is_none() {
            debug!(database = name, "database absent, dropping role only");
            self.role_repository.delete_role(name).await?;
            return Ok(());
        }

        let master_username = self.resolve_master_username().await;
        self.run_statement(&format!(
            "ALTER DATABASE {db_identifier} OWNER TO {}",
            quote_identifier(&master_username)
        ))
        .await?;

        self.run_statement(&format!("DROP DATABASE IF EXISTS {db_identifier}"))
            .await?;

        self.role_repository.delete_role(name).await?;

        debug!(database = name, "database dropped");
        Ok(())
    }

    async fn create_user(
        &self,
        database_name: &DatabaseName,
        username: &DatabaseUsername,
        password: &DatabasePassword,
        elevated_privileges: bool,
    ) -> Result<DatabaseCredentials, ServiceBrokerDomainError> {
        self.role_repository.create_role(username.value()).await?;
        self.role_repository
            .grant_role_to(username.value(), database_name.value())
            .await?;

        if elevated_privileges {
            // Objects the user creates end up owned by the shared database role.
            self.run_statement(&format!(
                "ALTER ROLE {} SET ROLE {}",
                quote_identifier(username.value()),
                quote_identifier(database_name.value())
            ))
            .await?;
        }

        self.role_repository
            .set_password(username.value(), password)
            .await?;

        Ok(DatabaseCredentials::for_server(
            &self.master.host,
            self.master.port,
            database_name.clone(),
            username.clone(),
            password.clone(),
        ))
    }

    async fn delete_user(
        &self,
        database_name: &DatabaseName,
        username: &DatabaseUsername,
    ) -> Result<(), ServiceBrokerDomainError> {
        // Login goes first so the credential is dead even if the drop fails.
        self.role_repository.unset_password(username.value()).await?;

        self.executor
            .execute(
                "SELECT pg_terminate_backend(pid) FROM pg_stat_activity WHERE datname = $1::name AND usename = $2::name AND pid <> pg_backend_pid()",
                &[database_name.value(), username.value()],
            )
            .await?;

        self.role_repository.delete_role(username.value()).await
    }

    async fn user_exists(
        &self,
        _database_name: &DatabaseName,
        username: &DatabaseUsername,
    ) -> Result<bool, ServiceBrokerDomainError> {
        let record = self
            .executor
            .select_one(
                "SELECT rolname::text AS rolname FROM pg_catalog.pg_roles WHERE rolname = $1::name",
                &[username.value()],
            )
            .await?;

        Ok(record.is_some())
    }
}
