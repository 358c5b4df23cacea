use async_trait::async_trait;

use crate::service_broker::domain::model::{
    enums::service_broker_domain_error::ServiceBrokerDomainError,
    value_objects::{
        connection_limit::ConnectionLimit, database_credentials::DatabaseCredentials,
        database_name::DatabaseName, database_password::DatabasePassword,
        database_username::DatabaseUsername,
    },
};

/// Tenant database and login-user lifecycle on one backend engine.
///
/// Statements run in a fixed order and are not rolled back; a failure part
/// way through leaves the earlier effects in place.
#[async_trait]
pub trait DatabaseRepository: Send + Sync {
    async fn create_database(
        &self,
        database_name: &DatabaseName,
        connection_limit: ConnectionLimit,
    ) -> Result<(), ServiceBrokerDomainError>;

    async fn delete_database(&self, database_name: &DatabaseName)
    -> Result<(), ServiceBrokerDomainError>;

    async fn create_user(
        &self,
        database_name: &DatabaseName,
        username: &DatabaseUsername,
        password: &DatabasePassword,
        elevated_privileges: bool,
    ) -> Result<DatabaseCredentials, ServiceBrokerDomainError>;

    async fn delete_user(
        &self,
        database_name: &DatabaseName,
        username: &DatabaseUsername,
    ) -> Result<(), ServiceBrokerDomainError>;

    async fn user_exists(
        &self,
        database_name: &DatabaseName,
        username: &DatabaseUsername,
    ) -> Result<bool, ServiceBrokerDomainError>;
}
