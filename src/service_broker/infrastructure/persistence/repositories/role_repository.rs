use async_trait::async_trait;

use crate::service_broker::domain::model::{
    enums::service_broker_domain_error::ServiceBrokerDomainError,
    value_objects::database_password::DatabasePassword,
};

/// Role lifecycle statements. Role names are already validated identifiers.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    async fn create_role(&self, role_name: &str) -> Result<(), ServiceBrokerDomainError>;

    /// No-op when the role does not exist.
    async fn delete_role(&self, role_name: &str) -> Result<(), ServiceBrokerDomainError>;

    async fn set_password(
        &self,
        role_name: &str,
        password: &DatabasePassword,
    ) -> Result<(), ServiceBrokerDomainError>;

    /// Disables login while keeping the role and everything it owns.
    async fn unset_password(&self, role_name: &str) -> Result<(), ServiceBrokerDomainError>;

    async fn grant_role_to(
        &self,
        role_member: &str,
        role_group: &str,
    ) -> Result<(), ServiceBrokerDomainError>;
}
