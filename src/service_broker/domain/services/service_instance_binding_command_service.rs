use async_trait::async_trait;

use crate::service_broker::domain::model::{
    commands::{
        create_service_instance_binding_command::CreateServiceInstanceBindingCommand,
        delete_service_instance_binding_command::DeleteServiceInstanceBindingCommand,
    },
    entities::service_instance_binding::ServiceInstanceBinding,
    enums::service_broker_domain_error::ServiceBrokerDomainError,
};

#[async_trait]
pub trait ServiceInstanceBindingCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateServiceInstanceBindingCommand,
    ) -> Result<ServiceInstanceBinding, ServiceBrokerDomainError>;

    /// Returns `None` when no such binding exists.
    async fn handle_delete(
        &self,
        command: DeleteServiceInstanceBindingCommand,
    ) -> Result<Option<ServiceInstanceBinding>, ServiceBrokerDomainError>;
}
