use async_trait::async_trait;

use crate::service_broker::domain::model::{
    commands::{
        create_service_instance_command::CreateServiceInstanceCommand,
        delete_service_instance_command::DeleteServiceInstanceCommand,
        update_service_instance_command::UpdateServiceInstanceCommand,
    },
    entities::service_instance::ServiceInstance,
    enums::service_broker_domain_error::ServiceBrokerDomainError,
};

#[async_trait]
pub trait ServiceInstanceCommandService: Send + Sync {
    async fn handle_create(
        &self,
        command: CreateServiceInstanceCommand,
    ) -> Result<ServiceInstance, ServiceBrokerDomainError>;

    /// Returns `None` when the instance was never provisioned.
    async fn handle_delete(
        &self,
        command: DeleteServiceInstanceCommand,
    ) -> Result<Option<ServiceInstance>, ServiceBrokerDomainError>;

    async fn handle_update(
        &self,
        command: UpdateServiceInstanceCommand,
    ) -> Result<ServiceInstance, ServiceBrokerDomainError>;
}
