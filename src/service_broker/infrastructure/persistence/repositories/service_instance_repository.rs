use async_trait::async_trait;

use crate::service_broker::domain::model::{
    entities::service_instance::ServiceInstance,
    enums::service_broker_domain_error::ServiceBrokerDomainError,
    value_objects::service_instance_id::ServiceInstanceId,
};

/// The broker's own record of provisioned instances.
#[async_trait]
pub trait ServiceInstanceRepository: Send + Sync {
    /// Fails with `BackendObjectAlreadyExists` when the id is already recorded.
    async fn save(&self, service_instance: &ServiceInstance) -> Result<(), ServiceBrokerDomainError>;

    async fn delete(
        &self,
        service_instance_id: &ServiceInstanceId,
    ) -> Result<(), ServiceBrokerDomainError>;

    async fn find_by_id(
        &self,
        service_instance_id: &ServiceInstanceId,
    ) -> Result<Option<ServiceInstance>, ServiceBrokerDomainError>;
}
