use async_trait::async_trait;

use crate::service_broker::domain::model::{
    entities::service_instance::ServiceInstance,
    enums::service_broker_domain_error::ServiceBrokerDomainError,
    queries::get_service_instance_query::GetServiceInstanceQuery,
};

#[async_trait]
pub trait ServiceInstanceQueryService: Send + Sync {
    async fn handle_get(
        &self,
        query: GetServiceInstanceQuery,
    ) -> Result<Option<ServiceInstance>, ServiceBrokerDomainError>;
}
