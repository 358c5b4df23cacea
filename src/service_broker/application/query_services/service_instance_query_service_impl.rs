use std::sync::Arc;

use async_trait::async_trait;

use crate::service_broker::{
    domain::{
        model::{
            entities::service_instance::ServiceInstance,
            enums::service_broker_domain_error::ServiceBrokerDomainError,
            queries::get_service_instance_query::GetServiceInstanceQuery,
        },
        services::service_instance_query_service::ServiceInstanceQueryService,
    },
    infrastructure::persistence::repositories::service_instance_repository::ServiceInstanceRepository,
};

pub struct ServiceInstanceQueryServiceImpl {
    service_instance_repository: Arc<dyn ServiceInstanceRepository>,
}

impl ServiceInstanceQueryServiceImpl {
    pub fn new(service_instance_repository: Arc<dyn ServiceInstanceRepository>) -> Self {
        Self {
            service_instance_repository,
        }
    }
}

#[async_trait]
impl ServiceInstanceQueryService for ServiceInstanceQueryServiceImpl {
    async fn handle_get(
        &self,
        query: GetServiceInstanceQuery,
    ) -> Result<Option<ServiceInstance>, ServiceBrokerDomainError> {
        self.service_instance_repository
            .find_by_id(query.service_instance_id())
            .await
    }
}
