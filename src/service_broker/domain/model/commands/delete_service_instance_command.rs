use crate::service_broker::domain::model::{
    enums::service_broker_domain_error::ServiceBrokerDomainError,
    value_objects::service_instance_id::ServiceInstanceId,
};

#[derive(Clone, Debug)]
pub struct DeleteServiceInstanceCommand {
    service_instance_id: ServiceInstanceId,
}

impl DeleteServiceInstanceCommand {
    pub fn new(service_instance_id: String) -> Result<Self, ServiceBrokerDomainError> {
        Ok(Self {
            service_instance_id: ServiceInstanceId::new(service_instance_id)?,
        })
    }

    pub fn service_instance_id(&self) -> &ServiceInstanceId {
        &self.service_instance_id
    }
}
