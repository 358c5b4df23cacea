use crate::service_broker::domain::model::{
    enums::service_broker_domain_error::ServiceBrokerDomainError,
    value_objects::service_instance_id::ServiceInstanceId,
};

#[derive(Clone, Debug)]
pub struct UpdateServiceInstanceCommand {
    service_instance_id: ServiceInstanceId,
    plan_id: Option<String>,
}

impl UpdateServiceInstanceCommand {
    pub fn new(
        service_instance_id: String,
        plan_id: Option<String>,
    ) -> Result<Self, ServiceBrokerDomainError> {
        Ok(Self {
            service_instance_id: ServiceInstanceId::new(service_instance_id)?,
            plan_id,
        })
    }

    pub fn service_instance_id(&self) -> &ServiceInstanceId {
        &self.service_instance_id
    }

    pub fn plan_id(&self) -> Option<&str> {
        self.plan_id.as_deref()
    }
}
