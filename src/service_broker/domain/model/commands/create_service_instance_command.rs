use crate::service_broker::domain::model::{
    entities::service_instance::ServiceInstance,
    enums::service_broker_domain_error::ServiceBrokerDomainError,
    value_objects::{
        external_identifier::ExternalIdentifier, service_instance_id::ServiceInstanceId,
    },
};

#[derive(Clone, Debug)]
pub struct CreateServiceInstanceCommand {
    service_instance: ServiceInstance,
}

impl CreateServiceInstanceCommand {
    pub fn new(
        service_instance_id: String,
        service_definition_id: String,
        plan_id: String,
        organization_guid: String,
        space_guid: String,
    ) -> Result<Self, ServiceBrokerDomainError> {
        Ok(Self {
            service_instance: ServiceInstance::new(
                ServiceInstanceId::new(service_instance_id)?,
                ExternalIdentifier::new("service_id", service_definition_id)?,
                ExternalIdentifier::new("plan_id", plan_id)?,
                ExternalIdentifier::new("organization_guid", organization_guid)?,
                ExternalIdentifier::new("space_guid", space_guid)?,
            ),
        })
    }

    pub fn service_instance_id(&self) -> &ServiceInstanceId {
        self.service_instance.service_instance_id()
    }

    pub fn service_instance(&self) -> &ServiceInstance {
        &self.service_instance
    }
}
