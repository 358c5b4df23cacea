use crate::service_broker::domain::model::{
    enums::service_broker_domain_error::ServiceBrokerDomainError,
    value_objects::{binding_id::BindingId, service_instance_id::ServiceInstanceId},
};

#[derive(Clone, Debug)]
pub struct CreateServiceInstanceBindingCommand {
    service_instance_id: ServiceInstanceId,
    binding_id: BindingId,
    app_guid: Option<String>,
}

impl CreateServiceInstanceBindingCommand {
    pub fn new(
        service_instance_id: String,
        binding_id: String,
        app_guid: Option<String>,
    ) -> Result<Self, ServiceBrokerDomainError> {
        Ok(Self {
            service_instance_id: ServiceInstanceId::new(service_instance_id)?,
            binding_id: BindingId::new(binding_id)?,
            app_guid: app_guid
                .map(|guid| guid.trim().to_string())
                .filter(|guid| !guid.is_empty()),
        })
    }

    pub fn service_instance_id(&self) -> &ServiceInstanceId {
        &self.service_instance_id
    }

    pub fn binding_id(&self) -> &BindingId {
        &self.binding_id
    }

    pub fn app_guid(&self) -> Option<&str> {
        self.app_guid.as_deref()
    }
}
