use crate::service_broker::domain::model::value_objects::{
    binding_id::BindingId, database_credentials::DatabaseCredentials,
    service_instance_id::ServiceInstanceId,
};

/// A binding is not stored by the broker; it exists while its backend user exists.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceInstanceBinding {
    binding_id: BindingId,
    service_instance_id: ServiceInstanceId,
    credentials: Option<DatabaseCredentials>,
    app_guid: Option<String>,
}

impl ServiceInstanceBinding {
    pub fn with_credentials(
        binding_id: BindingId,
        service_instance_id: ServiceInstanceId,
        credentials: DatabaseCredentials,
        app_guid: Option<String>,
    ) -> Self {
        Self {
            binding_id,
            service_instance_id,
            credentials: Some(credentials),
            app_guid,
        }
    }

    /// Descriptor returned on conflicts and unbinds; credentials are never re-disclosed.
    pub fn without_credentials(binding_id: BindingId, service_instance_id: ServiceInstanceId) -> Self {
        Self {
            binding_id,
            service_instance_id,
            credentials: None,
            app_guid: None,
        }
    }

    pub fn binding_id(&self) -> &BindingId {
        &self.binding_id
    }

    pub fn service_instance_id(&self) -> &ServiceInstanceId {
        &self.service_instance_id
    }

    pub fn credentials(&self) -> Option<&DatabaseCredentials> {
        self.credentials.as_ref()
    }

    pub fn app_guid(&self) -> Option<&str> {
        self.app_guid.as_deref()
    }
}
