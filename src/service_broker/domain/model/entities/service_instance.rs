use crate::service_broker::domain::model::value_objects::{
    database_name::DatabaseName, external_identifier::ExternalIdentifier,
    service_instance_id::ServiceInstanceId,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServiceInstance {
    service_instance_id: ServiceInstanceId,
    service_definition_id: ExternalIdentifier,
    plan_id: ExternalIdentifier,
    organization_guid: ExternalIdentifier,
    space_guid: ExternalIdentifier,
}

impl ServiceInstance {
    pub fn new(
        service_instance_id: ServiceInstanceId,
        service_definition_id: ExternalIdentifier,
        plan_id: ExternalIdentifier,
        organization_guid: ExternalIdentifier,
        space_guid: ExternalIdentifier,
    ) -> Self {
        Self {
            service_instance_id,
            service_definition_id,
            plan_id,
            organization_guid,
            space_guid,
        }
    }

    pub fn service_instance_id(&self) -> &ServiceInstanceId {
        &self.service_instance_id
    }

    pub fn service_definition_id(&self) -> &ExternalIdentifier {
        &self.service_definition_id
    }

    pub fn plan_id(&self) -> &ExternalIdentifier {
        &self.plan_id
    }

    pub fn organization_guid(&self) -> &ExternalIdentifier {
        &self.organization_guid
    }

    pub fn space_guid(&self) -> &ExternalIdentifier {
        &self.space_guid
    }

    pub fn database_name(&self) -> DatabaseName {
        DatabaseName::from_service_instance_id(&self.service_instance_id)
    }
}
