use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::service_broker::domain::model::entities::service_instance::ServiceInstance;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ServiceInstanceResource {
    pub service_instance_id: String,
    pub service_id: String,
    pub plan_id: String,
    pub organization_guid: String,
    pub space_guid: String,
}

impl From<&ServiceInstance> for ServiceInstanceResource {
    fn from(service_instance: &ServiceInstance) -> Self {
        Self {
            service_instance_id: service_instance.service_instance_id().to_string(),
            service_id: service_instance.service_definition_id().value().to_string(),
            plan_id: service_instance.plan_id().value().to_string(),
            organization_guid: service_instance.organization_guid().value().to_string(),
            space_guid: service_instance.space_guid().value().to_string(),
        }
    }
}
