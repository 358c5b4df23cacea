use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct ProvisionServiceInstanceRequestResource {
    #[validate(length(min = 1, max = 200))]
    pub service_id: String,

    #[validate(length(min = 1, max = 200))]
    pub plan_id: String,

    #[validate(length(min = 1, max = 200))]
    pub organization_guid: String,

    #[validate(length(min = 1, max = 200))]
    pub space_guid: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateServiceInstanceRequestResource {
    pub service_id: Option<String>,
    pub plan_id: Option<String>,
}
