use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct BindServiceInstanceRequestResource {
    #[validate(length(min = 1, max = 200))]
    pub service_id: String,

    #[validate(length(min = 1, max = 200))]
    pub plan_id: String,

    #[validate(length(max = 200))]
    pub app_guid: Option<String>,
}
