use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ErrorResponseResource {
    pub description: String,
}

/// The `{}` body the broker API expects on most successful responses.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct EmptyResponseResource {}
