use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::service_broker::domain::model::{
    entities::service_instance_binding::ServiceInstanceBinding,
    value_objects::database_credentials::DatabaseCredentials,
};

/// Wire shape of the credential bundle consumed by bound applications.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CredentialsResource {
    pub uri: String,
    pub jdbcurl: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    pub database: String,
}

impl From<&DatabaseCredentials> for CredentialsResource {
    fn from(credentials: &DatabaseCredentials) -> Self {
        Self {
            uri: credentials.uri().to_string(),
            jdbcurl: credentials.jdbc_url().to_string(),
            username: credentials.username().value().to_string(),
            password: credentials.password().value().to_string(),
            hostname: credentials.hostname().map(str::to_string),
            port: credentials.port(),
            database: credentials.database().value().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ServiceInstanceBindingResource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<CredentialsResource>,
}

impl From<&ServiceInstanceBinding> for ServiceInstanceBindingResource {
    fn from(binding: &ServiceInstanceBinding) -> Self {
        Self {
            credentials: binding.credentials().map(CredentialsResource::from),
        }
    }
}
