use regex::Regex;

use crate::service_broker::domain::model::{
    enums::service_broker_domain_error::ServiceBrokerDomainError,
    value_objects::service_instance_id::ServiceInstanceId,
};

lazy_static::lazy_static! {
    static ref DATABASE_NAME_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]{0,62}$").expect("valid regex");
}

/// Name shared by a tenant database and the role that owns it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DatabaseName(String);

impl DatabaseName {
    pub fn new(value: String) -> Result<Self, ServiceBrokerDomainError> {
        let trimmed = value.trim();

        if !DATABASE_NAME_REGEX.is_match(trimmed) {
            return Err(ServiceBrokerDomainError::InvalidIdentifier(format!(
                "database name '{trimmed}' is invalid"
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn from_service_instance_id(service_instance_id: &ServiceInstanceId) -> Self {
        Self(service_instance_id.to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
