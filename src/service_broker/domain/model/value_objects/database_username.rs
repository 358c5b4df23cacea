use regex::Regex;

use crate::service_broker::domain::model::{
    enums::service_broker_domain_error::ServiceBrokerDomainError,
    value_objects::binding_id::BindingId,
};

lazy_static::lazy_static! {
    static ref DATABASE_USERNAME_REGEX: Regex =
        Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]{0,62}$").expect("valid regex");
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DatabaseUsername(String);

impl DatabaseUsername {
    pub fn new(value: String) -> Result<Self, ServiceBrokerDomainError> {
        let trimmed = value.trim();

        if !DATABASE_USERNAME_REGEX.is_match(trimmed) {
            return Err(ServiceBrokerDomainError::InvalidIdentifier(format!(
                "database username '{trimmed}' is invalid"
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn from_binding_id(binding_id: &BindingId) -> Self {
        Self(binding_id.to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
