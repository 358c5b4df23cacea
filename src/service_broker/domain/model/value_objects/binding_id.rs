use std::fmt;

use uuid::Uuid;

use crate::service_broker::domain::model::enums::service_broker_domain_error::ServiceBrokerDomainError;

/// Binding identifiers double as backend role names, so only UUIDs are accepted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct BindingId(Uuid);

impl BindingId {
    pub fn new(value: String) -> Result<Self, ServiceBrokerDomainError> {
        let parsed =
            Uuid::parse_str(value.trim()).map_err(|_| ServiceBrokerDomainError::InvalidBindingId)?;
        Ok(Self(parsed))
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
