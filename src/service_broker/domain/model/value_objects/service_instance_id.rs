use std::fmt;

use uuid::Uuid;

use crate::service_broker::domain::model::enums::service_broker_domain_error::ServiceBrokerDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ServiceInstanceId(Uuid);

impl ServiceInstanceId {
    pub fn new(value: String) -> Result<Self, ServiceBrokerDomainError> {
        let parsed = Uuid::parse_str(value.trim())
            .map_err(|_| ServiceBrokerDomainError::InvalidServiceInstanceId)?;
        Ok(Self(parsed))
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for ServiceInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
