use crate::service_broker::domain::model::enums::service_broker_domain_error::ServiceBrokerDomainError;

const UNLIMITED: i32 = -1;

/// Maximum concurrent connections for a tenant database. `-1` means unlimited
/// and is passed to the backend as is.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ConnectionLimit(i32);

impl ConnectionLimit {
    pub fn new(value: i32) -> Result<Self, ServiceBrokerDomainError> {
        if value < UNLIMITED {
            return Err(ServiceBrokerDomainError::InvalidConnectionLimit(value));
        }

        Ok(Self(value))
    }

    pub fn unlimited() -> Self {
        Self(UNLIMITED)
    }

    pub fn is_unlimited(&self) -> bool {
        self.0 == UNLIMITED
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}
