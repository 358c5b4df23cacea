use crate::service_broker::domain::model::enums::service_broker_domain_error::ServiceBrokerDomainError;

const MAX_LENGTH: usize = 200;

/// Platform-supplied identifier (service definition, plan, organization, space)
/// stored verbatim in the bookkeeping table.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ExternalIdentifier(String);

impl ExternalIdentifier {
    pub fn new(field: &str, value: String) -> Result<Self, ServiceBrokerDomainError> {
        let trimmed = value.trim().to_string();

        if trimmed.is_empty() || trimmed.chars().count() > MAX_LENGTH {
            return Err(ServiceBrokerDomainError::InvalidIdentifier(format!(
                "{field} must be between 1 and {MAX_LENGTH} characters"
            )));
        }

        Ok(Self(trimmed))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
