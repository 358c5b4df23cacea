use thiserror::Error;

use crate::service_broker::domain::model::entities::{
    service_instance::ServiceInstance, service_instance_binding::ServiceInstanceBinding,
};

#[derive(Debug, Error)]
pub enum ServiceBrokerDomainError {
    #[error("service instance id must be a UUID")]
    InvalidServiceInstanceId,

    #[error("binding id must be a UUID")]
    InvalidBindingId,

    #[error("identifier is invalid: {0}")]
    InvalidIdentifier(String),

    #[error("connection limit {0} is invalid; use -1 for unlimited or a non-negative value")]
    InvalidConnectionLimit(i32),

    #[error("database password is invalid; minimum length is 8")]
    InvalidDatabasePassword,

    #[error("service instance {} already exists", .0.service_instance_id())]
    ServiceInstanceAlreadyExists(Box<ServiceInstance>),

    #[error("service instance {0} does not exist")]
    ServiceInstanceDoesNotExist(String),

    #[error("binding {} already exists for service instance {}", .0.binding_id(), .0.service_instance_id())]
    ServiceInstanceBindingAlreadyExists(Box<ServiceInstanceBinding>),

    #[error("service update not supported")]
    ServiceInstanceUpdateNotSupported,

    #[error("backend object already exists: {0}")]
    BackendObjectAlreadyExists(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}
