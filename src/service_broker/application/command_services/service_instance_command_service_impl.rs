use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::service_broker::{
    domain::{
        model::{
            commands::{
                create_service_instance_command::CreateServiceInstanceCommand,
                delete_service_instance_command::DeleteServiceInstanceCommand,
                update_service_instance_command::UpdateServiceInstanceCommand,
            },
            entities::service_instance::ServiceInstance,
            enums::service_broker_domain_error::ServiceBrokerDomainError,
            value_objects::{
                connection_limit::ConnectionLimit, service_instance_id::ServiceInstanceId,
            },
        },
        services::service_instance_command_service::ServiceInstanceCommandService,
    },
    infrastructure::persistence::repositories::{
        database_repository::DatabaseRepository,
        service_instance_repository::ServiceInstanceRepository,
    },
};

pub struct ServiceInstanceCommandServiceImpl {
    service_instance_repository: Arc<dyn ServiceInstanceRepository>,
    database_repository: Arc<dyn DatabaseRepository>,
    connection_limit: ConnectionLimit,
}

impl ServiceInstanceCommandServiceImpl {
    pub fn new(
        service_instance_repository: Arc<dyn ServiceInstanceRepository>,
        database_repository: Arc<dyn DatabaseRepository>,
        connection_limit: ConnectionLimit,
    ) -> Self {
        Self {
            service_instance_repository,
            database_repository,
            connection_limit,
        }
    }

    async fn already_exists(
        &self,
        service_instance_id: &ServiceInstanceId,
    ) -> ServiceBrokerDomainError {
        match self
            .service_instance_repository
            .find_by_id(service_instance_id)
            .await
        {
            Ok(Some(existing)) => {
                ServiceBrokerDomainError::ServiceInstanceAlreadyExists(Box::new(existing))
            }
            Ok(None) => ServiceBrokerDomainError::InfrastructureError(format!(
                "service instance {service_instance_id} was recorded concurrently and then removed"
            )),
            Err(error) => error,
        }
    }
}

#[async_trait]
impl ServiceInstanceCommandService for ServiceInstanceCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateServiceInstanceCommand,
    ) -> Result<ServiceInstance, ServiceBrokerDomainError> {
        let service_instance_id = command.service_instance_id();

        if let Some(existing) = self
            .service_instance_repository
            .find_by_id(service_instance_id)
            .await?
        {
            return Err(ServiceBrokerDomainError::ServiceInstanceAlreadyExists(
                Box::new(existing),
            ));
        }

        info!(service_instance_id = %service_instance_id, "creating service instance");

        // The primary key settles a race that slipped past the lookup above.
        match self
            .service_instance_repository
            .save(command.service_instance())
            .await
        {
            Ok(()) => {}
            Err(ServiceBrokerDomainError::BackendObjectAlreadyExists(_)) => {
                return Err(self.already_exists(service_instance_id).await);
            }
            Err(error) => return Err(error),
        }

        let service_instance = command.service_instance().clone();
        if let Err(creation_error) = self
            .database_repository
            .create_database(&service_instance.database_name(), self.connection_limit)
            .await
        {
            error!(
                service_instance_id = %service_instance_id,
                error = %creation_error,
                "database creation failed after the instance was recorded"
            );
            return Err(creation_error);
        }

        info!(service_instance_id = %service_instance_id, "created service instance");
        Ok(service_instance)
    }

    async fn handle_delete(
        &self,
        command: DeleteServiceInstanceCommand,
    ) -> Result<Option<ServiceInstance>, ServiceBrokerDomainError> {
        let service_instance_id = command.service_instance_id();

        let Some(service_instance) = self
            .service_instance_repository
            .find_by_id(service_instance_id)
            .await?
        else {
            info!(service_instance_id = %service_instance_id, "service instance not found, nothing to delete");
            return Ok(None);
        };

        info!(service_instance_id = %service_instance_id, "deleting service instance");

        self.database_repository
            .delete_database(&service_instance.database_name())
            .await?;
        self.service_instance_repository
            .delete(service_instance_id)
            .await?;

        info!(service_instance_id = %service_instance_id, "deleted service instance");
        Ok(Some(service_instance))
    }

    async fn handle_update(
        &self,
        command: UpdateServiceInstanceCommand,
    ) -> Result<ServiceInstance, ServiceBrokerDomainError> {
        info!(
            service_instance_id = %command.service_instance_id(),
            plan_id = ?command.plan_id(),
            "rejecting service instance update"
        );
        Err(ServiceBrokerDomainError::ServiceInstanceUpdateNotSupported)
    }
}
