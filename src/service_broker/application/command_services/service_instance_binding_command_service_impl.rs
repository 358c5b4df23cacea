use std::sync::Arc;

use async_trait::async_trait;
use rand::rngs::OsRng;
use tracing::info;

use crate::service_broker::{
    domain::{
        model::{
            commands::{
                create_service_instance_binding_command::CreateServiceInstanceBindingCommand,
                delete_service_instance_binding_command::DeleteServiceInstanceBindingCommand,
            },
            entities::{
                service_instance::ServiceInstance,
                service_instance_binding::ServiceInstanceBinding,
            },
            enums::service_broker_domain_error::ServiceBrokerDomainError,
            queries::get_service_instance_query::GetServiceInstanceQuery,
            value_objects::{
                database_password::DatabasePassword, database_username::DatabaseUsername,
                service_instance_id::ServiceInstanceId,
            },
        },
        services::{
            service_instance_binding_command_service::ServiceInstanceBindingCommandService,
            service_instance_query_service::ServiceInstanceQueryService,
        },
    },
    infrastructure::persistence::repositories::database_repository::DatabaseRepository,
};

pub struct ServiceInstanceBindingCommandServiceImpl {
    service_instance_query_service: Arc<dyn ServiceInstanceQueryService>,
    database_repository: Arc<dyn DatabaseRepository>,
    elevated_privileges: bool,
}

impl ServiceInstanceBindingCommandServiceImpl {
    pub fn new(
        service_instance_query_service: Arc<dyn ServiceInstanceQueryService>,
        database_repository: Arc<dyn DatabaseRepository>,
        elevated_privileges: bool,
    ) -> Self {
        Self {
            service_instance_query_service,
            database_repository,
            elevated_privileges,
        }
    }

    async fn require_service_instance(
        &self,
        service_instance_id: &ServiceInstanceId,
    ) -> Result<ServiceInstance, ServiceBrokerDomainError> {
        self.service_instance_query_service
            .handle_get(GetServiceInstanceQuery::from_id(*service_instance_id))
            .await?
            .ok_or_else(|| {
                ServiceBrokerDomainError::ServiceInstanceDoesNotExist(
                    service_instance_id.to_string(),
                )
            })
    }
}

#[async_trait]
impl ServiceInstanceBindingCommandService for ServiceInstanceBindingCommandServiceImpl {
    async fn handle_create(
        &self,
        command: CreateServiceInstanceBindingCommand,
    ) -> Result<ServiceInstanceBinding, ServiceBrokerDomainError> {
        let service_instance = self
            .require_service_instance(command.service_instance_id())
            .await?;
        let database_name = service_instance.database_name();
        let username = DatabaseUsername::from_binding_id(command.binding_id());
        let already_bound = || {
            ServiceBrokerDomainError::ServiceInstanceBindingAlreadyExists(Box::new(
                ServiceInstanceBinding::without_credentials(
                    *command.binding_id(),
                    *command.service_instance_id(),
                ),
            ))
        };

        if self
            .database_repository
            .user_exists(&database_name, &username)
            .await?
        {
            return Err(already_bound());
        }

        let password = DatabasePassword::generate(&mut OsRng);
        let credentials = match self
            .database_repository
            .create_user(&database_name, &username, &password, self.elevated_privileges)
            .await
        {
            Ok(credentials) => credentials,
            Err(ServiceBrokerDomainError::BackendObjectAlreadyExists(_)) => {
                return Err(already_bound());
            }
            Err(error) => return Err(error),
        };

        info!(
            service_instance_id = %command.service_instance_id(),
            binding_id = %command.binding_id(),
            elevated_privileges = self.elevated_privileges,
            "created binding"
        );

        Ok(ServiceInstanceBinding::with_credentials(
            *command.binding_id(),
            *command.service_instance_id(),
            credentials,
            command.app_guid().map(str::to_string),
        ))
    }

    async fn handle_delete(
        &self,
        command: DeleteServiceInstanceBindingCommand,
    ) -> Result<Option<ServiceInstanceBinding>, ServiceBrokerDomainError> {
        let service_instance = self
            .require_service_instance(command.service_instance_id())
            .await?;
        let database_name = service_instance.database_name();
        let username = DatabaseUsername::from_binding_id(command.binding_id());

        if !self
            .database_repository
            .user_exists(&database_name, &username)
            .await?
        {
            return Ok(None);
        }

        self.database_repository
            .delete_user(&database_name, &username)
            .await?;

        info!(
            service_instance_id = %command.service_instance_id(),
            binding_id = %command.binding_id(),
            "deleted binding"
        );

        Ok(Some(ServiceInstanceBinding::without_credentials(
            *command.binding_id(),
            *command.service_instance_id(),
        )))
    }
}
