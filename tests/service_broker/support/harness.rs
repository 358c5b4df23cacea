use std::sync::Arc;

use axum::Router;
use database_service_broker::service_broker::{
    application::{
        command_services::{
            service_instance_binding_command_service_impl::ServiceInstanceBindingCommandServiceImpl,
            service_instance_command_service_impl::ServiceInstanceCommandServiceImpl,
        },
        query_services::service_instance_query_service_impl::ServiceInstanceQueryServiceImpl,
    },
    domain::model::{
        entities::service_instance::ServiceInstance,
        value_objects::connection_limit::ConnectionLimit,
    },
    infrastructure::persistence::repositories::postgres::{
        sqlx_postgres_database_repository_impl::{
            PostgresMasterSettings, SqlxPostgresDatabaseRepositoryImpl,
        },
        sqlx_postgres_role_repository_impl::SqlxPostgresRoleRepositoryImpl,
    },
    interfaces::rest::{
        controllers::service_broker_rest_controller::{ServiceBrokerRestControllerState, router},
        resources::catalog_resource::CatalogResource,
    },
};

use super::fakes::{
    FakeDatabaseRepository, FakeServiceInstanceRepository, RecordingStatementExecutor,
};

pub struct BrokerTestHarness {
    pub instance_repository: Arc<FakeServiceInstanceRepository>,
    pub database_repository: Arc<FakeDatabaseRepository>,
    pub instance_service: Arc<ServiceInstanceCommandServiceImpl>,
    pub query_service: Arc<ServiceInstanceQueryServiceImpl>,
    pub binding_service: Arc<ServiceInstanceBindingCommandServiceImpl>,
}

impl BrokerTestHarness {
    pub fn router(&self) -> Router {
        router(ServiceBrokerRestControllerState {
            instance_command_service: self.instance_service.clone(),
            instance_query_service: self.query_service.clone(),
            binding_command_service: self.binding_service.clone(),
            catalog: Arc::new(CatalogResource::default()),
        })
    }
}

pub fn create_harness(
    entries: Vec<ServiceInstance>,
    database_repository: FakeDatabaseRepository,
) -> BrokerTestHarness {
    create_harness_with(
        FakeServiceInstanceRepository::with_entries(entries),
        database_repository,
        ConnectionLimit::unlimited(),
        false,
    )
}

pub fn create_harness_with(
    instance_repository: FakeServiceInstanceRepository,
    database_repository: FakeDatabaseRepository,
    connection_limit: ConnectionLimit,
    elevated_privileges: bool,
) -> BrokerTestHarness {
    let instance_repository = Arc::new(instance_repository);
    let database_repository = Arc::new(database_repository);

    let instance_service = Arc::new(ServiceInstanceCommandServiceImpl::new(
        instance_repository.clone(),
        database_repository.clone(),
        connection_limit,
    ));
    let query_service = Arc::new(ServiceInstanceQueryServiceImpl::new(
        instance_repository.clone(),
    ));
    let binding_service = Arc::new(ServiceInstanceBindingCommandServiceImpl::new(
        query_service.clone(),
        database_repository.clone(),
        elevated_privileges,
    ));

    BrokerTestHarness {
        instance_repository,
        database_repository,
        instance_service,
        query_service,
        binding_service,
    }
}

pub fn postgres_repository(
    executor: Arc<RecordingStatementExecutor>,
    elevated_privileges: bool,
) -> SqlxPostgresDatabaseRepositoryImpl {
    let role_repository = Arc::new(SqlxPostgresRoleRepositoryImpl::new(executor.clone()));

    SqlxPostgresDatabaseRepositoryImpl::new(
        executor,
        role_repository,
        PostgresMasterSettings {
            host: "db.internal".to_string(),
            port: 5432,
            username: "postgres".to_string(),
            elevated_privileges,
        },
    )
}
