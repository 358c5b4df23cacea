use std::{str::FromStr, sync::Arc};

use axum::Router;
use sqlx::{
    migrate,
    postgres::{PgConnectOptions, PgPoolOptions},
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use tracing::info;

use crate::{
    config::app_config::{AppConfig, DatabaseBackend},
    service_broker::{
        application::{
            command_services::{
                service_instance_binding_command_service_impl::ServiceInstanceBindingCommandServiceImpl,
                service_instance_command_service_impl::ServiceInstanceCommandServiceImpl,
            },
            query_services::service_instance_query_service_impl::ServiceInstanceQueryServiceImpl,
        },
        infrastructure::persistence::{
            repositories::{
                database_repository::DatabaseRepository,
                postgres::{
                    sqlx_postgres_database_repository_impl::{
                        PostgresMasterSettings, SqlxPostgresDatabaseRepositoryImpl,
                    },
                    sqlx_postgres_role_repository_impl::SqlxPostgresRoleRepositoryImpl,
                    sqlx_postgres_statement_executor_impl::SqlxPostgresStatementExecutorImpl,
                },
                sqlite::{
                    sqlx_sqlite_database_repository_impl::SqlxSqliteDatabaseRepositoryImpl,
                    sqlx_sqlite_statement_executor_impl::SqlxSqliteStatementExecutorImpl,
                },
                sqlx_service_instance_repository_impl::SqlxServiceInstanceRepositoryImpl,
            },
            statement_executor::StatementExecutor,
        },
        interfaces::rest::{
            controllers::service_broker_rest_controller::{
                ServiceBrokerRestControllerState, router,
            },
            resources::catalog_resource::CatalogResource,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub async fn build_service_broker_router(config: &AppConfig) -> Result<Router, String> {
    let connection_limit = config.connection_limit().map_err(|e| e.to_string())?;
    let catalog = CatalogResource::from_json(config.catalog_json.as_deref())
        .map_err(|e| format!("invalid catalog: {e}"))?;

    let (executor, database_repository) = match config.database_backend {
        DatabaseBackend::Postgres => build_postgres_backend(config).await?,
        DatabaseBackend::Sqlite => build_sqlite_backend(config).await?,
    };

    let service_instance_repository = Arc::new(SqlxServiceInstanceRepositoryImpl::new(executor));

    let instance_command_service = Arc::new(ServiceInstanceCommandServiceImpl::new(
        service_instance_repository.clone(),
        database_repository.clone(),
        connection_limit,
    ));
    let instance_query_service = Arc::new(ServiceInstanceQueryServiceImpl::new(
        service_instance_repository,
    ));
    let binding_command_service = Arc::new(ServiceInstanceBindingCommandServiceImpl::new(
        instance_query_service.clone(),
        database_repository,
        config.elevated_privileges,
    ));

    Ok(router(ServiceBrokerRestControllerState {
        instance_command_service,
        instance_query_service,
        binding_command_service,
        catalog: Arc::new(catalog),
    }))
}

type Backend = (Arc<dyn StatementExecutor>, Arc<dyn DatabaseRepository>);

async fn build_postgres_backend(config: &AppConfig) -> Result<Backend, String> {
    let options =
        PgConnectOptions::from_str(&config.master_database_url).map_err(|e| e.to_string())?;
    let master = PostgresMasterSettings {
        host: options.get_host().to_string(),
        port: options.get_port(),
        username: options.get_username().to_string(),
        elevated_privileges: config.elevated_privileges,
    };

    let master_pool = PgPoolOptions::new()
        .connect_with(options)
        .await
        .map_err(|e| e.to_string())?;

    migrate!("./migrations")
        .run(&master_pool)
        .await
        .map_err(|e| e.to_string())?;

    info!(
        host = %master.host,
        port = master.port,
        elevated_privileges = master.elevated_privileges,
        "using postgres backend"
    );

    let executor: Arc<dyn StatementExecutor> =
        Arc::new(SqlxPostgresStatementExecutorImpl::new(master_pool));
    let role_repository = Arc::new(SqlxPostgresRoleRepositoryImpl::new(executor.clone()));
    let database_repository: Arc<dyn DatabaseRepository> =
        Arc::new(SqlxPostgresDatabaseRepositoryImpl::new(
            executor.clone(),
            role_repository,
            master,
        ));

    Ok((executor, database_repository))
}

async fn build_sqlite_backend(config: &AppConfig) -> Result<Backend, String> {
    tokio::fs::create_dir_all(&config.sqlite_data_dir)
        .await
        .map_err(|e| e.to_string())?;

    let options = SqliteConnectOptions::new()
        .filename(config.sqlite_broker_database_path())
        .create_if_missing(true);
    let broker_pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| e.to_string())?;

    migrate!("./migrations")
        .run(&broker_pool)
        .await
        .map_err(|e| e.to_string())?;

    info!(
        data_dir = %config.sqlite_data_dir.display(),
        "using embedded sqlite backend"
    );

    let executor: Arc<dyn StatementExecutor> =
        Arc::new(SqlxSqliteStatementExecutorImpl::new(broker_pool));
    let database_repository: Arc<dyn DatabaseRepository> = Arc::new(
        SqlxSqliteDatabaseRepositoryImpl::new(config.sqlite_data_dir.clone()),
    );

    Ok((executor, database_repository))
}
