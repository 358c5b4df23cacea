use anyhow::{Context, anyhow};
use axum::Router;
use database_service_broker::{
    config::app_config::AppConfig,
    service_broker::{
        build_service_broker_router,
        interfaces::rest::resources::{
            bind_service_instance_request_resource::BindServiceInstanceRequestResource,
            catalog_resource::{CatalogPlanResource, CatalogResource, CatalogServiceResource},
            error_response_resource::{EmptyResponseResource, ErrorResponseResource},
            provision_service_instance_request_resource::{
                ProvisionServiceInstanceRequestResource, UpdateServiceInstanceRequestResource,
            },
            service_instance_binding_resource::{
                CredentialsResource, ServiceInstanceBindingResource,
            },
            service_instance_resource::ServiceInstanceResource,
        },
    },
};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        database_service_broker::service_broker::interfaces::rest::controllers::service_broker_rest_controller::get_catalog,
        database_service_broker::service_broker::interfaces::rest::controllers::service_broker_rest_controller::provision_service_instance,
        database_service_broker::service_broker::interfaces::rest::controllers::service_broker_rest_controller::get_service_instance,
        database_service_broker::service_broker::interfaces::rest::controllers::service_broker_rest_controller::update_service_instance,
        database_service_broker::service_broker::interfaces::rest::controllers::service_broker_rest_controller::deprovision_service_instance,
        database_service_broker::service_broker::interfaces::rest::controllers::service_broker_rest_controller::bind_service_instance,
        database_service_broker::service_broker::interfaces::rest::controllers::service_broker_rest_controller::unbind_service_instance
    ),
    components(
        schemas(
            CatalogResource,
            CatalogServiceResource,
            CatalogPlanResource,
            ProvisionServiceInstanceRequestResource,
            UpdateServiceInstanceRequestResource,
            BindServiceInstanceRequestResource,
            ServiceInstanceResource,
            ServiceInstanceBindingResource,
            CredentialsResource,
            EmptyResponseResource,
            ErrorResponseResource
        )
    ),
    tags(
        (name = "service-broker", description = "Database service broker: instances and bindings")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("database_service_broker=info".parse()?),
        )
        .init();

    let config = AppConfig::from_env();

    let service_broker_router = build_service_broker_router(&config)
        .await
        .map_err(|e| anyhow!(e))
        .context("failed to build service broker router")?;

    let app = Router::new()
        .merge(service_broker_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(port = config.port, backend = ?config.database_backend, "service broker listening");
    info!("swagger ui available at http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app)
        .await
        .context("failed to start axum server")?;

    Ok(())
}
