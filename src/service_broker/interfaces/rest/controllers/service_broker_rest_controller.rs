use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use serde_json::Value;
use tracing::error;
use validator::Validate;

use crate::service_broker::{
    domain::{
        model::{
            commands::{
                create_service_instance_binding_command::CreateServiceInstanceBindingCommand,
                create_service_instance_command::CreateServiceInstanceCommand,
                delete_service_instance_binding_command::DeleteServiceInstanceBindingCommand,
                delete_service_instance_command::DeleteServiceInstanceCommand,
                update_service_instance_command::UpdateServiceInstanceCommand,
            },
            enums::service_broker_domain_error::ServiceBrokerDomainError,
            queries::get_service_instance_query::GetServiceInstanceQuery,
        },
        services::{
            service_instance_binding_command_service::ServiceInstanceBindingCommandService,
            service_instance_command_service::ServiceInstanceCommandService,
            service_instance_query_service::ServiceInstanceQueryService,
        },
    },
    interfaces::rest::resources::{
        bind_service_instance_request_resource::BindServiceInstanceRequestResource,
        catalog_resource::CatalogResource,
        error_response_resource::{EmptyResponseResource, ErrorResponseResource},
        provision_service_instance_request_resource::{
            ProvisionServiceInstanceRequestResource, UpdateServiceInstanceRequestResource,
        },
        service_instance_binding_resource::ServiceInstanceBindingResource,
        service_instance_resource::ServiceInstanceResource,
    },
};

type ErrorResponse = (StatusCode, Json<ErrorResponseResource>);

#[derive(Clone)]
pub struct ServiceBrokerRestControllerState {
    pub instance_command_service: Arc<dyn ServiceInstanceCommandService>,
    pub instance_query_service: Arc<dyn ServiceInstanceQueryService>,
    pub binding_command_service: Arc<dyn ServiceInstanceBindingCommandService>,
    pub catalog: Arc<CatalogResource>,
}

pub fn router(state: ServiceBrokerRestControllerState) -> Router {
    Router::new()
        .route("/v2/catalog", get(get_catalog))
        .route(
            "/v2/service_instances/:instance_id",
            put(provision_service_instance)
                .get(get_service_instance)
                .patch(update_service_instance)
                .delete(deprovision_service_instance),
        )
        .route(
            "/v2/service_instances/:instance_id/service_bindings/:binding_id",
            put(bind_service_instance).delete(unbind_service_instance),
        )
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/v2/catalog",
    tag = "service-broker",
    responses((status = 200, description = "Service catalog", body = CatalogResource))
)]
pub async fn get_catalog(
    State(state): State<ServiceBrokerRestControllerState>,
) -> Json<CatalogResource> {
    Json(state.catalog.as_ref().clone())
}

#[utoipa::path(
    put,
    path = "/v2/service_instances/{instance_id}",
    tag = "service-broker",
    params(("instance_id" = String, Path, description = "Service instance id (UUID)")),
    request_body = ProvisionServiceInstanceRequestResource,
    responses(
        (status = 201, description = "Service instance provisioned", body = EmptyResponseResource),
        (status = 200, description = "Identical service instance already provisioned", body = EmptyResponseResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 409, description = "Service instance exists with other attributes", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn provision_service_instance(
    State(state): State<ServiceBrokerRestControllerState>,
    Path(instance_id): Path<String>,
    Json(request): Json<ProvisionServiceInstanceRequestResource>,
) -> Result<(StatusCode, Json<EmptyResponseResource>), ErrorResponse> {
    validate(&request)?;

    let command = CreateServiceInstanceCommand::new(
        instance_id,
        request.service_id,
        request.plan_id,
        request.organization_guid,
        request.space_guid,
    )
    .map_err(map_domain_error)?;
    let requested = command.service_instance().clone();

    match state.instance_command_service.handle_create(command).await {
        Ok(_) => Ok((StatusCode::CREATED, Json(EmptyResponseResource::default()))),
        Err(ServiceBrokerDomainError::ServiceInstanceAlreadyExists(existing))
            if existing.as_ref() == &requested =>
        {
            Ok((StatusCode::OK, Json(EmptyResponseResource::default())))
        }
        Err(error) => Err(map_domain_error(error)),
    }
}

#[utoipa::path(
    get,
    path = "/v2/service_instances/{instance_id}",
    tag = "service-broker",
    params(("instance_id" = String, Path, description = "Service instance id (UUID)")),
    responses(
        (status = 200, description = "Service instance", body = ServiceInstanceResource),
        (status = 404, description = "Service instance not found", body = ErrorResponseResource)
    )
)]
pub async fn get_service_instance(
    State(state): State<ServiceBrokerRestControllerState>,
    Path(instance_id): Path<String>,
) -> Result<Json<ServiceInstanceResource>, ErrorResponse> {
    let query = GetServiceInstanceQuery::new(instance_id).map_err(map_domain_error)?;
    let service_instance_id = *query.service_instance_id();

    let service_instance = state
        .instance_query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponseResource {
                    description: format!("service instance {service_instance_id} not found"),
                }),
            )
        })?;

    Ok(Json(ServiceInstanceResource::from(&service_instance)))
}

#[utoipa::path(
    patch,
    path = "/v2/service_instances/{instance_id}",
    tag = "service-broker",
    params(("instance_id" = String, Path, description = "Service instance id (UUID)")),
    request_body = UpdateServiceInstanceRequestResource,
    responses((status = 422, description = "Updates are not supported", body = ErrorResponseResource))
)]
pub async fn update_service_instance(
    State(state): State<ServiceBrokerRestControllerState>,
    Path(instance_id): Path<String>,
    Json(request): Json<UpdateServiceInstanceRequestResource>,
) -> Result<Json<ServiceInstanceResource>, ErrorResponse> {
    let command =
        UpdateServiceInstanceCommand::new(instance_id, request.plan_id).map_err(map_domain_error)?;

    let updated = state
        .instance_command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ServiceInstanceResource::from(&updated)))
}

#[utoipa::path(
    delete,
    path = "/v2/service_instances/{instance_id}",
    tag = "service-broker",
    params(("instance_id" = String, Path, description = "Service instance id (UUID)")),
    responses(
        (status = 200, description = "Deleted service instance, or an empty body when it did not exist", body = ServiceInstanceResource),
        (status = 400, description = "Invalid service instance id", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn deprovision_service_instance(
    State(state): State<ServiceBrokerRestControllerState>,
    Path(instance_id): Path<String>,
) -> Result<Json<Value>, ErrorResponse> {
    let command = DeleteServiceInstanceCommand::new(instance_id).map_err(map_domain_error)?;

    let deleted = state
        .instance_command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    let payload = match deleted {
        Some(service_instance) => {
            serde_json::to_value(ServiceInstanceResource::from(&service_instance))
        }
        None => serde_json::to_value(EmptyResponseResource::default()),
    }
    .map_err(|e| map_domain_error(ServiceBrokerDomainError::InfrastructureError(e.to_string())))?;

    Ok(Json(payload))
}

#[utoipa::path(
    put,
    path = "/v2/service_instances/{instance_id}/service_bindings/{binding_id}",
    tag = "service-broker",
    params(
        ("instance_id" = String, Path, description = "Service instance id (UUID)"),
        ("binding_id" = String, Path, description = "Binding id (UUID)")
    ),
    request_body = BindServiceInstanceRequestResource,
    responses(
        (status = 201, description = "Binding created", body = ServiceInstanceBindingResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 409, description = "Binding already exists", body = ErrorResponseResource),
        (status = 422, description = "Service instance does not exist", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn bind_service_instance(
    State(state): State<ServiceBrokerRestControllerState>,
    Path((instance_id, binding_id)): Path<(String, String)>,
    Json(request): Json<BindServiceInstanceRequestResource>,
) -> Result<(StatusCode, Json<ServiceInstanceBindingResource>), ErrorResponse> {
    validate(&request)?;

    let command = CreateServiceInstanceBindingCommand::new(instance_id, binding_id, request.app_guid)
        .map_err(map_domain_error)?;

    let binding = state
        .binding_command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ServiceInstanceBindingResource::from(&binding)),
    ))
}

#[utoipa::path(
    delete,
    path = "/v2/service_instances/{instance_id}/service_bindings/{binding_id}",
    tag = "service-broker",
    params(
        ("instance_id" = String, Path, description = "Service instance id (UUID)"),
        ("binding_id" = String, Path, description = "Binding id (UUID)")
    ),
    responses(
        (status = 200, description = "Binding removed or never existed", body = EmptyResponseResource),
        (status = 422, description = "Service instance does not exist", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn unbind_service_instance(
    State(state): State<ServiceBrokerRestControllerState>,
    Path((instance_id, binding_id)): Path<(String, String)>,
) -> Result<Json<EmptyResponseResource>, ErrorResponse> {
    let command =
        DeleteServiceInstanceBindingCommand::new(instance_id, binding_id).map_err(map_domain_error)?;

    state
        .binding_command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EmptyResponseResource::default()))
}

fn validate(request: &impl Validate) -> Result<(), ErrorResponse> {
    request.validate().map_err(|validation_error| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource {
                description: validation_error.to_string(),
            }),
        )
    })
}

fn map_domain_error(error: ServiceBrokerDomainError) -> ErrorResponse {
    let status = match error {
        ServiceBrokerDomainError::InvalidServiceInstanceId
        | ServiceBrokerDomainError::InvalidBindingId
        | ServiceBrokerDomainError::InvalidIdentifier(_)
        | ServiceBrokerDomainError::InvalidConnectionLimit(_)
        | ServiceBrokerDomainError::InvalidDatabasePassword => StatusCode::BAD_REQUEST,
        ServiceBrokerDomainError::ServiceInstanceAlreadyExists(_)
        | ServiceBrokerDomainError::ServiceInstanceBindingAlreadyExists(_)
        | ServiceBrokerDomainError::BackendObjectAlreadyExists(_) => StatusCode::CONFLICT,
        ServiceBrokerDomainError::ServiceInstanceDoesNotExist(_)
        | ServiceBrokerDomainError::ServiceInstanceUpdateNotSupported => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ServiceBrokerDomainError::InfrastructureError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        error!(error = %error, "service broker request failed");
    }

    (
        status,
        Json(ErrorResponseResource {
            description: error.to_string(),
        }),
    )
}
