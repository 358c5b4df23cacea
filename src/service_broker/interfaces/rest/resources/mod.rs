pub mod bind_service_instance_request_resource;
pub mod catalog_resource;
pub mod error_response_resource;
pub mod provision_service_instance_request_resource;
pub mod service_instance_binding_resource;
pub mod service_instance_resource;
