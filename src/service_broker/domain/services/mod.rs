pub mod service_instance_binding_command_service;
pub mod service_instance_command_service;
pub mod service_instance_query_service;
