pub mod service_instance_binding_command_service_impl;
pub mod service_instance_command_service_impl;
