pub mod create_service_instance_binding_command;
pub mod create_service_instance_command;
pub mod delete_service_instance_binding_command;
pub mod delete_service_instance_command;
pub mod update_service_instance_command;
