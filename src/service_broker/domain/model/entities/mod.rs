pub mod service_instance;
pub mod service_instance_binding;
