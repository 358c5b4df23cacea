pub mod config;
pub mod service_broker;
