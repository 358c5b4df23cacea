pub mod service_broker_domain_error;
