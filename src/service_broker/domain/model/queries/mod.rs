pub mod get_service_instance_query;
