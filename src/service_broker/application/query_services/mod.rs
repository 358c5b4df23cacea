pub mod service_instance_query_service_impl;
