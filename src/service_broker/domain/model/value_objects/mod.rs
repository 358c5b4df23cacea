pub mod binding_id;
pub mod connection_limit;
pub mod database_credentials;
pub mod database_name;
pub mod database_password;
pub mod database_username;
pub mod external_identifier;
pub mod service_instance_id;
