pub mod database_repository;
pub mod postgres;
pub mod role_repository;
pub mod service_instance_repository;
pub mod sqlite;
pub mod sqlx_service_instance_repository_impl;
