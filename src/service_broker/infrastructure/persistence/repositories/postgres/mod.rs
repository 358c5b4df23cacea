pub(crate) mod postgres_sql;
pub mod sqlx_postgres_database_repository_impl;
pub mod sqlx_postgres_role_repository_impl;
pub mod sqlx_postgres_statement_executor_impl;
