pub mod sqlx_sqlite_database_repository_impl;
pub mod sqlx_sqlite_statement_executor_impl;
