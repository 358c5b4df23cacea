pub mod repositories;
pub mod statement_executor;
