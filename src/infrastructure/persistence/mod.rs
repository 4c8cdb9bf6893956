//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. All
//! statements are parameterized; caller values only ever travel as bound
//! parameters.

pub mod pg_post_repository;

pub use pg_post_repository::PgPostRepository;
