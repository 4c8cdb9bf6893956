//! Core domain types: entities and data-access contracts.

pub mod entities;
pub mod repositories;
