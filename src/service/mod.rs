//! Service layer: business logic orchestration.
//!
//! [`DirectoryService`] owns the connection pool, scopes one transaction to
//! each write, and composes the domain operations with the repositories.

pub mod directory_service;

pub use directory_service::DirectoryService;
