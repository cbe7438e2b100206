//! # fyyur
//!
//! Booking directory for live music: venues, artists and the shows that
//! connect them, served as server-rendered HTML over PostgreSQL.
//!
//! ## Architecture
//!
//! ```text
//! Browser (HTML forms)
//!     │
//!     ├── Page Handlers (api/)
//!     ├── Views (views/)
//!     │
//!     ├── DirectoryService (service/)
//!     ├── Records, submissions, partitioning (domain/)
//!     │
//!     └── PostgreSQL Persistence (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
pub mod views;
