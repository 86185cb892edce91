//! # rental-db: Database Layer for the Rental Reports API
//!
//! This crate provides database access for the rental reports system.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Rental Reports Data Flow                           │
//! │                                                                         │
//! │  HTTP Handler (GET /top_movies)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     rental-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Bootstrap   │  │   │
//! │  │   │   (pool.rs)   │    │ (report.rs)   │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │    │ ReportRepo    │    │ 001_initial  │  │   │
//! │  │   │ Connection    │◄───│ ActorRepo     │    │ 002_indexes  │  │   │
//! │  │   │ Management    │    │ CustomerRepo  │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │                  ./rental.db (configurable)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded schema bootstrap
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (report, actor, customer)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rental_db::{Database, DbConfig};
//!
//! let config = DbConfig::new("path/to/rental.db");
//! let db = Database::new(config).await?;
//!
//! let films = db.reports().top_films(5).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::actor::ActorRepository;
pub use repository::customer::CustomerRepository;
pub use repository::report::ReportRepository;
