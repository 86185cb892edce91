//! # Repository Module
//!
//! Database repository implementations for the rental reports system.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  HTTP Handler                                                          │
//! │       │                                                                 │
//! │       │  db.reports().top_films(5)                                     │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  ReportRepository                                                      │
//! │  ├── top_films(&self, limit)                                           │
//! │  ├── top_actors(&self, limit, films_per_actor)                         │
//! │  ├── search_films(&self, keyword)                                      │
//! │  └── ...                                                               │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • SQL is isolated in one place                                        │
//! │  • Handlers stay transport-only                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`report::ReportRepository`] - The aggregation engine (ranking, search, history, availability)
//! - [`actor::ActorRepository`] - Actor reads
//! - [`customer::CustomerRepository`] - Customer CRUD

pub mod actor;
pub mod customer;
pub mod report;
