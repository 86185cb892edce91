//! # rental-core: Pure Domain Logic for the Rental Reports API
//!
//! This crate is the **heart** of the rental reports system. It contains the
//! aggregation semantics as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Rental Reports Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 rental-api (HTTP transport)                     │   │
//! │  │    /top_movies  /top_actors  /search  /rental_info  ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rental-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  reports  │  │ validation│  │   │
//! │  │   │  Rating   │  │   Money   │  │  folds +  │  │   rules   │  │   │
//! │  │   │  Customer │  │  (cents)  │  │  shapes   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    rental-db (Store Access)                     │   │
//! │  │              SQLite queries, pool, repositories                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity types (Actor, Customer, Rating)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`reports`] - Report result shapes and the pure aggregation folds
//! - [`error`] - Domain error types
//! - [`validation`] - Request input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: Monetary values are cents (i64); only serde renders decimals
//! 4. **Order Independence**: Grouping folds never rely on store row order

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod reports;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rental_core::Money` instead of
// `use rental_core::money::Money`

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of entries in the top-rented-films ranking.
pub const TOP_FILMS_LIMIT: u32 = 5;

/// Number of entries in the top-actors ranking.
pub const TOP_ACTORS_LIMIT: u32 = 5;

/// Number of films listed per actor inside the top-actors ranking.
pub const TOP_FILMS_PER_ACTOR: u32 = 5;
