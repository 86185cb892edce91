//! # Domain Types
//!
//! Entity types shared across the rental reports system.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Actor       │   │    Customer     │   │     Rating      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  actor_id       │   │  customer_id    │   │  G              │       │
//! │  │  first_name     │   │  names, email   │   │  PG             │       │
//! │  │  last_name      │   │  store/address  │   │  PG-13          │       │
//! │  └─────────────────┘   │  active flag    │   │  R              │       │
//! │                        └─────────────────┘   │  NC-17          │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Report result shapes (one struct per query output) live in [`crate::reports`];
//! these are the persistent entities the CRUD surface reads and writes. The
//! two sets are deliberately decoupled: storage rows never leak into report
//! payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Rating
// =============================================================================

/// MPAA-style film rating.
///
/// Stored and serialized as the literal code ("PG-13"), never as an ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
pub enum Rating {
    #[serde(rename = "G")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "G"))]
    G,

    #[serde(rename = "PG")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "PG"))]
    Pg,

    #[serde(rename = "PG-13")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "PG-13"))]
    Pg13,

    #[serde(rename = "R")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "R"))]
    R,

    #[serde(rename = "NC-17")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "NC-17"))]
    Nc17,
}

impl Rating {
    /// Returns the literal rating code.
    pub const fn code(&self) -> &'static str {
        match self {
            Rating::G => "G",
            Rating::Pg => "PG",
            Rating::Pg13 => "PG-13",
            Rating::R => "R",
            Rating::Nc17 => "NC-17",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "G" => Ok(Rating::G),
            "PG" => Ok(Rating::Pg),
            "PG-13" => Ok(Rating::Pg13),
            "R" => Ok(Rating::R),
            "NC-17" => Ok(Rating::Nc17),
            other => Err(format!("unknown rating code: {other}")),
        }
    }
}

// =============================================================================
// Actor
// =============================================================================

/// An actor credited in zero or more films (via the film_actor link table).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Actor {
    pub actor_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub last_update: DateTime<Utc>,
}

impl Actor {
    /// The "first last" display name used by the keyword search.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer of a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub customer_id: i64,

    /// Store the customer is registered at.
    pub store_id: i64,

    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,

    /// Mailing address reference.
    pub address_id: i64,

    /// Inactive customers are kept for rental history but excluded from
    /// new business.
    pub active: bool,

    pub create_date: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
}

/// Payload for creating a customer.
///
/// Distinct from [`Customer`]: the store generates the identity and the
/// timestamps, so the input shape must not carry them.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCustomer {
    pub store_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub address_id: i64,
}

/// Partial update payload for a customer. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub active: Option<bool>,
}

// =============================================================================
// Unit Tests
// =============================================================================
