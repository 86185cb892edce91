//! # Report Shapes & Aggregation Folds
//!
//! Result types for the derived-view queries, plus the pure aggregation
//! steps that run after rows leave the store.
//!
//! ## Where the Aggregation Semantics Live
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Join / Group / Rank Pipeline                            │
//! │                                                                         │
//! │  rental-db (SQL)                    rental-core (THIS MODULE)           │
//! │  ───────────────                    ─────────────────────────           │
//! │  join film→inventory→rental   ──►   TopFilm rows (already ranked)      │
//! │  join actor→film_actor        ──►   TopActor assembly by identity      │
//! │  triple-join keyword match    ──►   dedup_films() by film identity     │
//! │  customer→rental→film rows    ──►   group_rental_history() map-by-key  │
//! │  latest-rental-per-unit join  ──►   AvailableInventory rows            │
//! │                                                                         │
//! │  SQL does what SQL is good at (join, count, order, limit).             │
//! │  Row-order-sensitive or shape-changing steps are pure functions        │
//! │  here, where they are testable without a database.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Rules
//! - One plain struct per query result shape; storage rows never leak out.
//! - Grouping is an explicit reduction keyed by entity identity. It must
//!   produce the same output for any permutation of the input rows.
//! - Ties on equal counts break by identity ascending, everywhere.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::money::Money;
use crate::types::Rating;

// =============================================================================
// Top-N Film Popularity
// =============================================================================

/// One entry of the top-rented-films ranking: full film attributes plus the
/// rental count that ranked it.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TopFilm {
    pub film_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i64>,
    pub language_id: i64,
    pub rental_duration: i64,
    pub rental_rate: Money,
    pub length: Option<i64>,
    pub rating: Rating,
    pub special_features: Option<String>,
    pub rental_count: i64,
}

// =============================================================================
// Top-N Actors with Nested Top-N Films
// =============================================================================

/// Step-1 row of the actor ranking: appearance count per actor.
///
/// Not serialized directly; [`TopActor`] is the response shape.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ActorRank {
    pub actor_id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Count of films credited (film_actor rows), NOT rentals.
    pub film_count: i64,
}

/// Step-2 row: one of an actor's most-rented films.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ActorTopFilm {
    pub film_id: i64,
    pub title: String,
    pub rental_count: i64,
}

/// A top-ranked actor with their own top-rented films nested inside.
#[derive(Debug, Clone, Serialize)]
pub struct TopActor {
    pub actor_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub film_count: i64,
    pub top_movies: Vec<ActorTopFilm>,
}

impl TopActor {
    /// Attaches the per-actor film ranking to its step-1 row.
    ///
    /// Assembly is keyed by the rank row, so concurrent or out-of-order
    /// execution of the step-2 queries cannot misattribute films.
    pub fn from_rank(rank: ActorRank, top_movies: Vec<ActorTopFilm>) -> Self {
        TopActor {
            actor_id: rank.actor_id,
            first_name: rank.first_name,
            last_name: rank.last_name,
            film_count: rank.film_count,
            top_movies,
        }
    }
}

// =============================================================================
// Keyword Search Across Films, Actors, Categories
// =============================================================================

/// A film matched by the keyword search.
///
/// Carries no actor/category fields: those relations drive the match but are
/// not part of the output shape.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct FilmSearchHit {
    pub film_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub release_year: Option<i64>,
    pub rental_duration: i64,
    pub rental_rate: Money,
    pub length: Option<i64>,
    pub rating: Rating,
    pub special_features: Option<String>,
}

/// De-duplicates search hits by film identity, keeping the first occurrence.
///
/// The triple join (film x actor x category) repeats a film once per matching
/// (actor, category) combination; callers want each film once.
///
/// ## Example
/// ```rust
/// # use rental_core::reports::{dedup_films, FilmSearchHit};
/// # use rental_core::{Money, Rating};
/// # fn hit(film_id: i64) -> FilmSearchHit {
/// #     FilmSearchHit {
/// #         film_id,
/// #         title: format!("FILM {film_id}"),
/// #         description: None,
/// #         release_year: None,
/// #         rental_duration: 3,
/// #         rental_rate: Money::from_cents(499),
/// #         length: None,
/// #         rating: Rating::G,
/// #         special_features: None,
/// #     }
/// # }
/// let hits = vec![hit(1), hit(2), hit(1), hit(3), hit(2)];
/// let unique = dedup_films(hits);
/// assert_eq!(unique.iter().map(|h| h.film_id).collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn dedup_films(hits: Vec<FilmSearchHit>) -> Vec<FilmSearchHit> {
    let mut seen: HashSet<i64> = HashSet::with_capacity(hits.len());
    hits.into_iter()
        .filter(|hit| seen.insert(hit.film_id))
        .collect()
}

// =============================================================================
// Customer Search Grouped with Rental History
// =============================================================================

/// Flat joined row: one rental of one customer, as delivered by the store.
///
/// Input shape for [`group_rental_history`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct CustomerRentalRow {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub active: bool,
    pub film_id: i64,
    pub title: String,
    pub rental_id: i64,
    pub rental_date: DateTime<Utc>,
    /// None while the rental is still outstanding.
    pub return_date: Option<DateTime<Utc>>,
}

/// One rental in a customer's history.
#[derive(Debug, Clone, Serialize)]
pub struct RentalHistoryEntry {
    pub rental_id: i64,
    pub film_id: i64,
    pub title: String,
    pub rental_date: DateTime<Utc>,
    /// Serialized as null while the rental is outstanding.
    pub return_date: Option<DateTime<Utc>>,
}

/// A matched customer with their complete, date-ordered rental history.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerHistory {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub active: bool,
    pub rental_history: Vec<RentalHistoryEntry>,
}

/// Folds flat customer-rental rows into one record per customer.
///
/// This is an explicit map-by-key reduction: it does NOT assume the store
/// delivered rows pre-sorted by customer. Any permutation of the input
/// produces the same output — customers ordered by identity ascending, each
/// history ordered by rental start date (then rental id) ascending.
pub fn group_rental_history(rows: Vec<CustomerRentalRow>) -> Vec<CustomerHistory> {
    let mut grouped: BTreeMap<i64, CustomerHistory> = BTreeMap::new();

    for row in rows {
        let entry = grouped
            .entry(row.customer_id)
            .or_insert_with(|| CustomerHistory {
                customer_id: row.customer_id,
                first_name: row.first_name.clone(),
                last_name: row.last_name.clone(),
                email: row.email.clone(),
                active: row.active,
                rental_history: Vec::new(),
            });

        entry.rental_history.push(RentalHistoryEntry {
            rental_id: row.rental_id,
            film_id: row.film_id,
            title: row.title,
            rental_date: row.rental_date,
            return_date: row.return_date,
        });
    }

    let mut customers: Vec<CustomerHistory> = grouped.into_values().collect();
    for customer in &mut customers {
        customer
            .rental_history
            .sort_by_key(|entry| (entry.rental_date, entry.rental_id));
    }
    customers
}

// =============================================================================
// Single-customer Rental History (flat)
// =============================================================================

/// One flat row of `/rental_info`: customer fields repeated per rental.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct RentalInfoRow {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub film_id: i64,
    pub title: String,
    pub rental_id: i64,
    pub rental_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
}

// =============================================================================
// Available-for-Rent Inventory
// =============================================================================

/// An inventory unit currently offered for rent.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct AvailableInventory {
    pub film_id: i64,
    pub title: String,
    pub inventory_id: i64,
    pub rental_rate: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2005, 5, day, hour, 0, 0).unwrap()
    }

    fn row(
        customer_id: i64,
        rental_id: i64,
        film_id: i64,
        rental_date: DateTime<Utc>,
        return_date: Option<DateTime<Utc>>,
    ) -> CustomerRentalRow {
        CustomerRentalRow {
            customer_id,
            first_name: format!("FIRST{customer_id}"),
            last_name: format!("LAST{customer_id}"),
            email: Some(format!("c{customer_id}@example.org")),
            active: true,
            film_id,
            title: format!("FILM {film_id}"),
            rental_id,
            rental_date,
            return_date,
        }
    }

    fn hit(film_id: i64) -> FilmSearchHit {
        FilmSearchHit {
            film_id,
            title: format!("FILM {film_id}"),
            description: None,
            release_year: Some(2006),
            rental_duration: 3,
            rental_rate: Money::from_cents(499),
            length: Some(90),
            rating: Rating::Pg13,
            special_features: None,
        }
    }

    #[test]
    fn test_grouping_merges_all_rows_per_customer() {
        let rows = vec![
            row(7, 1, 10, date(1, 9), Some(date(3, 9))),
            row(7, 2, 11, date(2, 9), None),
            row(7, 3, 10, date(4, 9), None),
        ];

        let grouped = group_rental_history(rows);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].customer_id, 7);
        assert_eq!(grouped[0].rental_history.len(), 3);
    }

    /// The reduction must not depend on store row order: interleaved and
    /// reversed deliveries of the same rows produce identical output.
    #[test]
    fn test_grouping_is_order_independent() {
        let rows = vec![
            row(2, 21, 5, date(2, 9), None),
            row(1, 11, 4, date(1, 9), Some(date(2, 9))),
            row(2, 22, 6, date(1, 9), Some(date(5, 9))),
            row(1, 12, 5, date(3, 9), None),
        ];
        let mut reversed = rows.clone();
        reversed.reverse();

        let a = group_rental_history(rows);
        let b = group_rental_history(reversed);

        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.customer_id, y.customer_id);
            let ids_x: Vec<i64> = x.rental_history.iter().map(|e| e.rental_id).collect();
            let ids_y: Vec<i64> = y.rental_history.iter().map(|e| e.rental_id).collect();
            assert_eq!(ids_x, ids_y);
        }
    }

    #[test]
    fn test_grouping_orders_customers_and_history() {
        let rows = vec![
            row(9, 91, 2, date(5, 9), None),
            row(3, 31, 1, date(2, 9), None),
            row(9, 92, 3, date(1, 9), Some(date(2, 9))),
        ];

        let grouped = group_rental_history(rows);
        let customer_ids: Vec<i64> = grouped.iter().map(|c| c.customer_id).collect();
        assert_eq!(customer_ids, vec![3, 9]);

        // Within customer 9, history is by rental_date ascending
        let rental_ids: Vec<i64> = grouped[1].rental_history.iter().map(|e| e.rental_id).collect();
        assert_eq!(rental_ids, vec![92, 91]);
    }

    #[test]
    fn test_grouping_ties_on_date_break_by_rental_id() {
        let same_instant = date(1, 9);
        let rows = vec![
            row(1, 12, 5, same_instant, None),
            row(1, 11, 4, same_instant, None),
        ];

        let grouped = group_rental_history(rows);
        let rental_ids: Vec<i64> = grouped[0].rental_history.iter().map(|e| e.rental_id).collect();
        assert_eq!(rental_ids, vec![11, 12]);
    }

    #[test]
    fn test_grouping_preserves_outstanding_rentals() {
        let rows = vec![row(1, 11, 4, date(1, 9), None)];
        let grouped = group_rental_history(rows);
        assert!(grouped[0].rental_history[0].return_date.is_none());
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_order() {
        let hits = vec![hit(3), hit(1), hit(3), hit(2), hit(1), hit(3)];
        let unique = dedup_films(hits);
        let ids: Vec<i64> = unique.iter().map(|h| h.film_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_dedup_empty_input() {
        assert!(dedup_films(Vec::new()).is_empty());
    }

    #[test]
    fn test_top_actor_assembly_keeps_identity() {
        let rank = ActorRank {
            actor_id: 107,
            first_name: "GINA".to_string(),
            last_name: "DEGENERES".to_string(),
            film_count: 42,
        };
        let films = vec![ActorTopFilm {
            film_id: 1,
            title: "ACADEMY DINOSAUR".to_string(),
            rental_count: 10,
        }];

        let actor = TopActor::from_rank(rank, films);
        assert_eq!(actor.actor_id, 107);
        assert_eq!(actor.film_count, 42);
        assert_eq!(actor.top_movies.len(), 1);
    }

    #[test]
    fn test_history_serializes_null_return_date() {
        let grouped = group_rental_history(vec![row(1, 11, 4, date(1, 9), None)]);
        let json = serde_json::to_value(&grouped[0]).unwrap();
        assert!(json["rental_history"][0]["return_date"].is_null());
    }
}
