//! # Report Repository
//!
//! The aggregation engine: multi-table join, grouping, ranking, and
//! nested-aggregation queries computing the derived views.
//!
//! ## Query Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Derived Views                                       │
//! │                                                                         │
//! │  top_films            film ─ inventory ─ rental        GROUP BY film   │
//! │  top_actors (step 1)  actor ─ film_actor               GROUP BY actor  │
//! │  top_actors (step 2)  film ─ film_actor ─ inventory ─ rental           │
//! │                       per actor, GROUP BY film                          │
//! │  search_films         film ─ actor + film ─ category   OR predicate    │
//! │  customer_history     customer ─ rental ─ inventory ─ film             │
//! │  rental_info          same join, flat, one customer                     │
//! │  available_inventory  inventory ─ latest rental per unit                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ranking Contract
//! Every ranking orders by its count descending with identity ascending as
//! the tie-break, so equal counts always come back in the same order.
//!
//! All operations are read-only: the engine never mutates store state, and a
//! failed query has nothing to roll back.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use rental_core::reports::{
    dedup_films, group_rental_history, ActorRank, ActorTopFilm, AvailableInventory,
    CustomerHistory, CustomerRentalRow, FilmSearchHit, RentalInfoRow, TopActor, TopFilm,
};

/// Repository for the aggregation queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    // =========================================================================
    // Top-N Film Popularity
    // =========================================================================

    /// Ranks films by total rental count, highest first.
    ///
    /// Inner joins mean a film with zero rentals can never appear. The GROUP
    /// BY lists every selected film column, so the grouping is
    /// functional-dependency-safe regardless of store strictness.
    pub async fn top_films(&self, limit: u32) -> DbResult<Vec<TopFilm>> {
        let films = sqlx::query_as::<_, TopFilm>(
            r#"
            SELECT
                f.film_id,
                f.title,
                f.description,
                f.release_year,
                f.language_id,
                f.rental_duration,
                f.rental_rate_cents AS rental_rate,
                f.length,
                f.rating,
                f.special_features,
                COUNT(r.rental_id) AS rental_count
            FROM film f
            INNER JOIN inventory i ON i.film_id = f.film_id
            INNER JOIN rental r ON r.inventory_id = i.inventory_id
            GROUP BY
                f.film_id, f.title, f.description, f.release_year, f.language_id,
                f.rental_duration, f.rental_rate_cents, f.length, f.rating,
                f.special_features
            ORDER BY rental_count DESC, f.film_id ASC
            LIMIT ?1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = films.len(), "Ranked top films");
        Ok(films)
    }

    // =========================================================================
    // Top-N Actors with Nested Top-N Films
    // =========================================================================

    /// Two-level ranking: the most-credited actors, each with their own
    /// most-rented films.
    ///
    /// Step 1 counts film_actor rows (films credited, NOT rentals). Step 2
    /// runs once per ranked actor; each execution acquires its own pooled
    /// connection and the results are attached by actor identity, so the
    /// per-actor queries could be reordered freely without changing output.
    pub async fn top_actors(&self, limit: u32, films_per_actor: u32) -> DbResult<Vec<TopActor>> {
        let ranks = sqlx::query_as::<_, ActorRank>(
            r#"
            SELECT
                a.actor_id,
                a.first_name,
                a.last_name,
                COUNT(fa.film_id) AS film_count
            FROM actor a
            INNER JOIN film_actor fa ON fa.actor_id = a.actor_id
            GROUP BY a.actor_id, a.first_name, a.last_name
            ORDER BY film_count DESC, a.actor_id ASC
            LIMIT ?1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        let mut actors = Vec::with_capacity(ranks.len());
        for rank in ranks {
            let top_movies = self.actor_top_films(rank.actor_id, films_per_actor).await?;
            actors.push(TopActor::from_rank(rank, top_movies));
        }

        debug!(count = actors.len(), "Ranked top actors");
        Ok(actors)
    }

    /// Ranks one actor's films by rental count.
    ///
    /// The count is the film's total rentals; the actor filter only selects
    /// which films qualify (the actor must be credited).
    pub async fn actor_top_films(&self, actor_id: i64, limit: u32) -> DbResult<Vec<ActorTopFilm>> {
        let films = sqlx::query_as::<_, ActorTopFilm>(
            r#"
            SELECT
                f.film_id,
                f.title,
                COUNT(r.rental_id) AS rental_count
            FROM film f
            INNER JOIN film_actor fa ON fa.film_id = f.film_id
            INNER JOIN inventory i ON i.film_id = f.film_id
            INNER JOIN rental r ON r.inventory_id = i.inventory_id
            WHERE fa.actor_id = ?1
            GROUP BY f.film_id, f.title
            ORDER BY rental_count DESC, f.film_id ASC
            LIMIT ?2
            "#,
        )
        .bind(actor_id)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(films)
    }

    // =========================================================================
    // Keyword Search Across Films, Actors, Categories
    // =========================================================================

    /// Free-text film search: the keyword matches (case-insensitively, as a
    /// substring) the film title, an actor's "first last" display name, or a
    /// category name.
    ///
    /// The triple join repeats a film once per matching (actor, category)
    /// combination; the result is de-duplicated by film identity before
    /// returning, keeping first-occurrence (film_id) order.
    pub async fn search_films(&self, keyword: &str) -> DbResult<Vec<FilmSearchHit>> {
        debug!(keyword = %keyword, "Searching films");

        let rows = sqlx::query_as::<_, FilmSearchHit>(
            r#"
            SELECT
                f.film_id,
                f.title,
                f.description,
                f.release_year,
                f.rental_duration,
                f.rental_rate_cents AS rental_rate,
                f.length,
                f.rating,
                f.special_features
            FROM film f
            INNER JOIN film_actor fa ON fa.film_id = f.film_id
            INNER JOIN actor a ON a.actor_id = fa.actor_id
            INNER JOIN film_category fc ON fc.film_id = f.film_id
            INNER JOIN category c ON c.category_id = fc.category_id
            WHERE instr(lower(f.title), lower(?1)) > 0
               OR instr(lower(a.first_name || ' ' || a.last_name), lower(?1)) > 0
               OR instr(lower(c.name), lower(?1)) > 0
            ORDER BY f.film_id
            "#,
        )
        .bind(keyword)
        .fetch_all(&self.pool)
        .await?;

        let films = dedup_films(rows);
        debug!(count = films.len(), "Search matched films");
        Ok(films)
    }

    // =========================================================================
    // Customer Search Grouped with Rental History
    // =========================================================================

    /// Searches customers by id or name fragment; each match comes back once
    /// with its complete rental history.
    ///
    /// The store delivers flat joined rows in whatever order it likes; the
    /// grouping is an explicit map-by-key fold in rental-core, so row order
    /// never fragments a customer into multiple entries.
    pub async fn customer_history(&self, keyword: &str) -> DbResult<Vec<CustomerHistory>> {
        debug!(keyword = %keyword, "Searching customers");

        let rows = sqlx::query_as::<_, CustomerRentalRow>(
            r#"
            SELECT
                cu.customer_id,
                cu.first_name,
                cu.last_name,
                cu.email,
                cu.active,
                f.film_id,
                f.title,
                r.rental_id,
                r.rental_date,
                r.return_date
            FROM customer cu
            INNER JOIN rental r ON r.customer_id = cu.customer_id
            INNER JOIN inventory i ON i.inventory_id = r.inventory_id
            INNER JOIN film f ON f.film_id = i.film_id
            WHERE CAST(cu.customer_id AS TEXT) = ?1
               OR instr(lower(cu.first_name), lower(?1)) > 0
               OR instr(lower(cu.last_name), lower(?1)) > 0
            "#,
        )
        .bind(keyword)
        .fetch_all(&self.pool)
        .await?;

        let customers = group_rental_history(rows);
        debug!(count = customers.len(), "Grouped matching customers");
        Ok(customers)
    }

    // =========================================================================
    // Single-customer Rental History (flat)
    // =========================================================================

    /// Returns one customer's flat, date-ordered rental history. Customer
    /// fields repeat on every row; nothing is grouped.
    ///
    /// ## Errors
    /// * `DbError::NotFound` - the customer id matches no customer row. A
    ///   known customer with zero rentals is NOT an error; it yields an
    ///   empty list.
    pub async fn rental_info(&self, customer_id: i64) -> DbResult<Vec<RentalInfoRow>> {
        let exists: Option<i64> =
            sqlx::query_scalar("SELECT customer_id FROM customer WHERE customer_id = ?1")
                .bind(customer_id)
                .fetch_optional(&self.pool)
                .await?;

        if exists.is_none() {
            return Err(DbError::not_found("Customer", customer_id));
        }

        let rows = sqlx::query_as::<_, RentalInfoRow>(
            r#"
            SELECT
                cu.customer_id,
                cu.first_name,
                cu.last_name,
                f.film_id,
                f.title,
                r.rental_id,
                r.rental_date,
                r.return_date
            FROM rental r
            INNER JOIN customer cu ON cu.customer_id = r.customer_id
            INNER JOIN inventory i ON i.inventory_id = r.inventory_id
            INNER JOIN film f ON f.film_id = i.film_id
            WHERE r.customer_id = ?1
            ORDER BY r.rental_date ASC, r.rental_id ASC
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        debug!(customer_id, count = rows.len(), "Fetched rental history");
        Ok(rows)
    }

    // =========================================================================
    // Available-for-Rent Inventory
    // =========================================================================

    /// Lists inventory units currently offered for rent.
    ///
    /// For each unit the join is scoped to its MOST RECENT rental row
    /// (latest rental_date, then latest rental_id) — never the full rental
    /// history. A unit qualifies when:
    /// - it has no rental history at all, or
    /// - that most recent rental's return_date is NULL or after `as_of`.
    ///
    /// A unit whose most recent rental was returned before `as_of` is
    /// excluded.
    pub async fn available_inventory(
        &self,
        as_of: DateTime<Utc>,
    ) -> DbResult<Vec<AvailableInventory>> {
        let units = sqlx::query_as::<_, AvailableInventory>(
            r#"
            SELECT
                f.film_id,
                f.title,
                i.inventory_id,
                f.rental_rate_cents AS rental_rate
            FROM inventory i
            INNER JOIN film f ON f.film_id = i.film_id
            LEFT JOIN rental r ON r.inventory_id = i.inventory_id
                AND r.rental_id = (
                    SELECT r2.rental_id
                    FROM rental r2
                    WHERE r2.inventory_id = i.inventory_id
                    ORDER BY r2.rental_date DESC, r2.rental_id DESC
                    LIMIT 1
                )
            WHERE r.rental_id IS NULL
               OR r.return_date IS NULL
               OR r.return_date > ?1
            ORDER BY i.inventory_id
            "#,
        )
        .bind(as_of)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = units.len(), "Listed available inventory");
        Ok(units)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::{Duration, TimeZone};

    /// A 2005 timestamp, safely in the past.
    fn d(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2005, 5, day, 10, 0, 0).unwrap()
    }

    async fn insert_film(db: &Database, title: &str, rate_cents: i64, rating: &str) {
        sqlx::query(
            r#"
            INSERT INTO film (title, language_id, rental_duration, rental_rate_cents,
                              rating, last_update)
            VALUES (?1, 1, 3, ?2, ?3, ?4)
            "#,
        )
        .bind(title)
        .bind(rate_cents)
        .bind(rating)
        .bind(d(1))
        .execute(db.pool())
        .await
        .unwrap();
    }

    async fn insert_rental(
        db: &Database,
        inventory_id: i64,
        customer_id: i64,
        rental_date: DateTime<Utc>,
        return_date: Option<DateTime<Utc>>,
    ) {
        sqlx::query(
            r#"
            INSERT INTO rental (rental_date, inventory_id, customer_id, return_date,
                                staff_id, last_update)
            VALUES (?1, ?2, ?3, ?4, 1, ?1)
            "#,
        )
        .bind(rental_date)
        .bind(inventory_id)
        .bind(customer_id)
        .bind(return_date)
        .execute(db.pool())
        .await
        .unwrap();
    }

    /// Fixture matching the worked popularity example:
    ///
    /// Films (by rental count): F1=10, F2=7, F3=7, F4=2, F5=1, F6=0.
    /// Actors: A1 credited in F1,F2,F3; A2 in F1,F2; A3 in F1.
    /// Categories: Action={F1,F2}, Animation={F1}, Comedy={F3}.
    /// Customers: CU1 (MARY SMITH, 3 rentals), CU2 (PATRICIA JOHNSON, the
    /// rest), CU3 (LINDA WILLIAMS, zero rentals).
    ///
    /// Inventory availability (latest rental per unit):
    ///   inv1 F1  latest open (NULL return)          -> included
    ///   inv2 F1  latest returned in the past        -> excluded
    ///   inv3 F2  latest returned in the past        -> excluded
    ///   inv4 F3  latest returned in the past        -> excluded
    ///   inv5 F4  latest returns in the FUTURE       -> included
    ///   inv6 F5  latest returned in the past        -> excluded
    ///   inv7 F6  no rental history                  -> included
    ///   inv8 F2  older rental open, latest returned -> excluded (scoping!)
    async fn seed_fixture(db: &Database) {
        let now = d(1);

        // Reference rows
        for sql in [
            "INSERT INTO language (name, last_update) VALUES ('English', ?1)",
            "INSERT INTO country (country, last_update) VALUES ('Australia', ?1)",
            "INSERT INTO city (city, country_id, last_update) VALUES ('Woodridge', 1, ?1)",
            "INSERT INTO address (address, city_id, last_update) VALUES ('28 MySQL Boulevard', 1, ?1)",
            "INSERT INTO store (address_id, last_update) VALUES (1, ?1)",
            "INSERT INTO staff (first_name, last_name, address_id, store_id, last_update)
             VALUES ('Mike', 'Hillyer', 1, 1, ?1)",
        ] {
            sqlx::query(sql).bind(now).execute(db.pool()).await.unwrap();
        }

        // Films F1..F6 (ids 1..6)
        insert_film(db, "ACADEMY DINOSAUR", 99, "PG").await;
        insert_film(db, "BLANKET BEVERLY", 299, "G").await;
        insert_film(db, "CHAMBER ITALIAN", 499, "NC-17").await;
        insert_film(db, "DOGMA FAMILY", 499, "R").await;
        insert_film(db, "EGG IGBY", 299, "PG-13").await;
        insert_film(db, "FANTASIA PARK", 99, "G").await;

        // Actors A1..A3 (ids 1..3)
        for (first, last) in [
            ("PENELOPE", "GUINESS"),
            ("NICK", "WAHLBERG"),
            ("ED", "CHASE"),
        ] {
            sqlx::query("INSERT INTO actor (first_name, last_name, last_update) VALUES (?1, ?2, ?3)")
                .bind(first)
                .bind(last)
                .bind(now)
                .execute(db.pool())
                .await
                .unwrap();
        }

        // Credits: A1 -> F1,F2,F3; A2 -> F1,F2; A3 -> F1
        for (actor_id, film_id) in [(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (3, 1)] {
            sqlx::query("INSERT INTO film_actor (actor_id, film_id, last_update) VALUES (?1, ?2, ?3)")
                .bind(actor_id as i64)
                .bind(film_id as i64)
                .bind(now)
                .execute(db.pool())
                .await
                .unwrap();
        }

        // Categories (ids 1..3) and film links
        for name in ["Action", "Animation", "Comedy"] {
            sqlx::query("INSERT INTO category (name, last_update) VALUES (?1, ?2)")
                .bind(name)
                .bind(now)
                .execute(db.pool())
                .await
                .unwrap();
        }
        for (film_id, category_id) in [(1, 1), (1, 2), (2, 1), (3, 3)] {
            sqlx::query(
                "INSERT INTO film_category (film_id, category_id, last_update) VALUES (?1, ?2, ?3)",
            )
            .bind(film_id as i64)
            .bind(category_id as i64)
            .bind(now)
            .execute(db.pool())
            .await
            .unwrap();
        }

        // Customers CU1..CU3 (ids 1..3)
        for (first, last) in [
            ("MARY", "SMITH"),
            ("PATRICIA", "JOHNSON"),
            ("LINDA", "WILLIAMS"),
        ] {
            sqlx::query(
                r#"
                INSERT INTO customer (store_id, first_name, last_name, email, address_id,
                                      active, create_date, last_update)
                VALUES (1, ?1, ?2, ?3, 1, 1, ?4, ?4)
                "#,
            )
            .bind(first)
            .bind(last)
            .bind(format!(
                "{}.{}@example.org",
                first.to_lowercase(),
                last.to_lowercase()
            ))
            .bind(now)
            .execute(db.pool())
            .await
            .unwrap();
        }

        // Inventory inv1..inv8 (ids 1..8)
        for film_id in [1, 1, 2, 3, 4, 5, 6, 2] {
            sqlx::query("INSERT INTO inventory (film_id, store_id, last_update) VALUES (?1, 1, ?2)")
                .bind(film_id as i64)
                .bind(now)
                .execute(db.pool())
                .await
                .unwrap();
        }

        // --- Rentals -------------------------------------------------------
        // CU1 (MARY): F1 on day 1 (returned), F2 on day 2 (returned),
        // F1 again on day 5 (still out). inv1's latest rental is the open one.
        insert_rental(db, 1, 1, d(1), Some(d(2))).await;
        insert_rental(db, 3, 1, d(2), Some(d(4))).await;
        insert_rental(db, 1, 1, d(5), None).await;

        // CU2 (PATRICIA): bulk history.
        // F1: 8 more rentals on inv2, all returned -> F1 total 10
        for day in 1..=8 {
            insert_rental(db, 2, 2, d(day), Some(d(day + 1))).await;
        }
        // F2: 4 on inv3 (returned) + 2 on inv8 -> with MARY's one, total 7.
        for day in 10..=13 {
            insert_rental(db, 3, 2, d(day), Some(d(day + 1))).await;
        }
        // inv8: an OLD rental never returned, then a LATER one returned.
        // Only most-recent-rental scoping excludes this unit correctly.
        insert_rental(db, 8, 2, d(1), None).await;
        insert_rental(db, 8, 2, d(3), Some(d(4))).await;
        // F3: 7 rentals on inv4, all returned
        for day in 1..=7 {
            insert_rental(db, 4, 2, d(day), Some(d(day + 1))).await;
        }
        // F4: 2 rentals on inv5; the latest comes back in the future
        insert_rental(db, 5, 2, d(1), Some(d(2))).await;
        let near_now = Utc::now() - Duration::days(1);
        insert_rental(db, 5, 2, near_now, Some(near_now + Duration::days(8))).await;
        // F5: 1 rental on inv6, returned
        insert_rental(db, 6, 2, d(1), Some(d(3))).await;
        // F6 / inv7: never rented
    }

    async fn fixture_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        seed_fixture(&db).await;
        db
    }

    // =========================================================================
    // Top films
    // =========================================================================

    #[tokio::test]
    async fn test_top_films_ranking_and_tie_break() {
        let db = fixture_db().await;
        let films = db.reports().top_films(5).await.unwrap();

        let ids: Vec<i64> = films.iter().map(|f| f.film_id).collect();
        let counts: Vec<i64> = films.iter().map(|f| f.rental_count).collect();

        // F2/F3 tie on 7 breaks by film_id ascending; F6 (zero rentals) absent
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(counts, vec![10, 7, 7, 2, 1]);
    }

    #[tokio::test]
    async fn test_top_films_respects_limit() {
        let db = fixture_db().await;
        let films = db.reports().top_films(2).await.unwrap();
        assert_eq!(films.len(), 2);
        assert_eq!(films[0].film_id, 1);
    }

    #[tokio::test]
    async fn test_top_films_carries_film_attributes() {
        let db = fixture_db().await;
        let films = db.reports().top_films(5).await.unwrap();

        let f1 = &films[0];
        assert_eq!(f1.title, "ACADEMY DINOSAUR");
        assert_eq!(f1.rental_rate.cents(), 99);
        assert_eq!(f1.rating.code(), "PG");
        assert_eq!(f1.rental_duration, 3);
    }

    #[tokio::test]
    async fn test_top_films_is_idempotent() {
        let db = fixture_db().await;
        let first = db.reports().top_films(5).await.unwrap();
        let second = db.reports().top_films(5).await.unwrap();

        let ids = |v: &[TopFilm]| v.iter().map(|f| (f.film_id, f.rental_count)).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
    }

    #[tokio::test]
    async fn test_top_films_empty_store() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let films = db.reports().top_films(5).await.unwrap();
        assert!(films.is_empty());
    }

    // =========================================================================
    // Top actors
    // =========================================================================

    #[tokio::test]
    async fn test_top_actors_ranked_by_credit_count() {
        let db = fixture_db().await;
        let actors = db.reports().top_actors(5, 5).await.unwrap();

        let ranks: Vec<(i64, i64)> = actors.iter().map(|a| (a.actor_id, a.film_count)).collect();
        assert_eq!(ranks, vec![(1, 3), (2, 2), (3, 1)]);
    }

    #[tokio::test]
    async fn test_top_actors_nested_films_ranked_by_rentals() {
        let db = fixture_db().await;
        let actors = db.reports().top_actors(5, 5).await.unwrap();

        // A1 is credited in F1(10), F2(7), F3(7): tie breaks by film_id
        let nested: Vec<(i64, i64)> = actors[0]
            .top_movies
            .iter()
            .map(|m| (m.film_id, m.rental_count))
            .collect();
        assert_eq!(nested, vec![(1, 10), (2, 7), (3, 7)]);
    }

    #[tokio::test]
    async fn test_top_actors_nested_films_only_credited() {
        let db = fixture_db().await;
        let actors = db.reports().top_actors(5, 5).await.unwrap();

        // A3 appears only in F1; nothing else may leak into their list
        let a3 = actors.iter().find(|a| a.actor_id == 3).unwrap();
        let nested: Vec<i64> = a3.top_movies.iter().map(|m| m.film_id).collect();
        assert_eq!(nested, vec![1]);
    }

    #[tokio::test]
    async fn test_top_actors_respects_limits() {
        let db = fixture_db().await;
        let actors = db.reports().top_actors(2, 1).await.unwrap();

        assert_eq!(actors.len(), 2);
        assert_eq!(actors[0].top_movies.len(), 1);
        assert_eq!(actors[0].top_movies[0].film_id, 1);
    }

    // =========================================================================
    // Film search
    // =========================================================================

    #[tokio::test]
    async fn test_search_by_title_is_deduplicated() {
        let db = fixture_db().await;
        // F1 joins 3 actors x 2 categories = 6 raw rows
        let films = db.reports().search_films("academy").await.unwrap();

        assert_eq!(films.len(), 1);
        assert_eq!(films[0].film_id, 1);
        assert_eq!(films[0].rental_rate.cents(), 99);
    }

    #[tokio::test]
    async fn test_search_by_actor_name() {
        let db = fixture_db().await;
        let films = db.reports().search_films("penelope guiness").await.unwrap();

        let ids: Vec<i64> = films.iter().map(|f| f.film_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_search_by_category_name() {
        let db = fixture_db().await;
        let films = db.reports().search_films("action").await.unwrap();

        let ids: Vec<i64> = films.iter().map(|f| f.film_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let db = fixture_db().await;
        let films = db.reports().search_films("BeVeR").await.unwrap();
        assert_eq!(films.len(), 1);
        assert_eq!(films[0].title, "BLANKET BEVERLY");
    }

    #[tokio::test]
    async fn test_search_no_match() {
        let db = fixture_db().await;
        let films = db.reports().search_films("zzz-no-such").await.unwrap();
        assert!(films.is_empty());
    }

    // =========================================================================
    // Customer search with history
    // =========================================================================

    #[tokio::test]
    async fn test_customer_history_groups_once_per_customer() {
        let db = fixture_db().await;
        let customers = db.reports().customer_history("mary").await.unwrap();

        assert_eq!(customers.len(), 1);
        let mary = &customers[0];
        assert_eq!(mary.customer_id, 1);
        assert_eq!(mary.rental_history.len(), 3);

        // Ordered by rental start date: F1 (day 1), F2 (day 2), F1 (day 5)
        let film_ids: Vec<i64> = mary.rental_history.iter().map(|e| e.film_id).collect();
        assert_eq!(film_ids, vec![1, 2, 1]);
        assert!(mary.rental_history[2].return_date.is_none());
    }

    #[tokio::test]
    async fn test_customer_history_matches_by_id_keyword() {
        let db = fixture_db().await;
        let customers = db.reports().customer_history("1").await.unwrap();

        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].customer_id, 1);
    }

    #[tokio::test]
    async fn test_customer_history_matches_by_last_name_fragment() {
        let db = fixture_db().await;
        let customers = db.reports().customer_history("johns").await.unwrap();

        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].customer_id, 2);
        assert_eq!(customers[0].rental_history.len(), 24);
    }

    #[tokio::test]
    async fn test_customer_history_no_match() {
        let db = fixture_db().await;
        let customers = db.reports().customer_history("nobody").await.unwrap();
        assert!(customers.is_empty());
    }

    // =========================================================================
    // Single-customer rental info
    // =========================================================================

    #[tokio::test]
    async fn test_rental_info_flat_and_date_ordered() {
        let db = fixture_db().await;
        let rows = db.reports().rental_info(1).await.unwrap();

        assert_eq!(rows.len(), 3);
        // Customer fields repeat on every row
        assert!(rows.iter().all(|r| r.first_name == "MARY"));
        let mut dates: Vec<DateTime<Utc>> = rows.iter().map(|r| r.rental_date).collect();
        let sorted = dates.clone();
        dates.sort();
        assert_eq!(dates, sorted);
    }

    #[tokio::test]
    async fn test_rental_info_unknown_customer_is_not_found() {
        let db = fixture_db().await;
        let err = db.reports().rental_info(9999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_rental_info_zero_rentals_is_empty_not_error() {
        let db = fixture_db().await;
        // LINDA exists but has never rented anything
        let rows = db.reports().rental_info(3).await.unwrap();
        assert!(rows.is_empty());
    }

    // =========================================================================
    // Available inventory
    // =========================================================================

    #[tokio::test]
    async fn test_available_inventory_latest_rental_scoping() {
        let db = fixture_db().await;
        let units = db.reports().available_inventory(Utc::now()).await.unwrap();

        let ids: Vec<i64> = units.iter().map(|u| u.inventory_id).collect();
        // inv1: latest rental open; inv5: latest returns in the future;
        // inv7: never rented. inv8 (older rental open, latest returned in
        // the past) must be excluded - the join is scoped to the most
        // recent rental, not any rental.
        assert_eq!(ids, vec![1, 5, 7]);
    }

    #[tokio::test]
    async fn test_available_inventory_carries_film_fields() {
        let db = fixture_db().await;
        let units = db.reports().available_inventory(Utc::now()).await.unwrap();

        let never_rented = units.iter().find(|u| u.inventory_id == 7).unwrap();
        assert_eq!(never_rented.film_id, 6);
        assert_eq!(never_rented.title, "FANTASIA PARK");
        assert_eq!(never_rented.rental_rate.cents(), 99);
    }
}
