//! # Seed Data Generator
//!
//! Populates the database with sample rental data for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p rental-db --bin seed
//!
//! # Specify database path
//! cargo run -p rental-db --bin seed -- --db ./data/rental.db
//! ```
//!
//! ## Generated Data
//! - 1 store with address chain (country/city/address) and 1 staff member
//! - 16 films across 5 categories, with actor credits
//! - 12 actors
//! - 6 customers
//! - 2 inventory units per film
//! - A deterministic spread of rentals (some returned, some still out)
//!   plus matching payments, so every report endpoint returns data

use chrono::{Duration, TimeZone, Utc};
use std::env;

use rental_db::{Database, DbConfig};

const FILMS: &[(&str, i64, &str)] = &[
    // (title, rental_rate_cents, rating)
    ("ACADEMY DINOSAUR", 99, "PG"),
    ("BLANKET BEVERLY", 299, "G"),
    ("CHAMBER ITALIAN", 499, "NC-17"),
    ("DOGMA FAMILY", 499, "R"),
    ("EGG IGBY", 299, "PG-13"),
    ("FANTASIA PARK", 99, "G"),
    ("GRADUATE LORD", 299, "PG-13"),
    ("HUNGER ROOF", 99, "R"),
    ("ICE CROSSING", 499, "PG"),
    ("JUMANJI BLADE", 299, "NC-17"),
    ("KARATE MOON", 99, "PG-13"),
    ("LAWLESS VISION", 499, "G"),
    ("MINDS TRUMAN", 299, "R"),
    ("NOON PAPI", 99, "PG"),
    ("OPERATION OPERATION", 499, "PG-13"),
    ("PACKER MADIGAN", 299, "G"),
];

const ACTORS: &[(&str, &str)] = &[
    ("PENELOPE", "GUINESS"),
    ("NICK", "WAHLBERG"),
    ("ED", "CHASE"),
    ("JENNIFER", "DAVIS"),
    ("JOHNNY", "LOLLOBRIGIDA"),
    ("BETTE", "NICHOLSON"),
    ("GRACE", "MOSTEL"),
    ("MATTHEW", "JOHANSSON"),
    ("JOE", "SWANK"),
    ("CHRISTIAN", "GABLE"),
    ("ZERO", "CAGE"),
    ("KARL", "BERRY"),
];

const CATEGORIES: &[&str] = &["Action", "Animation", "Comedy", "Drama", "Horror"];

const CUSTOMERS: &[(&str, &str)] = &[
    ("MARY", "SMITH"),
    ("PATRICIA", "JOHNSON"),
    ("LINDA", "WILLIAMS"),
    ("BARBARA", "JONES"),
    ("ELIZABETH", "BROWN"),
    ("JENNIFER", "DAVIS"),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./rental_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Rental Reports Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./rental_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Rental Reports Seed Data Generator");
    println!("==================================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("Connected, schema bootstrapped");

    let existing = db.customers().count().await?;
    if existing > 0 {
        println!("Database already has {} customers", existing);
        println!("Skipping seed to avoid duplicates.");
        println!("Delete the database file to regenerate.");
        return Ok(());
    }

    let pool = db.pool();
    let stamp = Utc.with_ymd_and_hms(2005, 5, 1, 0, 0, 0).unwrap();

    // Store, address chain, staff
    for sql in [
        "INSERT INTO language (name, last_update) VALUES ('English', ?1)",
        "INSERT INTO country (country, last_update) VALUES ('Canada', ?1)",
        "INSERT INTO city (city, country_id, last_update) VALUES ('Lethbridge', 1, ?1)",
        "INSERT INTO address (address, district, city_id, last_update)
         VALUES ('47 MySakila Drive', 'Alberta', 1, ?1)",
        "INSERT INTO store (address_id, last_update) VALUES (1, ?1)",
        "INSERT INTO staff (first_name, last_name, address_id, email, store_id, last_update)
         VALUES ('Mike', 'Hillyer', 1, 'mike.hillyer@rental.example', 1, ?1)",
    ] {
        sqlx::query(sql).bind(stamp).execute(pool).await?;
    }

    // Films
    for (title, rate_cents, rating) in FILMS {
        sqlx::query(
            r#"
            INSERT INTO film (title, description, release_year, language_id,
                              rental_duration, rental_rate_cents, length, rating,
                              special_features, last_update)
            VALUES (?1, ?2, 2006, 1, 3, ?3, ?4, ?5, 'Trailers,Commentaries', ?6)
            "#,
        )
        .bind(title)
        .bind(format!("A fast-paced story of {}", title.to_lowercase()))
        .bind(rate_cents)
        .bind(60 + (title.len() as i64 * 7) % 120)
        .bind(rating)
        .bind(stamp)
        .execute(pool)
        .await?;
    }
    println!("Inserted {} films", FILMS.len());

    // Actors + credits: actor k is credited in films where (film + k) % 3 == 0,
    // plus their "home" film k % len. Deterministic, uneven spread.
    for (first, last) in ACTORS {
        sqlx::query("INSERT INTO actor (first_name, last_name, last_update) VALUES (?1, ?2, ?3)")
            .bind(first)
            .bind(last)
            .bind(stamp)
            .execute(pool)
            .await?;
    }
    let mut credits = 0;
    for actor in 1..=ACTORS.len() as i64 {
        for film in 1..=FILMS.len() as i64 {
            if (film + actor) % 3 == 0 || film == (actor % FILMS.len() as i64) + 1 {
                sqlx::query(
                    "INSERT OR IGNORE INTO film_actor (actor_id, film_id, last_update) VALUES (?1, ?2, ?3)",
                )
                .bind(actor)
                .bind(film)
                .bind(stamp)
                .execute(pool)
                .await?;
                credits += 1;
            }
        }
    }
    println!("Inserted {} actors, {} credits", ACTORS.len(), credits);

    // Categories: film f belongs to category (f % 5) + 1, and every third
    // film also to Action
    for name in CATEGORIES {
        sqlx::query("INSERT INTO category (name, last_update) VALUES (?1, ?2)")
            .bind(name)
            .bind(stamp)
            .execute(pool)
            .await?;
    }
    for film in 1..=FILMS.len() as i64 {
        sqlx::query(
            "INSERT OR IGNORE INTO film_category (film_id, category_id, last_update) VALUES (?1, ?2, ?3)",
        )
        .bind(film)
        .bind((film % CATEGORIES.len() as i64) + 1)
        .bind(stamp)
        .execute(pool)
        .await?;
        if film % 3 == 0 {
            sqlx::query(
                "INSERT OR IGNORE INTO film_category (film_id, category_id, last_update) VALUES (?1, 1, ?2)",
            )
            .bind(film)
            .bind(stamp)
            .execute(pool)
            .await?;
        }
    }

    // Customers
    for (first, last) in CUSTOMERS {
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
            "{}.{}@rental.example",
            first.to_lowercase(),
            last.to_lowercase()
        ))
        .bind(stamp)
        .execute(pool)
        .await?;
    }
    println!("Inserted {} customers", CUSTOMERS.len());

    // Inventory: two units per film
    for film in 1..=FILMS.len() as i64 {
        for _ in 0..2 {
            sqlx::query("INSERT INTO inventory (film_id, store_id, last_update) VALUES (?1, 1, ?2)")
                .bind(film)
                .bind(stamp)
                .execute(pool)
                .await?;
        }
    }

    // Rentals: film f gets (17 - f) rentals spread over customers and its
    // two inventory units, so the popularity ranking has a clear shape.
    // Every 7th rental is still out (no return date, no payment).
    let mut rentals = 0i64;
    let mut payments = 0i64;
    for film in 1..=FILMS.len() as i64 {
        let unit_a = (film - 1) * 2 + 1;
        let n = 17 - film;
        for k in 0..n {
            let inventory_id = unit_a + (k % 2);
            let customer_id = ((film + k) % CUSTOMERS.len() as i64) + 1;
            let rented = stamp + Duration::days(film + k * 2);
            rentals += 1;

            let returned = if rentals % 7 == 0 {
                None
            } else {
                Some(rented + Duration::days(3))
            };

            let result = sqlx::query(
                r#"
                INSERT INTO rental (rental_date, inventory_id, customer_id, return_date,
                                    staff_id, last_update)
                VALUES (?1, ?2, ?3, ?4, 1, ?1)
                "#,
            )
            .bind(rented)
            .bind(inventory_id)
            .bind(customer_id)
            .bind(returned)
            .execute(pool)
            .await?;

            if returned.is_some() {
                let rental_id = result.last_insert_rowid();
                let rate_cents = FILMS[(film - 1) as usize].1;
                sqlx::query(
                    r#"
                    INSERT INTO payment (customer_id, staff_id, rental_id, amount_cents,
                                         payment_date, last_update)
                    VALUES (?1, 1, ?2, ?3, ?4, ?4)
                    "#,
                )
                .bind(customer_id)
                .bind(rental_id)
                .bind(rate_cents)
                .bind(rented)
                .execute(pool)
                .await?;
                payments += 1;
            }
        }
    }
    println!("Inserted {} rentals, {} payments", rentals, payments);

    // Smoke-check the reports
    println!();
    println!("Verifying reports...");
    let top = db.reports().top_films(5).await?;
    println!("  top_films: {} entries, leader '{}'", top.len(), top[0].title);
    let actors = db.reports().top_actors(5, 5).await?;
    println!("  top_actors: {} entries", actors.len());
    let available = db.reports().available_inventory(Utc::now()).await?;
    println!("  available inventory: {} units", available.len());

    println!();
    println!("Seed complete!");

    Ok(())
}
