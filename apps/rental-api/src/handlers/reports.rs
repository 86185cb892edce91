//! # Report Handlers
//!
//! The aggregation endpoints: film ranking, actor ranking, keyword search,
//! and available inventory.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use rental_core::validation::validate_keyword;
use rental_core::{TOP_ACTORS_LIMIT, TOP_FILMS_LIMIT, TOP_FILMS_PER_ACTOR};
use rental_db::Database;

use crate::error::ApiError;

/// Query parameters for the keyword search endpoints.
///
/// `keyword` is declared Option so a missing parameter reaches validation
/// (and becomes a 400) instead of actix's default extractor error.
#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    pub keyword: Option<String>,
}

/// GET /top_movies — the 5 most-rented films with their rental counts.
pub async fn top_movies(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let films = db.reports().top_films(TOP_FILMS_LIMIT).await?;
    Ok(HttpResponse::Ok().json(films))
}

/// GET /top_actors — the 5 most-credited actors, each carrying their own
/// 5 most-rented films.
pub async fn top_actors(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let actors = db
        .reports()
        .top_actors(TOP_ACTORS_LIMIT, TOP_FILMS_PER_ACTOR)
        .await?;
    Ok(HttpResponse::Ok().json(actors))
}

/// GET /search?keyword= — films whose title, credited actor name, or
/// category matches the keyword. De-duplicated by film.
pub async fn search(
    db: web::Data<Database>,
    query: web::Query<KeywordQuery>,
) -> Result<HttpResponse, ApiError> {
    let keyword = validate_keyword(query.keyword.as_deref())?;
    info!(keyword = %keyword, "Film search");

    let films = db.reports().search_films(&keyword).await?;
    Ok(HttpResponse::Ok().json(films))
}

/// GET /available-rent — inventory units currently offered for rent,
/// judged against the current instant.
pub async fn available_rent(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let units = db.reports().available_inventory(Utc::now()).await?;
    Ok(HttpResponse::Ok().json(units))
}

/// Registers the report routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/top_movies", web::get().to(top_movies))
        .route("/top_actors", web::get().to(top_actors))
        .route("/search", web::get().to(search))
        .route("/available-rent", web::get().to(available_rent));
}
