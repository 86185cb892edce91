//! # Actor Handlers

use actix_web::{web, HttpResponse};

use rental_db::Database;

use crate::error::ApiError;

/// GET /actors — every actor, ordered by identity.
pub async fn list_actors(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let actors = db.actors().list_all().await?;
    Ok(HttpResponse::Ok().json(actors))
}

/// Registers the actor routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/actors", web::get().to(list_actors));
}
