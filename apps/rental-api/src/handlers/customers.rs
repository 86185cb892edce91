//! # Customer Handlers
//!
//! Customer search with grouped rental history, the flat single-customer
//! history, and the single-row CRUD surface.

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

use rental_core::validation::{
    validate_customer_id, validate_customer_update, validate_keyword, validate_new_customer,
};
use rental_core::{CustomerUpdate, NewCustomer};
use rental_db::Database;

use crate::error::ApiError;

/// Query parameters for /search/customers.
#[derive(Debug, Deserialize)]
pub struct CustomerSearchQuery {
    pub keyword: Option<String>,
}

/// Query parameters for /rental_info.
///
/// `customer_id` arrives as a raw string so that both "missing" and
/// "not a number" map to the documented 400, not an extractor error.
#[derive(Debug, Deserialize)]
pub struct RentalInfoQuery {
    pub customer_id: Option<String>,
}

/// GET /search/customers?keyword= — matching customers, each exactly once,
/// with their complete date-ordered rental history.
pub async fn search_customers(
    db: web::Data<Database>,
    query: web::Query<CustomerSearchQuery>,
) -> Result<HttpResponse, ApiError> {
    let keyword = validate_keyword(query.keyword.as_deref())?;
    info!(keyword = %keyword, "Customer search");

    let customers = db.reports().customer_history(&keyword).await?;
    Ok(HttpResponse::Ok().json(customers))
}

/// GET /rental_info?customer_id= — one customer's flat rental history.
///
/// 400 when the parameter is missing or malformed; 404 when no such
/// customer exists; 200 with an empty array for a customer who has never
/// rented anything.
pub async fn rental_info(
    db: web::Data<Database>,
    query: web::Query<RentalInfoQuery>,
) -> Result<HttpResponse, ApiError> {
    let customer_id = validate_customer_id(query.customer_id.as_deref())?;

    let rows = db.reports().rental_info(customer_id).await?;
    Ok(HttpResponse::Ok().json(rows))
}

/// GET /customers — every customer.
pub async fn list_customers(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let customers = db.customers().list_all().await?;
    Ok(HttpResponse::Ok().json(customers))
}

/// GET /customers/{id} — one customer.
pub async fn get_customer(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let customer = db
        .customers()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Customer", id))?;
    Ok(HttpResponse::Ok().json(customer))
}

/// POST /customers — create a customer.
pub async fn create_customer(
    db: web::Data<Database>,
    body: web::Json<NewCustomer>,
) -> Result<HttpResponse, ApiError> {
    let input = body.into_inner();
    validate_new_customer(&input)?;

    let created = db.customers().insert(&input).await?;
    info!(customer_id = created.customer_id, "Customer created");
    Ok(HttpResponse::Created().json(created))
}

/// PUT /customers/{id} — partial update; absent fields keep their values.
pub async fn update_customer(
    db: web::Data<Database>,
    path: web::Path<i64>,
    body: web::Json<CustomerUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let patch = body.into_inner();
    validate_customer_update(&patch)?;

    let updated = db.customers().update(id, &patch).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /customers/{id} — delete a customer.
pub async fn delete_customer(
    db: web::Data<Database>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    db.customers().delete(id).await?;
    info!(customer_id = id, "Customer deleted");
    Ok(HttpResponse::NoContent().finish())
}

/// Registers the customer routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/search/customers", web::get().to(search_customers))
        .route("/rental_info", web::get().to(rental_info))
        .route("/customers", web::get().to(list_customers))
        .route("/customers", web::post().to(create_customer))
        .route("/customers/{id}", web::get().to(get_customer))
        .route("/customers/{id}", web::put().to(update_customer))
        .route("/customers/{id}", web::delete().to(delete_customer));
}
