//! # HTTP Handlers
//!
//! Route registration and request marshalling. Handlers stay transport-only:
//! validate input (rental-core), call a repository (rental-db), serialize the
//! result. No aggregation logic lives here.
//!
//! ## Endpoint Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  reports::configure                                                     │
//! │    GET /top_movies          top 5 films by rental count                 │
//! │    GET /top_actors          top 5 actors, each with their top 5 films   │
//! │    GET /search              keyword search across film/actor/category   │
//! │    GET /available-rent      inventory currently offered for rent        │
//! │                                                                         │
//! │  customers::configure                                                   │
//! │    GET    /search/customers keyword search with grouped rental history  │
//! │    GET    /rental_info      one customer's flat rental history          │
//! │    GET    /customers        list customers                              │
//! │    POST   /customers        create customer                             │
//! │    GET    /customers/{id}   fetch one customer                          │
//! │    PUT    /customers/{id}   partial update                              │
//! │    DELETE /customers/{id}   delete                                      │
//! │                                                                         │
//! │  actors::configure                                                      │
//! │    GET /actors              list actors                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use actix_web::web;

pub mod actors;
pub mod customers;
pub mod reports;

/// Registers every route on the application.
pub fn configure(cfg: &mut web::ServiceConfig) {
    reports::configure(cfg);
    customers::configure(cfg);
    actors::configure(cfg);
}
