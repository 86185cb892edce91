//! # Input Validation
//!
//! Request-level validation rules, applied before any query runs.
//!
//! ## What Belongs Here
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Rules                                   │
//! │                                                                         │
//! │  validate_keyword        ── /search and /search/customers parameter     │
//! │  validate_customer_id    ── /rental_info parameter                      │
//! │  validate_new_customer   ── POST /customers body                        │
//! │  validate_customer_update── PUT /customers/{id} body                    │
//! │                                                                         │
//! │  All pure, all synchronous. The transport layer maps every             │
//! │  ValidationError to a 400 response.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{CustomerUpdate, NewCustomer};

/// Name and email columns are VARCHAR(45)/(50)-shaped in the schema.
const MAX_NAME_LEN: usize = 45;
const MAX_EMAIL_LEN: usize = 50;

// =============================================================================
// Query Parameter Validation
// =============================================================================

/// Validates the `keyword` query parameter for the search endpoints.
///
/// A missing or blank keyword is rejected rather than interpreted as
/// "match everything": an unconstrained triple-join over film x actor x
/// category is never what a caller meant.
///
/// ## Example
/// ```rust
/// use rental_core::validation::validate_keyword;
///
/// assert_eq!(validate_keyword(Some("  ACADEMY ")).unwrap(), "ACADEMY");
/// assert!(validate_keyword(None).is_err());
/// assert!(validate_keyword(Some("   ")).is_err());
/// ```
pub fn validate_keyword(raw: Option<&str>) -> ValidationResult<String> {
    let keyword = raw.map(str::trim).unwrap_or_default();
    if keyword.is_empty() {
        return Err(ValidationError::required("keyword"));
    }
    Ok(keyword.to_string())
}

/// Validates the `customer_id` query parameter for `/rental_info`.
///
/// Missing -> Required; non-numeric or non-positive -> InvalidFormat.
pub fn validate_customer_id(raw: Option<&str>) -> ValidationResult<i64> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(ValidationError::required("customer_id"));
    }
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(_) => Err(ValidationError::invalid_format(
            "customer_id",
            "must be positive",
        )),
        Err(_) => Err(ValidationError::invalid_format(
            "customer_id",
            "expected an integer",
        )),
    }
}

// =============================================================================
// Body Validation
// =============================================================================

/// Validates a customer creation payload.
pub fn validate_new_customer(input: &NewCustomer) -> ValidationResult<()> {
    check_name("first_name", &input.first_name)?;
    check_name("last_name", &input.last_name)?;
    if let Some(ref email) = input.email {
        check_email(email)?;
    }
    Ok(())
}

/// Validates a customer update payload. Absent fields are skipped.
pub fn validate_customer_update(input: &CustomerUpdate) -> ValidationResult<()> {
    if let Some(ref first_name) = input.first_name {
        check_name("first_name", first_name)?;
    }
    if let Some(ref last_name) = input.last_name {
        check_name("last_name", last_name)?;
    }
    if let Some(ref email) = input.email {
        check_email(email)?;
    }
    Ok(())
}

fn check_name(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::required(field));
    }
    if value.len() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

fn check_email(value: &str) -> ValidationResult<()> {
    if value.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LEN,
        });
    }
    // Plausibility check only; real verification happens by sending mail
    if !value.contains('@') || value.starts_with('@') || value.ends_with('@') {
        return Err(ValidationError::invalid_format(
            "email",
            "expected name@domain",
        ));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
