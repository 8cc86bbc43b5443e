//! Business validation rules for ticket purchases.
//!
//! Rules are applied by [`validate_order`] in a fixed order, and the first
//! failing rule decides the error:
//!
//! 1. account identifier present and strictly positive
//! 2. adult + child tickets within the configured cap
//! 3. at least one adult entry
//! 4. no more infants than adults

use crate::error::{PurchaseError, Result};
use crate::types::{AccountId, PurchaseOrder, TicketCategory, TicketRequest};

/// Checks that an account identifier is present and strictly positive.
///
/// # Errors
///
/// Returns [`PurchaseError::InvalidAccount`] otherwise.
pub fn validate_account(account_id: Option<i64>) -> Result<AccountId> {
    account_id
        .and_then(AccountId::new)
        .ok_or(PurchaseError::InvalidAccount)
}

fn quantity_of(requests: &[TicketRequest], category: TicketCategory) -> u64 {
    requests
        .iter()
        .filter(|request| request.category() == category)
        .map(|request| u64::from(request.quantity()))
        .sum()
}

/// Number of tickets that count toward the purchase cap (everything but infants).
#[must_use]
pub fn non_infant_ticket_count(requests: &[TicketRequest]) -> u64 {
    requests
        .iter()
        .filter(|request| request.category() != TicketCategory::Infant)
        .map(|request| u64::from(request.quantity()))
        .sum()
}

/// True when adult + child tickets exceed `max`.
#[must_use]
pub fn is_max_ticket_count_exceeded(requests: &[TicketRequest], max: u32) -> bool {
    non_infant_ticket_count(requests) > u64::from(max)
}

/// True when any request has the adult category.
///
/// Only the presence of the category is checked: `ADULT=0` counts.
#[must_use]
pub fn is_adult_ticket_present(requests: &[TicketRequest]) -> bool {
    requests
        .iter()
        .any(|request| request.category() == TicketCategory::Adult)
}

/// True when total infants do not exceed total adults.
#[must_use]
pub fn is_infant_count_within_adult_count(requests: &[TicketRequest]) -> bool {
    quantity_of(requests, TicketCategory::Adult) >= quantity_of(requests, TicketCategory::Infant)
}

/// Applies every business rule and returns the validated order.
///
/// # Errors
///
/// Returns the error of the first rule that fails.
pub fn validate_order(
    account_id: Option<i64>,
    requests: &[TicketRequest],
    max_tickets: u32,
) -> Result<PurchaseOrder<'_>> {
    let account_id = validate_account(account_id)?;

    if is_max_ticket_count_exceeded(requests, max_tickets) {
        return Err(PurchaseError::MaxTicketsExceeded { max: max_tickets });
    }

    if !is_adult_ticket_present(requests) {
        return Err(PurchaseError::NoAdultPresent { account_id });
    }

    if !is_infant_count_within_adult_count(requests) {
        return Err(PurchaseError::InfantsExceedAdults {
            account_id,
            adults: quantity_of(requests, TicketCategory::Adult),
            infants: quantity_of(requests, TicketCategory::Infant),
        });
    }

    Ok(PurchaseOrder::new(account_id, requests))
}
