//! Property-based testing strategies using proptest.

use cinema_tickets_core::{TicketCategory, TicketRequest};
use proptest::collection::vec;
use proptest::prelude::*;

/// Any ticket category.
pub fn category() -> impl Strategy<Value = TicketCategory> {
    prop_oneof![
        Just(TicketCategory::Adult),
        Just(TicketCategory::Child),
        Just(TicketCategory::Infant),
    ]
}

/// A request with a quantity in `0..=max_quantity`.
pub fn request(max_quantity: u32) -> impl Strategy<Value = TicketRequest> {
    (category(), 0..=max_quantity)
        .prop_map(|(category, quantity)| TicketRequest::new(category, quantity))
}

/// A request of a fixed category with a quantity in `0..=max_quantity`.
pub fn request_of(
    category: TicketCategory,
    max_quantity: u32,
) -> impl Strategy<Value = TicketRequest> {
    (0..=max_quantity).prop_map(move |quantity| TicketRequest::new(category, quantity))
}

/// Up to `max_len` arbitrary requests.
pub fn requests(max_len: usize, max_quantity: u32) -> impl Strategy<Value = Vec<TicketRequest>> {
    vec(request(max_quantity), 0..=max_len)
}

/// Requests without any adult entry.
pub fn requests_without_adults(
    max_len: usize,
    max_quantity: u32,
) -> impl Strategy<Value = Vec<TicketRequest>> {
    vec(
        prop_oneof![
            request_of(TicketCategory::Child, max_quantity),
            request_of(TicketCategory::Infant, max_quantity),
        ],
        0..=max_len,
    )
}

/// Requests that satisfy every rule under a cap of `max_tickets`.
///
/// One adult entry of `1..=max_tickets`, a child entry filling part of the
/// remaining cap, and an infant entry no larger than the adult count. Entries
/// are shuffled so tests do not depend on request order.
pub fn valid_requests(max_tickets: u32) -> impl Strategy<Value = Vec<TicketRequest>> {
    (1..=max_tickets.max(1))
        .prop_flat_map(move |adults| {
            let children = 0..=max_tickets.saturating_sub(adults);
            (Just(adults), children, 0..=adults)
        })
        .prop_map(|(adults, children, infants)| {
            vec![
                TicketRequest::adult(adults),
                TicketRequest::child(children),
                TicketRequest::infant(infants),
            ]
        })
        .prop_shuffle()
}
