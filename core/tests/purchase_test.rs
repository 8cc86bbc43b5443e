//! Purchase flow tests against recording collaborators.
//!
//! Run with: `cargo test -p cinema-tickets-core --test purchase_test`

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use cinema_tickets_core::{
    AtomicFailureCounters, ErrorCode, PaymentError, PurchaseConfig, PurchaseError,
    PurchaseOrchestrator, SeatReservationError, TicketRequest, TicketService,
};
use cinema_tickets_testing::{
    init_test_tracing, Call, CallJournal, MockPaymentService, MockSeatReservationService,
};
use std::sync::Arc;

struct Fixture {
    journal: CallJournal,
    counters: Arc<AtomicFailureCounters>,
    orchestrator: PurchaseOrchestrator,
}

fn fixture_with(payments: MockPaymentService, seats: MockSeatReservationService) -> Fixture {
    init_test_tracing();
    let journal = payments.journal().clone();
    let counters = Arc::new(AtomicFailureCounters::new());
    let orchestrator = PurchaseOrchestrator::new(Arc::new(payments), Arc::new(seats))
        .with_failure_recorder(counters.clone());

    Fixture {
        journal,
        counters,
        orchestrator,
    }
}

fn fixture() -> Fixture {
    let journal = CallJournal::new();
    fixture_with(
        MockPaymentService::new(journal.clone()),
        MockSeatReservationService::new(journal),
    )
}

fn assert_rejected(
    fixture: &Fixture,
    account_id: Option<i64>,
    requests: &[TicketRequest],
) -> PurchaseError {
    let error = fixture
        .orchestrator
        .purchase_tickets(account_id, requests)
        .expect_err("purchase should be rejected");

    assert!(fixture.journal.is_empty(), "no collaborator may be called");
    assert_eq!(fixture.counters.business_failures(), 1);
    assert_eq!(fixture.counters.operational_failures(), 0);
    error
}

#[test]
fn test_missing_account_id_is_rejected() {
    let f = fixture();
    let error = assert_rejected(&f, None, &[TicketRequest::adult(1)]);

    assert_eq!(error.code(), ErrorCode::InvalidAccount);
    assert_eq!(error.code().description(), "Account Id Invalid");
    assert_eq!(error.to_string(), "Account ID is not a valid data");
}

#[test]
fn test_zero_account_id_is_rejected() {
    let f = fixture();
    let error = assert_rejected(&f, Some(0), &[TicketRequest::adult(1)]);

    assert_eq!(error, PurchaseError::InvalidAccount);
}

#[test]
fn test_negative_account_id_is_rejected() {
    let f = fixture();
    let error = assert_rejected(&f, Some(-42), &[TicketRequest::adult(1)]);

    assert_eq!(error, PurchaseError::InvalidAccount);
}

#[test]
fn test_more_than_twenty_tickets_is_rejected() {
    let f = fixture();
    let error = assert_rejected(&f, Some(1), &[TicketRequest::adult(21)]);

    assert_eq!(error.code(), ErrorCode::MaxTicketsExceeded);
    assert_eq!(error.code().description(), "Max ticket count purchase exceeded");
    assert_eq!(
        error.to_string(),
        "Max ticket purchase count exceed the limit of 20"
    );
}

#[test]
fn test_children_and_adults_share_the_cap() {
    let f = fixture();
    let error = assert_rejected(
        &f,
        Some(1),
        &[TicketRequest::adult(11), TicketRequest::child(10)],
    );

    assert_eq!(error.code(), ErrorCode::MaxTicketsExceeded);
}

#[test]
fn test_infants_do_not_count_toward_cap() {
    let f = fixture();

    let result = f.orchestrator.purchase_tickets(
        Some(1),
        &[TicketRequest::adult(20), TicketRequest::infant(20)],
    );

    assert!(result.is_ok());
    assert_eq!(f.journal.payments(), vec![(1, 400)]);
    assert_eq!(f.journal.reservations(), vec![(1, 20)]);
}

#[test]
fn test_no_adult_ticket_is_rejected() {
    let f = fixture();
    let error = assert_rejected(&f, Some(1), &[TicketRequest::child(20)]);

    assert_eq!(error.code(), ErrorCode::NoAdultPresent);
    assert_eq!(error.code().description(), "Adult ticket is not present");
    assert_eq!(error.to_string(), "No adult ticket is present for Account ID 1");
}

#[test]
fn test_zero_quantity_child_without_adult_is_rejected() {
    let f = fixture();
    let error = assert_rejected(&f, Some(1), &[TicketRequest::child(0)]);

    assert_eq!(error.code(), ErrorCode::NoAdultPresent);
}

#[test]
fn test_more_infants_than_adults_is_rejected() {
    let f = fixture();
    let error = assert_rejected(
        &f,
        Some(1),
        &[TicketRequest::infant(19), TicketRequest::adult(1)],
    );

    assert_eq!(error.code(), ErrorCode::NoAdultPresent);
    assert_eq!(
        error.to_string(),
        "Adult tickets less than infant tickets for Account ID 1"
    );
}

#[test]
fn test_zero_quantity_adult_entry_satisfies_presence_rule() {
    let f = fixture();

    let result = f.orchestrator.purchase_tickets(
        Some(1),
        &[TicketRequest::adult(0), TicketRequest::child(2)],
    );

    assert!(result.is_ok());
    assert_eq!(f.journal.payments(), vec![(1, 20)]);
    assert_eq!(f.journal.reservations(), vec![(1, 2)]);
}

#[test]
fn test_valid_purchase_pays_then_reserves() {
    let f = fixture();

    f.orchestrator
        .purchase_tickets(
            Some(1),
            &[
                TicketRequest::adult(10),
                TicketRequest::child(10),
                TicketRequest::infant(10),
            ],
        )
        .unwrap();

    assert_eq!(
        f.journal.calls(),
        vec![
            Call::Payment {
                account_id: 1,
                amount: 300
            },
            Call::Reservation {
                account_id: 1,
                seat_count: 20
            },
        ]
    );
    assert_eq!(f.counters.business_failures(), 0);
    assert_eq!(f.counters.operational_failures(), 0);
}

#[test]
fn test_payment_failure_skips_reservation() {
    let journal = CallJournal::new();
    let f = fixture_with(
        MockPaymentService::new(journal.clone()).failing_with(PaymentError::Declined {
            reason: "Payment Failed!!".to_string(),
        }),
        MockSeatReservationService::new(journal),
    );

    let error = f
        .orchestrator
        .purchase_tickets(Some(1), &[TicketRequest::adult(1)])
        .unwrap_err();

    assert_eq!(error.code(), ErrorCode::UnknownError);
    assert_eq!(error.to_string(), "Payment failed for Account id 1");
    assert!(!error.payment_committed());
    assert_eq!(f.journal.payments(), vec![(1, 20)]);
    assert!(f.journal.reservations().is_empty());
    assert_eq!(f.counters.operational_failures(), 1);
    assert_eq!(f.counters.business_failures(), 0);
}

#[test]
fn test_reservation_failure_keeps_payment() {
    let journal = CallJournal::new();
    let f = fixture_with(
        MockPaymentService::new(journal.clone()),
        MockSeatReservationService::new(journal).failing_with(SeatReservationError::Rejected {
            reason: "Seat Reservation Failed!!".to_string(),
        }),
    );

    let error = f
        .orchestrator
        .purchase_tickets(Some(1), &[TicketRequest::adult(20)])
        .unwrap_err();

    assert_eq!(error.code(), ErrorCode::UnknownError);
    assert_eq!(error.to_string(), "Seat reservation failed for Account id 1");
    assert_eq!(
        error,
        PurchaseError::ReservationFailed {
            account_id: cinema_tickets_core::AccountId::new(1).unwrap(),
            amount_charged: 400,
        }
    );
    assert!(error.payment_committed());
    assert_eq!(f.journal.payments(), vec![(1, 400)]);
    assert_eq!(f.journal.reservations(), vec![(1, 20)]);
    assert_eq!(f.counters.operational_failures(), 1);
}

#[test]
fn test_identical_purchases_are_not_deduplicated() {
    let f = fixture();
    let requests = [TicketRequest::adult(2), TicketRequest::child(1)];

    f.orchestrator.purchase_tickets(Some(8), &requests).unwrap();
    f.orchestrator.purchase_tickets(Some(8), &requests).unwrap();

    assert_eq!(f.journal.payments(), vec![(8, 50), (8, 50)]);
    assert_eq!(f.journal.reservations(), vec![(8, 3), (8, 3)]);
}

#[test]
fn test_configured_cap_replaces_default() {
    let journal = CallJournal::new();
    let payments = MockPaymentService::new(journal.clone());
    let seats = MockSeatReservationService::new(journal.clone());
    let orchestrator = PurchaseOrchestrator::new(Arc::new(payments), Arc::new(seats))
        .with_config(PurchaseConfig::new(25));

    orchestrator
        .purchase_tickets(Some(1), &[TicketRequest::adult(25)])
        .unwrap();

    let error = orchestrator
        .purchase_tickets(Some(1), &[TicketRequest::adult(26)])
        .unwrap_err();
    assert_eq!(error, PurchaseError::MaxTicketsExceeded { max: 25 });
    assert_eq!(journal.payments(), vec![(1, 500)]);
}

#[test]
fn test_orchestrator_is_shareable_across_threads() {
    let f = Arc::new(fixture());

    let handles: Vec<_> = (1..=4)
        .map(|account| {
            let f = Arc::clone(&f);
            std::thread::spawn(move || {
                f.orchestrator
                    .purchase_tickets(Some(account), &[TicketRequest::adult(1)])
                    .is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }

    let mut payments = f.journal.payments();
    payments.sort_unstable();
    assert_eq!(payments, vec![(1, 20), (2, 20), (3, 20), (4, 20)]);
}
