//! Recording test doubles for the purchase collaborators.
//!
//! - [`MockPaymentService`]: records `make_payment` calls, optionally fails
//! - [`MockSeatReservationService`]: records `reserve_seat` calls, optionally fails
//! - [`CallJournal`]: shared, ordered log of calls across both services

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Only panics on a poisoned lock

use cinema_tickets_core::{
    AccountId, PaymentError, PaymentService, SeatReservationError, SeatReservationService,
};
use std::sync::{Arc, Mutex};

/// A single collaborator call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Call {
    /// `make_payment(account_id, amount)`
    Payment {
        /// Raw account identifier
        account_id: i64,
        /// Amount charged
        amount: u64,
    },
    /// `reserve_seat(account_id, seat_count)`
    Reservation {
        /// Raw account identifier
        account_id: i64,
        /// Seats requested
        seat_count: u64,
    },
}

/// Ordered log of collaborator calls, shareable between mocks.
///
/// Calls are recorded even when the mock is configured to fail.
#[derive(Clone, Debug, Default)]
pub struct CallJournal {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallJournal {
    /// Create an empty journal
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    /// All calls, oldest first
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Payment calls only, as `(account_id, amount)`
    #[must_use]
    pub fn payments(&self) -> Vec<(i64, u64)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Payment { account_id, amount } => Some((account_id, amount)),
                Call::Reservation { .. } => None,
            })
            .collect()
    }

    /// Reservation calls only, as `(account_id, seat_count)`
    #[must_use]
    pub fn reservations(&self) -> Vec<(i64, u64)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Reservation {
                    account_id,
                    seat_count,
                } => Some((account_id, seat_count)),
                Call::Payment { .. } => None,
            })
            .collect()
    }

    /// Number of recorded calls
    #[must_use]
    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Check if nothing has been called
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calls.lock().unwrap().is_empty()
    }

    /// Forget all recorded calls (for test isolation)
    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

/// Payment service double.
///
/// Succeeds by default. Use [`MockPaymentService::failing_with`] to make every
/// call fail with the given error.
#[derive(Clone, Debug, Default)]
pub struct MockPaymentService {
    journal: CallJournal,
    failure: Option<PaymentError>,
}

impl MockPaymentService {
    /// Creates a mock that always succeeds, recording into `journal`
    #[must_use]
    pub fn new(journal: CallJournal) -> Self {
        Self {
            journal,
            failure: None,
        }
    }

    /// Makes every subsequent call fail with `error`
    #[must_use]
    pub fn failing_with(mut self, error: PaymentError) -> Self {
        self.failure = Some(error);
        self
    }

    /// The journal this mock records into
    #[must_use]
    pub const fn journal(&self) -> &CallJournal {
        &self.journal
    }
}

impl PaymentService for MockPaymentService {
    fn make_payment(&self, account_id: AccountId, amount: u64) -> Result<(), PaymentError> {
        tracing::debug!(%account_id, amount, "Mock payment called");
        self.journal.record(Call::Payment {
            account_id: account_id.get(),
            amount,
        });
        self.failure.clone().map_or(Ok(()), Err)
    }
}

/// Seat reservation service double.
///
/// Succeeds by default. Use [`MockSeatReservationService::failing_with`] to
/// make every call fail with the given error.
#[derive(Clone, Debug, Default)]
pub struct MockSeatReservationService {
    journal: CallJournal,
    failure: Option<SeatReservationError>,
}

impl MockSeatReservationService {
    /// Creates a mock that always succeeds, recording into `journal`
    #[must_use]
    pub fn new(journal: CallJournal) -> Self {
        Self {
            journal,
            failure: None,
        }
    }

    /// Makes every subsequent call fail with `error`
    #[must_use]
    pub fn failing_with(mut self, error: SeatReservationError) -> Self {
        self.failure = Some(error);
        self
    }

    /// The journal this mock records into
    #[must_use]
    pub const fn journal(&self) -> &CallJournal {
        &self.journal
    }
}

impl SeatReservationService for MockSeatReservationService {
    fn reserve_seat(
        &self,
        account_id: AccountId,
        seat_count: u64,
    ) -> Result<(), SeatReservationError> {
        tracing::debug!(%account_id, seat_count, "Mock seat reservation called");
        self.journal.record(Call::Reservation {
            account_id: account_id.get(),
            seat_count,
        });
        self.failure.clone().map_or(Ok(()), Err)
    }
}
