//! # Cinema Tickets Testing
//!
//! Testing utilities for the cinema ticket purchase flow.
//!
//! This crate provides:
//! - Mock payment and seat reservation services that record every call
//! - A shared [`CallJournal`] for asserting call order across both services
//! - Property-based testing strategies for ticket requests
//!
//! ## Example
//!
//! ```
//! use cinema_tickets_core::{PurchaseOrchestrator, TicketRequest, TicketService};
//! use cinema_tickets_testing::{CallJournal, MockPaymentService, MockSeatReservationService};
//! use std::sync::Arc;
//!
//! let journal = CallJournal::new();
//! let payments = MockPaymentService::new(journal.clone());
//! let seats = MockSeatReservationService::new(journal.clone());
//! let orchestrator = PurchaseOrchestrator::new(Arc::new(payments), Arc::new(seats));
//!
//! orchestrator
//!     .purchase_tickets(Some(1), &[TicketRequest::adult(2)])
//!     .unwrap();
//! assert_eq!(journal.len(), 2);
//! ```

pub mod mocks;
pub mod properties;

pub use mocks::{Call, CallJournal, MockPaymentService, MockSeatReservationService};

/// Installs a test-writer `tracing` subscriber at `debug` level.
///
/// Safe to call from many tests; only the first call installs anything.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinema_tickets_core=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
