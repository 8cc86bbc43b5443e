//! # Cinema Tickets Core
//!
//! Validation and orchestration of cinema ticket purchases.
//!
//! A purchase is a list of [`TicketRequest`]s for one account. The
//! [`PurchaseOrchestrator`] checks the business rules, prices the order, takes
//! payment through a [`PaymentService`] and then reserves seats through a
//! [`SeatReservationService`].
//!
//! ## Rules
//!
//! - Account identifiers must be strictly positive
//! - At most 20 adult + child tickets per purchase (configurable)
//! - At least one adult entry
//! - No more infants than adults
//!
//! ## Pricing
//!
//! | Category | Price | Seat |
//! |----------|------:|------|
//! | Adult    | 20    | yes  |
//! | Child    | 10    | yes  |
//! | Infant   | 0     | no   |
//!
//! ## Partial failure
//!
//! Payment is taken before seats are reserved and is not reversed if the
//! reservation fails. That case surfaces as
//! [`PurchaseError::ReservationFailed`], for which
//! [`PurchaseError::payment_committed`] returns `true`.
//!
//! ## Example
//!
//! ```ignore
//! use cinema_tickets_core::{PurchaseOrchestrator, TicketRequest, TicketService};
//! use std::sync::Arc;
//!
//! let orchestrator = PurchaseOrchestrator::new(Arc::new(payments), Arc::new(seats));
//! orchestrator.purchase_tickets(Some(1), &[TicketRequest::adult(2), TicketRequest::infant(1)])?;
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod pricing;
pub mod purchase;
pub mod services;
pub mod types;
pub mod validation;

pub use config::PurchaseConfig;
pub use error::{ErrorCode, PurchaseError, Result};
pub use self::metrics::{
    AtomicFailureCounters, FailureRecorder, MetricsFailureRecorder, NoopFailureRecorder,
};
pub use pricing::PriceTable;
pub use purchase::{PurchaseOrchestrator, TicketService};
pub use services::{PaymentError, PaymentService, SeatReservationError, SeatReservationService};
pub use types::{
    AccountId, ParseTicketError, PurchaseOrder, PurchaseTotals, TicketCategory, TicketRequest,
};
