//! Purchase error taxonomy.
//!
//! Every failure of [`crate::TicketService::purchase_tickets`] is a
//! [`PurchaseError`], and every `PurchaseError` maps to one [`ErrorCode`].

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::AccountId;

/// Result type for purchase operations
pub type Result<T> = std::result::Result<T, PurchaseError>;

/// Fixed set of error identifiers attached to purchase failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// A collaborator failed during payment or seat reservation
    UnknownError,
    /// Account identifier absent or not strictly positive
    InvalidAccount,
    /// Too many seat-occupying tickets in one purchase
    MaxTicketsExceeded,
    /// No adult entry, or more infants than adults
    NoAdultPresent,
}

impl ErrorCode {
    /// Symbolic name, e.g. `INVALID_ACCOUNT`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownError => "UNKNOWN_ERROR",
            Self::InvalidAccount => "INVALID_ACCOUNT",
            Self::MaxTicketsExceeded => "MAX_TICKETS_EXCEEDED",
            Self::NoAdultPresent => "NO_ADULT_PRESENT",
        }
    }

    /// Identifier used by the previous ticketing service (`ERRORCTnn`).
    ///
    /// Kept so support tooling keyed on the old identifiers keeps matching.
    #[must_use]
    pub const fn legacy_code(self) -> &'static str {
        match self {
            Self::UnknownError => "ERRORCT01",
            Self::InvalidAccount => "ERRORCT02",
            Self::MaxTicketsExceeded => "ERRORCT03",
            Self::NoAdultPresent => "ERRORCT04",
        }
    }

    /// Human-readable description of the code itself.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UnknownError => "Unknown application error",
            Self::InvalidAccount => "Account Id Invalid",
            Self::MaxTicketsExceeded => "Max ticket count purchase exceeded",
            Self::NoAdultPresent => "Adult ticket is not present",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Invalid purchase.
///
/// The first four variants are business validation failures raised before any
/// collaborator is called. The last two wrap collaborator failures; the
/// collaborator's own error is logged and then dropped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PurchaseError {
    /// Account identifier absent or not strictly positive.
    #[error("Account ID is not a valid data")]
    InvalidAccount,

    /// More than `max` non-infant tickets requested.
    #[error("Max ticket purchase count exceed the limit of {max}")]
    MaxTicketsExceeded {
        /// Configured limit
        max: u32,
    },

    /// No adult entry among the requests.
    #[error("No adult ticket is present for Account ID {account_id}")]
    NoAdultPresent {
        /// Purchasing account
        account_id: AccountId,
    },

    /// More infant tickets than adult tickets.
    ///
    /// Reports [`ErrorCode::NoAdultPresent`], the same code as a missing
    /// adult; callers that need to tell the two apart match on the variant.
    #[error("Adult tickets less than infant tickets for Account ID {account_id}")]
    InfantsExceedAdults {
        /// Purchasing account
        account_id: AccountId,
        /// Total adult tickets requested
        adults: u64,
        /// Total infant tickets requested
        infants: u64,
    },

    /// Payment collaborator failed. No seats were reserved.
    #[error("Payment failed for Account id {account_id}")]
    PaymentFailed {
        /// Purchasing account
        account_id: AccountId,
    },

    /// Seat reservation failed after payment succeeded.
    ///
    /// The payment is not reversed: `amount_charged` has been taken from the
    /// account and no seats are held.
    #[error("Seat reservation failed for Account id {account_id}")]
    ReservationFailed {
        /// Purchasing account
        account_id: AccountId,
        /// Amount already charged by the payment collaborator
        amount_charged: u64,
    },
}

impl PurchaseError {
    /// Error code for this failure.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidAccount => ErrorCode::InvalidAccount,
            Self::MaxTicketsExceeded { .. } => ErrorCode::MaxTicketsExceeded,
            Self::NoAdultPresent { .. } | Self::InfantsExceedAdults { .. } => {
                ErrorCode::NoAdultPresent
            }
            Self::PaymentFailed { .. } | Self::ReservationFailed { .. } => ErrorCode::UnknownError,
        }
    }

    /// True for failures detected before any collaborator was called.
    #[must_use]
    pub const fn is_business_failure(&self) -> bool {
        !matches!(
            self,
            Self::PaymentFailed { .. } | Self::ReservationFailed { .. }
        )
    }

    /// True when money was taken even though the purchase failed.
    #[must_use]
    pub const fn payment_committed(&self) -> bool {
        matches!(self, Self::ReservationFailed { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn account() -> AccountId {
        AccountId::new(7).unwrap()
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            PurchaseError::InvalidAccount.to_string(),
            "Account ID is not a valid data"
        );
        assert_eq!(
            PurchaseError::MaxTicketsExceeded { max: 20 }.to_string(),
            "Max ticket purchase count exceed the limit of 20"
        );
        assert_eq!(
            PurchaseError::NoAdultPresent {
                account_id: account()
            }
            .to_string(),
            "No adult ticket is present for Account ID 7"
        );
        assert_eq!(
            PurchaseError::PaymentFailed {
                account_id: account()
            }
            .to_string(),
            "Payment failed for Account id 7"
        );
        assert_eq!(
            PurchaseError::ReservationFailed {
                account_id: account(),
                amount_charged: 20,
            }
            .to_string(),
            "Seat reservation failed for Account id 7"
        );
    }

    #[test]
    fn test_infant_ratio_reuses_no_adult_code() {
        let error = PurchaseError::InfantsExceedAdults {
            account_id: account(),
            adults: 1,
            infants: 19,
        };

        assert_eq!(error.code(), ErrorCode::NoAdultPresent);
        assert_ne!(
            error,
            PurchaseError::NoAdultPresent {
                account_id: account()
            }
        );
    }

    #[test]
    fn test_failure_classification() {
        assert!(PurchaseError::InvalidAccount.is_business_failure());
        assert!(PurchaseError::MaxTicketsExceeded { max: 20 }.is_business_failure());

        let payment = PurchaseError::PaymentFailed {
            account_id: account(),
        };
        assert!(!payment.is_business_failure());
        assert!(!payment.payment_committed());

        let reservation = PurchaseError::ReservationFailed {
            account_id: account(),
            amount_charged: 40,
        };
        assert!(!reservation.is_business_failure());
        assert!(reservation.payment_committed());
        assert_eq!(reservation.code(), ErrorCode::UnknownError);
    }

    #[test]
    fn test_legacy_codes() {
        assert_eq!(ErrorCode::UnknownError.legacy_code(), "ERRORCT01");
        assert_eq!(ErrorCode::InvalidAccount.legacy_code(), "ERRORCT02");
        assert_eq!(ErrorCode::MaxTicketsExceeded.legacy_code(), "ERRORCT03");
        assert_eq!(ErrorCode::NoAdultPresent.legacy_code(), "ERRORCT04");
        assert_eq!(
            serde_json::to_string(&ErrorCode::MaxTicketsExceeded).unwrap(),
            r#""MAX_TICKETS_EXCEEDED""#
        );
    }
}
