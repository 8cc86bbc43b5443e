//! External collaborators: payment and seat reservation.
//!
//! The purchase flow calls these but does not implement them. Production
//! integrations and test doubles both live outside this crate.

/// Payment collaborator error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    /// The payment was refused
    #[error("payment declined: {reason}")]
    Declined {
        /// Decline reason
        reason: String,
    },

    /// The payment provider could not be reached or timed out
    #[error("payment provider unavailable: {message}")]
    Unavailable {
        /// Error message
        message: String,
    },
}

/// Seat reservation collaborator error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeatReservationError {
    /// The request was refused, e.g. not enough seats left
    #[error("seat reservation rejected: {reason}")]
    Rejected {
        /// Rejection reason
        reason: String,
    },

    /// The reservation system could not be reached or timed out
    #[error("seat reservation service unavailable: {message}")]
    Unavailable {
        /// Error message
        message: String,
    },
}

/// Takes payment from an account.
pub trait PaymentService: Send + Sync {
    /// Charge `amount` to `account_id`.
    ///
    /// # Errors
    ///
    /// Returns error if the payment was not taken
    fn make_payment(&self, account_id: crate::AccountId, amount: u64) -> Result<(), PaymentError>;
}

/// Reserves seats for an account.
pub trait SeatReservationService: Send + Sync {
    /// Reserve `seat_count` seats for `account_id`.
    ///
    /// # Errors
    ///
    /// Returns error if the seats were not reserved
    fn reserve_seat(
        &self,
        account_id: crate::AccountId,
        seat_count: u64,
    ) -> Result<(), SeatReservationError>;
}
