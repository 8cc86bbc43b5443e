//! Domain types for ticket purchases.
//!
//! Value objects only: categories, requests, validated account identifiers and
//! the per-call purchase order. Nothing here is persisted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::pricing::PriceTable;

// ============================================================================
// Identifiers
// ============================================================================

/// A validated account identifier.
///
/// Always strictly positive. The only way to obtain one outside this crate is
/// through [`crate::validation::validate_account`], so collaborators never see
/// an account that failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountId(i64);

impl AccountId {
    /// Wraps a raw identifier, returning `None` unless it is strictly positive.
    #[must_use]
    pub const fn new(raw: i64) -> Option<Self> {
        if raw > 0 { Some(Self(raw)) } else { None }
    }

    /// Get the inner value
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Tickets
// ============================================================================

/// Ticket category.
///
/// Determines the unit price and whether the ticket occupies a seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketCategory {
    /// Adult ticket
    Adult,
    /// Child ticket
    Child,
    /// Infant ticket (sits on an adult's lap)
    Infant,
}

impl TicketCategory {
    /// All categories, in declaration order.
    pub const ALL: [Self; 3] = [Self::Adult, Self::Child, Self::Infant];

    /// Symbolic name as used on the wire and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adult => "ADULT",
            Self::Child => "CHILD",
            Self::Infant => "INFANT",
        }
    }
}

impl fmt::Display for TicketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`TicketCategory`] or [`TicketRequest`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTicketError {
    /// Category name not recognised
    #[error("unknown ticket category: {0}")]
    UnknownCategory(String),

    /// Input was not of the form `CATEGORY=QUANTITY`
    #[error("expected CATEGORY=QUANTITY, got: {0}")]
    MissingQuantity(String),

    /// Quantity was not a non-negative integer
    #[error("invalid ticket quantity: {0}")]
    InvalidQuantity(String),
}

impl FromStr for TicketCategory {
    type Err = ParseTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTicketError::UnknownCategory(s.to_string()))
    }
}

/// A request for `quantity` tickets of one category.
///
/// Immutable once constructed. Zero quantities are allowed; several requests
/// for the same category are summed independently, never merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketRequest {
    category: TicketCategory,
    quantity: u32,
}

impl TicketRequest {
    /// Creates a new ticket request
    #[must_use]
    pub const fn new(category: TicketCategory, quantity: u32) -> Self {
        Self { category, quantity }
    }

    /// Shorthand for an adult request
    #[must_use]
    pub const fn adult(quantity: u32) -> Self {
        Self::new(TicketCategory::Adult, quantity)
    }

    /// Shorthand for a child request
    #[must_use]
    pub const fn child(quantity: u32) -> Self {
        Self::new(TicketCategory::Child, quantity)
    }

    /// Shorthand for an infant request
    #[must_use]
    pub const fn infant(quantity: u32) -> Self {
        Self::new(TicketCategory::Infant, quantity)
    }

    /// Get the ticket category
    #[must_use]
    pub const fn category(&self) -> TicketCategory {
        self.category
    }

    /// Get the number of tickets requested
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl fmt::Display for TicketRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.category, self.quantity)
    }
}

/// Parses `CATEGORY=QUANTITY`, e.g. `adult=2`.
impl FromStr for TicketRequest {
    type Err = ParseTicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, quantity) = s
            .split_once('=')
            .ok_or_else(|| ParseTicketError::MissingQuantity(s.to_string()))?;

        let category = category.parse()?;
        let quantity = quantity
            .trim()
            .parse()
            .map_err(|_| ParseTicketError::InvalidQuantity(quantity.to_string()))?;

        Ok(Self::new(category, quantity))
    }
}

// ============================================================================
// Purchase order
// ============================================================================

/// Aggregated amount and seat count for a validated order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PurchaseTotals {
    /// Total amount to charge
    pub total_amount: u64,
    /// Number of seats to reserve (infants excluded)
    pub total_seats: u64,
}

/// A validated purchase: the account plus the requests passed in one call.
///
/// Lives only for the duration of a single purchase.
#[derive(Clone, Copy, Debug)]
pub struct PurchaseOrder<'a> {
    account_id: AccountId,
    requests: &'a [TicketRequest],
}

impl<'a> PurchaseOrder<'a> {
    pub(crate) const fn new(account_id: AccountId, requests: &'a [TicketRequest]) -> Self {
        Self {
            account_id,
            requests,
        }
    }

    /// Get the validated account
    #[must_use]
    pub const fn account_id(&self) -> AccountId {
        self.account_id
    }

    /// Get the requests, in the order they were passed
    #[must_use]
    pub const fn requests(&self) -> &'a [TicketRequest] {
        self.requests
    }

    /// Sums price and seats over every request using the [`PriceTable`].
    #[must_use]
    pub fn totals(&self) -> PurchaseTotals {
        self.requests
            .iter()
            .fold(PurchaseTotals::default(), |totals, request| {
                let quantity = u64::from(request.quantity());
                let category = request.category();
                PurchaseTotals {
                    total_amount: totals.total_amount + PriceTable::unit_price(category) * quantity,
                    total_seats: totals.total_seats
                        + PriceTable::seats_per_ticket(category) * quantity,
                }
            })
    }
}
