//! Static price and seat table.

use crate::types::TicketCategory;

/// Process-wide ticket price table.
///
/// | Category | Unit price | Occupies a seat |
/// |----------|-----------:|-----------------|
/// | ADULT    | 20         | yes             |
/// | CHILD    | 10         | yes             |
/// | INFANT   | 0          | no              |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PriceTable;

impl PriceTable {
    /// Unit price for a category.
    #[must_use]
    pub const fn unit_price(category: TicketCategory) -> u64 {
        match category {
            TicketCategory::Adult => 20,
            TicketCategory::Child => 10,
            TicketCategory::Infant => 0,
        }
    }

    /// Whether a ticket of this category needs its own seat.
    #[must_use]
    pub const fn occupies_seat(category: TicketCategory) -> bool {
        match category {
            TicketCategory::Adult | TicketCategory::Child => true,
            TicketCategory::Infant => false,
        }
    }

    /// Seats reserved per ticket: 1 for seat-eligible categories, 0 otherwise.
    #[must_use]
    pub const fn seats_per_ticket(category: TicketCategory) -> u64 {
        if Self::occupies_seat(category) { 1 } else { 0 }
    }
}
