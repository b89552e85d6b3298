//! Hotel bookings on the hotel manager dashboard.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use rentals_core::types::{PropertyId, Selection, SortDirection, Timestamp, UserId};
use rentals_entity::booking::{Booking, BookingStatus};

use super::{sort_keys, DateRange};
use crate::aggregate::{count_where, sum_where, Tally};
use crate::filter::{Filterable, PredicateChain};
use crate::sort::{by_timestamp, compare_timestamps, Sortable};

/// Filter controls of the booking list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingCriteria {
    /// Lifecycle status.
    pub status: Selection<BookingStatus>,
    /// Restrict to one hotel.
    pub hotel: Option<UserId>,
    /// Restrict to one room.
    pub room: Option<PropertyId>,
    /// Check-in window.
    pub check_in: DateRange,
}

sort_keys! {
    /// Columns the booking list can be ordered by.
    pub enum BookingSortKey {
        /// When the booking was made.
        #[default]
        BookedAt => "booked_at",
        /// Arrival date.
        CheckIn => "check_in",
        /// Total charge.
        Amount => "amount",
    }
}

impl Filterable for Booking {
    type Criteria = BookingCriteria;

    fn search_fields(&self) -> Vec<&str> {
        vec![self.guest_name.as_str(), self.guest_email.as_str(), self.room_title.as_str()]
    }

    fn dimensions(criteria: &BookingCriteria) -> PredicateChain<'_, Self> {
        let mut chain =
            PredicateChain::new().select("status", &criteria.status, |b: &Booking| b.status);
        if let Some(hotel) = &criteria.hotel {
            chain.push("hotel", move |b| &b.hotel_id == hotel);
        }
        if let Some(room) = &criteria.room {
            chain.push("room", move |b| &b.room_id == room);
        }
        if criteria.check_in.is_bounded() {
            chain.push("check_in", move |b| criteria.check_in.contains(&b.check_in));
        }
        chain
    }
}

impl Sortable for Booking {
    type SortKey = BookingSortKey;

    fn compare(a: &Self, b: &Self, key: BookingSortKey) -> Ordering {
        match key {
            BookingSortKey::BookedAt => compare_timestamps(&a.booked_at, &b.booked_at),
            BookingSortKey::CheckIn => compare_timestamps(&a.check_in, &b.check_in),
            BookingSortKey::Amount => a.amount.cmp(&b.amount),
        }
    }
}

/// Whether a booking is still expected to arrive on or after `now`.
fn is_upcoming(booking: &Booking, now: &Timestamp) -> bool {
    matches!(booking.status, BookingStatus::Pending | BookingStatus::Confirmed)
        && &booking.check_in >= now
}

/// Stat cards of the hotel dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingStats {
    /// Bookings per status.
    pub by_status: Tally<BookingStatus>,
    /// Charges on every booking that was not cancelled.
    pub revenue: i64,
    /// Nights sold across bookings that were not cancelled.
    pub nights_sold: i64,
    /// Pending or confirmed bookings arriving on or after the reference time.
    pub upcoming_check_ins: usize,
    /// Cancelled bookings as a share of all bookings.
    pub cancellation_rate: u32,
}

impl BookingStats {
    /// Aggregate over `bookings` relative to `now`.
    pub fn compute(bookings: &[Booking], now: &Timestamp) -> Self {
        let by_status = Tally::of(bookings, BookingStatus::ALL, |b| b.status);
        Self {
            revenue: sum_where(bookings, |b| b.amount, |b| b.status.is_billable()),
            nights_sold: sum_where(bookings, Booking::nights, |b| b.status.is_billable()),
            upcoming_check_ins: count_where(bookings, |b| is_upcoming(b, now)),
            cancellation_rate: by_status.rate(BookingStatus::Cancelled),
            by_status,
        }
    }

    /// Number of bookings.
    pub fn total(&self) -> usize {
        self.by_status.total()
    }
}

/// The next `limit` arrivals, soonest first.
pub fn upcoming(bookings: &[Booking], now: &Timestamp, limit: usize) -> Vec<Booking> {
    let mut arrivals: Vec<Booking> = bookings
        .iter()
        .filter(|b| is_upcoming(b, now))
        .cloned()
        .collect();
    by_timestamp(&mut arrivals, |b| b.check_in, SortDirection::Asc);
    arrivals.truncate(limit);
    arrivals
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentals_core::types::{RecordId, SearchQuery};

    use crate::filter::filter_records;

    fn booking(id: &str, status: BookingStatus, check_in: &str, check_out: &str, amount: i64) -> Booking {
        Booking {
            id: RecordId::new(id),
            hotel_id: UserId::new("hotel-1"),
            room_id: PropertyId::new("room-101"),
            room_title: "Deluxe King".to_string(),
            guest_name: format!("Guest {id}"),
            guest_email: format!("{id}@example.com"),
            status,
            check_in: Timestamp::parse(check_in).unwrap(),
            check_out: Timestamp::parse(check_out).unwrap(),
            guests: 2,
            amount,
            booked_at: Timestamp::parse("2024-05-01").unwrap(),
            updated_at: None,
        }
    }

    fn bookings() -> Vec<Booking> {
        vec![
            booking("bk-1", BookingStatus::Completed, "2024-05-02", "2024-05-05", 135_000),
            booking("bk-2", BookingStatus::Confirmed, "2024-06-20", "2024-06-22", 90_000),
            booking("bk-3", BookingStatus::Cancelled, "2024-06-10", "2024-06-12", 90_000),
            booking("bk-4", BookingStatus::Pending, "2024-06-12", "2024-06-13", 45_000),
        ]
    }

    fn now() -> Timestamp {
        Timestamp::parse("2024-06-01").unwrap()
    }

    #[test]
    fn test_stats() {
        let stats = BookingStats::compute(&bookings(), &now());
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.revenue, 270_000);
        assert_eq!(stats.nights_sold, 6);
        assert_eq!(stats.upcoming_check_ins, 2);
        assert_eq!(stats.cancellation_rate, 25);
    }

    #[test]
    fn test_upcoming_soonest_first() {
        let next = upcoming(&bookings(), &now(), 5);
        let ids: Vec<_> = next.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["bk-4", "bk-2"]);
        assert_eq!(upcoming(&bookings(), &now(), 1).len(), 1);
    }

    #[test]
    fn test_search_by_guest_email() {
        let found = filter_records(
            &bookings(),
            &BookingCriteria::default(),
            &SearchQuery::new("BK-3@"),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].status, BookingStatus::Cancelled);
    }
}
