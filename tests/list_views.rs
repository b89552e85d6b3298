//! List pipelines over the embedded fixture set.

mod common;

use rentals_core::types::{EmptyPages, SearchQuery, Selection, SortSpec};
use rentals_entity::application::ApplicationStatus;
use rentals_entity::property::{Property, PropertyStatus};
use rentals_view::filter::filter_records;
use rentals_view::lists::application::ApplicationStats;
use rentals_view::lists::booking::{upcoming, BookingStats};
use rentals_view::lists::earning::EarningsSummary;
use rentals_view::lists::payment::{past_due, PaymentSummary};
use rentals_view::lists::property::{PropertyCriteria, PropertySortKey};
use rentals_view::view::{render, ListState, ViewAction};

type PropertyView = ListState<Property>;

#[test]
fn test_property_list_pages_at_default_size() {
    let fixtures = common::fixtures();
    let state = PropertyView::new(12).unwrap();
    let first = render(&fixtures.properties, &state, EmptyPages::One);
    assert_eq!(first.page.total_items, 15);
    assert_eq!(first.page.total_pages, 2);
    assert!(first.page.has_next);

    let second = render(
        &fixtures.properties,
        &state.reduce(ViewAction::NextPage).unwrap(),
        EmptyPages::One,
    );
    assert_eq!(second.page.items.len(), 3);
    assert!(!second.page.has_next);
    assert!(second.page.has_previous);
}

#[test]
fn test_status_filter_resets_page_and_narrows() {
    let fixtures = common::fixtures();
    let on_second = PropertyView::new(12)
        .unwrap()
        .reduce(ViewAction::GoToPage(2))
        .unwrap();
    let available = on_second
        .reduce(ViewAction::SetCriteria(PropertyCriteria {
            status: Selection::Only(PropertyStatus::Available),
            ..Default::default()
        }))
        .unwrap();
    assert_eq!(available.page.page, 1);

    let rendered = render(&fixtures.properties, &available, EmptyPages::One);
    assert_eq!(rendered.page.total_items, 8);
    assert_eq!(rendered.page.total_pages, 1);
    assert!(
        rendered
            .page
            .items
            .iter()
            .all(|p| p.status == PropertyStatus::Available)
    );
}

#[test]
fn test_search_is_case_insensitive() {
    let fixtures = common::fixtures();
    let found = filter_records(
        &fixtures.properties,
        &PropertyCriteria::default(),
        &SearchQuery::new("  LEKKI "),
    );
    let ids: Vec<_> = found.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["prop-001", "prop-010"]);
}

#[test]
fn test_cheapest_first() {
    let fixtures = common::fixtures();
    let state = PropertyView::new(3)
        .unwrap()
        .reduce(ViewAction::SortBy(SortSpec::asc(PropertySortKey::Price)))
        .unwrap();
    let rendered = render(&fixtures.properties, &state, EmptyPages::One);
    let ids: Vec<_> = rendered.page.items.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["prop-015", "prop-011", "prop-013"]);
    assert_eq!(rendered.page.total_pages, 5);
}

#[test]
fn test_no_match_shows_empty_state() {
    let fixtures = common::fixtures();
    let state = PropertyView::new(12)
        .unwrap()
        .reduce(ViewAction::Search("port harcourt".to_string()))
        .unwrap();
    let rendered = render(&fixtures.properties, &state, EmptyPages::One);
    assert!(rendered.is_empty());
    assert_eq!(rendered.source_total, 15);
}

#[test]
fn test_application_stats() {
    let stats = ApplicationStats::compute(&common::fixtures().applications);
    assert_eq!(stats.total(), 8);
    assert_eq!(stats.by_status.get(ApplicationStatus::Pending), 3);
    assert_eq!(stats.awaiting_review(), 4);
    assert_eq!(stats.approval_rate, 25);
}

#[test]
fn test_earnings_summary() {
    let summary = EarningsSummary::compute(&common::fixtures().earnings);
    assert_eq!(summary.total_income, 4_190_000);
    assert_eq!(summary.total_expenses, 540_000);
    assert_eq!(summary.total_payouts, 1_250_000);
    assert_eq!(summary.net, 2_400_000);
    assert_eq!(summary.pending_income, 2_620_000);
    assert_eq!(summary.monthly_income.len(), 5);
    assert_eq!(summary.monthly_income.get("2024-05"), Some(&2_620_000));
}

#[test]
fn test_payment_summary() {
    let fixtures = common::fixtures();
    let summary = PaymentSummary::compute(&fixtures.payments);
    assert_eq!(summary.total_paid, 1_020_000);
    assert_eq!(summary.total_pending, 1_085_000);
    assert_eq!(summary.total_overdue, 120_000);
    assert_eq!(summary.next_due.as_ref().map(|p| p.id.as_str()), Some("pay-003"));
    assert!(past_due(&fixtures.payments, &common::as_of()).is_empty());
}

#[test]
fn test_booking_stats_and_arrivals() {
    let fixtures = common::fixtures();
    let stats = BookingStats::compute(&fixtures.bookings, &common::as_of());
    assert_eq!(stats.total(), 6);
    assert_eq!(stats.revenue, 1_430_000);
    assert_eq!(stats.upcoming_check_ins, 3);
    assert_eq!(stats.cancellation_rate, 17);

    let next = upcoming(&fixtures.bookings, &common::as_of(), 10);
    let ids: Vec<_> = next.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["bk-003", "bk-006", "bk-005"]);
}
