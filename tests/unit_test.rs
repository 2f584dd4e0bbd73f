mod helpers;

use cabin_booking::models::{BookingDraft, BookingStatus, Cabin};
use cabin_booking::pricing::{self, BREAKFAST_RATE};
use cabin_booking::services::CatalogService;
use cabin_booking::ui::{QueryState, SortBy, SortOption, SORT_BY_KEY};
use helpers::*;
use rust_decimal::Decimal;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use uuid::Uuid;

/// Unit tests for price arithmetic
#[test]
fn test_total_is_room_plus_extras_across_grid() {
    let cabins = [
        Cabin {
            id: Uuid::new_v4(),
            name: "002".to_string(),
            regular_price: Decimal::from(250),
            discount: Some(Decimal::from(25)),
        },
        Cabin {
            id: Uuid::new_v4(),
            name: "003".to_string(),
            regular_price: Decimal::from(75),
            discount: None,
        },
    ];

    for cabin in &cabins {
        for nights in 1..=7i64 {
            for guests in 1..=6i32 {
                let start = date("2030-06-01");
                let end = start + chrono::Days::new(nights as u64);

                let q = pricing::quote(cabin, start, end, guests, true).unwrap();
                assert_eq!(
                    q.cabin_price,
                    cabin.effective_nightly_price() * Decimal::from(nights)
                );
                assert_eq!(
                    q.extras_price,
                    Decimal::from(BREAKFAST_RATE * nights * guests as i64)
                );
                assert_eq!(q.total_price, q.cabin_price + q.extras_price);
            }
        }
    }
}

#[test]
fn test_no_breakfast_means_no_extras_regardless_of_guests() {
    let cabin = sample_cabin();
    for guests in 1..=10 {
        let q = pricing::quote(
            &cabin,
            date("2030-06-01"),
            date("2030-06-08"),
            guests,
            false,
        )
        .unwrap();
        assert_eq!(q.extras_price, Decimal::ZERO);
        assert_eq!(q.total_price, q.cabin_price);
    }
}

/// Unit tests for models
#[test]
fn test_empty_draft_defaults() {
    let draft = BookingDraft::default();
    assert_eq!(draft.num_guests, 1);
    assert!(!draft.has_breakfast);
    assert!(draft.cabin_id.is_none());
    assert!(draft.full_name.is_empty());
}

#[test]
fn test_new_bookings_start_unconfirmed() {
    assert_eq!(BookingStatus::Unconfirmed.as_str(), "unconfirmed");
    assert_eq!(
        BookingStatus::from(String::from("unconfirmed")),
        BookingStatus::Unconfirmed
    );
}

#[test]
fn test_draft_round_trips_through_json() {
    let draft = filled_draft(Uuid::new_v4());
    let json = serde_json::to_string(&draft).unwrap();
    let back: BookingDraft = serde_json::from_str(&json).unwrap();
    assert_eq!(back, draft);
}

/// Unit tests for the catalog loader's degraded path
#[test]
fn test_catalog_failure_degrades_to_empty() {
    let store = Arc::new(MemoryRecordStore::with_cabins(vec![sample_cabin()]));
    store.fail_catalog.store(true, Ordering::SeqCst);

    let catalog = CatalogService::new(store);
    let cabins = tokio_test::block_on(catalog.load());
    assert!(cabins.is_empty());
}

#[test]
fn test_catalog_loads_cabins() {
    let store = Arc::new(MemoryRecordStore::with_cabins(vec![
        sample_cabin(),
        sample_cabin(),
    ]));

    let catalog = CatalogService::new(store);
    let cabins = tokio_test::block_on(catalog.load());
    assert_eq!(cabins.len(), 2);
}

/// Unit test for the sort control example
#[test]
fn test_price_asc_selection_updates_only_sort_key() {
    let control = SortBy::new(vec![
        SortOption::new("name-asc", "Sort by name (A-Z)"),
        SortOption::new("price-asc", "Sort by price (low first)"),
    ]);
    let mut query = QueryState::parse("discount=all&page=1");

    control.select(&mut query, "price-asc").unwrap();

    assert_eq!(query.get(SORT_BY_KEY), Some("price-asc"));
    assert_eq!(query.to_query_string(), "discount=all&page=1&sortBy=price-asc");
}
