use listing_browser::search::filter_properties;
use listing_browser::sources::bundled;
use listing_browser::view::{SortDirection, SortKey};
use listing_browser::{ListingScreen, Property, ScreenConfig, SearchField};
use std::time::Duration;

fn listing(id: &str, location: &str, price: f64) -> Property {
    Property {
        id: id.to_string(),
        title: format!("Vivienda {}", id),
        price,
        currency: "EUR".to_string(),
        location: location.to_string(),
        bedrooms: Some(2),
        bathrooms: None,
        area: 70.0,
        kind: "piso".to_string(),
        status: "disponible".to_string(),
        office: "Oficina Centro".to_string(),
        features: None,
        description: None,
        images: vec![],
        date: "01-06-2024".to_string(),
    }
}

fn prices(screen: &ListingScreen) -> Vec<f64> {
    screen.view().items.iter().map(|p| p.price).collect()
}

#[test]
fn twenty_listings_paginate_into_three_pages() {
    let records = (0..20)
        .map(|i| listing(&format!("R{:02}", i), "Madrid", 1_000.0))
        .collect();
    let mut screen = ListingScreen::new(records, &ScreenConfig::default());

    let first = screen.view();
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), 8);

    assert!(screen.handle_page_change(3));
    assert_eq!(screen.view().items.len(), 4);

    assert!(!screen.handle_page_change(4));
    assert_eq!(screen.current_page(), 3);
}

#[test]
fn location_search_is_case_insensitive() {
    let records = vec![
        listing("A", "Madrid Centro", 1.0),
        listing("B", "Barcelona", 1.0),
    ];

    let found = filter_properties("madrid", &records, &SearchField::DEFAULTS);

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, "A");
}

#[test]
fn price_sort_cycles_back_to_insertion_order() {
    let records = vec![
        listing("A", "Madrid", 100_000.0),
        listing("B", "Madrid", 50_000.0),
        listing("C", "Madrid", 200_000.0),
    ];
    let mut screen = ListingScreen::new(records, &ScreenConfig::default());

    screen.handle_sort(SortKey::Price);
    assert_eq!(screen.sort().direction(), SortDirection::Descending);
    assert_eq!(prices(&screen), vec![200_000.0, 100_000.0, 50_000.0]);

    screen.handle_sort(SortKey::Price);
    assert_eq!(prices(&screen), vec![50_000.0, 100_000.0, 200_000.0]);

    screen.handle_sort(SortKey::Price);
    assert_eq!(screen.sort().key(), None);
    assert_eq!(prices(&screen), vec![100_000.0, 50_000.0, 200_000.0]);
}

#[test]
fn empty_dataset_renders_empty_state() {
    let mut screen = ListingScreen::new(Vec::new(), &ScreenConfig::default());

    let view = screen.view();
    assert_eq!(view.total_pages, 0);
    assert!(view.items.is_empty());
    assert!(!screen.has_results());
    assert!(!screen.handle_page_change(1));
}

#[tokio::test(start_paused = true)]
async fn rapid_typing_applies_only_the_last_query() {
    let records = vec![
        listing("A", "Madrid Centro", 1.0),
        listing("B", "Málaga", 1.0),
        listing("C", "Barcelona", 1.0),
    ];
    let mut screen = ListingScreen::new(records, &ScreenConfig::default());

    for query in ["m", "ma", "mad"] {
        screen.handle_search_change(query);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert!(screen.is_searching());
    assert_eq!(screen.total_results(), 3);

    assert!(screen.tick().await);
    assert_eq!(screen.total_results(), 1);
    assert_eq!(screen.view().items[0].id, "A");

    let another = tokio::time::timeout(Duration::from_secs(5), screen.tick()).await;
    assert!(another.is_err(), "only one application expected");
}

#[test]
fn bundled_dataset_browses_end_to_end() {
    let mut screen = ListingScreen::new(bundled().unwrap(), &ScreenConfig::default());

    let view = screen.view();
    assert_eq!(view.total_items, 20);
    assert_eq!(view.total_pages, 3);

    screen.handle_sort(SortKey::Date);
    let newest = screen.view().items[0].id.clone();
    let newest = screen.select(&newest).map(|p| p.date.clone());
    assert_eq!(newest.as_deref(), Some("09-05-2024"));
    assert!(screen.detail().is_some());
}
